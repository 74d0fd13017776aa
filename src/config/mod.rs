use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub gateway: GatewayConfig,
    pub server: ServerConfig,
    pub browse: BrowseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit: u64,
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    pub page_size: usize,
    pub max_pages: usize, // Maximum pages to prevent overflow
}

impl Settings {
    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        let gateway_url = std::env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".to_string());

        let gateway_timeout = std::env::var("GATEWAY_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid GATEWAY_TIMEOUT value".to_string()))?;

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid PORT value".to_string()))?;

        let rate_limit = std::env::var("RATE_LIMIT")
            .unwrap_or_else(|_| "20".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid RATE_LIMIT value".to_string()))?;

        let max_request_body_size = std::env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| "65536".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_REQUEST_BODY_SIZE value".to_string()))?;

        let page_size = std::env::var("BROWSE_PAGE_SIZE")
            .unwrap_or_else(|_| "9".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid BROWSE_PAGE_SIZE value".to_string()))?;

        let max_pages = std::env::var("MAX_PAGES")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .map_err(|_| Error::Config("Invalid MAX_PAGES value".to_string()))?;

        Ok(Settings {
            gateway: GatewayConfig {
                base_url: gateway_url,
                timeout_seconds: gateway_timeout,
                user_agent: format!("Reelbites/{}", env!("CARGO_PKG_VERSION")),
            },
            server: ServerConfig {
                host,
                port,
                rate_limit,
                max_request_body_size,
            },
            browse: BrowseConfig {
                page_size,
                max_pages,
            },
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::Config("Port must be non-zero".to_string()));
        }

        if self.browse.page_size == 0 {
            return Err(Error::Config("Browse page size must be non-zero".to_string()));
        }

        crate::utils::validation::validate_gateway_url(&self.gateway.base_url)?;

        Ok(())
    }
}
