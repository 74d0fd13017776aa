// Validation utilities
use crate::error::{Error, Result};
use url::Url;

/// Validate the gateway base URL: http/https with a host. Unlike URLs taken
/// from untrusted input, the gateway is operator-configured, so localhost
/// and private addresses are legitimate (common in development).
pub fn validate_gateway_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::Validation(format!(
                "Gateway URL must use http or https scheme: {url_str}"
            )));
        }
    }

    if url.host_str().is_none() {
        return Err(Error::Validation(
            "Gateway URL must have a valid host".to_string(),
        ));
    }

    Ok(url)
}
