use crate::config::GatewayConfig;
use crate::gateway::models::{
    CommentDto, LoginRequest, NewCommentRequest, RecipeDetailDto, RecipePageDto, TokenDto,
};
use crate::session::Session;
use crate::{Error, Result};
use reqwest::{header, Client, RequestBuilder, StatusCode};
use tracing::{debug, error};

/// Sort order for the recipe listing. There is no user-facing sort control;
/// newest first is the only order the UI shows.
const RECIPE_SORT: &str = "createdAt,desc";

/// HTTP client for the remote recipe gateway
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List a page of recipe summaries.
    ///
    /// `page` is the gateway's zero-based index. The search term is only
    /// appended when non-empty; filter facets never reach this request.
    pub async fn list_recipes(
        &self,
        page: usize,
        size: usize,
        search: Option<&str>,
    ) -> Result<RecipePageDto> {
        let mut path = format!("/recipes?page={page}&size={size}&sort={RECIPE_SORT}");

        if let Some(q) = search.filter(|q| !q.is_empty()) {
            path.push_str(&format!("&q={}", urlencoding::encode(q)));
        }

        self.get(&path, None).await
    }

    /// Fetch one recipe with its full content
    pub async fn get_recipe(&self, id: i64) -> Result<RecipeDetailDto> {
        let path = format!("/recipes/{id}");
        self.get(&path, None).await
    }

    /// Fetch the comments on a recipe, newest first
    pub async fn list_comments(&self, recipe_id: i64) -> Result<Vec<CommentDto>> {
        let path = format!("/recipes/{recipe_id}/comments");
        self.get(&path, None).await
    }

    /// Post a comment on a recipe on behalf of the session holder
    pub async fn post_comment(
        &self,
        recipe_id: i64,
        content: &str,
        session: &Session,
    ) -> Result<CommentDto> {
        let path = format!("/recipes/{recipe_id}/comments");
        let body = NewCommentRequest {
            content: content.to_string(),
        };
        self.post(&path, &body, Some(session)).await
    }

    /// Exchange credentials for an opaque session token
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenDto> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/auth/login", &body, None).await
    }

    /// Make a GET request to the gateway
    async fn get<T>(&self, path: &str, session: Option<&Session>) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Gateway request: GET {}", url);

        let request = self.with_session(self.client.get(&url), session);
        self.execute(request).await
    }

    /// Make a POST request with a JSON body
    async fn post<B, T>(&self, path: &str, body: &B, session: Option<&Session>) -> Result<T>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Gateway request: POST {}", url);

        let request = self.with_session(self.client.post(&url).json(body), session);
        self.execute(request).await
    }

    fn with_session(&self, request: RequestBuilder, session: Option<&Session>) -> RequestBuilder {
        match session {
            Some(session) => request.header(header::AUTHORIZATION, session.bearer()),
            None => request,
        }
    }

    async fn execute<T>(&self, request: RequestBuilder) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            error!("Gateway error: {} - {}", status, error_body);

            return Err(match status {
                StatusCode::NOT_FOUND => Error::NotFound("Gateway resource not found".to_string()),
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    Error::Unauthorized("Gateway rejected credentials".to_string())
                }
                _ => Error::Gateway {
                    status: status.as_u16(),
                    message: error_body,
                },
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Decode(format!("Failed to parse gateway response: {e}")))
    }
}
