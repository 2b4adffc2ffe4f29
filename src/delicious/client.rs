// Delicious API HTTP client.
// Handles authentication and request/response processing.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::config::Config;
use crate::error::{Result, TagGraphError};

/// Delicious API client with bearer token authentication.
pub struct DeliciousClient {
    client: Client,
    base_url: String,
    pub(super) page_size: u32,
    pub(super) tag: Option<String>,
}

impl DeliciousClient {
    /// Create a new client talking to `base_url` with the given token.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| TagGraphError::Other(e.to_string()))?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("tag-graph"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TagGraphError::Api)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size: crate::config::DEFAULT_PAGE_SIZE,
            tag: None,
        })
    }

    /// Create a client from the run configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config.token.as_deref().ok_or(TagGraphError::MissingToken)?;
        Ok(Self::new(token, &config.api_base)?
            .with_page_size(config.page_size)
            .with_tag(config.tag.clone()))
    }

    /// Number of bookmarks requested per page when fetching everything.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Restrict fetches to bookmarks carrying `tag`.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    /// Make a GET request with query parameters.
    pub async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(TagGraphError::Api)?;

        check_response(response).await
    }
}

/// Client that is only built, and only needs a token, once a fetch happens.
pub struct LazyClient<'a> {
    config: &'a Config,
    client: Option<DeliciousClient>,
}

impl<'a> LazyClient<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            client: None,
        }
    }

    pub(super) fn client(&mut self) -> Result<&mut DeliciousClient> {
        let client = match self.client.take() {
            Some(client) => client,
            None => DeliciousClient::from_config(self.config)?,
        };
        Ok(self.client.insert(client))
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(TagGraphError::Unauthorized),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(TagGraphError::NotFound(url))
        }
        status => Err(TagGraphError::Other(format!(
            "HTTP {}: {}",
            status,
            response.text().await.unwrap_or_default()
        ))),
    }
}
