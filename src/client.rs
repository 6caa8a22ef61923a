// --- File: src/client.rs ---
//! HTTP client wrapper for the barbearia backend.
//!
//! One `execute` core per request: attaches the bearer header when a token is
//! available, performs a single attempt against the configured base URL, and
//! funnels every error response through the logging/notice interceptor before
//! handing it to the calling access function.

use once_cell::sync::Lazy;
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::sync::Arc;
use tracing::error;

use crate::auth::TokenProvider;
use crate::error::ApiError;
use crate::notify::ServiceNotice;

/// Production backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://barbearia-backend-x0st.onrender.com/api";

/// Environment variable overriding the base URL (staging, local backend).
pub const BASE_URL_VAR: &str = "BARBEARIA_API_BASE_URL";

// --- Static HTTP Client ---
// One reqwest client per process; ApiClient instances clone the handle.
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// Client configuration. Only the base URL is configurable; everything else
/// (auth, notices) is injected on the [`ApiClient`] itself.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Reads [`BASE_URL_VAR`] from the environment, falling back to the
    /// production URL.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Thin wrapper over [`reqwest::Client`] carrying the base URL, the optional
/// token provider and the optional service-notice sink.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token_provider: Option<Arc<dyn TokenProvider>>,
    notice: Option<Arc<dyn ServiceNotice>>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: HTTP_CLIENT.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token_provider: None,
            notice: None,
        }
    }

    /// Installs the provider queried for a bearer token on every request.
    pub fn with_token_provider(mut self, provider: Arc<dyn TokenProvider>) -> Self {
        self.token_provider = Some(provider);
        self
    }

    /// Installs the sink notified when the backend answers 503.
    pub fn with_service_notice(mut self, notice: Arc<dyn ServiceNotice>) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Single attempt per call: no retry, no timeout override, no caching.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.token_provider.as_ref().and_then(|p| p.bearer_token()) {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!("API request to {url} failed: status={status}, body={text}");
            if status == StatusCode::SERVICE_UNAVAILABLE {
                if let Some(notice) = &self.notice {
                    notice.backend_waking();
                }
            }
            return Err(ApiError::BackendError {
                status_code: status.as_u16(),
                message: text,
            });
        }

        // Some endpoints answer 200 with an empty body (deletes).
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, query, None).await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::EncodingError(e.to_string()))?;
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Value, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::EncodingError(e.to_string()))?;
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    pub async fn delete(&self, path: &str, query: &[(&str, String)]) -> Result<Value, ApiError> {
        self.execute(Method::DELETE, path, query, None).await
    }
}
