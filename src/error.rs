// --- File: src/error.rs ---
use thiserror::Error;

/// Errors surfaced by the access functions.
///
/// Every access function in this crate is a failure boundary: errors are
/// logged where they occur and handed back as values, never panicked.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status.
    #[error("backend returned an error: status={status_code}, body='{message}'")]
    BackendError { status_code: u16, message: String },

    /// The response body could not be decoded.
    #[error("failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A request body could not be encoded.
    #[error("failed to encode request body: {0}")]
    EncodingError(String),
}

impl ApiError {
    /// True when the backend reported it is temporarily unavailable (503),
    /// which on free-tier hosting means it is waking from hibernation.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(
            self,
            ApiError::BackendError {
                status_code: 503,
                ..
            }
        )
    }
}
