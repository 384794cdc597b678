use thiserror::Error;

/// Failures seen by the browser-side client.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx answer other than 404. `message` is the backend's own when it sent
    /// one.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Not found")]
    NotFound,

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}
