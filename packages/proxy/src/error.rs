use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures the proxy produces itself. Backend HTTP errors are not in here: those
/// are relayed unchanged.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Missing required parameter: {0}")]
    MissingParam(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParam(&'static str),

    /// The inbound body could not be buffered. `status` is 413 when it was too
    /// large.
    #[error("Invalid request body: {message}")]
    Body { status: StatusCode, message: String },

    /// The backend could not be reached or its response could not be read.
    #[error("Internal server error")]
    Unreachable(#[source] reqwest::Error),

    #[error("Backend returned a non-JSON response (status {0})")]
    MalformedBody(StatusCode),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingParam(_) | ProxyError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            ProxyError::Body { status, .. } => *status,
            ProxyError::Unreachable(_) | ProxyError::MalformedBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = json!({
            "success": false,
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
