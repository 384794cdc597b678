use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Used off the browser when no origin was given.
pub const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8080";

/// HTTP client for the same-origin `/api` proxy routes.
///
/// In the browser requests carry the session cookie automatically because they
/// never leave the page's origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    origin: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_origin()
    }
}

impl ApiClient {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    /// A client for the origin the page was served from.
    #[cfg(target_arch = "wasm32")]
    pub fn from_origin() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        Self::new(origin)
    }

    /// A client for `AGROMARFEED_PUBLIC_URL`, or the local dev server.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_origin() -> Self {
        let origin = std::env::var("AGROMARFEED_PUBLIC_URL")
            .unwrap_or_else(|_| DEFAULT_ORIGIN.to_string());
        Self::new(origin)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        read(response).await
    }

    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        read(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        read(response).await
    }
}

/// Turn a proxy answer into JSON. An empty body reads as `null`.
async fn read(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice(&bytes) {
            Ok(body) => body,
            Err(e) if status.is_success() => return Err(ApiError::Decode(e)),
            Err(_) => Value::Null,
        }
    };

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        let message = shop::envelope::message_of(&body)
            .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()));
        tracing::warn!(status = status.as_u16(), "{message}");
        return Err(ApiError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(body)
}
