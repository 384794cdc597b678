//! # The pass-through
//!
//! Every proxy route ends in [`ProxyState::forward`]: one best-effort round trip to
//! the backend, no retries and no timeout of our own.
//!
//! Request side: method, raw body, the inbound query string (unless the route
//! rewrote it) and the [`FORWARDED_HEADERS`] allow-list are copied onto the outgoing
//! request.
//!
//! Response side:
//!
//! | Backend answer | Proxy answer |
//! |----------------|--------------|
//! | status S, JSON body B | S, B |
//! | status S, empty body | S, empty |
//! | redirect S with `Location` | S, `Location`, empty |
//! | status S, non-JSON body | 500, [`ProxyError::MalformedBody`] |
//! | connection/read failure | 500, [`ProxyError::Unreachable`] |
//!
//! Routes built with [`Target::session`] additionally relay every `Set-Cookie` and
//! force `Cache-Control: no-store`, on every answer except a transport failure.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{
        header::{CACHE_CONTROL, CONTENT_TYPE, COOKIE, LOCATION, ORIGIN, REFERER, SET_COOKIE, USER_AGENT},
        HeaderMap, HeaderName, HeaderValue, Method,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::error::ProxyError;
use crate::state::ProxyState;

/// Vercel deployment-protection bypass, forwarded when the client sends it.
pub const BYPASS_HEADER: &str = "x-vercel-protection-bypass";

/// Request headers copied to the backend.
pub static FORWARDED_HEADERS: [HeaderName; 6] = [
    CONTENT_TYPE,
    COOKIE,
    USER_AGENT,
    ORIGIN,
    REFERER,
    HeaderName::from_static(BYPASS_HEADER),
];

const NO_STORE: &str = "no-store, no-cache, must-revalidate";

/// Largest request body we are willing to buffer.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Everything taken from the inbound request.
#[derive(Debug)]
pub struct Inbound {
    pub method: Method,
    /// Local path, for logging.
    pub path: String,
    pub headers: HeaderMap,
    pub query: Option<String>,
    pub body: Bytes,
}

impl<S: Send + Sync> FromRequest<S> for Inbound {
    type Rejection = ProxyError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let query = req.uri().query().map(str::to_string);
        let headers = req.headers().clone();

        // Honors the router's `DefaultBodyLimit`; an oversized body is a 413.
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ProxyError::Body {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;

        Ok(Self {
            method,
            path,
            headers,
            query,
            body,
        })
    }
}

/// Where and how a request is forwarded.
#[derive(Debug, Clone)]
pub struct Target {
    pub path: String,
    /// `None` passes the inbound query through.
    pub query: Option<String>,
    pub session: bool,
}

impl Target {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: None,
            session: false,
        }
    }

    /// Relay `Set-Cookie` and disable caching.
    pub fn session(mut self) -> Self {
        self.session = true;
        self
    }

    /// Replace the inbound query string.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Validate a path segment taken from the client before it is spliced into a
/// backend path.
pub fn segment(value: &str, name: &'static str) -> Result<String, ProxyError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ProxyError::MissingParam(name));
    }
    if value == "." || value == ".." || value.contains(['/', '\\', '?', '#']) {
        return Err(ProxyError::InvalidParam(name));
    }
    Ok(value.to_string())
}

/// A required query parameter, as a path segment.
pub fn required(value: Option<&String>, name: &'static str) -> Result<String, ProxyError> {
    match value {
        Some(v) => segment(v, name),
        None => Err(ProxyError::MissingParam(name)),
    }
}

impl ProxyState {
    #[tracing::instrument(skip_all, fields(method = %inbound.method, path = %inbound.path, target = %target.path))]
    pub async fn forward(&self, inbound: Inbound, target: Target) -> Result<Response, ProxyError> {
        let query = target.query.as_deref().or(inbound.query.as_deref());
        let url = self.settings.backend_url(&target.path, query);

        let mut request = self.http.request(inbound.method.clone(), &url);
        for name in &FORWARDED_HEADERS {
            for value in inbound.headers.get_all(name) {
                request = request.header(name, value);
            }
        }
        if !inbound.body.is_empty() {
            request = request.body(inbound.body);
        }

        let upstream = request.send().await.map_err(|e| {
            tracing::error!(url = %url, "backend unreachable: {e}");
            ProxyError::Unreachable(e)
        })?;

        let status = upstream.status();
        let set_cookies: Vec<HeaderValue> = upstream
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .cloned()
            .collect();
        let location = upstream.headers().get(LOCATION).cloned();

        let bytes = upstream.bytes().await.map_err(|e| {
            tracing::error!(url = %url, "failed to read backend response: {e}");
            ProxyError::Unreachable(e)
        })?;

        let mut response = if location.is_some() && status.is_redirection() {
            // Redirect bodies are plain text ("Found. Redirecting to ...").
            status.into_response()
        } else if bytes.iter().all(u8::is_ascii_whitespace) {
            status.into_response()
        } else {
            match serde_json::from_slice::<Value>(&bytes) {
                Ok(body) => (status, Json(body)).into_response(),
                Err(e) => {
                    tracing::error!(url = %url, %status, "backend returned non-JSON body: {e}");
                    ProxyError::MalformedBody(status).into_response()
                }
            }
        };

        let headers = response.headers_mut();
        if let Some(location) = location {
            headers.insert(LOCATION, location);
        }
        if target.session {
            for cookie in set_cookies {
                headers.append(SET_COOKIE, cookie);
            }
            headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_STORE));
        }

        tracing::info!(status = status.as_u16(), "forwarded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_validation() {
        assert_eq!(segment(" ORD123 ", "order_id").unwrap(), "ORD123");
        assert!(matches!(
            segment("", "order_id"),
            Err(ProxyError::MissingParam("order_id"))
        ));
        assert!(matches!(
            segment("../admin", "id"),
            Err(ProxyError::InvalidParam("id"))
        ));
        assert!(matches!(segment("..", "id"), Err(ProxyError::InvalidParam("id"))));
        assert!(matches!(
            required(None, "user_id"),
            Err(ProxyError::MissingParam("user_id"))
        ));
    }

    #[test]
    fn test_target_builder() {
        let target = Target::new("/auth/me").session().with_query("a=1");
        assert!(target.session);
        assert_eq!(target.query.as_deref(), Some("a=1"));
    }
}
