//! Sign-in, registration and the "current user" lookup.

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use shop::models::User;
use shop::session::decode_user;
use shop::SessionState;

use crate::client::ApiClient;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl ApiClient {
    /// `None` when the backend answers with a null user. A 401/403 is an
    /// [`ApiError::Status`] carrying the backend's message.
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let body = self.get("/api/auth/me", &[]).await?;
        Ok(decode_user(body)?)
    }

    /// [`Self::current_user`] folded into the state the session context stores.
    pub async fn session(&self) -> SessionState {
        match self.current_user().await {
            Ok(Some(user)) => SessionState::signed_in(user),
            Ok(None) => SessionState::signed_out(),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("No session: {}", e);
                SessionState::unauthorized(e.to_string())
            }
            Err(e) => {
                tracing::warn!("Failed to load session: {}", e);
                SessionState::failed(e.to_string())
            }
        }
    }

    /// The signed-in user when the answer carries one. Callers fall back to
    /// [`Self::current_user`] otherwise.
    pub async fn login(&self, request: &LoginRequest) -> Result<Option<User>, ApiError> {
        let body = self.send(Method::POST, "/api/auth/login", request).await?;
        Ok(user_in(body, "login"))
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<User>, ApiError> {
        let body = self.send(Method::POST, "/api/auth/register", request).await?;
        Ok(user_in(body, "register"))
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(Method::POST, "/api/auth/logout", &serde_json::json!({}))
            .await?;
        Ok(())
    }
}

fn user_in(body: Value, action: &str) -> Option<User> {
    match decode_user(body) {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Could not read the user from the {} response: {}", action, e);
            None
        }
    }
}
