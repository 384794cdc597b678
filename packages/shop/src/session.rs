//! Session state shared by every page, and decoding of the "current user" response.

use serde_json::Value;

use crate::envelope::decode_one;
use crate::models::User;

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    /// Non-fatal reason the user could not be loaded.
    pub error: Option<String>,
    /// Whether asking again might help. False when the backend rejected the
    /// session outright.
    pub retryable: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
            retryable: false,
        }
    }
}

impl SessionState {
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
            error: None,
            retryable: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
            error: None,
            retryable: false,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            user: None,
            loading: false,
            error: Some(error.into()),
            retryable: true,
        }
    }

    /// The backend answered 401/403. Nobody is signed in, and `message` says why.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            user: None,
            loading: false,
            error: Some(message.into()),
            retryable: false,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Normalize `{"user": ..}`, `{"data": ..}`, `{"data": {"user": ..}}` and a bare
/// user object to one value. `null` in any of those positions means signed out.
pub fn decode_user(value: Value) -> Result<Option<User>, serde_json::Error> {
    decode_one(value, &["user"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({ "_id": "u1", "name": "Budi", "email": "budi@example.com", "role": "customer" })
    }

    #[test]
    fn test_all_shapes_decode_to_same_user() {
        let bare = decode_user(body()).unwrap();
        let user = decode_user(json!({ "user": body() })).unwrap();
        let data = decode_user(json!({ "data": body() })).unwrap();
        let nested = decode_user(json!({ "success": true, "data": { "user": body() } })).unwrap();

        assert!(bare.is_some());
        assert_eq!(bare, user);
        assert_eq!(bare, data);
        assert_eq!(bare, nested);
        assert_eq!(bare.unwrap().display_name(), "Budi");
    }

    #[test]
    fn test_null_user_is_signed_out() {
        assert_eq!(decode_user(json!({ "user": null })).unwrap(), None);
        assert_eq!(decode_user(Value::Null).unwrap(), None);
    }

    #[test]
    fn test_error_body_is_not_a_user() {
        assert!(decode_user(json!({ "success": false, "message": "Unauthorized" })).is_err());
    }

    #[test]
    fn test_state_transitions() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated());

        let user = decode_user(body()).unwrap().unwrap();
        let state = SessionState::signed_in(user);
        assert_eq!(state.user_id(), Some("u1"));

        let state = SessionState::failed("Network error");
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network error"));
        assert!(state.retryable);
        assert_eq!(SessionState::signed_out().user, None);

        let state = SessionState::unauthorized("Unauthorized");
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Unauthorized"));
        assert!(!state.retryable);
    }
}
