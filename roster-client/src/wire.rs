//! Wire payload decoding
//!
//! Server responses are decoded tolerantly: a missing field defaults to an
//! empty value rather than failing the whole payload. A body that is not
//! the expected JSON shape at all maps to `ResponseParsing`.

use roster_core::{RosterError, RosterResult, User};
use serde::Deserialize;
use serde_json::Value;

/// A single user as returned by the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub profile_url: String,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User::new(payload.user_id, payload.nickname, payload.profile_url)
    }
}

/// A page of users as returned by list requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserListPayload {
    #[serde(default)]
    pub users: Vec<UserPayload>,
}

/// Structured error body the server attaches to failed requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// Decode a single-user response body.
pub fn decode_user(value: Value) -> RosterResult<User> {
    serde_json::from_value::<UserPayload>(value)
        .map(User::from)
        .map_err(|_| RosterError::ResponseParsing)
}

/// Decode a user-list response body, preserving server order.
pub fn decode_users(value: Value) -> RosterResult<Vec<User>> {
    serde_json::from_value::<UserListPayload>(value)
        .map(|page| page.users.into_iter().map(User::from).collect())
        .map_err(|_| RosterError::ResponseParsing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_user_full_payload() {
        let user = decode_user(json!({
            "user_id": "u1",
            "nickname": "alice",
            "profile_url": "https://example.com/a.png",
        }))
        .expect("decode");
        assert_eq!(user, User::new("u1", "alice", "https://example.com/a.png"));
    }

    #[test]
    fn test_decode_user_missing_fields_default_to_empty() {
        let user = decode_user(json!({ "user_id": "u1" })).expect("decode");
        assert_eq!(user.user_id, "u1");
        assert_eq!(user.nickname, "");
        assert_eq!(user.profile_url, "");
    }

    #[test]
    fn test_decode_user_non_object_is_parsing_error() {
        let err = decode_user(json!("not an object")).unwrap_err();
        assert_eq!(err, RosterError::ResponseParsing);
    }

    #[test]
    fn test_decode_users_preserves_server_order() {
        let users = decode_users(json!({
            "users": [
                { "user_id": "u2", "nickname": "n" },
                { "user_id": "u1", "nickname": "n" },
            ]
        }))
        .expect("decode");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_id, "u2");
        assert_eq!(users[1].user_id, "u1");
    }

    #[test]
    fn test_decode_users_missing_list_defaults_to_empty() {
        let users = decode_users(json!({})).expect("decode");
        assert!(users.is_empty());
    }

    #[test]
    fn test_api_error_body_tolerant_decode() {
        let body: ApiErrorBody =
            serde_json::from_value(json!({ "code": 400201, "message": "duplicate" }))
                .expect("decode");
        assert_eq!(body.code, 400_201);
        assert_eq!(body.message, "duplicate");

        let partial: ApiErrorBody = serde_json::from_value(json!({})).expect("decode");
        assert_eq!(partial.code, 0);
        assert_eq!(partial.message, "");
    }
}
