//! Roster Test Utilities
//!
//! Centralized test infrastructure for the Roster workspace:
//! - Proptest generators for ids, nicknames, and parameter structs
//! - Canned wire payloads for scripting the mock transport
//! - Re-exports so a test file needs a single `use`

// Re-export the mock transport from its source crate
pub use roster_client::MockTransport;

// Re-export core types for convenience
pub use roster_core::{
    ClientConfig, RosterError, RosterResult, Session, User, UserCreationParams, UserUpdateParams,
};

use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// WIRE PAYLOAD FIXTURES
// ============================================================================

/// A single-user response body as the server would return it.
pub fn user_payload(user_id: &str, nickname: &str) -> Value {
    json!({
        "user_id": user_id,
        "nickname": nickname,
        "profile_url": format!("https://example.com/{user_id}.png"),
    })
}

/// A user-list response body with the given entries, in order.
pub fn user_list_payload(entries: &[(&str, &str)]) -> Value {
    json!({
        "users": entries
            .iter()
            .map(|(user_id, nickname)| user_payload(user_id, nickname))
            .collect::<Vec<_>>(),
    })
}

/// A structured API error body.
pub fn api_error_payload(code: i64, message: &str) -> Value {
    json!({ "code": code, "message": message })
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

/// Strategy for user ids.
pub fn user_id_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,16}"
}

/// Strategy for nicknames.
pub fn nickname_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,12}"
}

/// Strategy for full user records.
pub fn user_strategy() -> impl Strategy<Value = User> {
    (user_id_strategy(), nickname_strategy()).prop_map(|(user_id, nickname)| {
        let profile_url = format!("https://example.com/{user_id}.png");
        User::new(user_id, nickname, profile_url)
    })
}

/// Strategy for creation params, with and without an explicit profile URL.
pub fn creation_params_strategy() -> impl Strategy<Value = UserCreationParams> {
    (
        user_id_strategy(),
        nickname_strategy(),
        prop::option::of("[a-z]{1,8}"),
    )
        .prop_map(|(user_id, nickname, profile)| {
            let params = UserCreationParams::new(user_id, nickname);
            match profile {
                Some(name) => params.with_profile_url(format!("https://example.com/{name}.png")),
                None => params,
            }
        })
}
