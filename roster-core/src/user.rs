//! User directory value objects
//!
//! A `User` is an immutable record identified by `user_id`. Updates replace
//! the whole value; nothing mutates a user field-by-field.

use serde::{Deserialize, Serialize};

/// A user record as held in the cache and returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier within the tenant.
    pub user_id: String,
    /// Display name; not unique.
    pub nickname: String,
    /// Absolute URL of the profile image.
    pub profile_url: String,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        nickname: impl Into<String>,
        profile_url: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            profile_url: profile_url.into(),
        }
    }
}

/// The active tenant scope and its credential.
///
/// Exactly one session is live per manager instance. The token is carried
/// opaquely into the `Api-Token` header; the SDK never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub tenant_id: String,
    pub api_token: String,
}

impl Session {
    pub fn new(tenant_id: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            api_token: api_token.into(),
        }
    }
}

/// Parameters for creating a single user.
///
/// When `profile_url` is `None` the manager substitutes the configured
/// default before dispatching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCreationParams {
    pub user_id: String,
    pub nickname: String,
    pub profile_url: Option<String>,
}

impl UserCreationParams {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            profile_url: None,
        }
    }

    /// Set an explicit profile URL instead of the configured default.
    pub fn with_profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}

/// Parameters for updating an existing user.
///
/// `None` fields mean "leave unchanged" and are omitted from the request
/// body entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdateParams {
    pub user_id: String,
    pub nickname: Option<String>,
    pub profile_url: Option<String>,
}

impl UserUpdateParams {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: None,
            profile_url: None,
        }
    }

    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn with_profile_url(mut self, profile_url: impl Into<String>) -> Self {
        self.profile_url = Some(profile_url.into());
        self
    }
}
