//! Request descriptors for the user-directory API
//!
//! Each manager operation maps to one descriptor builder. The descriptor
//! bundles everything a transport needs (method, target, headers, query,
//! body) without committing to a concrete HTTP client.

use roster_core::{ClientConfig, Session, UserCreationParams, UserUpdateParams};
use serde_json::{json, Map, Value};

/// Parameter keys used on the wire.
pub mod keys {
    pub const USER_ID: &str = "user_id";
    pub const NICKNAME: &str = "nickname";
    pub const PROFILE_URL: &str = "profile_url";
    pub const LIMIT: &str = "limit";
}

/// Header names used on the wire.
pub mod headers {
    pub const API_TOKEN: &str = "Api-Token";
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const APPLICATION_JSON: &str = "application/json";
}

/// HTTP method for a directory request.
///
/// Only the read/write distinction matters to the core; the concrete verb
/// is carried so transports can map it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    /// Whether this request mutates server state.
    pub fn is_write(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

/// An abstract request ready for a [`Transport`](crate::Transport).
///
/// Write requests carry a JSON `body`; read requests carry `query`
/// parameters or a path-parameterized `url`.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    fn base_headers(session: &Session) -> Vec<(String, String)> {
        vec![
            (
                headers::CONTENT_TYPE.to_string(),
                headers::APPLICATION_JSON.to_string(),
            ),
            (headers::API_TOKEN.to_string(), session.api_token.clone()),
        ]
    }

    /// POST a new user to the tenant's users collection.
    ///
    /// Substitutes the configured default profile URL when the params omit
    /// one.
    pub fn create_user(
        session: &Session,
        config: &ClientConfig,
        params: &UserCreationParams,
    ) -> Self {
        let profile_url = params
            .profile_url
            .clone()
            .unwrap_or_else(|| config.default_profile_url.clone());

        Self {
            method: HttpMethod::Post,
            url: config.users_url(&session.tenant_id),
            headers: Self::base_headers(session),
            query: Vec::new(),
            body: Some(json!({
                (keys::USER_ID): params.user_id,
                (keys::NICKNAME): params.nickname,
                (keys::PROFILE_URL): profile_url,
            })),
        }
    }

    /// GET a single user by id.
    pub fn get_user(session: &Session, config: &ClientConfig, user_id: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: format!("{}/{}", config.users_url(&session.tenant_id), user_id),
            headers: Self::base_headers(session),
            query: Vec::new(),
            body: None,
        }
    }

    /// GET users whose nickname matches exactly, with the fixed server-side
    /// limit from the config.
    pub fn list_users(session: &Session, config: &ClientConfig, nickname: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: config.users_url(&session.tenant_id),
            headers: Self::base_headers(session),
            query: vec![
                (keys::NICKNAME.to_string(), nickname.to_string()),
                (keys::LIMIT.to_string(), config.list_limit.to_string()),
            ],
            body: None,
        }
    }

    /// PUT an update for a single user. Only fields present in the params
    /// appear in the body; absent fields are left unchanged server-side.
    pub fn update_user(
        session: &Session,
        config: &ClientConfig,
        params: &UserUpdateParams,
    ) -> Self {
        let mut body = Map::new();
        if let Some(nickname) = &params.nickname {
            body.insert(keys::NICKNAME.to_string(), Value::String(nickname.clone()));
        }
        if let Some(profile_url) = &params.profile_url {
            body.insert(
                keys::PROFILE_URL.to_string(),
                Value::String(profile_url.clone()),
            );
        }

        Self {
            method: HttpMethod::Put,
            url: format!(
                "{}/{}",
                config.users_url(&session.tenant_id),
                params.user_id
            ),
            headers: Self::base_headers(session),
            query: Vec::new(),
            body: Some(Value::Object(body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::DEFAULT_PROFILE_URL;

    fn session() -> Session {
        Session::new("acme", "token-1")
    }

    #[test]
    fn test_create_user_descriptor() {
        let params = UserCreationParams::new("u1", "alice");
        let desc = RequestDescriptor::create_user(&session(), &ClientConfig::default(), &params);

        assert_eq!(desc.method, HttpMethod::Post);
        assert!(desc.method.is_write());
        assert_eq!(desc.url, "https://api-acme.roster.dev/v3/users");

        let body = desc.body.expect("create carries a body");
        assert_eq!(body[keys::USER_ID], "u1");
        assert_eq!(body[keys::NICKNAME], "alice");
        assert_eq!(body[keys::PROFILE_URL], DEFAULT_PROFILE_URL);
    }

    #[test]
    fn test_create_user_keeps_explicit_profile_url() {
        let params =
            UserCreationParams::new("u1", "alice").with_profile_url("https://example.com/me.png");
        let desc = RequestDescriptor::create_user(&session(), &ClientConfig::default(), &params);
        let body = desc.body.expect("create carries a body");
        assert_eq!(body[keys::PROFILE_URL], "https://example.com/me.png");
    }

    #[test]
    fn test_get_user_descriptor_is_path_parameterized() {
        let desc = RequestDescriptor::get_user(&session(), &ClientConfig::default(), "u42");
        assert_eq!(desc.method, HttpMethod::Get);
        assert!(!desc.method.is_write());
        assert_eq!(desc.url, "https://api-acme.roster.dev/v3/users/u42");
        assert!(desc.body.is_none());
        assert!(desc.query.is_empty());
    }

    #[test]
    fn test_list_users_descriptor_carries_fixed_limit() {
        let config = ClientConfig::default();
        let desc = RequestDescriptor::list_users(&session(), &config, "alice");
        assert_eq!(desc.method, HttpMethod::Get);
        assert!(desc
            .query
            .contains(&(keys::NICKNAME.to_string(), "alice".to_string())));
        assert!(desc
            .query
            .contains(&(keys::LIMIT.to_string(), "10".to_string())));
    }

    #[test]
    fn test_update_user_body_omits_absent_fields() {
        let params = UserUpdateParams::new("u1").with_nickname("bob");
        let desc = RequestDescriptor::update_user(&session(), &ClientConfig::default(), &params);

        assert_eq!(desc.method, HttpMethod::Put);
        assert_eq!(desc.url, "https://api-acme.roster.dev/v3/users/u1");

        let body = desc.body.expect("update carries a body");
        assert_eq!(body[keys::NICKNAME], "bob");
        assert!(body.get(keys::PROFILE_URL).is_none());
        assert!(body.get(keys::USER_ID).is_none());
    }

    #[test]
    fn test_headers_carry_token_and_content_type() {
        let desc = RequestDescriptor::get_user(&session(), &ClientConfig::default(), "u1");
        assert!(desc
            .headers
            .contains(&(headers::API_TOKEN.to_string(), "token-1".to_string())));
        assert!(desc.headers.contains(&(
            headers::CONTENT_TYPE.to_string(),
            headers::APPLICATION_JSON.to_string()
        )));
    }
}
