//! Client configuration
//!
//! All tunables for the SDK live here: rate-limit shape, batch and list
//! limits, and the endpoint template. Defaults match the remote API's
//! published contract.

use std::time::Duration;

/// Default minimum spacing between two consecutive requests.
pub const DEFAULT_DISPATCH_INTERVAL: Duration = Duration::from_secs(1);

/// Default maximum number of admitted-but-unfinished requests, including
/// the one currently executing.
pub const DEFAULT_MAX_QUEUE_DEPTH: u32 = 10;

/// Default maximum number of users per batch creation call.
pub const DEFAULT_BATCH_LIMIT: usize = 10;

/// Default (fixed) server-side limit for nickname list requests.
pub const DEFAULT_LIST_LIMIT: u32 = 10;

/// Profile image applied when a creation request omits one.
pub const DEFAULT_PROFILE_URL: &str = "https://static.roster.dev/profiles/default_512px.png";

/// Endpoint template; `{tenant}` is replaced with the session's tenant id.
pub const DEFAULT_BASE_URL_TEMPLATE: &str = "https://api-{tenant}.roster.dev/v3/users";

/// Configuration for a Roster client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Minimum spacing between two consecutive dispatched requests.
    pub dispatch_interval: Duration,
    /// Maximum number of requests waiting for a slot, including the one
    /// about to run. Clamped to at least 1.
    pub max_queue_depth: u32,
    /// Maximum number of users a single `create_users` call may carry.
    pub batch_limit: usize,
    /// Server-side result limit sent with nickname list requests.
    pub list_limit: u32,
    /// Profile URL substituted when a creation omits one.
    pub default_profile_url: String,
    /// Users-collection URL template with a `{tenant}` placeholder.
    pub base_url_template: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dispatch_interval: DEFAULT_DISPATCH_INTERVAL,
            max_queue_depth: DEFAULT_MAX_QUEUE_DEPTH,
            batch_limit: DEFAULT_BATCH_LIMIT,
            list_limit: DEFAULT_LIST_LIMIT,
            default_profile_url: DEFAULT_PROFILE_URL.to_string(),
            base_url_template: DEFAULT_BASE_URL_TEMPLATE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum spacing between dispatched requests.
    pub fn with_dispatch_interval(mut self, interval: Duration) -> Self {
        self.dispatch_interval = interval;
        self
    }

    /// Set the maximum queue depth. Values below 1 are clamped to 1.
    pub fn with_max_queue_depth(mut self, depth: u32) -> Self {
        self.max_queue_depth = depth.max(1);
        self
    }

    /// Set the batch creation limit.
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit;
        self
    }

    /// Set the list request limit.
    pub fn with_list_limit(mut self, limit: u32) -> Self {
        self.list_limit = limit;
        self
    }

    /// Set the default profile URL.
    pub fn with_default_profile_url(mut self, url: impl Into<String>) -> Self {
        self.default_profile_url = url.into();
        self
    }

    /// Set the base URL template. Must contain a `{tenant}` placeholder.
    pub fn with_base_url_template(mut self, template: impl Into<String>) -> Self {
        self.base_url_template = template.into();
        self
    }

    /// Expand the base URL template for a tenant.
    pub fn users_url(&self, tenant_id: &str) -> String {
        self.base_url_template.replace("{tenant}", tenant_id)
    }
}
