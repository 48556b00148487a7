//! Roster Client - SDK machinery for the user-directory API
//!
//! The three working parts, leaves first:
//!
//! - [`RateLimitedDispatcher`] spaces outbound requests one interval
//!   apart and bounds how many callers may queue behind the limiter.
//! - [`UserCache`] is a thread-safe in-process cache of users keyed by id.
//! - [`UserManager`] orchestrates session, dispatcher, and cache into
//!   the public create / batch-create / update / get / list operations.
//!
//! Transports are pluggable through the [`Transport`] trait;
//! [`HttpTransport`] is the reqwest-backed production implementation and
//! [`MockTransport`] the scripted test double.

pub mod cache;
pub mod dispatcher;
pub mod http;
pub mod manager;
pub mod mock;
pub mod request;
pub mod transport;
pub mod wire;

pub use cache::UserCache;
pub use dispatcher::RateLimitedDispatcher;
pub use http::HttpTransport;
pub use manager::UserManager;
pub use mock::MockTransport;
pub use request::{HttpMethod, RequestDescriptor};
pub use transport::Transport;
pub use wire::{ApiErrorBody, UserListPayload, UserPayload};

// Re-export core types so a single dependency suffices for most callers.
pub use roster_core::{
    ClientConfig, RosterError, RosterResult, Session, User, UserCreationParams, UserUpdateParams,
};
