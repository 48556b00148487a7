//! Roster Core - data model for the user-directory SDK
//!
//! Value objects, error types, and client configuration shared across the
//! Roster workspace. This crate performs no I/O; the SDK machinery lives in
//! `roster-client`.

pub mod config;
pub mod error;
pub mod user;

pub use config::{
    ClientConfig, DEFAULT_BASE_URL_TEMPLATE, DEFAULT_BATCH_LIMIT, DEFAULT_DISPATCH_INTERVAL,
    DEFAULT_LIST_LIMIT, DEFAULT_MAX_QUEUE_DEPTH, DEFAULT_PROFILE_URL,
};
pub use error::{RosterError, RosterResult};
pub use user::{Session, User, UserCreationParams, UserUpdateParams};
