//! Transport abstraction
//!
//! The dispatcher executes requests through this seam. Implementations own
//! the concrete HTTP stack, TLS, and wire-level concerns; they perform no
//! retries (the SDK never retries on the caller's behalf).

use async_trait::async_trait;
use roster_core::RosterResult;
use serde_json::Value;

use crate::request::RequestDescriptor;

/// Executes a single request and returns its decoded JSON body.
///
/// # Error contract
///
/// - A non-success status with a decodable structured error body maps to
///   `RosterError::Api { code, message }`.
/// - A non-success status with an undecodable body maps to
///   `RosterError::ResponseParsing`.
/// - A network-level failure with no response maps to
///   `RosterError::Transport`.
///
/// Implementations must be thread-safe; one transport instance is shared
/// by all in-flight dispatcher workers.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request once.
    async fn execute(&self, request: &RequestDescriptor) -> RosterResult<Value>;
}
