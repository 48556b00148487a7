//! Mock transport for testing
//!
//! Scripted FIFO of canned outcomes plus a log of every descriptor it
//! received. Lives in the production crate (like other mock collaborators
//! in this workspace) so downstream crates and integration tests can share
//! it; `roster-test-utils` re-exports it.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use roster_core::{RosterError, RosterResult};
use serde_json::Value;

use crate::request::RequestDescriptor;
use crate::transport::Transport;

/// Transport double that replays scripted results in push order.
///
/// When the script runs dry, `execute` fails with a `Transport` error so a
/// test that under-scripts fails loudly instead of hanging.
pub struct MockTransport {
    responses: Mutex<VecDeque<RosterResult<Value>>>,
    requests: Mutex<Vec<RequestDescriptor>>,
    calls: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Script a successful response body.
    pub fn push_success(&self, body: Value) {
        let mut responses = match self.responses.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses.push_back(Ok(body));
    }

    /// Script a failure.
    pub fn push_error(&self, error: RosterError) {
        let mut responses = match self.responses.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses.push_back(Err(error));
    }

    /// Number of `execute` calls observed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every descriptor received, in execution order.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        let requests = match self.requests.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        requests.clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: &RequestDescriptor) -> RosterResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        {
            let mut requests = match self.requests.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            requests.push(request.clone());
        }

        let mut responses = match self.responses.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        responses.pop_front().unwrap_or_else(|| {
            Err(RosterError::Transport {
                message: "mock transport: no scripted response left".to_string(),
            })
        })
    }
}

impl std::fmt::Debug for MockTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTransport")
            .field("calls", &self.calls())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use serde_json::json;

    fn descriptor() -> RequestDescriptor {
        RequestDescriptor {
            method: HttpMethod::Get,
            url: "https://api-test.roster.dev/v3/users/u1".to_string(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_replays_in_push_order() {
        let transport = MockTransport::new();
        transport.push_success(json!({"user_id": "u1"}));
        transport.push_error(RosterError::ResponseParsing);

        let first = transport.execute(&descriptor()).await;
        assert_eq!(first.expect("scripted ok")["user_id"], "u1");

        let second = transport.execute(&descriptor()).await;
        assert_eq!(second.unwrap_err(), RosterError::ResponseParsing);
        assert_eq!(transport.calls(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_script_fails_loudly() {
        let transport = MockTransport::new();
        let result = transport.execute(&descriptor()).await;
        assert!(matches!(result, Err(RosterError::Transport { .. })));
    }

    #[tokio::test]
    async fn test_records_descriptors() {
        let transport = MockTransport::new();
        transport.push_success(json!({}));
        transport.execute(&descriptor()).await.expect("scripted ok");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api-test.roster.dev/v3/users/u1");
    }
}
