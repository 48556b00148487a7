//! Rate-limited request dispatcher
//!
//! Outbound requests are spaced at least one interval apart. The only
//! shared state is `next_slot`, the earliest timestamp the next admitted
//! request may execute at. The queue-depth bound falls out of arithmetic:
//! if the candidate slot lies further than `interval * (depth - 1)` past
//! now, the full window is already reserved and the request is rejected.
//! There is no FIFO collection to maintain.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use roster_core::{ClientConfig, RosterError, RosterResult};
use serde_json::Value;
use tokio::sync::oneshot;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::request::RequestDescriptor;
use crate::transport::Transport;

/// Schedules requests onto a strictly-ordered timeline and executes them
/// against the shared transport.
///
/// Admission is a single read-modify-write of `next_slot` under the mutex;
/// two concurrent submissions can never reserve the same slot. Once
/// admitted, a request runs to completion on its own task even if the
/// submitting caller goes away, and its completion fires exactly once.
pub struct RateLimitedDispatcher {
    transport: Arc<dyn Transport>,
    /// Minimum spacing between two consecutive executions.
    interval: Duration,
    /// Maximum admitted-but-unfinished requests, including the running one.
    max_queue_depth: u32,
    /// Earliest slot the next admitted request may take.
    next_slot: Mutex<Instant>,
}

impl RateLimitedDispatcher {
    /// Create a dispatcher over the given transport.
    ///
    /// `next_slot` starts at the construction instant, which admission
    /// treats the same as any instant in the past.
    pub fn new(transport: Arc<dyn Transport>, config: &ClientConfig) -> Self {
        Self {
            transport,
            interval: config.dispatch_interval,
            max_queue_depth: config.max_queue_depth.max(1),
            next_slot: Mutex::new(Instant::now()),
        }
    }

    /// Decide admission and reserve an execution slot.
    ///
    /// On rejection `next_slot` is left untouched, so a rejected request
    /// consumes nothing.
    fn reserve_slot(&self) -> RosterResult<Instant> {
        let now = Instant::now();
        let mut next_slot = match self.next_slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        let candidate = (*next_slot).max(now);
        let horizon = now + self.interval * (self.max_queue_depth - 1);
        if candidate > horizon {
            warn!(queue_depth = self.max_queue_depth, "request rejected: rate limit window full");
            return Err(RosterError::RateLimitExceeded);
        }

        *next_slot = candidate + self.interval;
        Ok(candidate)
    }

    /// Submit a request.
    ///
    /// Admission happens immediately; a rejected request never touches the
    /// transport. An admitted request executes at or after its slot, and
    /// the result is delivered to the caller exactly once.
    pub async fn submit(&self, request: RequestDescriptor) -> RosterResult<Value> {
        let slot = self.reserve_slot()?;
        debug!(url = %request.url, delay_ms = %slot.saturating_duration_since(Instant::now()).as_millis(), "request admitted");

        let transport = Arc::clone(&self.transport);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep_until(slot).await;
            let result = transport.execute(&request).await;
            // Receiver may have gone away; the operation still completed.
            let _ = tx.send(result);
        });

        match rx.await {
            Ok(result) => result,
            Err(_) => Err(RosterError::Transport {
                message: "dispatch worker terminated before completing".to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for RateLimitedDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimitedDispatcher")
            .field("interval", &self.interval)
            .field("max_queue_depth", &self.max_queue_depth)
            .finish()
    }
}
