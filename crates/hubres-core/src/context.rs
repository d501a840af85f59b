//! Per-request context handed in by the host: cancellation and deadline.
//!
//! The host keeps a clone of the abort token and sets it to stop an in-flight
//! fetch; the transfer polls the token and stops. A deadline caps the total
//! transfer time.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    abort: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// No cancellation, no deadline: the transport's own limits apply.
    pub fn background() -> Self {
        Self::default()
    }

    /// Attaches an abort token; set it to true to cancel.
    pub fn with_abort(mut self, token: Arc<AtomicBool>) -> Self {
        self.abort = Some(token);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now. A timeout too large to represent as an
    /// `Instant` leaves the context without a deadline.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.with_deadline(deadline),
            None => self,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|token| token.load(Ordering::Relaxed))
    }

    /// Time left before the deadline; `Some(ZERO)` once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub(crate) fn abort_token(&self) -> Option<Arc<AtomicBool>> {
        self.abort.clone()
    }
}
