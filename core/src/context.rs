//! Per-call deadline context.

use std::time::{Duration, Instant};

/// Deadline carrier handed to every client call.
///
/// A context without a deadline never expires. When a deadline is set, the
/// remaining budget at dispatch time becomes the transport's request
/// timeout, so an in-flight request is aborted once the deadline passes.
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    deadline: Option<Instant>,
}

impl CallContext {
    /// Context with no deadline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the deadline. `None` when there is no deadline,
    /// zero once it has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}
