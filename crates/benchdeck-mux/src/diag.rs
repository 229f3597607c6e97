//! Diagnostic sink for best-effort delivery failures.
//!
//! Losing one frame must not destabilize the dashboard, so malformed and
//! unmatched inbound frames are dropped rather than raised. Every drop
//! routes through a single [`DropSink`] so the policy stays observable.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// The frame was not a valid `ServerFrame`.
    ParseFailure,
    /// The frame parsed but no subscription matched its task id.
    UnmatchedTask,
}

pub trait DropSink: Send {
    fn frame_dropped(&mut self, reason: DropReason, raw: &str);
}

/// Default sink: low-severity structured log, nothing else.
pub struct LogDropSink;

impl DropSink for LogDropSink {
    fn frame_dropped(&mut self, reason: DropReason, raw: &str) {
        tracing::debug!(reason = ?reason, len = raw.len(), "inbound frame dropped");
    }
}

/// Per-reason drop totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropCounts {
    pub parse_failures: usize,
    pub unmatched: usize,
}

impl DropCounts {
    pub fn total(&self) -> usize {
        self.parse_failures + self.unmatched
    }
}

/// Counting sink, clonable so callers keep a handle after handing the sink
/// to the multiplexer.
#[derive(Clone, Default)]
pub struct CountingDropSink {
    counts: Arc<Mutex<DropCounts>>,
}

impl CountingDropSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> DropCounts {
        *self.counts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DropSink for CountingDropSink {
    fn frame_dropped(&mut self, reason: DropReason, raw: &str) {
        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        match reason {
            DropReason::ParseFailure => counts.parse_failures += 1,
            DropReason::UnmatchedTask => counts.unmatched += 1,
        }
        tracing::debug!(reason = ?reason, len = raw.len(), "inbound frame dropped");
    }
}
