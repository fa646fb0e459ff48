// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Observability sinks for lifecycle events.

use parking_lot::Mutex;
use rl_core::Event;

/// Consumer of lifecycle events.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &Event);
}

/// Sink that logs each event summary through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &Event) {
        tracing::info!(job_id = %event.job_id(), "{}", event.log_summary());
    }
}

/// Sink that records events in memory, for tests and for embedders that
/// forward batches elsewhere.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events emitted so far, in order.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Drain recorded events.
    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &Event) {
        self.events.lock().push(event.clone());
    }
}
