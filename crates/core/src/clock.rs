// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable time handling

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// A clock that provides the current time as whole seconds since the epoch.
///
/// Every timestamp in this domain (job creation, attempt start/end) is
/// second-granular, so the trait exposes nothing finer.
pub trait Clock: Clone + Send + Sync {
    fn epoch_secs(&self) -> u64;
}

/// Real system clock
#[derive(Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone)]
pub struct FakeClock {
    epoch_secs: Arc<Mutex<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self { epoch_secs: Arc::new(Mutex::new(1_000_000)) }
    }

    /// Advance the clock by the given duration
    pub fn advance(&self, duration: Duration) {
        *self.epoch_secs.lock() += duration.as_secs();
    }

    /// Set the epoch seconds value
    pub fn set_epoch_secs(&self, secs: u64) {
        *self.epoch_secs.lock() = secs;
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn epoch_secs(&self) -> u64 {
        *self.epoch_secs.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
