// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job and attempt status enums and the transition-legality table.
//!
//! The legal state graph lives in one place ([`JobStatus::allowed_transitions`])
//! so it can be audited and tested as data rather than as scattered
//! conditionals.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Created, no attempt started yet
    Pending,
    /// An attempt is executing
    Running,
    /// Last attempt ended without full success or failure; eligible for
    /// another attempt
    Incomplete,
    /// Failed with no further retries
    Failed,
    /// Completed successfully
    Succeeded,
    /// Cancelled before completion
    Cancelled,
}

impl JobStatus {
    /// Every status, in declaration order.
    pub const ALL: [JobStatus; 6] = [
        JobStatus::Pending,
        JobStatus::Running,
        JobStatus::Incomplete,
        JobStatus::Failed,
        JobStatus::Succeeded,
        JobStatus::Cancelled,
    ];

    /// Statuses that end the lifecycle.
    pub const TERMINAL: [JobStatus; 3] =
        [JobStatus::Failed, JobStatus::Succeeded, JobStatus::Cancelled];

    /// Statuses from which the lifecycle can still progress.
    pub const NON_TERMINAL: [JobStatus; 3] =
        [JobStatus::Pending, JobStatus::Running, JobStatus::Incomplete];

    /// Check if this status ends the lifecycle.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Failed | JobStatus::Succeeded | JobStatus::Cancelled)
    }

    /// The set of statuses this status may legally become.
    ///
    /// `Failed → Failed` permits idempotent re-marking of a failure;
    /// `Succeeded` and `Cancelled` admit no transitions at all.
    /// `Incomplete` is the only status with edges back to `Pending` and
    /// `Running`, modeling "eligible for another attempt".
    pub fn allowed_transitions(self) -> &'static [JobStatus] {
        use JobStatus::*;
        match self {
            Pending => &[Running, Failed, Cancelled, Incomplete],
            Running => &[Incomplete, Succeeded, Failed, Cancelled],
            Incomplete => &[Pending, Running, Failed, Cancelled, Incomplete, Succeeded],
            Succeeded => &[],
            Failed => &[Failed],
            Cancelled => &[],
        }
    }

    /// Whether a transition from `self` to `next` is legal.
    pub fn can_transition_to(self, next: JobStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }
}

crate::simple_display! {
    JobStatus {
        Pending => "pending",
        Running => "running",
        Incomplete => "incomplete",
        Failed => "failed",
        Succeeded => "succeeded",
        Cancelled => "cancelled",
    }
}

/// Status of a single execution attempt.
///
/// Attempt transitions are not validated by this crate; only job-level
/// transitions consult a legality table. The orchestrator owns the
/// convention that attempts start `Running` and conclude exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// Execution in progress
    Running,
    /// Concluded without success
    Failed,
    /// Concluded successfully
    Succeeded,
}

impl AttemptStatus {
    /// Every status, in declaration order.
    pub const ALL: [AttemptStatus; 3] =
        [AttemptStatus::Running, AttemptStatus::Failed, AttemptStatus::Succeeded];

    /// Statuses that conclude an attempt.
    pub const TERMINAL: [AttemptStatus; 2] = [AttemptStatus::Failed, AttemptStatus::Succeeded];

    /// Check if the attempt has concluded.
    pub fn is_terminal(self) -> bool {
        matches!(self, AttemptStatus::Failed | AttemptStatus::Succeeded)
    }
}

crate::simple_display! {
    AttemptStatus {
        Running => "running",
        Failed => "failed",
        Succeeded => "succeeded",
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
