// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for lifecycle validation and invariant checks.
//!
//! Two deliberately distinct shapes: [`TransitionError`] is an expected,
//! recoverable validation failure returned to the caller for business-logic
//! handling; [`InvariantViolation`] signals corrupted state and must
//! propagate rather than be swallowed. Absence ("no matching attempt") is
//! `Option`, never an error.

use crate::job::JobId;
use crate::status::JobStatus;
use thiserror::Error;

fn allowed_list(allowed: &[JobStatus]) -> String {
    if allowed.is_empty() {
        "none".to_string()
    } else {
        allowed.iter().map(JobStatus::to_string).collect::<Vec<_>>().join(", ")
    }
}

/// A requested job status transition that the legality table rejects.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot transition job {job_id} from {from} to {to} (allowed: {})", allowed_list(.allowed))]
pub struct TransitionError {
    pub job_id: JobId,
    pub from: JobStatus,
    pub to: JobStatus,
    /// Statuses `from` may legally become
    pub allowed: &'static [JobStatus],
}

/// A state that should be structurally impossible.
///
/// Indicates a bug in attempt completion or corrupted persisted data, not a
/// normal runtime condition. Intermediate layers must propagate this, never
/// catch-and-ignore it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("job {job_id} has {count} successful attempts, expected at most one")]
    MultipleSuccessfulAttempts { job_id: JobId, count: usize },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
