// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One execution attempt of a job's work.

use crate::job::JobId;
use crate::status::AttemptStatus;
use serde::{Deserialize, Serialize};

/// A single execution attempt of a job.
///
/// Attempts are an append-only audit trail owned exclusively by their job:
/// created `Running` when the orchestrator starts an execution, concluded
/// exactly once with a terminal status, never deleted or detached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Sequential number, unique within the owning job (starts at 0)
    pub number: u32,
    /// Owning job
    pub job_id: JobId,
    pub status: AttemptStatus,
    pub created_at_secs: u64,
    /// Set once the attempt concludes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at_secs: Option<u64>,
    /// Opaque result payload recorded on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<serde_json::Value>,
    /// Records durably written during this attempt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_committed: Option<u64>,
}

impl Attempt {
    /// Create a new running attempt.
    pub fn new(number: u32, job_id: JobId, created_at_secs: u64) -> Self {
        Self {
            number,
            job_id,
            status: AttemptStatus::Running,
            created_at_secs,
            ended_at_secs: None,
            output: None,
            records_committed: None,
        }
    }

    /// Check if the attempt has concluded.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Output payload, present only for a succeeded attempt that recorded one.
    pub fn success_output(&self) -> Option<&serde_json::Value> {
        match self.status {
            AttemptStatus::Succeeded => self.output.as_ref(),
            _ => None,
        }
    }

    /// Conclude the attempt with its terminal status and outcome data.
    ///
    /// Attempt-level transitions are not validated here (see
    /// [`AttemptStatus`]); the orchestration layer owns the convention that
    /// each attempt concludes exactly once.
    pub fn complete(
        &mut self,
        status: AttemptStatus,
        output: Option<serde_json::Value>,
        records_committed: Option<u64>,
        ended_at_secs: u64,
    ) {
        self.status = status;
        self.output = output;
        self.records_committed = records_committed;
        self.ended_at_secs = Some(ended_at_secs);
    }
}

crate::builder! {
    pub struct AttemptBuilder => Attempt {
        into {
            job_id: JobId = "job-test",
        }
        set {
            number: u32 = 0,
            status: AttemptStatus = AttemptStatus::Running,
            created_at_secs: u64 = 1_000_000,
        }
        option {
            ended_at_secs: u64 = None,
            output: serde_json::Value = None,
            records_committed: u64 = None,
        }
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
