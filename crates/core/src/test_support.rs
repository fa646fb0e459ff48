// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::attempt::Attempt;
use crate::job::{ConfigType, JobConfig, JobId};
use crate::status::AttemptStatus;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for core state machine types.
pub mod strategies {
    use crate::attempt::Attempt;
    use crate::status::{AttemptStatus, JobStatus};
    use proptest::prelude::*;

    pub fn arb_job_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Pending),
            Just(JobStatus::Running),
            Just(JobStatus::Incomplete),
            Just(JobStatus::Failed),
            Just(JobStatus::Succeeded),
            Just(JobStatus::Cancelled),
        ]
    }

    pub fn arb_attempt_status() -> impl Strategy<Value = AttemptStatus> {
        prop_oneof![
            Just(AttemptStatus::Running),
            Just(AttemptStatus::Failed),
            Just(AttemptStatus::Succeeded),
        ]
    }

    /// Attempt with arbitrary status, timestamps, and optional outcome data.
    pub fn arb_attempt(number: u32) -> impl Strategy<Value = Attempt> {
        (
            arb_attempt_status(),
            0u64..100_000,
            proptest::option::of(0u64..100_000),
            proptest::option::of(0u64..10_000),
        )
            .prop_map(move |(status, created_at_secs, ended_at_secs, records_committed)| {
                Attempt {
                    number,
                    job_id: "job-prop".into(),
                    status,
                    created_at_secs,
                    ended_at_secs,
                    output: None,
                    records_committed,
                }
            })
    }
}

// ── Factory functions ───────────────────────────────────────────────────

/// Job config for a plain sync run.
pub fn sync_config() -> JobConfig {
    JobConfig::new(
        ConfigType::Sync,
        "connection-1",
        serde_json::json!({ "streams": ["users"] }),
    )
}

/// A concluded failed attempt.
pub fn failed_attempt(job_id: &JobId, number: u32, created_at_secs: u64) -> Attempt {
    let mut attempt = Attempt::new(number, job_id.clone(), created_at_secs);
    attempt.complete(AttemptStatus::Failed, None, None, created_at_secs + 60);
    attempt
}

/// A concluded successful attempt with an output payload.
pub fn succeeded_attempt(job_id: &JobId, number: u32, created_at_secs: u64) -> Attempt {
    let mut attempt = Attempt::new(number, job_id.clone(), created_at_secs);
    attempt.complete(
        AttemptStatus::Succeeded,
        Some(serde_json::json!({ "records": { "committed": 100 } })),
        Some(100),
        created_at_secs + 60,
    );
    attempt
}
