// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Full retry lifecycle: one failed attempt, then a successful one.

use rl_core::test_support::sync_config;
use rl_core::{AttemptStatus, Event, FakeClock, JobStatus};
use rl_ledger::{AttemptOutcome, JobLedger, MemoryJobStore, RecordingSink};
use std::time::Duration;

#[test]
fn failed_attempt_then_successful_retry() {
    let clock = FakeClock::new();
    let ledger = JobLedger::new(MemoryJobStore::new(), clock.clone(), RecordingSink::new());

    // Job is created pending
    let job = ledger.create_job(sync_config()).unwrap();
    assert_eq!(job.status, JobStatus::Pending);

    // First execution: start, attempt #0, fail
    ledger.request_status(&job.id, JobStatus::Running).unwrap();
    clock.advance(Duration::from_secs(10));
    let first = ledger.create_attempt(&job.id).unwrap();
    assert_eq!(first.number, 0);

    clock.advance(Duration::from_secs(60));
    ledger.complete_attempt(&job.id, 0, AttemptOutcome::failed()).unwrap();
    let job_after_failure = ledger.request_status(&job.id, JobStatus::Incomplete).unwrap();
    assert_eq!(job_after_failure.status, JobStatus::Incomplete);
    assert!(!job_after_failure.has_running_attempt());

    // Retry: attempt #1 succeeds with records committed
    clock.advance(Duration::from_secs(30));
    let second = ledger.create_attempt(&job.id).unwrap();
    assert_eq!(second.number, 1);

    clock.advance(Duration::from_secs(90));
    ledger
        .complete_attempt(
            &job.id,
            1,
            AttemptOutcome::succeeded(
                Some(serde_json::json!({ "records": { "committed": 1000 } })),
                Some(1000),
            ),
        )
        .unwrap();
    let done = ledger.request_status(&job.id, JobStatus::Succeeded).unwrap();
    assert_eq!(done.status, JobStatus::Succeeded);
    assert!(done.is_terminal());

    // Derived queries see the whole history
    assert_eq!(
        ledger.success_output(&job.id).unwrap(),
        Some(serde_json::json!({ "records": { "committed": 1000 } }))
    );
    assert_eq!(done.last_failed_attempt().map(|a| a.number), Some(0));
    assert_eq!(done.last_attempt().map(|a| a.number), Some(1));
    assert_eq!(done.successful_attempt().unwrap().map(|a| a.number), Some(1));
    assert_eq!(done.total_records_committed(), 1000);
    assert_eq!(done.started_at_secs, Some(1_000_010));
    assert_eq!(done.ended_at_secs(), Some(1_000_190));
}

#[test]
fn cancelled_job_rejects_further_transitions() {
    let clock = FakeClock::new();
    let ledger = JobLedger::new(MemoryJobStore::new(), clock, RecordingSink::new());

    let job = ledger.create_job(sync_config()).unwrap();
    ledger.request_status(&job.id, JobStatus::Cancelled).unwrap();

    for next in JobStatus::ALL {
        assert!(
            ledger.request_status(&job.id, next).is_err(),
            "cancelled -> {next} must be rejected"
        );
    }
}

#[test]
fn lifecycle_emits_one_event_per_fact() {
    let clock = FakeClock::new();
    let ledger = JobLedger::new(MemoryJobStore::new(), clock, RecordingSink::new());

    let job = ledger.create_job(sync_config()).unwrap();
    ledger.request_status(&job.id, JobStatus::Running).unwrap();
    ledger.create_attempt(&job.id).unwrap();
    ledger.complete_attempt(&job.id, 0, AttemptOutcome::failed()).unwrap();
    ledger.request_status(&job.id, JobStatus::Failed).unwrap();

    let events = ledger.sink().events();
    assert_eq!(events.len(), 5);
    assert!(matches!(events[0], Event::JobCreated { .. }));
    assert!(matches!(
        events[3],
        Event::AttemptCompleted { status: AttemptStatus::Failed, number: 0, .. }
    ));
    assert!(matches!(
        events[4],
        Event::JobStatusChanged { from: JobStatus::Running, to: JobStatus::Failed, .. }
    ));
}
