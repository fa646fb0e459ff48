// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serialization round-trips across the public wire shapes.

use rl_core::test_support::{failed_attempt, succeeded_attempt, sync_config};
use rl_core::{Attempt, Event, Job, JobStatus};
use similar_asserts::assert_eq;

#[test]
fn job_with_attempt_history_round_trips() {
    let mut job = Job::new("job-rt".into(), sync_config(), 1_000);
    let id = job.id.clone();
    job.apply_status(JobStatus::Succeeded, 1_400);
    job.started_at_secs = Some(1_010);
    job.attempts.push(failed_attempt(&id, 0, 1_010));
    job.attempts.push(failed_attempt(&id, 1, 1_120));
    job.attempts.push(succeeded_attempt(&id, 2, 1_250));

    let json = serde_json::to_string_pretty(&job).unwrap();
    let restored: Job = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, job);

    // Order, optional presence, and derived invariants all survive
    assert_eq!(
        restored.attempts.iter().map(|a| a.number).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert!(restored.attempts[0].output.is_none());
    assert!(restored.attempts[2].output.is_some());
    assert_eq!(restored.successful_attempt().unwrap().map(|a| a.number), Some(2));
    assert_eq!(restored.last_failed_attempt().map(|a| a.number), Some(1));
    assert!(!restored.has_running_attempt());
    assert!(restored.is_terminal());
}

#[test]
fn running_attempt_round_trips_without_outcome_fields() {
    let attempt = Attempt::new(0, "job-rt".into(), 2_000);

    let json = serde_json::to_value(&attempt).unwrap();
    let map = json.as_object().unwrap();
    assert!(!map.contains_key("ended_at_secs"));
    assert!(!map.contains_key("output"));
    assert!(!map.contains_key("records_committed"));

    let restored: Attempt = serde_json::from_value(json).unwrap();
    assert_eq!(restored, attempt);
    assert!(!restored.is_terminal());
}

#[test]
fn events_round_trip_through_their_wire_tags() {
    let event = Event::JobStatusChanged {
        id: "job-rt".into(),
        from: JobStatus::Incomplete,
        to: JobStatus::Succeeded,
    };

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "job:status");

    let restored: Event = serde_json::from_value(json).unwrap();
    assert_eq!(restored, event);
}
