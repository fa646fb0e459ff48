// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn events_serialize_with_type_tag() {
    let event = Event::JobStatusChanged {
        id: "job-1".into(),
        from: JobStatus::Pending,
        to: JobStatus::Running,
    };

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "type": "job:status",
            "id": "job-1",
            "from": "pending",
            "to": "running",
        })
    );
}

#[test]
fn attempt_completed_skips_absent_records() {
    let event = Event::AttemptCompleted {
        job_id: "job-1".into(),
        number: 0,
        status: AttemptStatus::Failed,
        records_committed: None,
    };

    let json = serde_json::to_value(&event).unwrap();
    assert!(!json.as_object().unwrap().contains_key("records_committed"));
}

#[test]
fn event_serde_round_trip() {
    let events = vec![
        Event::JobCreated {
            id: "job-1".into(),
            config_type: ConfigType::Sync,
            scope: "connection-1".to_string(),
            created_at_secs: 1_000,
        },
        Event::AttemptCreated { job_id: "job-1".into(), number: 0, created_at_secs: 1_010 },
        Event::AttemptCompleted {
            job_id: "job-1".into(),
            number: 0,
            status: AttemptStatus::Succeeded,
            records_committed: Some(1_000),
        },
        Event::InvariantViolated { job_id: "job-1".into(), detail: "two successes".to_string() },
    ];

    for event in events {
        let json = serde_json::to_string(&event).unwrap();
        let restored: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}

#[test]
fn log_summaries_are_single_line_facts() {
    let created = Event::JobCreated {
        id: "job-1".into(),
        config_type: ConfigType::Sync,
        scope: "connection-1".to_string(),
        created_at_secs: 1_000,
    };
    assert_eq!(created.log_summary(), "job:created id=job-1 type=sync scope=connection-1");

    let status = Event::JobStatusChanged {
        id: "job-1".into(),
        from: JobStatus::Running,
        to: JobStatus::Incomplete,
    };
    assert_eq!(status.log_summary(), "job:status id=job-1 from=running to=incomplete");

    let completed = Event::AttemptCompleted {
        job_id: "job-1".into(),
        number: 2,
        status: AttemptStatus::Succeeded,
        records_committed: Some(500),
    };
    assert_eq!(
        completed.log_summary(),
        "attempt:completed job=job-1 n=2 status=succeeded records=500"
    );
}

#[test]
fn job_id_routes_every_variant() {
    let events = [
        Event::JobCreated {
            id: "job-9".into(),
            config_type: ConfigType::Reset,
            scope: "connection-2".to_string(),
            created_at_secs: 0,
        },
        Event::JobStatusChanged {
            id: "job-9".into(),
            from: JobStatus::Pending,
            to: JobStatus::Cancelled,
        },
        Event::AttemptCreated { job_id: "job-9".into(), number: 1, created_at_secs: 5 },
        Event::AttemptCompleted {
            job_id: "job-9".into(),
            number: 1,
            status: AttemptStatus::Failed,
            records_committed: None,
        },
        Event::InvariantViolated { job_id: "job-9".into(), detail: String::new() },
    ];

    for event in &events {
        assert_eq!(event.job_id(), &JobId::from_string("job-9"));
    }
}
