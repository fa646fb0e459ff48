// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle event types for observability consumers.

use crate::job::{ConfigType, JobId};
use crate::status::{AttemptStatus, JobStatus};
use serde::{Deserialize, Serialize};

/// Facts about lifecycle transitions and invariant violations.
///
/// Serializes with `{"type": "event:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    #[serde(rename = "job:created")]
    JobCreated {
        id: JobId,
        config_type: ConfigType,
        scope: String,
        created_at_secs: u64,
    },

    #[serde(rename = "job:status")]
    JobStatusChanged { id: JobId, from: JobStatus, to: JobStatus },

    #[serde(rename = "attempt:created")]
    AttemptCreated { job_id: JobId, number: u32, created_at_secs: u64 },

    #[serde(rename = "attempt:completed")]
    AttemptCompleted {
        job_id: JobId,
        number: u32,
        status: AttemptStatus,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        records_committed: Option<u64>,
    },

    #[serde(rename = "invariant:violated")]
    InvariantViolated { job_id: JobId, detail: String },
}

impl Event {
    /// One-line summary for logs.
    pub fn log_summary(&self) -> String {
        match self {
            Event::JobCreated { id, config_type, scope, .. } => {
                format!("job:created id={id} type={config_type} scope={scope}")
            }
            Event::JobStatusChanged { id, from, to } => {
                format!("job:status id={id} from={from} to={to}")
            }
            Event::AttemptCreated { job_id, number, .. } => {
                format!("attempt:created job={job_id} n={number}")
            }
            Event::AttemptCompleted { job_id, number, status, records_committed } => {
                match records_committed {
                    Some(records) => format!(
                        "attempt:completed job={job_id} n={number} status={status} records={records}"
                    ),
                    None => format!("attempt:completed job={job_id} n={number} status={status}"),
                }
            }
            Event::InvariantViolated { job_id, detail } => {
                format!("invariant:violated job={job_id} {detail}")
            }
        }
    }

    /// The job this event belongs to.
    pub fn job_id(&self) -> &JobId {
        match self {
            Event::JobCreated { id, .. } | Event::JobStatusChanged { id, .. } => id,
            Event::AttemptCreated { job_id, .. }
            | Event::AttemptCompleted { job_id, .. }
            | Event::InvariantViolated { job_id, .. } => job_id,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
