// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier, configuration, and the job aggregate.

use crate::attempt::Attempt;
use crate::error::{InvariantViolation, TransitionError};
use crate::status::{AttemptStatus, JobStatus};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a tracked job.
    ///
    /// Stable for the job's lifetime; attempts reference it and never
    /// outlive it.
    pub struct JobId("job-");
}

/// Kind of work a job executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    /// Move records from source to destination
    Sync,
    /// Clear destination data for the connection
    Reset,
    /// Re-read source schema and reconcile
    Refresh,
}

crate::simple_display! {
    ConfigType {
        Sync => "sync",
        Reset => "reset",
        Refresh => "refresh",
    }
}

/// Configuration for creating a new job.
///
/// `config` is an opaque payload describing what to execute; this crate
/// never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobConfig {
    pub config_type: ConfigType,
    /// Logical resource the job acts on (e.g. a connection identifier)
    pub scope: String,
    pub config: serde_json::Value,
}

impl JobConfig {
    pub fn new(
        config_type: ConfigType,
        scope: impl Into<String>,
        config: serde_json::Value,
    ) -> Self {
        Self { config_type, scope: scope.into(), config }
    }
}

/// A tracked unit of scheduled work and its attempt ledger.
///
/// The job owns its attempts exclusively and is the single authority for
/// lifecycle queries and for validating its own status transitions. It
/// never initiates transitions itself; the orchestration layer requests
/// them, validates first, and applies second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub config_type: ConfigType,
    pub scope: String,
    pub config: serde_json::Value,
    pub status: JobStatus,
    /// Attempts in creation order
    #[serde(default)]
    pub attempts: Vec<Attempt>,
    /// Set once the first attempt begins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at_secs: Option<u64>,
    pub created_at_secs: u64,
    pub updated_at_secs: u64,
}

impl Job {
    /// Create a new pending job.
    pub fn new(id: JobId, config: JobConfig, created_at_secs: u64) -> Self {
        Self {
            id,
            config_type: config.config_type,
            scope: config.scope,
            config: config.config,
            status: JobStatus::Pending,
            attempts: Vec::new(),
            started_at_secs: None,
            created_at_secs,
            updated_at_secs: created_at_secs,
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.len()
    }

    /// First attempt with the given number, or `None`.
    pub fn attempt_by_number(&self, number: u32) -> Option<&Attempt> {
        self.attempts.iter().find(|a| a.number == number)
    }

    /// Mutable access to an attempt by number, for the completing layer.
    pub fn attempt_by_number_mut(&mut self, number: u32) -> Option<&mut Attempt> {
        self.attempts.iter_mut().find(|a| a.number == number)
    }

    /// The unique successful attempt.
    ///
    /// Returns `Ok(None)` when no attempt has succeeded. More than one
    /// successful attempt means attempt completion elsewhere failed to hold
    /// the at-most-one-success invariant; that is corrupted state and is
    /// escalated as an [`InvariantViolation`] rather than resolved silently.
    pub fn successful_attempt(&self) -> Result<Option<&Attempt>, InvariantViolation> {
        let mut succeeded =
            self.attempts.iter().filter(|a| a.status == AttemptStatus::Succeeded);
        let first = succeeded.next();
        let extra = succeeded.count();
        if extra > 0 {
            return Err(InvariantViolation::MultipleSuccessfulAttempts {
                job_id: self.id.clone(),
                count: extra + 1,
            });
        }
        Ok(first)
    }

    /// Output recorded by the successful attempt, if any.
    pub fn success_output(&self) -> Result<Option<&serde_json::Value>, InvariantViolation> {
        Ok(self.successful_attempt()?.and_then(Attempt::success_output))
    }

    /// Most recently created failed attempt.
    ///
    /// Ties on `created_at_secs` resolve to the highest attempt number.
    pub fn last_failed_attempt(&self) -> Option<&Attempt> {
        self.attempts
            .iter()
            .filter(|a| a.status == AttemptStatus::Failed)
            .max_by_key(|a| (a.created_at_secs, a.number))
    }

    /// Most recently created attempt regardless of status.
    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.attempts.iter().max_by_key(|a| (a.created_at_secs, a.number))
    }

    /// True if any attempt has not concluded.
    pub fn has_running_attempt(&self) -> bool {
        self.attempts.iter().any(|a| !a.is_terminal())
    }

    /// Check if the job is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Total records durably written across all attempts.
    pub fn total_records_committed(&self) -> u64 {
        self.attempts.iter().filter_map(|a| a.records_committed).sum()
    }

    /// When the most recently concluded attempt ended, if any have.
    pub fn ended_at_secs(&self) -> Option<u64> {
        self.attempts.iter().filter_map(|a| a.ended_at_secs).max()
    }

    /// Check whether transitioning to `next` is legal, without mutating.
    ///
    /// Validation and mutation stay separate steps so callers can validate
    /// inside a transaction before committing the new status.
    pub fn validate_status_transition(&self, next: JobStatus) -> Result<(), TransitionError> {
        if self.status.can_transition_to(next) {
            Ok(())
        } else {
            Err(TransitionError {
                job_id: self.id.clone(),
                from: self.status,
                to: next,
                allowed: self.status.allowed_transitions(),
            })
        }
    }

    /// Apply a new status. Callers validate first via
    /// [`Job::validate_status_transition`].
    pub fn apply_status(&mut self, next: JobStatus, updated_at_secs: u64) {
        self.status = next;
        self.updated_at_secs = updated_at_secs;
    }

    /// Append the next attempt (numbered sequentially from 0) as `Running`
    /// and return a copy of it.
    ///
    /// The first attempt also marks the job as started.
    pub fn new_attempt(&mut self, created_at_secs: u64) -> Attempt {
        let number = self.attempts.len() as u32;
        if self.started_at_secs.is_none() {
            self.started_at_secs = Some(created_at_secs);
        }
        let attempt = Attempt::new(number, self.id.clone(), created_at_secs);
        self.attempts.push(attempt.clone());
        self.updated_at_secs = created_at_secs;
        attempt
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: JobId = "job-test",
            scope: String = "connection-1",
        }
        set {
            config_type: ConfigType = ConfigType::Sync,
            config: serde_json::Value = serde_json::Value::Null,
            status: JobStatus = JobStatus::Pending,
            attempts: Vec<Attempt> = Vec::new(),
            created_at_secs: u64 = 1_000_000,
            updated_at_secs: u64 = 1_000_000,
        }
        option {
            started_at_secs: u64 = None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
