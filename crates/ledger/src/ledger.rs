// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validate-then-apply lifecycle operations over a job store.

use crate::sink::EventSink;
use crate::store::{JobStore, StoreError};
use rl_core::{
    Attempt, AttemptStatus, Clock, Event, InvariantViolation, Job, JobConfig, JobId, JobStatus,
    TransitionError,
};
use thiserror::Error;

/// Errors from ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("job {job_id} has no attempt {number}")]
    AttemptNotFound { job_id: JobId, number: u32 },
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Terminal outcome data for concluding an attempt.
#[derive(Debug, Clone)]
pub struct AttemptOutcome {
    pub status: AttemptStatus,
    pub output: Option<serde_json::Value>,
    pub records_committed: Option<u64>,
}

impl AttemptOutcome {
    pub fn succeeded(output: Option<serde_json::Value>, records_committed: Option<u64>) -> Self {
        Self { status: AttemptStatus::Succeeded, output, records_committed }
    }

    pub fn failed() -> Self {
        Self { status: AttemptStatus::Failed, output: None, records_committed: None }
    }
}

/// Lifecycle bookkeeping service over a store, a clock, and an event sink.
///
/// The ledger validates every job status change against the transition
/// table before mutating, persists after each mutation, and emits one
/// event per lifecycle fact. It never decides *when* to transition; that
/// remains the orchestrator's call.
pub struct JobLedger<S, C, E> {
    store: S,
    clock: C,
    events: E,
}

impl<S: JobStore, C: Clock, E: EventSink> JobLedger<S, C, E> {
    pub fn new(store: S, clock: C, events: E) -> Self {
        Self { store, clock, events }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The event sink.
    pub fn sink(&self) -> &E {
        &self.events
    }

    /// Create a new pending job and persist it.
    pub fn create_job(&self, config: JobConfig) -> Result<Job, LedgerError> {
        let now = self.clock.epoch_secs();
        let job = Job::new(JobId::new(), config, now);
        self.store.insert(job.clone())?;
        tracing::info!(
            job_id = %job.id,
            config_type = %job.config_type,
            scope = %job.scope,
            "job created"
        );
        self.events.emit(&Event::JobCreated {
            id: job.id.clone(),
            config_type: job.config_type,
            scope: job.scope.clone(),
            created_at_secs: now,
        });
        Ok(job)
    }

    /// Start the next attempt for a job.
    ///
    /// Attempt numbers are assigned sequentially from 0; the first attempt
    /// marks the job as started.
    pub fn create_attempt(&self, id: &JobId) -> Result<Attempt, LedgerError> {
        let mut job = self.load_job(id)?;
        let attempt = job.new_attempt(self.clock.epoch_secs());
        self.store.update(&job)?;
        tracing::info!(job_id = %id, number = attempt.number, "attempt created");
        self.events.emit(&Event::AttemptCreated {
            job_id: id.clone(),
            number: attempt.number,
            created_at_secs: attempt.created_at_secs,
        });
        Ok(attempt)
    }

    /// Request a job status transition: validate, then apply and persist.
    ///
    /// A rejected transition returns the structured error and leaves the
    /// stored job untouched.
    pub fn request_status(&self, id: &JobId, next: JobStatus) -> Result<Job, LedgerError> {
        let mut job = self.load_job(id)?;
        let from = job.status;
        if let Err(err) = job.validate_status_transition(next) {
            tracing::warn!(
                job_id = %id,
                from = %from,
                to = %next,
                "illegal status transition rejected"
            );
            return Err(err.into());
        }
        job.apply_status(next, self.clock.epoch_secs());
        self.store.update(&job)?;
        tracing::info!(job_id = %id, from = %from, to = %next, "job status changed");
        self.events.emit(&Event::JobStatusChanged { id: id.clone(), from, to: next });
        Ok(job)
    }

    /// Conclude an attempt with its terminal status and outcome data.
    ///
    /// `ended_at_secs` comes from the ledger's clock. Attempt-level
    /// transitions are not validated (see [`AttemptStatus`]); the
    /// orchestrator completes each attempt once.
    pub fn complete_attempt(
        &self,
        id: &JobId,
        number: u32,
        outcome: AttemptOutcome,
    ) -> Result<Attempt, LedgerError> {
        let mut job = self.load_job(id)?;
        let ended_at = self.clock.epoch_secs();
        let attempt = match job.attempt_by_number_mut(number) {
            Some(attempt) => {
                attempt.complete(
                    outcome.status,
                    outcome.output,
                    outcome.records_committed,
                    ended_at,
                );
                attempt.clone()
            }
            None => {
                return Err(LedgerError::AttemptNotFound { job_id: id.clone(), number });
            }
        };
        job.updated_at_secs = ended_at;
        self.store.update(&job)?;
        tracing::info!(job_id = %id, number, status = %attempt.status, "attempt completed");
        self.events.emit(&Event::AttemptCompleted {
            job_id: id.clone(),
            number,
            status: attempt.status,
            records_committed: attempt.records_committed,
        });
        Ok(attempt)
    }

    /// Load a job with its full attempt ledger.
    pub fn job(&self, id: &JobId) -> Result<Option<Job>, LedgerError> {
        Ok(self.store.load(id)?)
    }

    /// Output of the job's successful attempt, if any.
    ///
    /// An invariant violation here means persisted state is corrupt; it is
    /// logged at error level, reported to the sink, and propagated.
    pub fn success_output(&self, id: &JobId) -> Result<Option<serde_json::Value>, LedgerError> {
        let job = self.load_job(id)?;
        match job.success_output() {
            Ok(output) => Ok(output.cloned()),
            Err(violation) => {
                tracing::error!(job_id = %id, error = %violation, "invariant violation");
                self.events.emit(&Event::InvariantViolated {
                    job_id: id.clone(),
                    detail: violation.to_string(),
                });
                Err(violation.into())
            }
        }
    }

    fn load_job(&self, id: &JobId) -> Result<Job, LedgerError> {
        self.store.load(id)?.ok_or_else(|| LedgerError::JobNotFound(id.clone()))
    }
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;
