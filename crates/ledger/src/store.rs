// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository contract for jobs and the in-memory implementation.

use parking_lot::RwLock;
use rl_core::{Job, JobId};
use std::collections::HashMap;
use thiserror::Error;

/// Errors from job store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("job {0} already exists")]
    Duplicate(JobId),
    #[error("job {0} not found")]
    Missing(JobId),
    #[error("storage backend: {0}")]
    Backend(String),
}

/// Repository of jobs with their full attempt ledgers.
///
/// Implementations must serialize concurrent writers to the same job
/// (unique attempt numbers, single-writer status updates); the ledger
/// performs no cross-call locking of its own.
pub trait JobStore: Send + Sync {
    /// Persist a new job. Fails if the id is already present.
    fn insert(&self, job: Job) -> Result<(), StoreError>;

    /// Persist updates to an existing job.
    fn update(&self, job: &Job) -> Result<(), StoreError>;

    /// Load a job with its full attempt list.
    fn load(&self, id: &JobId) -> Result<Option<Job>, StoreError>;
}

/// In-memory job store for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryJobStore {
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored jobs.
    pub fn len(&self) -> usize {
        self.jobs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.read().is_empty()
    }
}

impl JobStore for MemoryJobStore {
    fn insert(&self, job: Job) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write();
        if jobs.contains_key(&job.id) {
            return Err(StoreError::Duplicate(job.id.clone()));
        }
        jobs.insert(job.id.clone(), job);
        Ok(())
    }

    fn update(&self, job: &Job) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write();
        match jobs.get_mut(&job.id) {
            Some(slot) => {
                *slot = job.clone();
                Ok(())
            }
            None => Err(StoreError::Missing(job.id.clone())),
        }
    }

    fn load(&self, id: &JobId) -> Result<Option<Job>, StoreError> {
        Ok(self.jobs.read().get(id).cloned())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
