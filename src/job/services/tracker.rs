//! Service layer orchestrating job CRUD.

use crate::job::{
    domain::{Job, JobDraft, JobId, JobPatch, JobQuery, NewJob},
    ports::{JobRepository, JobRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for job operations.
#[derive(Debug, Error)]
pub enum JobTrackerError {
    /// No job has the requested identifier.
    #[error("job not found: {0}")]
    NotFound(JobId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(JobRepositoryError),
}

impl From<JobRepositoryError> for JobTrackerError {
    fn from(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for job service operations.
pub type JobTrackerResult<T> = Result<T, JobTrackerError>;

/// Job CRUD orchestration service.
///
/// Holds no state of its own between calls.
pub struct JobTracker<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> Clone for JobTracker<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, C> JobTracker<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new job tracker.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Stores a new job and returns it with its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackerError::Repository`] when the store rejects the
    /// insert.
    pub async fn create(&self, draft: JobDraft) -> JobTrackerResult<Job> {
        let new_job = NewJob::new(draft, &*self.clock);
        let job = self.repository.insert(&new_job).await?;
        tracing::info!(job_id = %job.id(), status = %job.status(), "job created");
        Ok(job)
    }

    /// Returns the page of jobs selected by `query`. An empty page is not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackerError::Repository`] when the lookup fails.
    pub async fn list(&self, query: &JobQuery) -> JobTrackerResult<Vec<Job>> {
        let jobs = self.repository.list(query).await?;
        tracing::debug!(
            returned = jobs.len(),
            limit = query.limit(),
            offset = query.offset(),
            "jobs listed"
        );
        Ok(jobs)
    }

    /// Returns the job with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackerError::NotFound`] when no job matches, or
    /// [`JobTrackerError::Repository`] when the lookup fails.
    pub async fn get(&self, id: JobId) -> JobTrackerResult<Job> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(JobTrackerError::NotFound(id))
    }

    /// Applies the fields present in `patch` and returns the updated job.
    ///
    /// Concurrent updates to the same job are not detected: the last write
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackerError::NotFound`] without side effects when no
    /// job matches, or [`JobTrackerError::Repository`] when persistence
    /// fails.
    pub async fn update(&self, id: JobId, patch: JobPatch) -> JobTrackerResult<Job> {
        let mut job = self.get(id).await?;
        job.apply(patch, &*self.clock);
        self.repository.update(&job).await?;
        tracing::info!(job_id = %id, status = %job.status(), "job updated");
        Ok(job)
    }

    /// Removes the job permanently.
    ///
    /// # Errors
    ///
    /// Returns [`JobTrackerError::NotFound`] when no job matches, or
    /// [`JobTrackerError::Repository`] when persistence fails.
    pub async fn delete(&self, id: JobId) -> JobTrackerResult<()> {
        if !self.repository.delete(id).await? {
            return Err(JobTrackerError::NotFound(id));
        }
        tracing::info!(job_id = %id, "job deleted");
        Ok(())
    }
}
