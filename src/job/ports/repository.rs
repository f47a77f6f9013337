//! Repository port for job persistence and listing.

use crate::job::domain::{Job, JobId, JobQuery, NewJob};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job repository operations.
pub type JobRepositoryResult<T> = Result<T, JobRepositoryError>;

/// Job persistence contract.
///
/// Every method is one attempt against the store; implementations never
/// retry.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Stores a new job and returns it with its store-assigned identifier.
    async fn insert(&self, job: &NewJob) -> JobRepositoryResult<Job>;

    /// Finds a job by identifier.
    ///
    /// Returns `None` when the job does not exist.
    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>>;

    /// Returns the page of jobs selected by `query`, in its order.
    async fn list(&self, query: &JobQuery) -> JobRepositoryResult<Vec<Job>>;

    /// Persists the mutable fields and `updated_at` of an existing job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when the job does not exist.
    async fn update(&self, job: &Job) -> JobRepositoryResult<()>;

    /// Removes a job permanently.
    ///
    /// Returns `false` when no job had the identifier.
    async fn delete(&self, id: JobId) -> JobRepositoryResult<bool>;
}

/// Errors returned by job repository implementations.
#[derive(Debug, Clone, Error)]
pub enum JobRepositoryError {
    /// The job was not found.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobRepositoryError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
