//! In-memory repository for job tracking tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::job::{
    domain::{Job, JobId, JobQuery, NewJob},
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// Thread-safe in-memory job repository.
///
/// Identifiers come from a counter that is never rewound, so deleted ids are
/// not reused for the lifetime of the repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<InMemoryJobState>>,
}

#[derive(Debug, Default)]
struct InMemoryJobState {
    jobs: BTreeMap<JobId, Job>,
    last_id: i64,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> JobRepositoryError {
    JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn insert(&self, job: &NewJob) -> JobRepositoryResult<Job> {
        let mut state = self.state.write().map_err(poisoned)?;
        let next_id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| poisoned("job id sequence exhausted"))?;
        state.last_id = next_id;

        let stored = job.clone().into_job(JobId::from_persisted(next_id));
        state.jobs.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.jobs.get(&id).cloned())
    }

    async fn list(&self, query: &JobQuery) -> JobRepositoryResult<Vec<Job>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut matching: Vec<&Job> = state
            .jobs
            .values()
            .filter(|job| query.filter().matches(job))
            .collect();
        let sort = query.sort();
        matching.sort_by(|left, right| sort.compare(left, right));

        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.limit()).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    async fn update(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let slot = state
            .jobs
            .get_mut(&job.id())
            .ok_or(JobRepositoryError::NotFound(job.id()))?;
        *slot = job.clone();
        Ok(())
    }

    async fn delete(&self, id: JobId) -> JobRepositoryResult<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.jobs.remove(&id).is_some())
    }
}
