//! Shared world state for job tracking BDD scenarios.

use std::sync::Arc;

use jobtrack::job::{
    adapters::memory::InMemoryJobRepository,
    domain::{CompanyName, Job, JobDraft, JobTitle},
    services::JobTracker,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTracker = JobTracker<InMemoryJobRepository, DefaultClock>;

/// Scenario world for job tracking behaviour tests.
pub struct JobTrackingWorld {
    pub tracker: TestTracker,
    pub last_job: Option<Job>,
    pub listing: Vec<Job>,
}

impl JobTrackingWorld {
    /// Creates a world over an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tracker: JobTracker::new(
                Arc::new(InMemoryJobRepository::new()),
                Arc::new(DefaultClock),
            ),
            last_job: None,
            listing: Vec::new(),
        }
    }

    /// Returns the job most recently recorded or updated.
    ///
    /// # Errors
    ///
    /// Returns an error when no job has been recorded yet.
    pub fn current_job(&self) -> Result<&Job, eyre::Report> {
        self.last_job
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing recorded job in scenario world"))
    }

    /// Records a job with the given title and company.
    ///
    /// # Errors
    ///
    /// Returns an error when validation or the store fails.
    pub fn record(&mut self, title: String, company: String) -> Result<(), eyre::Report> {
        let draft = JobDraft::new(JobTitle::new(title)?, CompanyName::new(company)?);
        let created = run_async(self.tracker.create(draft))?;
        self.last_job = Some(created);
        Ok(())
    }
}

impl Default for JobTrackingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> JobTrackingWorld {
    JobTrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
