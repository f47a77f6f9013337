//! Shared test helpers for in-memory job tracker integration tests.

use jobtrack::job::{
    adapters::memory::InMemoryJobRepository,
    domain::{CompanyName, Job, JobDraft, JobStatus, JobTitle},
    services::JobTracker,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Service type under test.
pub type TestTracker = JobTracker<InMemoryJobRepository, DefaultClock>;

/// Provides a tracker over a fresh in-memory repository.
#[fixture]
pub fn tracker() -> TestTracker {
    JobTracker::new(Arc::new(InMemoryJobRepository::new()), Arc::new(DefaultClock))
}

/// Builds a draft with the given title, company and status.
///
/// # Panics
///
/// Panics when the title or company is invalid.
pub fn draft(title: &str, company: &str, status: JobStatus) -> JobDraft {
    JobDraft::new(
        JobTitle::new(title).expect("valid title"),
        CompanyName::new(company).expect("valid company"),
    )
    .with_status(status)
}

/// Stores the four-company fixture set used by the listing tests.
///
/// Jobs are created in order: Acme (APPLIED), Acme Labs (INTERVIEW),
/// Globex (APPLIED), Initech (REJECTED).
///
/// # Panics
///
/// Panics when a create fails.
pub async fn seed_companies(tracker: &TestTracker) -> Vec<Job> {
    let drafts = [
        draft("Backend Engineer", "Acme", JobStatus::Applied),
        draft("Data Engineer", "Acme Labs", JobStatus::Interview),
        draft("Site Reliability Engineer", "Globex", JobStatus::Applied),
        draft("Frontend Engineer", "Initech", JobStatus::Rejected),
    ];
    let mut created = Vec::with_capacity(drafts.len());
    for next in drafts {
        created.push(tracker.create(next).await.expect("create should succeed"));
    }
    created
}

/// Returns the company names of `jobs`, in order.
pub fn companies(jobs: &[Job]) -> Vec<&str> {
    jobs.iter().map(|job| job.company().as_str()).collect()
}
