//! Then steps for job tracking BDD scenarios.

use super::world::{JobTrackingWorld, run_async};
use jobtrack::job::{domain::JobStatus, services::JobTrackerError};
use rstest_bdd_macros::then;

#[then(r#"the job status is "{status}""#)]
fn job_status_is(world: &JobTrackingWorld, status: String) -> Result<(), eyre::Report> {
    let expected = JobStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let job = world.current_job()?;

    if job.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            job.status()
        ));
    }
    Ok(())
}

#[then(r#"the job title is "{title}""#)]
fn job_title_is(world: &JobTrackingWorld, title: String) -> Result<(), eyre::Report> {
    let job = world.current_job()?;
    if job.title().as_str() != title {
        return Err(eyre::eyre!("expected title {title}, found {}", job.title()));
    }
    Ok(())
}

#[then("the job was modified after it was created")]
fn job_modified_after_creation(world: &JobTrackingWorld) -> Result<(), eyre::Report> {
    let job = world.current_job()?;
    if job.updated_at() <= job.created_at() {
        return Err(eyre::eyre!(
            "expected updated_at {} to be after created_at {}",
            job.updated_at(),
            job.created_at()
        ));
    }
    Ok(())
}

#[then("fetching the job returns the recorded job")]
fn fetching_returns_recorded_job(world: &JobTrackingWorld) -> Result<(), eyre::Report> {
    let job = world.current_job()?;
    let fetched = run_async(world.tracker.get(job.id()))?;
    if &fetched != job {
        return Err(eyre::eyre!("expected {job:?}, fetched {fetched:?}"));
    }
    Ok(())
}

#[then("fetching the job reports not found")]
fn fetching_reports_not_found(world: &JobTrackingWorld) -> Result<(), eyre::Report> {
    let id = world.current_job()?.id();
    match run_async(world.tracker.get(id)) {
        Err(JobTrackerError::NotFound(missing)) if missing == id => Ok(()),
        other => Err(eyre::eyre!("expected NotFound for {id}, got {other:?}")),
    }
}

#[then("the listing contains {count:usize} jobs")]
fn listing_contains(world: &JobTrackingWorld, count: usize) -> Result<(), eyre::Report> {
    if world.listing.len() != count {
        return Err(eyre::eyre!(
            "expected {count} jobs, found {}",
            world.listing.len()
        ));
    }
    Ok(())
}

#[then(r#"the listed companies are "{companies}""#)]
fn listed_companies_are(world: &JobTrackingWorld, companies: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = companies.split(", ").collect();
    let actual: Vec<&str> = world
        .listing
        .iter()
        .map(|job| job.company().as_str())
        .collect();
    if actual != expected {
        return Err(eyre::eyre!("expected companies {expected:?}, found {actual:?}"));
    }
    Ok(())
}
