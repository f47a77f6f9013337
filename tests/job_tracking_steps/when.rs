//! When steps for job tracking BDD scenarios.

use super::world::{JobTrackingWorld, run_async};
use eyre::WrapErr;
use jobtrack::job::domain::{JobPatch, JobQuery, JobSort, JobStatus};
use rstest_bdd_macros::when;

#[when(r#"a job "{title}" at "{company}" is recorded"#)]
fn job_is_recorded(
    world: &mut JobTrackingWorld,
    title: String,
    company: String,
) -> Result<(), eyre::Report> {
    world.record(title, company).wrap_err("record job")
}

#[when(r#"the job status is changed to "{status}""#)]
fn job_status_changed(world: &mut JobTrackingWorld, status: String) -> Result<(), eyre::Report> {
    let target = JobStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let id = world.current_job()?.id();

    let updated = run_async(
        world
            .tracker
            .update(id, JobPatch::new().with_status(target)),
    )
    .wrap_err("update job status")?;
    world.last_job = Some(updated);
    Ok(())
}

#[when("the job is deleted")]
fn job_is_deleted(world: &mut JobTrackingWorld) -> Result<(), eyre::Report> {
    let id = world.current_job()?.id();
    run_async(world.tracker.delete(id)).wrap_err("delete job")
}

#[when(r#"jobs are listed for company "{company}""#)]
fn jobs_listed_for_company(
    world: &mut JobTrackingWorld,
    company: String,
) -> Result<(), eyre::Report> {
    let query = JobQuery::new()
        .with_company(company)
        .with_sort(JobSort::resolve("id"));
    world.listing = run_async(world.tracker.list(&query)).wrap_err("list jobs by company")?;
    Ok(())
}

#[when(r#"jobs are searched for "{text}""#)]
fn jobs_searched(world: &mut JobTrackingWorld, text: String) -> Result<(), eyre::Report> {
    let query = JobQuery::new().with_text(text).with_sort(JobSort::resolve("id"));
    world.listing = run_async(world.tracker.list(&query)).wrap_err("search jobs")?;
    Ok(())
}
