//! Constraint and persisted-data tests for the `PostgreSQL` job store.

use super::helpers::{BoxError, PreparedRepo, new_job, prepared_repo};
use jobtrack::job::{
    domain::{JobQuery, JobStatus},
    ports::{JobRepository, JobRepositoryError},
};
use rstest::rstest;

#[rstest]
fn unknown_status_is_rejected_by_the_store(
    prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let db = prepared_repo?;
    db.run(async {
        db.repo
            .insert(&new_job("Engineer", "Acme", JobStatus::Applied))
            .await?;
        Ok(())
    })?;

    let result = db.execute("UPDATE jobs SET status = 'HIRED'");

    assert!(result.is_err());
    Ok(())
}

#[rstest]
fn unreadable_rows_surface_as_invalid_persisted_data(
    prepared_repo: Result<PreparedRepo, BoxError>,
) -> Result<(), BoxError> {
    let db = prepared_repo?;
    let repo = &db.repo;
    let job = db.run(async {
        let inserted = repo
            .insert(&new_job("Engineer", "Acme", JobStatus::Applied))
            .await?;
        Ok(inserted)
    })?;
    db.execute(
        "ALTER TABLE jobs DROP CONSTRAINT jobs_status_known; \
         UPDATE jobs SET status = 'HIRED';",
    )?;

    db.run(async {
        let found = repo.find_by_id(job.id()).await;
        let listed = repo.list(&JobQuery::new()).await;

        assert!(matches!(found, Err(JobRepositoryError::InvalidPersistedData(_))));
        assert!(matches!(listed, Err(JobRepositoryError::InvalidPersistedData(_))));
        Ok(())
    })
}
