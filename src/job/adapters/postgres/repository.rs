//! `PostgreSQL` repository implementation for job storage.

use super::{
    models::{JobChangeset, JobRow, NewJobRow},
    query::list_statement,
    schema::jobs,
};
use crate::job::{
    domain::{
        CompanyName, Job, JobId, JobNotes, JobQuery, JobStatus, JobTitle, NewJob,
        PersistedJobData,
    },
    ports::{JobRepository, JobRepositoryError, JobRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by job adapters.
pub type JobPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed job repository.
#[derive(Debug, Clone)]
pub struct PostgresJobRepository {
    pool: JobPgPool,
}

impl PostgresJobRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: JobPgPool) -> Self {
        Self { pool }
    }

    /// Checks a connection out for the duration of `f` on the blocking pool.
    /// The connection returns to the pool on every exit path.
    async fn run_blocking<F, T>(&self, f: F) -> JobRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> JobRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(JobRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(JobRepositoryError::persistence)?
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn insert(&self, job: &NewJob) -> JobRepositoryResult<Job> {
        let new_row = to_new_row(job);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(jobs::table)
                .values(&new_row)
                .returning(JobRow::as_returning())
                .get_result::<JobRow>(connection)
                .map_err(JobRepositoryError::persistence)?;
            row_to_job(row)
        })
        .await
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        self.run_blocking(move |connection| {
            let row = jobs::table
                .find(id.value())
                .select(JobRow::as_select())
                .first::<JobRow>(connection)
                .optional()
                .map_err(JobRepositoryError::persistence)?;
            row.map(row_to_job).transpose()
        })
        .await
    }

    async fn list(&self, query: &JobQuery) -> JobRepositoryResult<Vec<Job>> {
        let statement = list_statement(query);
        self.run_blocking(move |connection| {
            let rows = statement
                .load::<JobRow>(connection)
                .map_err(JobRepositoryError::persistence)?;
            rows.into_iter().map(row_to_job).collect()
        })
        .await
    }

    async fn update(&self, job: &Job) -> JobRepositoryResult<()> {
        let job_id = job.id();
        let changeset = to_changeset(job);
        self.run_blocking(move |connection| {
            let updated_count = diesel::update(jobs::table.find(job_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(JobRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(JobRepositoryError::NotFound(job_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: JobId) -> JobRepositoryResult<bool> {
        self.run_blocking(move |connection| {
            let deleted_count = diesel::delete(jobs::table.find(id.value()))
                .execute(connection)
                .map_err(JobRepositoryError::persistence)?;
            Ok(deleted_count > 0)
        })
        .await
    }
}

fn to_new_row(job: &NewJob) -> NewJobRow {
    NewJobRow {
        title: job.title().as_str().to_owned(),
        company: job.company().as_str().to_owned(),
        status: job.status().as_str().to_owned(),
        applied_on: job.applied_on(),
        notes: job.notes().map(|notes| notes.as_str().to_owned()),
        created_at: job.created_at(),
        updated_at: job.created_at(),
    }
}

fn to_changeset(job: &Job) -> JobChangeset {
    JobChangeset {
        title: job.title().as_str().to_owned(),
        company: job.company().as_str().to_owned(),
        status: job.status().as_str().to_owned(),
        applied_on: job.applied_on(),
        notes: job.notes().map(|notes| notes.as_str().to_owned()),
        updated_at: job.updated_at(),
    }
}

/// Rebuilds a job from a row, re-validating every constrained column.
fn row_to_job(row: JobRow) -> JobRepositoryResult<Job> {
    let JobRow {
        id,
        title,
        company,
        status,
        applied_on,
        notes,
        created_at,
        updated_at,
    } = row;

    let parsed_status =
        JobStatus::try_from(status.as_str()).map_err(JobRepositoryError::invalid_persisted_data)?;
    let parsed_title = JobTitle::new(title).map_err(JobRepositoryError::invalid_persisted_data)?;
    let parsed_company =
        CompanyName::new(company).map_err(JobRepositoryError::invalid_persisted_data)?;
    let parsed_notes = notes
        .map(JobNotes::new)
        .transpose()
        .map_err(JobRepositoryError::invalid_persisted_data)?;

    Ok(Job::from_persisted(PersistedJobData {
        id: JobId::from_persisted(id),
        title: parsed_title,
        company: parsed_company,
        status: parsed_status,
        applied_on,
        notes: parsed_notes,
        created_at,
        updated_at,
    }))
}
