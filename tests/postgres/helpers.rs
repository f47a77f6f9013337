//! Shared test helpers for `PostgreSQL` integration tests.

pub use super::cluster::{BoxError, PostgresCluster, postgres_cluster};
use super::cluster::TemporaryDatabase;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::MigrationHarness;
use jobtrack::job::{
    adapters::postgres::PostgresJobRepository,
    domain::{CompanyName, JobDraft, JobStatus, JobTitle, NewJob},
};
use jobtrack::server::MIGRATIONS;
use mockable::DefaultClock;
use rstest::fixture;
use std::future::Future;
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Template database holding the migrated schema.
pub const TEMPLATE_DB: &str = "jobtrack_test_template";

/// Builds the current-thread runtime tests drive the repository with.
///
/// # Errors
///
/// Returns an error when the runtime cannot be created.
pub fn test_runtime() -> Result<Runtime, BoxError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)
}

fn apply_migrations(url: &str) -> Result<(), BoxError> {
    let mut conn = PgConnection::establish(url)?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// Repository over a fresh database cloned from the migrated template.
pub struct PreparedRepo {
    /// Repository under test; dropped before the database so its pool closes.
    pub repo: PostgresJobRepository,
    /// Database backing `repo`.
    pub database: TemporaryDatabase,
    runtime: Runtime,
}

impl PreparedRepo {
    /// Runs an async test body to completion.
    ///
    /// # Errors
    ///
    /// Returns whatever error the body returns.
    pub fn run<T, F>(&self, body: F) -> Result<T, BoxError>
    where
        F: Future<Output = Result<T, BoxError>>,
    {
        self.runtime.block_on(body)
    }

    /// Runs raw SQL against the test database.
    ///
    /// # Errors
    ///
    /// Returns an error when the statement fails.
    pub fn execute(&self, sql: &str) -> Result<(), BoxError> {
        PgConnection::establish(&self.database.url())?.batch_execute(sql)?;
        Ok(())
    }
}

/// Provides an isolated, migrated database and a repository over it.
///
/// # Errors
///
/// Returns an error when the template or the test database cannot be set up.
#[fixture]
pub fn prepared_repo(postgres_cluster: PostgresCluster) -> Result<PreparedRepo, BoxError> {
    postgres_cluster.ensure_template_exists(TEMPLATE_DB, apply_migrations)?;
    let database = postgres_cluster
        .temporary_database_from_template(&format!("test_{}", Uuid::new_v4()), TEMPLATE_DB)?;
    let pool = Pool::builder()
        .max_size(2)
        .build(ConnectionManager::<PgConnection>::new(database.url()))?;
    Ok(PreparedRepo {
        repo: PostgresJobRepository::new(pool),
        database,
        runtime: test_runtime()?,
    })
}

/// Builds a stamped job ready for insertion.
///
/// # Panics
///
/// Panics when the title or company is invalid.
pub fn new_job(title: &str, company: &str, status: JobStatus) -> NewJob {
    let draft = JobDraft::new(
        JobTitle::new(title).expect("valid title"),
        CompanyName::new(company).expect("valid company"),
    )
    .with_status(status);
    NewJob::new(draft, &DefaultClock)
}
