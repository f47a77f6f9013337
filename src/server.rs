//! Process bootstrap: connection pool, schema migrations and the HTTP
//! serve loop.

use crate::config::Settings;
use crate::http::router;
use crate::job::{
    adapters::postgres::{JobPgPool, PostgresJobRepository},
    services::JobTracker,
};
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use mockable::DefaultClock;
use std::sync::Arc;
use thiserror::Error;

/// SQL migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Boxed error type produced by the migration harness.
type MigrationError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that stop the service from starting or keep it from serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Settings could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
    /// The connection pool could not be built or a connection checked out.
    #[error("database pool error: {0}")]
    Pool(#[from] PoolError),
    /// A schema migration failed.
    #[error("migration failed: {0}")]
    Migration(#[source] MigrationError),
    /// A blocking bootstrap task panicked or was cancelled.
    #[error("bootstrap task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// Binding or serving the listener failed.
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the `PostgreSQL` connection pool described by `settings`.
///
/// Connections are opened lazily, so this succeeds even while the database
/// is unreachable.
///
/// # Errors
///
/// Returns [`ServerError::Pool`] when the pool configuration is rejected.
pub fn build_pool(settings: &Settings) -> Result<JobPgPool, ServerError> {
    let manager = ConnectionManager::<PgConnection>::new(&settings.database_url);
    let pool = Pool::builder()
        .max_size(settings.database_pool_max_connections)
        .min_idle(Some(0))
        .build(manager)?;
    Ok(pool)
}

/// Applies every pending migration and returns how many ran.
///
/// # Errors
///
/// Returns [`ServerError`] when no connection can be checked out or a
/// migration fails.
pub async fn run_migrations(pool: &JobPgPool) -> Result<usize, ServerError> {
    let migration_pool = pool.clone();
    tokio::task::spawn_blocking(move || -> Result<usize, ServerError> {
        let mut connection = migration_pool.get()?;
        let applied = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(ServerError::Migration)?;
        for version in &applied {
            tracing::info!(%version, "applied migration");
        }
        Ok(applied.len())
    })
    .await?
}

/// Applies pending migrations and exits.
///
/// # Errors
///
/// Returns [`ServerError`] when the pool cannot be built or a migration
/// fails.
pub async fn migrate(settings: &Settings) -> Result<(), ServerError> {
    let pool = build_pool(settings)?;
    let applied = run_migrations(&pool).await?;
    tracing::info!(applied, "migrations up to date");
    Ok(())
}

/// Migrates the schema, then serves the HTTP API until ctrl-c.
///
/// # Errors
///
/// Returns [`ServerError`] when bootstrap fails or the listener cannot be
/// bound.
pub async fn listen(settings: &Settings) -> Result<(), ServerError> {
    let pool = build_pool(settings)?;
    run_migrations(&pool).await?;

    let tracker = JobTracker::new(
        Arc::new(PostgresJobRepository::new(pool)),
        Arc::new(DefaultClock),
    );
    let app = router::build_routes(tracker);

    let listener = tokio::net::TcpListener::bind(&settings.listen_addr).await?;
    tracing::info!(addr = %settings.listen_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received ctrl+c, shutting down"),
        Err(err) => tracing::warn!(error = %err, "ctrl+c handler unavailable"),
    }
}
