//! Route table.

use super::handlers::{jobs, probes};
use super::state::AppState;
use crate::job::{ports::JobRepository, services::JobTracker};
use axum::{Router, routing::get};
use mockable::Clock;

/// Builds the application router around `tracker`.
#[must_use]
pub fn build_routes<R, C>(tracker: JobTracker<R, C>) -> Router
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/jobs", get(jobs::list::<R, C>).post(jobs::create::<R, C>))
        .route(
            "/jobs/{id}",
            get(jobs::get::<R, C>)
                .put(jobs::update::<R, C>)
                .delete(jobs::delete::<R, C>),
        )
        .route("/health", get(probes::health))
        .with_state(AppState::new(tracker))
}
