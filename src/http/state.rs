//! Shared router state.

use crate::job::{ports::JobRepository, services::JobTracker};
use mockable::Clock;

/// State handed to every handler: the service, nothing else.
pub struct AppState<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    tracker: JobTracker<R, C>,
}

impl<R, C> Clone for AppState<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            tracker: self.tracker.clone(),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a job tracker for use as router state.
    #[must_use]
    pub const fn new(tracker: JobTracker<R, C>) -> Self {
        Self { tracker }
    }

    /// Returns the job tracker.
    #[must_use]
    pub const fn tracker(&self) -> &JobTracker<R, C> {
        &self.tracker
    }
}
