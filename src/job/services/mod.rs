//! Application services for job tracking.

mod tracker;

pub use tracker::{JobTracker, JobTrackerError, JobTrackerResult};
