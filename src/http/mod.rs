//! HTTP interface for the job tracker.
//!
//! Requests are validated here, before they reach
//! [`crate::job::services::JobTracker`], and service errors are translated
//! into status codes with `{"detail": ...}` bodies.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_routes;
pub use state::AppState;
