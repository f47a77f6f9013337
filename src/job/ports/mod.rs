//! Port contracts for job tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by job services.

pub mod repository;

pub use repository::{JobRepository, JobRepositoryError, JobRepositoryResult};
