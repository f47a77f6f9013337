//! Domain model for job application tracking.
//!
//! The job domain holds the validated record fields, the aggregate with its
//! partial-update rules and the listing query model, keeping persistence and
//! transport concerns outside of the domain boundary.

mod error;
mod fields;
mod ids;
mod job;
pub mod query;
mod status;

pub use error::{JobDomainError, ParseJobSortError, ParseJobStatusError};
pub use fields::{AppliedOn, CompanyName, JobNotes, JobTitle};
pub use ids::JobId;
pub use job::{Job, JobDraft, JobPatch, NewJob, PersistedJobData};
pub use query::{JobFilter, JobQuery, JobSort, SortDirection, SortField};
pub use status::JobStatus;
