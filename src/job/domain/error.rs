//! Error types for job domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing domain job values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The job title is empty or exceeds the 200-character limit.
    #[error("title must be between 1 and {max} characters, got {actual}")]
    InvalidTitleLength {
        /// Upper bound in characters.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// The company name is empty or exceeds the 200-character limit.
    #[error("company must be between 1 and {max} characters, got {actual}")]
    InvalidCompanyLength {
        /// Upper bound in characters.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// The notes exceed the 2000-character limit.
    #[error("notes must be at most {max} characters, got {actual}")]
    NotesTooLong {
        /// Upper bound in characters.
        max: usize,
        /// Character count of the rejected value.
        actual: usize,
    },

    /// A text field contains a NUL character, which the store cannot hold.
    #[error("{field} must not contain NUL characters")]
    ContainsNul {
        /// Name of the rejected field.
        field: &'static str,
    },

    /// The application date falls outside years 1 to 9999.
    #[error("applied_on must be between years {min_year} and {max_year}, got {date}")]
    AppliedOnOutOfRange {
        /// Earliest accepted year.
        min_year: i32,
        /// Latest accepted year.
        max_year: i32,
        /// The rejected date.
        date: NaiveDate,
    },

    /// The job identifier is not a positive integer.
    #[error("invalid job id {0}, expected a positive integer")]
    InvalidJobId(i64),
}

/// Error returned while parsing a job status from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);

/// Error returned when a sort expression names an unsupported field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unsupported sort '{0}', expected one of id, applied_on, company, title with an optional leading '-'")]
pub struct ParseJobSortError(pub String);
