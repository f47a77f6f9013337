//! Identifier type for the job domain.

use super::JobDomainError;
use serde::Serialize;
use std::fmt;

/// Store-assigned identifier of a job record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct JobId(i64);

impl JobId {
    /// Creates a validated job identifier.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidJobId`] when the value is zero or
    /// negative. Store sequences start at one.
    pub const fn new(value: i64) -> Result<Self, JobDomainError> {
        if value <= 0 {
            return Err(JobDomainError::InvalidJobId(value));
        }
        Ok(Self(value))
    }

    /// Wraps a value read back from the store without validation.
    #[must_use]
    pub const fn from_persisted(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
