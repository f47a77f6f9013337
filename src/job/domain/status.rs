//! Application status of a tracked job.

use super::ParseJobStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// The application has been sent.
    #[default]
    Applied,
    /// The employer has started interviewing.
    Interview,
    /// An offer has been made.
    Offer,
    /// The application was turned down.
    Rejected,
}

impl JobStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Applied, Self::Interview, Self::Offer, Self::Rejected];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "APPLIED",
            Self::Interview => "INTERVIEW",
            Self::Offer => "OFFER",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ParseJobStatusError;

    /// Parses the canonical representation only; other spellings are errors.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == value)
            .ok_or_else(|| ParseJobStatusError(value.to_owned()))
    }
}

impl FromStr for JobStatus {
    type Err = ParseJobStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
