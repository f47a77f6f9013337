//! Validated field values of a job record.
//!
//! Text fields are limited by character count, not bytes, and never contain
//! NUL, which `PostgreSQL` text columns reject.

use super::JobDomainError;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

fn reject_nul(field: &'static str, raw: &str) -> Result<(), JobDomainError> {
    if raw.contains('\0') {
        return Err(JobDomainError::ContainsNul { field });
    }
    Ok(())
}

/// Job title, 1 to 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobTitle(String);

impl JobTitle {
    /// Maximum title length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Creates a validated title.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidTitleLength`] when the value is empty
    /// or longer than [`Self::MAX_CHARS`] characters, and
    /// [`JobDomainError::ContainsNul`] when it contains `'\0'`.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let raw = value.into();
        let actual = raw.chars().count();
        if actual == 0 || actual > Self::MAX_CHARS {
            return Err(JobDomainError::InvalidTitleLength {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        reject_nul("title", &raw)?;
        Ok(Self(raw))
    }

    /// Returns the title as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for JobTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Company name, 1 to 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyName(String);

impl CompanyName {
    /// Maximum company name length in characters.
    pub const MAX_CHARS: usize = 200;

    /// Creates a validated company name.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidCompanyLength`] when the value is
    /// empty or longer than [`Self::MAX_CHARS`] characters, and
    /// [`JobDomainError::ContainsNul`] when it contains `'\0'`.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let raw = value.into();
        let actual = raw.chars().count();
        if actual == 0 || actual > Self::MAX_CHARS {
            return Err(JobDomainError::InvalidCompanyLength {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        reject_nul("company", &raw)?;
        Ok(Self(raw))
    }

    /// Returns the company name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CompanyName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CompanyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-form notes attached to a job, at most 2000 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct JobNotes(String);

impl JobNotes {
    /// Maximum notes length in characters.
    pub const MAX_CHARS: usize = 2000;

    /// Creates validated notes. Empty notes are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::NotesTooLong`] when the value is longer than
    /// [`Self::MAX_CHARS`] characters, and [`JobDomainError::ContainsNul`]
    /// when it contains `'\0'`.
    pub fn new(value: impl Into<String>) -> Result<Self, JobDomainError> {
        let raw = value.into();
        let actual = raw.chars().count();
        if actual > Self::MAX_CHARS {
            return Err(JobDomainError::NotesTooLong {
                max: Self::MAX_CHARS,
                actual,
            });
        }
        reject_nul("notes", &raw)?;
        Ok(Self(raw))
    }

    /// Returns the notes as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for JobNotes {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Date the application was sent, with a four-digit year.
///
/// Both the store and the ISO 8601 wire format handle every date in this
/// range; chrono accepts far wider years than either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppliedOn(NaiveDate);

impl AppliedOn {
    /// Earliest accepted year.
    pub const MIN_YEAR: i32 = 1;
    /// Latest accepted year.
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a checked application date.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::AppliedOnOutOfRange`] when the year is not
    /// between [`Self::MIN_YEAR`] and [`Self::MAX_YEAR`].
    pub fn new(date: NaiveDate) -> Result<Self, JobDomainError> {
        if (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            Ok(Self(date))
        } else {
            Err(JobDomainError::AppliedOnOutOfRange {
                min_year: Self::MIN_YEAR,
                max_year: Self::MAX_YEAR,
                date,
            })
        }
    }

    /// Returns the calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for AppliedOn {
    type Error = JobDomainError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}
