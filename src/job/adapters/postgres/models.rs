//! Diesel row models for job persistence.

use super::schema::jobs;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for job records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct JobRow {
    /// Store-assigned identifier.
    pub id: i64,
    /// Job title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Status as stored text.
    pub status: String,
    /// Application date.
    pub applied_on: Option<NaiveDate>,
    /// Notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for job records. The identifier comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub struct NewJobRow {
    /// Job title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Status as stored text.
    pub status: String,
    /// Application date.
    pub applied_on: Option<NaiveDate>,
    /// Notes.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Changeset carrying every mutable column of a job.
///
/// `None` writes `NULL` so cleared optional fields reach the store.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = jobs)]
#[diesel(treat_none_as_null = true)]
pub struct JobChangeset {
    /// Job title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Status as stored text.
    pub status: String,
    /// Application date.
    pub applied_on: Option<NaiveDate>,
    /// Notes.
    pub notes: Option<String>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
