//! Job aggregate root and the write models that feed it.

use super::{AppliedOn, CompanyName, JobId, JobNotes, JobStatus, JobTitle};
use chrono::{DateTime, NaiveDate, SubsecRound, TimeDelta, Utc};
use mockable::Clock;
use serde::Serialize;

/// Number of fractional second digits the store keeps.
const TIMESTAMP_PRECISION: u16 = 6;

/// Validated field values for a job that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    title: JobTitle,
    company: CompanyName,
    status: JobStatus,
    applied_on: Option<NaiveDate>,
    notes: Option<JobNotes>,
}

impl JobDraft {
    /// Creates a draft with the required fields and status `APPLIED`.
    #[must_use]
    pub fn new(title: JobTitle, company: CompanyName) -> Self {
        Self {
            title,
            company,
            status: JobStatus::default(),
            applied_on: None,
            notes: None,
        }
    }

    /// Sets the initial status.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the application date.
    #[must_use]
    pub const fn with_applied_on(mut self, applied_on: AppliedOn) -> Self {
        self.applied_on = Some(applied_on.date());
        self
    }

    /// Sets the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: JobNotes) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// A draft stamped with its creation time, ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    draft: JobDraft,
    created_at: DateTime<Utc>,
}

impl NewJob {
    /// Stamps a draft with the current clock time.
    #[must_use]
    pub fn new(draft: JobDraft, clock: &impl Clock) -> Self {
        Self {
            draft,
            created_at: now(clock),
        }
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &JobTitle {
        &self.draft.title
    }

    /// Returns the company.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.draft.company
    }

    /// Returns the initial status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.draft.status
    }

    /// Returns the application date, if any.
    #[must_use]
    pub const fn applied_on(&self) -> Option<NaiveDate> {
        self.draft.applied_on
    }

    /// Returns the notes, if any.
    #[must_use]
    pub const fn notes(&self) -> Option<&JobNotes> {
        self.draft.notes.as_ref()
    }

    /// Returns the creation timestamp. New records start with
    /// `updated_at` equal to this value.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn into_job(self, id: JobId) -> Job {
        let Self { draft, created_at } = self;
        Job {
            id,
            title: draft.title,
            company: draft.company,
            status: draft.status,
            applied_on: draft.applied_on,
            notes: draft.notes,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Partial update with one optional slot per mutable field.
///
/// `applied_on` and `notes` are nullable, so their slots distinguish
/// "leave unchanged" (`None`) from "clear" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPatch {
    title: Option<JobTitle>,
    company: Option<CompanyName>,
    status: Option<JobStatus>,
    applied_on: Option<Option<NaiveDate>>,
    notes: Option<Option<JobNotes>>,
}

impl JobPatch {
    /// Creates a patch that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: JobTitle) -> Self {
        self.title = Some(title);
        self
    }

    /// Replaces the company.
    #[must_use]
    pub fn with_company(mut self, company: CompanyName) -> Self {
        self.company = Some(company);
        self
    }

    /// Replaces the status.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Replaces or clears the application date.
    #[must_use]
    pub fn with_applied_on(mut self, applied_on: Option<AppliedOn>) -> Self {
        self.applied_on = Some(applied_on.map(AppliedOn::date));
        self
    }

    /// Replaces or clears the notes.
    #[must_use]
    pub fn with_notes(mut self, notes: Option<JobNotes>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Returns `true` when no field is supplied.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.status.is_none()
            && self.applied_on.is_none()
            && self.notes.is_none()
    }
}

/// Job aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    id: JobId,
    title: JobTitle,
    company: CompanyName,
    status: JobStatus,
    applied_on: Option<NaiveDate>,
    notes: Option<JobNotes>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedJobData {
    /// Persisted identifier.
    pub id: JobId,
    /// Persisted title.
    pub title: JobTitle,
    /// Persisted company.
    pub company: CompanyName,
    /// Persisted status.
    pub status: JobStatus,
    /// Persisted application date.
    pub applied_on: Option<NaiveDate>,
    /// Persisted notes.
    pub notes: Option<JobNotes>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// Reconstructs a job from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedJobData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            company: data.company,
            status: data.status,
            applied_on: data.applied_on,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub const fn title(&self) -> &JobTitle {
        &self.title
    }

    /// Returns the company.
    #[must_use]
    pub const fn company(&self) -> &CompanyName {
        &self.company
    }

    /// Returns the status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the application date, if any.
    #[must_use]
    pub const fn applied_on(&self) -> Option<NaiveDate> {
        self.applied_on
    }

    /// Returns the notes, if any.
    #[must_use]
    pub const fn notes(&self) -> Option<&JobNotes> {
        self.notes.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies the supplied fields of `patch` and refreshes `updated_at`.
    ///
    /// Fields absent from the patch keep their current values. An empty
    /// patch still counts as a write.
    pub fn apply(&mut self, patch: JobPatch, clock: &impl Clock) {
        let JobPatch {
            title,
            company,
            status,
            applied_on,
            notes,
        } = patch;

        if let Some(new_title) = title {
            self.title = new_title;
        }
        if let Some(new_company) = company {
            self.company = new_company;
        }
        if let Some(new_status) = status {
            self.status = new_status;
        }
        if let Some(new_applied_on) = applied_on {
            self.applied_on = new_applied_on;
        }
        if let Some(new_notes) = notes {
            self.notes = new_notes;
        }
        self.touch(clock);
    }

    /// Moves `updated_at` strictly forward, even when the clock has not.
    fn touch(&mut self, clock: &impl Clock) {
        let candidate = now(clock);
        self.updated_at = if candidate > self.updated_at {
            candidate
        } else {
            self.updated_at + TimeDelta::microseconds(1)
        };
    }
}

/// Reads the clock at the store's timestamp resolution.
fn now(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(TIMESTAMP_PRECISION)
}
