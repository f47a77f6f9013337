//! Query composition for listing jobs.
//!
//! A [`JobQuery`] bundles the filter predicates, the ordering and the page
//! window of one list request. It is pure data: adapters decide how to
//! execute it, and [`JobFilter::matches`] / [`JobSort::compare`] give the
//! reference semantics for adapters that evaluate it in process.

use super::{Job, JobStatus, ParseJobSortError};
use std::cmp::Ordering;
use std::str::FromStr;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_LIMIT: u32 = 20;
/// Smallest page size a query can resolve to.
pub const MIN_LIMIT: u32 = 1;
/// Largest page size a query can resolve to.
pub const MAX_LIMIT: u32 = 100;

/// Column a job listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Store-assigned identifier.
    #[default]
    Id,
    /// Application date.
    AppliedOn,
    /// Company name.
    Company,
    /// Job title.
    Title,
}

impl SortField {
    /// Returns the field name used in sort expressions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::AppliedOn => "applied_on",
            Self::Company => "company",
            Self::Title => "title",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "id" => Some(Self::Id),
            "applied_on" => Some(Self::AppliedOn),
            "company" => Some(Self::Company),
            "title" => Some(Self::Title),
            _ => None,
        }
    }
}

/// Ordering direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// Resolved ordering of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobSort {
    field: SortField,
    direction: SortDirection,
}

impl JobSort {
    /// Creates an ordering on `field` in `direction`.
    #[must_use]
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Resolves a sort expression, falling back to `id` for unknown fields.
    ///
    /// A leading `-` selects descending order and is honoured even when the
    /// field falls back.
    #[must_use]
    pub fn resolve(expression: &str) -> Self {
        let (name, direction) = split_direction(expression);
        Self::new(
            SortField::from_name(name).unwrap_or_default(),
            direction,
        )
    }

    /// Returns the sort field.
    #[must_use]
    pub const fn field(self) -> SortField {
        self.field
    }

    /// Returns the sort direction.
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        self.direction
    }

    /// Orders two jobs the way the `PostgreSQL` adapter does.
    ///
    /// Missing application dates sort after present ones in ascending order
    /// and before them in descending order. Company and title compare by
    /// code point, which the `PostgreSQL` adapter matches with
    /// `COLLATE "C"`. Ties on non-unique fields are broken by ascending id.
    #[must_use]
    pub fn compare(self, left: &Job, right: &Job) -> Ordering {
        let primary = match self.field {
            SortField::Id => left.id().cmp(&right.id()),
            SortField::AppliedOn => compare_nulls_last(left.applied_on(), right.applied_on()),
            SortField::Company => left.company().as_str().cmp(right.company().as_str()),
            SortField::Title => left.title().as_str().cmp(right.title().as_str()),
        };
        let directed = match self.direction {
            SortDirection::Ascending => primary,
            SortDirection::Descending => primary.reverse(),
        };
        directed.then_with(|| left.id().cmp(&right.id()))
    }
}

impl Default for JobSort {
    /// Newest records first.
    fn default() -> Self {
        Self::new(SortField::Id, SortDirection::Descending)
    }
}

impl FromStr for JobSort {
    type Err = ParseJobSortError;

    /// Parses a sort expression strictly, rejecting unknown fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, direction) = split_direction(s);
        SortField::from_name(name)
            .map(|field| Self::new(field, direction))
            .ok_or_else(|| ParseJobSortError(s.to_owned()))
    }
}

fn split_direction(expression: &str) -> (&str, SortDirection) {
    expression.strip_prefix('-').map_or(
        (expression, SortDirection::Ascending),
        |name| (name, SortDirection::Descending),
    )
}

fn compare_nulls_last<T: Ord>(left: Option<T>, right: Option<T>) -> Ordering {
    match (left, right) {
        (Some(l), Some(r)) => l.cmp(&r),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Predicates restricting which jobs a listing returns.
///
/// All supplied predicates apply conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    status: Option<JobStatus>,
    company: Option<String>,
    text: Option<String>,
}

impl JobFilter {
    /// Returns the exact status to match, if any.
    #[must_use]
    pub const fn status(&self) -> Option<JobStatus> {
        self.status
    }

    /// Returns the case-insensitive company substring, if any.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Returns the case-insensitive free-text needle matched against title,
    /// company and notes, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns `true` when `job` satisfies every supplied predicate.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let status_ok = self.status.is_none_or(|status| job.status() == status);
        let company_ok = self
            .company
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(job.company().as_str(), needle));
        let text_ok = self.text.as_deref().is_none_or(|needle| {
            contains_ignore_case(job.title().as_str(), needle)
                || contains_ignore_case(job.company().as_str(), needle)
                || job
                    .notes()
                    .is_some_and(|notes| contains_ignore_case(notes.as_str(), needle))
        });
        status_ok && company_ok && text_ok
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Fully resolved listing request: filter, ordering and page window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    filter: JobFilter,
    sort: JobSort,
    limit: u32,
    offset: u64,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            filter: JobFilter::default(),
            sort: JobSort::default(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl JobQuery {
    /// Creates an unfiltered query with the default page and ordering.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one status.
    #[must_use]
    pub const fn with_status(mut self, status: JobStatus) -> Self {
        self.filter.status = Some(status);
        self
    }

    /// Restricts results to companies containing `needle`, ignoring case.
    /// An empty needle removes the restriction.
    #[must_use]
    pub fn with_company(mut self, needle: impl Into<String>) -> Self {
        self.filter.company = non_empty(needle.into());
        self
    }

    /// Restricts results to jobs whose title, company or notes contain
    /// `needle`, ignoring case. An empty needle removes the restriction.
    #[must_use]
    pub fn with_text(mut self, needle: impl Into<String>) -> Self {
        self.filter.text = non_empty(needle.into());
        self
    }

    /// Sets the ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: JobSort) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the page size, clamped to `MIN_LIMIT..=MAX_LIMIT`.
    #[must_use]
    pub fn with_limit(mut self, requested: i64) -> Self {
        let clamped = requested.clamp(i64::from(MIN_LIMIT), i64::from(MAX_LIMIT));
        self.limit = u32::try_from(clamped).unwrap_or(MAX_LIMIT);
        self
    }

    /// Sets how many matching records to skip. Offsets past the end yield an
    /// empty page.
    #[must_use]
    pub const fn with_offset(mut self, offset: u64) -> Self {
        self.offset = offset;
        self
    }

    /// Returns the filter predicates.
    #[must_use]
    pub const fn filter(&self) -> &JobFilter {
        &self.filter
    }

    /// Returns the ordering.
    #[must_use]
    pub const fn sort(&self) -> JobSort {
        self.sort
    }

    /// Returns the resolved page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the number of records to skip.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
