//! Job resource handlers and their request shapes.

use crate::http::{error::ApiError, state::AppState};
use crate::job::{
    domain::{
        AppliedOn, CompanyName, Job, JobDomainError, JobDraft, JobId, JobNotes, JobPatch, JobQuery,
        JobSort, JobStatus, JobTitle,
        query::{MAX_LIMIT, MIN_LIMIT},
    },
    ports::JobRepository,
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Deserializer};

/// Body of `POST /jobs`.
#[derive(Debug, Deserialize)]
pub struct CreateJobInput {
    /// Job title.
    pub title: String,
    /// Company name.
    pub company: String,
    /// Initial status, `APPLIED` when omitted.
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Application date.
    #[serde(default)]
    pub applied_on: Option<NaiveDate>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl TryFrom<CreateJobInput> for JobDraft {
    type Error = JobDomainError;

    fn try_from(input: CreateJobInput) -> Result<Self, Self::Error> {
        let mut draft = Self::new(JobTitle::new(input.title)?, CompanyName::new(input.company)?);
        if let Some(status) = input.status {
            draft = draft.with_status(status);
        }
        if let Some(applied_on) = input.applied_on {
            draft = draft.with_applied_on(AppliedOn::new(applied_on)?);
        }
        if let Some(notes) = input.notes {
            draft = draft.with_notes(JobNotes::new(notes)?);
        }
        Ok(draft)
    }
}

/// Body of `PUT /jobs/{id}`.
///
/// Omitted fields are left alone. An explicit `null` clears `applied_on`
/// and `notes`; for the required fields it counts as omitted.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateJobInput {
    /// New title.
    #[serde(default)]
    pub title: Option<String>,
    /// New company name.
    #[serde(default)]
    pub company: Option<String>,
    /// New status.
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// New application date; `Some(None)` clears it.
    #[serde(default, deserialize_with = "present")]
    pub applied_on: Option<Option<NaiveDate>>,
    /// New notes; `Some(None)` clears them.
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

/// Marks a field as present, so `null` deserializes to `Some(None)`.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TryFrom<UpdateJobInput> for JobPatch {
    type Error = JobDomainError;

    fn try_from(input: UpdateJobInput) -> Result<Self, Self::Error> {
        let mut patch = Self::new();
        if let Some(title) = input.title {
            patch = patch.with_title(JobTitle::new(title)?);
        }
        if let Some(company) = input.company {
            patch = patch.with_company(CompanyName::new(company)?);
        }
        if let Some(status) = input.status {
            patch = patch.with_status(status);
        }
        if let Some(applied_on) = input.applied_on {
            patch = patch.with_applied_on(applied_on.map(AppliedOn::new).transpose()?);
        }
        if let Some(notes) = input.notes {
            patch = patch.with_notes(notes.map(JobNotes::new).transpose()?);
        }
        Ok(patch)
    }
}

/// Query string of `GET /jobs`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Exact status.
    pub status: Option<JobStatus>,
    /// Company substring, held to the same rules as a company name.
    pub company: Option<String>,
    /// Free-text needle.
    pub q: Option<String>,
    /// Page size, 1 to 100.
    pub limit: Option<i64>,
    /// Records to skip, zero or more.
    pub offset: Option<i64>,
    /// `id`, `applied_on`, `company` or `title`, optionally prefixed by `-`.
    pub sort: Option<String>,
}

impl ListParams {
    /// Validates the parameters and resolves them into a [`JobQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] when a parameter is out of range,
    /// contains NUL or names an unsupported sort.
    pub fn into_query(self) -> Result<JobQuery, ApiError> {
        let mut query = JobQuery::new();
        if let Some(status) = self.status {
            query = query.with_status(status);
        }
        if let Some(company) = self.company {
            let needle = CompanyName::new(company)?;
            query = query.with_company(needle.as_str());
        }
        if let Some(text) = self.q {
            if text.contains('\0') {
                return Err(JobDomainError::ContainsNul { field: "q" }.into());
            }
            query = query.with_text(text);
        }
        if let Some(limit) = self.limit {
            if !(i64::from(MIN_LIMIT)..=i64::from(MAX_LIMIT)).contains(&limit) {
                return Err(ApiError::Validation(format!(
                    "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
                )));
            }
            query = query.with_limit(limit);
        }
        if let Some(offset) = self.offset {
            let skip = u64::try_from(offset).map_err(|_| {
                ApiError::Validation(format!("offset must not be negative, got {offset}"))
            })?;
            query = query.with_offset(skip);
        }
        if let Some(sort) = self.sort {
            let resolved = sort
                .parse::<JobSort>()
                .map_err(|err| ApiError::Validation(err.to_string()))?;
            query = query.with_sort(resolved);
        }
        Ok(query)
    }
}

/// Handles `POST /jobs`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed bodies and
/// [`ApiError::Internal`] when the store fails.
pub async fn create<R, C>(
    State(state): State<AppState<R, C>>,
    payload: Result<Json<CreateJobInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>), ApiError>
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Json(input) = payload?;
    let draft = JobDraft::try_from(input)?;
    let job = state.tracker().create(draft).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// Handles `GET /jobs`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed parameters and
/// [`ApiError::Internal`] when the store fails.
pub async fn list<R, C>(
    State(state): State<AppState<R, C>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<Job>>, ApiError>
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let Query(raw) = params?;
    let query = raw.into_query()?;
    let jobs = state.tracker().list(&query).await?;
    Ok(Json(jobs))
}

/// Handles `GET /jobs/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids, [`ApiError::Validation`]
/// for non-integer ids and [`ApiError::Internal`] when the store fails.
pub async fn get<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Job>, ApiError>
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = job_id(path)?;
    let job = state.tracker().get(id).await?;
    Ok(Json(job))
}

/// Handles `PUT /jobs/{id}`.
///
/// The body is validated before the job is looked up.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for malformed bodies or ids,
/// [`ApiError::NotFound`] for unknown ids and [`ApiError::Internal`] when
/// the store fails.
pub async fn update<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateJobInput>, JsonRejection>,
) -> Result<Json<Job>, ApiError>
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = job_id(path)?;
    let Json(input) = payload?;
    let patch = JobPatch::try_from(input)?;
    let job = state.tracker().update(id, patch).await?;
    Ok(Json(job))
}

/// Handles `DELETE /jobs/{id}`.
///
/// # Errors
///
/// Returns [`ApiError::NotFound`] for unknown ids, [`ApiError::Validation`]
/// for non-integer ids and [`ApiError::Internal`] when the store fails.
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError>
where
    R: JobRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let id = job_id(path)?;
    state.tracker().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Extracts the job id from the path. Integers that cannot name a stored
/// job (zero or negative) are reported as not found.
fn job_id(path: Result<Path<i64>, PathRejection>) -> Result<JobId, ApiError> {
    let Path(raw) = path?;
    JobId::new(raw).map_err(|_| ApiError::NotFound)
}
