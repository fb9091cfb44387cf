use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::db::{RawUserRow, UserRecord};
use crate::error::{LabError, detail_response};
use crate::types::{InjectionReport, UserView};

pub const MULTIPLE_USERS_WARNING: &str = "Multiple users found - possible SQL injection detected!";

/// Result of a by-username lookup, one variant per response shape. `T` is the
/// per-row body: [`UserView`] for bound lookups, [`RawUserRow`] for the
/// interpolated one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<T = UserView> {
    Single(T),
    Multiple { warning: String, results: Vec<T> },
    NotFound,
    StoreError(String),
}

impl<T> LookupOutcome<T> {
    /// Exact lookups: a row or nothing.
    pub fn from_exact<R: Into<T>>(row: Option<R>) -> Self {
        match row {
            Some(r) => LookupOutcome::Single(r.into()),
            None => LookupOutcome::NotFound,
        }
    }

    /// Branches on row count. More than one row for a username means the
    /// query was not the one that was written.
    pub fn from_rows<R: Into<T>>(rows: Vec<R>) -> Self {
        match <[R; 1]>::try_from(rows) {
            Ok([row]) => LookupOutcome::Single(row.into()),
            Err(rows) if rows.is_empty() => LookupOutcome::NotFound,
            Err(rows) => {
                warn!(rows = rows.len(), "lookup returned multiple users");
                LookupOutcome::Multiple {
                    warning: MULTIPLE_USERS_WARNING.to_string(),
                    results: rows.into_iter().map(Into::into).collect(),
                }
            }
        }
    }

    pub fn from_error(e: LabError) -> Self {
        match e {
            LabError::NotFound => LookupOutcome::NotFound,
            other => {
                warn!(error = %other, "lookup failed");
                LookupOutcome::StoreError(other.to_string())
            }
        }
    }
}

impl<T> From<LabError> for LookupOutcome<T> {
    fn from(e: LabError) -> Self {
        LookupOutcome::from_error(e)
    }
}

impl From<Result<Option<UserRecord>, LabError>> for LookupOutcome<UserView> {
    fn from(res: Result<Option<UserRecord>, LabError>) -> Self {
        res.map_or_else(LookupOutcome::from_error, LookupOutcome::from_exact)
    }
}

impl From<Result<Vec<RawUserRow>, LabError>> for LookupOutcome<RawUserRow> {
    fn from(res: Result<Vec<RawUserRow>, LabError>) -> Self {
        res.map_or_else(LookupOutcome::from_error, LookupOutcome::from_rows)
    }
}

impl<T: Serialize> IntoResponse for LookupOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            LookupOutcome::Single(row) => Json(row).into_response(),
            LookupOutcome::Multiple { warning, results } => {
                Json(InjectionReport { warning, results }).into_response()
            }
            LookupOutcome::NotFound => LabError::NotFound.into_response(),
            LookupOutcome::StoreError(detail) => {
                detail_response(StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
        }
    }
}
