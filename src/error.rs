use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum LabError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {}", engine_message(.0))]
    DatabaseError(#[from] SqlxError),

    #[error("Database error: You can only execute one statement at a time.")]
    MultipleStatements,

    #[error("Configuration error: {0}")]
    ConfigError(#[from] Box<figment::Error>),
}

impl From<figment::Error> for LabError {
    fn from(e: figment::Error) -> Self {
        LabError::ConfigError(Box::new(e))
    }
}

/// The text SQLite itself reported, without sqlx's "error returned from
/// database" wrapper. Non-database failures fall back to their display form.
pub fn engine_message(e: &SqlxError) -> String {
    match e.as_database_error() {
        Some(db_err) => db_err.message().to_string(),
        None => e.to_string(),
    }
}

/// Body shape shared by every error response: `{"detail": "..."}`.
#[derive(Serialize)]
pub struct DetailBody {
    pub detail: String,
}

pub fn detail_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(DetailBody {
            detail: detail.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for LabError {
    fn into_response(self) -> Response {
        let status = match self {
            LabError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Raw engine text goes back to the caller on purpose.
        detail_response(status, self.to_string())
    }
}
