//! Deliberately injectable endpoints for SQL-injection exercises.
//!
//! `GET /vulnerable/users/{username}` pastes the path segment straight into
//! the SQL text. Payloads worth trying:
//! - `admin` behaves like the safe endpoint
//! - `admin' OR '1'='1` widens the filter to every row
//! - `admin' UNION SELECT id, username, secret_data, role FROM users--`
//!   pulls `secret_data` out under the `email` label
//! - `x' UNION SELECT 1, 2, 3, NULL--` shows values come back with the
//!   type SQLite gave them
//!
//! Stacked statements (`x'; DELETE ...`) are refused with a store error.
//!
//! Do not copy this into real code.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::db::RawUserRow;
use crate::service::LookupOutcome;
use crate::types::UserView;
use crate::{LabError, router::LabState};

/// GET /vulnerable/users/{username}
pub async fn get_user_by_username_vulnerable(
    State(state): State<LabState>,
    Path(username): Path<String>,
) -> LookupOutcome<RawUserRow> {
    state
        .training
        .find_by_username_unchecked(&username)
        .await
        .into()
}

/// GET /vulnerable/users -> parameter-free listing, used as the baseline.
pub async fn list_users_safe(
    State(state): State<LabState>,
) -> Result<Json<Vec<UserView>>, LabError> {
    let rows = state.training.list_all().await?;
    Ok(Json(rows.into_iter().map(UserView::from).collect()))
}
