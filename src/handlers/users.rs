use axum::{
    Json,
    extract::{Path, State},
};

use crate::service::LookupOutcome;
use crate::types::UserView;
use crate::{LabError, router::LabState};

/// GET /api/users/{username} -> bound-parameter lookup against the reference table.
pub async fn get_user_by_username(
    State(state): State<LabState>,
    Path(username): Path<String>,
) -> LookupOutcome {
    state.reference.find_by_username(&username).await.into()
}

/// GET /api/users
pub async fn list_users(State(state): State<LabState>) -> Result<Json<Vec<UserView>>, LabError> {
    let rows = state.reference.list_all().await?;
    Ok(Json(rows.into_iter().map(UserView::from).collect()))
}
