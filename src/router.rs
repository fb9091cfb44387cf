use axum::{Router, routing::get};

use crate::db::{SeedVariant, UserStore};
use crate::error::LabError;
use crate::handlers::{health, users, vulnerable};

/// Shared handler state: the two independently seeded tables.
#[derive(Clone)]
pub struct LabState {
    pub reference: UserStore,
    pub training: UserStore,
}

impl LabState {
    pub fn new(reference: UserStore, training: UserStore) -> Self {
        Self {
            reference,
            training,
        }
    }

    /// Open and seed both stores.
    pub async fn seeded() -> Result<Self, LabError> {
        let reference = UserStore::open(SeedVariant::Reference).await?;
        let training = UserStore::open(SeedVariant::Training).await?;
        Ok(Self::new(reference, training))
    }
}

pub fn lab_router(state: LabState) -> Router {
    Router::new()
        .route("/api/users", get(users::list_users))
        .route("/api/users/{username}", get(users::get_user_by_username))
        .route("/vulnerable/users", get(vulnerable::list_users_safe))
        .route(
            "/vulnerable/users/{username}",
            get(vulnerable::get_user_by_username_vulnerable),
        )
        .route("/healthz", get(health::healthcheck))
        .with_state(state)
}
