use serde::{Deserialize, Serialize};

use crate::db::UserRecord;

/// Public projection of a user row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserView {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<UserRecord> for UserView {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            username: r.username,
            email: r.email,
            role: r.role,
        }
    }
}

/// Returned instead of a single row when a by-username lookup matched more
/// than one row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InjectionReport<T = UserView> {
    pub warning: String,
    pub results: Vec<T>,
}
