//! DDL and fixed seed rows for the two in-memory user tables.

/// Table behind `/api`: no sensitive column.
pub const REFERENCE_USERS_DDL: &str = r#"
CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT DEFAULT 'user'
)
"#;

/// Table behind `/vulnerable`: carries `secret_data`, the payload an
/// injection is meant to exfiltrate.
pub const TRAINING_USERS_DDL: &str = r#"
CREATE TABLE users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT DEFAULT 'user',
    secret_data TEXT
)
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedUser {
    pub id: i64,
    pub username: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub secret_data: Option<&'static str>,
}

const fn seed(
    id: i64,
    username: &'static str,
    email: &'static str,
    role: &'static str,
    secret_data: Option<&'static str>,
) -> SeedUser {
    SeedUser {
        id,
        username,
        email,
        role,
        secret_data,
    }
}

pub const REFERENCE_USERS: &[SeedUser] = &[
    seed(1, "admin", "admin@company.com", "admin", None),
    seed(2, "alice", "alice@company.com", "user", None),
    seed(3, "bob", "bob@company.com", "user", None),
    seed(4, "charlie", "charlie@company.com", "manager", None),
];

pub const TRAINING_USERS: &[SeedUser] = &[
    seed(1, "admin", "admin@company.com", "admin", Some("admin_secret_key_12345")),
    seed(2, "alice", "alice@company.com", "user", Some("alice_personal_data")),
    seed(3, "bob", "bob@company.com", "user", Some("bob_financial_info")),
    seed(4, "charlie", "charlie@company.com", "manager", Some("charlie_hr_records")),
    seed(5, "eve", "eve@company.com", "user", Some("eve_private_notes")),
];

/// Which of the two tables a store is seeded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedVariant {
    Reference,
    Training,
}

impl SeedVariant {
    pub fn ddl(self) -> &'static str {
        match self {
            SeedVariant::Reference => REFERENCE_USERS_DDL,
            SeedVariant::Training => TRAINING_USERS_DDL,
        }
    }

    pub fn rows(self) -> &'static [SeedUser] {
        match self {
            SeedVariant::Reference => REFERENCE_USERS,
            SeedVariant::Training => TRAINING_USERS,
        }
    }

    pub fn has_secret_column(self) -> bool {
        matches!(self, SeedVariant::Training)
    }
}
