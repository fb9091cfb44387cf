//! Database module: in-memory SQLite user tables.
//!
//! Layout:
//! - `models.rs`: row structs decoded from queries
//! - `schema.rs`: DDL and the fixed seed rows for each table variant
//! - `sqlite.rs`: the store with its parameterized and interpolated lookups
//! - `statement.rs`: single-statement guard for interpolated SQL

pub mod models;
pub mod schema;
pub mod sqlite;
pub mod statement;

pub use models::{RawUserRow, UserRecord};
pub use schema::{SeedUser, SeedVariant};
pub use sqlite::{SqlitePool, UserStore, interpolated_lookup_query};
