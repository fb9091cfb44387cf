use crate::db::models::{RawUserRow, UserRecord};
use crate::db::schema::SeedVariant;
use crate::db::statement::has_trailing_statement;
use crate::error::LabError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Builds the lookup query by pasting `username` between single quotes.
/// Nothing is escaped: this is the injectable query.
pub fn interpolated_lookup_query(username: &str) -> String {
    format!("SELECT id, username, email, role FROM users WHERE username = '{username}'")
}

/// One seeded, read-only in-memory `users` table.
///
/// The pool holds exactly one connection that never idles out, since an
/// in-memory SQLite database lives and dies with its connection.
#[derive(Clone)]
pub struct UserStore {
    pool: SqlitePool,
    variant: SeedVariant,
}

impl UserStore {
    /// Create the database, run the DDL, insert the seed rows and switch the
    /// connection to query-only. Called once per store at startup.
    pub async fn open(variant: SeedVariant) -> Result<Self, LabError> {
        let connect_opts = SqliteConnectOptions::from_str(IN_MEMORY_URL)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_opts)
            .await?;

        let store = Self { pool, variant };
        store.seed().await?;
        sqlx::query("PRAGMA query_only = ON")
            .execute(&store.pool)
            .await?;

        info!(
            variant = ?variant,
            rows = variant.rows().len(),
            "seeded in-memory users table"
        );
        Ok(store)
    }

    pub fn variant(&self) -> SeedVariant {
        self.variant
    }

    async fn seed(&self) -> Result<(), LabError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(self.variant.ddl()).execute(&mut *tx).await?;

        for row in self.variant.rows() {
            if self.variant.has_secret_column() {
                sqlx::query(
                    "INSERT INTO users (id, username, email, role, secret_data) VALUES (?, ?, ?, ?, ?)",
                )
                .bind(row.id)
                .bind(row.username)
                .bind(row.email)
                .bind(row.role)
                .bind(row.secret_data)
                .execute(&mut *tx)
                .await?;
            } else {
                sqlx::query("INSERT INTO users (id, username, email, role) VALUES (?, ?, ?, ?)")
                    .bind(row.id)
                    .bind(row.username)
                    .bind(row.email)
                    .bind(row.role)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        tx.commit().await?;
        Ok(())
    }

    /// Exact-match lookup with `username` bound as a parameter.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, LabError> {
        let row = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, email, role FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Lookup through [`interpolated_lookup_query`]. Returns every row the
    /// resulting SQL produces, however many that turns out to be. Text that
    /// turns into more than one statement is refused before execution.
    pub async fn find_by_username_unchecked(
        &self,
        username: &str,
    ) -> Result<Vec<RawUserRow>, LabError> {
        let sql = interpolated_lookup_query(username);
        debug!(query = %sql, "executing interpolated lookup");
        if has_trailing_statement(&sql) {
            return Err(LabError::MultipleStatements);
        }
        // Not cached: every payload yields a distinct statement.
        let rows = sqlx::query_as::<_, RawUserRow>(&sql)
            .persistent(false)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_all(&self) -> Result<Vec<UserRecord>, LabError> {
        let rows = sqlx::query_as::<_, UserRecord>(
            "SELECT id, username, email, role FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_embeds_input_verbatim() {
        let sql = interpolated_lookup_query("admin' OR '1'='1");
        assert_eq!(
            sql,
            "SELECT id, username, email, role FROM users WHERE username = 'admin' OR '1'='1'"
        );
    }

    #[tokio::test]
    async fn reference_store_seeds_four_rows_in_id_order() {
        let store = UserStore::open(SeedVariant::Reference).await.unwrap();
        let rows = store.list_all().await.unwrap();
        let names: Vec<&str> = rows.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, ["admin", "alice", "bob", "charlie"]);
        assert_eq!(rows[3].role, "manager");
    }

    #[tokio::test]
    async fn training_store_seeds_five_rows() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let rows = store.list_all().await.unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].username, "eve");
    }

    #[tokio::test]
    async fn stores_are_independent() {
        let reference = UserStore::open(SeedVariant::Reference).await.unwrap();
        let training = UserStore::open(SeedVariant::Training).await.unwrap();
        assert_eq!(reference.variant(), SeedVariant::Reference);
        assert_eq!(training.variant(), SeedVariant::Training);
        assert!(reference.find_by_username("eve").await.unwrap().is_none());
        assert!(training.find_by_username("eve").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn list_all_is_stable_across_calls() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let first = store.list_all().await.unwrap();
        let second = store.list_all().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn bound_lookup_treats_quotes_as_data() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        for input in [
            "admin' OR '1'='1",
            "admin'--",
            "admin' UNION SELECT id, username, secret_data, role FROM users--",
            "'",
        ] {
            assert!(
                store.find_by_username(input).await.unwrap().is_none(),
                "{input} should not match"
            );
        }
        let admin = store.find_by_username("admin").await.unwrap().unwrap();
        assert_eq!(admin.id, 1);
        assert_eq!(admin.email, "admin@company.com");
    }

    #[tokio::test]
    async fn interpolated_lookup_matches_bound_lookup_for_plain_names() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        for name in ["admin", "alice", "bob", "charlie", "eve", "nobody"] {
            let bound = store.find_by_username(name).await.unwrap();
            let raw = store.find_by_username_unchecked(name).await.unwrap();
            assert_eq!(raw.into_iter().next(), bound.map(RawUserRow::from));
        }
    }

    #[tokio::test]
    async fn tautology_returns_every_row() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let rows = store
            .find_by_username_unchecked("admin' OR '1'='1")
            .await
            .unwrap();
        assert_eq!(rows.len(), 5);
    }

    #[tokio::test]
    async fn unterminated_quote_surfaces_engine_error() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let err = store.find_by_username_unchecked("admin'").await.unwrap_err();
        assert!(matches!(err, LabError::DatabaseError(_)));
        assert!(err.to_string().contains("unrecognized token"));
    }

    #[tokio::test]
    async fn stacked_statements_are_refused_and_rows_survive() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        for payload in [
            "x'; DELETE FROM users--",
            "x'; PRAGMA query_only = OFF; DELETE FROM users WHERE id > 1--",
        ] {
            let err = store.find_by_username_unchecked(payload).await.unwrap_err();
            assert!(matches!(err, LabError::MultipleStatements), "{payload}");
        }
        assert_eq!(store.list_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn trailing_semicolon_with_comment_still_runs() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let rows = store.find_by_username_unchecked("bob';--").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].username, "bob");
    }

    #[tokio::test]
    async fn smuggled_values_keep_their_sqlite_type() {
        let store = UserStore::open(SeedVariant::Training).await.unwrap();
        let rows = store
            .find_by_username_unchecked("x' UNION SELECT 1, 2, 3.5, NULL--")
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, serde_json::json!(1));
        assert_eq!(rows[0].username, serde_json::json!(2));
        assert_eq!(rows[0].email, serde_json::json!(3.5));
        assert!(rows[0].role.is_null());
    }
}
