use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, TypeInfo, ValueRef};

/// A `users` row as projected by the bound lookups and the listings:
/// `secret_data` is never selected by name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// A row from the interpolated lookup. Positions keep the labels of the
/// written projection but each value is whatever SQLite produced there, so
/// smuggled integers, reals and NULLs come through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawUserRow {
    pub id: Value,
    pub username: Value,
    pub email: Value,
    pub role: Value,
}

impl From<UserRecord> for RawUserRow {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id.into(),
            username: r.username.into(),
            email: r.email.into(),
            role: r.role.into(),
        }
    }
}

impl<'r> FromRow<'r, SqliteRow> for RawUserRow {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: column_value(row, 0)?,
            username: column_value(row, 1)?,
            email: column_value(row, 2)?,
            role: column_value(row, 3)?,
        })
    }
}

/// Decode by the storage class of the value itself, not the declared column
/// type, since compound selects mix sources.
fn column_value(row: &SqliteRow, idx: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(idx)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }
    let storage = raw.type_info().name().to_string();

    let value = match storage.as_str() {
        "INTEGER" => Value::from(row.try_get_unchecked::<i64, _>(idx)?),
        "REAL" => Value::from(row.try_get_unchecked::<f64, _>(idx)?),
        "BLOB" => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(idx)?;
            Value::from(String::from_utf8_lossy(&bytes).into_owned())
        }
        _ => Value::from(row.try_get_unchecked::<String, _>(idx)?),
    };
    Ok(value)
}
