use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the append-only search history
///
/// `timestamp` is assigned by SQLite at insert time (UTC); rows are never
/// updated or deleted.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SearchEvent {
    pub id: i64,
    /// Raw city string as submitted by the user
    pub city: String,
    /// Opaque visitor token (32 hex characters)
    pub user_id: String,
    pub timestamp: NaiveDateTime,
}

/// Aggregate row for the stats endpoint: searches per distinct city
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CityCount {
    pub city: String,
    pub count: i64,
}
