use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{CityCount, SearchEvent};

/// Append-only store of successful searches
///
/// Each operation is a single self-contained statement; writers are
/// serialized by SQLite itself.
#[derive(Debug, Clone)]
pub struct SearchStore {
    pool: SqlitePool,
}

impl SearchStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Ensure the search history table exists
    ///
    /// Safe to call on every process start regardless of prior state.
    pub async fn init(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS search_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                city TEXT NOT NULL,
                user_id TEXT NOT NULL,
                timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append one search event, timestamped by the database
    pub async fn record(&self, city: &str, user_id: &str) -> Result<SearchEvent> {
        let event = sqlx::query_as::<_, SearchEvent>(
            r#"
            INSERT INTO search_history (city, user_id)
            VALUES (?1, ?2)
            RETURNING id, city, user_id, timestamp
            "#,
        )
        .bind(city)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Probe the database connection, used by the health endpoint
    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Search counts per distinct city, most searched first
    ///
    /// Equal counts are ordered by city name ascending so the output is
    /// deterministic.
    pub async fn aggregate_counts(&self) -> Result<Vec<CityCount>> {
        let counts = sqlx::query_as::<_, CityCount>(
            r#"
            SELECT city, COUNT(*) as count
            FROM search_history
            GROUP BY city
            ORDER BY count DESC, city ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }
}
