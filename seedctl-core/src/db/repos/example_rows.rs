//! Repository for `example_table`

use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::ExampleRowRecord;
use crate::Result;

pub struct ExampleRowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ExampleRowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a row unless `name` is already taken; the first write wins.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn add(&self, name: &str, age: i32) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO example_table (name, age) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(age)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        tx.commit().await?;

        if inserted {
            info!(name, age, "Added example row");
        } else {
            debug!(name, "Example row already exists, skipped");
        }

        Ok(inserted)
    }

    /// Fetch up to `limit` rows in ascending id order
    pub async fn fetch(&self, limit: i64) -> Result<Vec<ExampleRowRecord>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query_as::<_, ExampleRowRecord>(
            "SELECT id, name, age FROM example_table ORDER BY id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        debug!(limit, fetched = rows.len(), "Fetched example rows");
        Ok(rows)
    }
}
