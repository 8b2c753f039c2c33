//! User repository
//!
//! - add: INSERT with ON CONFLICT (email) DO NOTHING
//! - fetch: ascending id, bounded by a caller-supplied limit

use sqlx::{PgPool, Row};
use tracing::{debug, info};

use crate::models::UserRecord;
use crate::Result;

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user unless the email already exists.
    ///
    /// No format check is made on `email`; the table's NOT NULL/UNIQUE
    /// constraints are the only enforcement. Returns `true` when a row was
    /// inserted and `false` when the email was already present.
    pub async fn add(&self, email: &str) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let inserted =
            sqlx::query("INSERT INTO users (email) VALUES ($1) ON CONFLICT (email) DO NOTHING")
                .bind(email)
                .execute(&mut *tx)
                .await?
                .rows_affected()
                > 0;

        tx.commit().await?;

        if inserted {
            info!(email, "Added user");
        } else {
            debug!(email, "User already exists, skipped");
        }

        Ok(inserted)
    }

    /// Fetch up to `limit` users in ascending id order.
    ///
    /// `limit` is passed to Postgres unchanged: zero yields an empty list and
    /// a negative value is rejected by the server.
    pub async fn fetch(&self, limit: i64) -> Result<Vec<UserRecord>> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("SET TRANSACTION READ ONLY")
            .execute(&mut *tx)
            .await?;

        let rows = sqlx::query("SELECT id, email, created_at FROM users ORDER BY id LIMIT $1")
            .bind(limit)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        let users = rows
            .iter()
            .map(|r| -> Result<UserRecord> {
                Ok(UserRecord::new(
                    r.try_get("id")?,
                    r.try_get("email")?,
                    r.try_get("created_at")?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(limit, fetched = users.len(), "Fetched users");
        Ok(users)
    }
}
