//! Idempotent schema bootstrap and seed data

use sqlx::PgPool;
use tracing::{debug, info};

use crate::Result;

/// Emails inserted by [`bootstrap`]
pub const SEED_EMAILS: [&str; 2] = ["alice@example.com", "bob@example.com"];

const CREATE_USERS: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email TEXT UNIQUE NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

const CREATE_EXAMPLE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS example_table (
        id SERIAL PRIMARY KEY,
        name TEXT UNIQUE NOT NULL,
        age INTEGER NOT NULL
    )
"#;

const INSERT_SEED_USERS: &str = r#"
    INSERT INTO users (email) VALUES ($1), ($2)
    ON CONFLICT (email) DO NOTHING
"#;

/// Create `users` and `example_table` if absent and insert the seed users.
///
/// All three statements share one transaction, so a failure leaves no
/// partially created schema behind. Safe to call any number of times.
///
/// Returns the number of seed rows actually inserted (0 on repeat calls).
pub async fn bootstrap(pool: &PgPool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_USERS).execute(&mut *tx).await?;
    sqlx::query(CREATE_EXAMPLE_TABLE).execute(&mut *tx).await?;

    let seeded = sqlx::query(INSERT_SEED_USERS)
        .bind(SEED_EMAILS[0])
        .bind(SEED_EMAILS[1])
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    if seeded > 0 {
        info!(seeded, "Bootstrapped schema and seed users");
    } else {
        debug!("Schema already bootstrapped, seed users present");
    }

    Ok(seeded)
}
