//! Command implementations. Records go to stdout, diagnostics to the log.

use anyhow::{Context, Result};
use seedctl_core::Database;
use serde::Serialize;
use tracing::info;

const DEMO_USERS: [&str; 2] = [
    "carolinescottharrison@myownpersonaldomain.com",
    "hfsiunaiu@gmail.com",
];

const DEMO_ROWS: [(&str, i32); 3] = [("Alice", 30), ("Bob", 25), ("Charlie", 35)];

/// Bootstrap, add the demo users, print them, then add the demo rows
pub async fn demo(db: &Database, limit: i64) -> Result<()> {
    bootstrap(db).await?;

    for email in DEMO_USERS {
        db.add_user(email)
            .await
            .with_context(|| format!("Failed to add user {email}"))?;
    }

    println!("Fetched users:");
    let users = db.fetch_users(limit).await.context("Failed to fetch users")?;
    for user in &users {
        println!("- {user}");
    }

    println!("\nAdding rows to example_table...");
    for (name, age) in DEMO_ROWS {
        db.add_row(name, age)
            .await
            .with_context(|| format!("Failed to add row {name}"))?;
    }
    println!("Added rows to example_table.");

    Ok(())
}

pub async fn bootstrap(db: &Database) -> Result<()> {
    let seeded = db.bootstrap().await.context("Failed to bootstrap schema")?;
    info!(seeded, "Schema ready");
    Ok(())
}

pub async fn add_user(db: &Database, email: &str) -> Result<()> {
    let inserted = db
        .add_user(email)
        .await
        .with_context(|| format!("Failed to add user {email}"))?;
    println!("{}", insert_outcome(inserted, email));
    Ok(())
}

pub async fn add_row(db: &Database, name: &str, age: i32) -> Result<()> {
    let inserted = db
        .add_row(name, age)
        .await
        .with_context(|| format!("Failed to add row {name}"))?;
    println!("{}", insert_outcome(inserted, name));
    Ok(())
}

pub async fn list_users(db: &Database, limit: i64, json: bool) -> Result<()> {
    let users = db.fetch_users(limit).await.context("Failed to fetch users")?;
    print_records(&users, json)
}

pub async fn list_rows(db: &Database, limit: i64, json: bool) -> Result<()> {
    let rows = db.fetch_rows(limit).await.context("Failed to fetch rows")?;
    print_records(&rows, json)
}

fn print_records<T>(records: &[T], json: bool) -> Result<()>
where
    T: Serialize + std::fmt::Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        for record in records {
            println!("- {record}");
        }
    }
    Ok(())
}

fn insert_outcome(inserted: bool, key: &str) -> String {
    if inserted {
        format!("Added {key}")
    } else {
        format!("{key} already exists, nothing inserted")
    }
}
