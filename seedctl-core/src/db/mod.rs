//! Database layer - connection provider, schema bootstrap and repositories
//!
//! - One pooled handle per process, passed explicitly (no globals)
//! - Every operation runs in its own transaction; dropping an uncommitted
//!   transaction rolls it back and returns the connection
//! - Duplicates are handled by `ON CONFLICT DO NOTHING`, never check-then-insert

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::Database;
pub use repos::{ExampleRowRepo, UserRepo};
pub use schema::{bootstrap, SEED_EMAILS};
