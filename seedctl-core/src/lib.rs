//! seedctl-core: Postgres access for the seedctl tool
//!
//! Resolves connection settings, bootstraps the `users` and `example_table`
//! schema, and provides conflict-ignoring inserts plus bounded reads.
//!
//! ```ignore
//! let settings = SeedctlConfig::load();
//! let db = Database::connect_lazy(&DbConfig::from_env(&settings.database)?)?;
//! db.bootstrap().await?;
//! db.add_user("carol@example.com").await?;
//! for user in db.fetch_users(DEFAULT_FETCH_LIMIT).await? {
//!     println!("- {user}");
//! }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use config::{load_dotenv, DbConfig, EnvSources, SeedctlConfig, DEFAULT_FETCH_LIMIT};
pub use db::{Database, SEED_EMAILS};
pub use error::{Result, SeedError};
pub use models::{ExampleRowRecord, UserRecord};
