/// Structured error types for seedctl-core.
///
/// Uses `thiserror` so library consumers can match on the failure class.
/// The binary (seedctl-cli) wraps these in `anyhow` for reporting.
///
/// Unique-key conflicts on insert never show up here: they are resolved in
/// SQL with `ON CONFLICT DO NOTHING`.

use thiserror::Error;

/// Main error type for seedctl-core operations
#[derive(Error, Debug)]
pub enum SeedError {
    /// Required configuration is missing or malformed.
    ///
    /// Raised before any database access is attempted.
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// The store rejected a statement or the connection failed.
    ///
    /// The driver's message is kept as the error source, not repeated here.
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Result type alias for seedctl-core operations
pub type Result<T> = std::result::Result<T, SeedError>;

impl SeedError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}
