//! Repository implementations for table access
//!
//! Each repository follows these patterns:
//! - Borrows the shared pool; one transaction per call
//! - Handles duplicates via ON CONFLICT (no check-then-insert)
//! - Reads are bounded and ordered by id

pub mod example_rows;
pub mod users;

pub use example_rows::ExampleRowRepo;
pub use users::UserRepo;
