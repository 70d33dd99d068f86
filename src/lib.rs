/// commands-search library
///
/// Loads a CSV list of commands, searches it, and appends new entries.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod store;

// Re-exports for convenience
pub use config::Config;
pub use error::{CommandsError, ErrorKind, Result};
pub use store::{Record, RecordStore};
