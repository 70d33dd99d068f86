/// Storage module for commands-search
///
/// Owns the command list and its CSV backing file. Reads happen once at
/// startup, writes only ever append a row.

pub mod codec;
pub mod models;
pub mod record_store;

pub use models::*;
pub use record_store::RecordStore;
