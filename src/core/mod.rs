/// Core functionality modules
///
/// Contains the business logic for adding, listing and searching commands.

pub mod recorder;
pub mod retriever;
pub mod searcher;

pub use recorder::Recorder;
pub use retriever::Retriever;
pub use searcher::SearchEngine;
