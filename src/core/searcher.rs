/// Command search by case-insensitive substring
///
/// Plain linear scan over the in-memory list. There is no index to keep in
/// sync, so results always reflect the latest appends.

use crate::store::Record;

/// Stateless substring filter over a record list
pub struct SearchEngine;

impl SearchEngine {
    /// Find every record whose name or description contains `query`
    ///
    /// Matching ignores case. Results keep the order of `records`.
    /// An empty query matches nothing.
    pub fn search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        records.iter().filter(|r| r.matches(&needle)).collect()
    }

    /// Same as [`SearchEngine::search`], keeping at most `limit` results
    pub fn search_limited<'a>(records: &'a [Record], query: &str, limit: usize) -> Vec<&'a Record> {
        let mut results = Self::search(records, query);
        results.truncate(limit);
        results
    }
}
