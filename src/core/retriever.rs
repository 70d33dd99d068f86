/// Command retriever
///
/// Read-only views over a loaded store, used to show the full list.

use crate::store::{Record, RecordStore};
use std::path::Path;

/// Handles listing operations
pub struct Retriever<'a> {
    store: &'a RecordStore,
}

/// Size and location of the loaded list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSummary<'a> {
    pub total_commands: usize,
    pub path: &'a Path,
}

impl<'a> Retriever<'a> {
    /// Create a new retriever over `store`
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Every command in insertion order
    pub fn all(&self) -> &'a [Record] {
        self.store.records()
    }

    pub fn summary(&self) -> StoreSummary<'a> {
        StoreSummary {
            total_commands: self.store.len(),
            path: self.store.path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_all_in_insertion_order() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::empty(dir.path().join("final.csv"));
        store.append(Record::new("b", "second letter").unwrap()).await.unwrap();
        store.append(Record::new("a", "first letter").unwrap()).await.unwrap();

        let retriever = Retriever::new(&store);
        let names: Vec<&str> = retriever.all().iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_summary() {
        let store = RecordStore::empty("final.csv");
        let summary = Retriever::new(&store).summary();

        assert_eq!(summary.total_commands, 0);
        assert_eq!(summary.path, Path::new("final.csv"));
    }
}
