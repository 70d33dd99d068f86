// Adds commands to the store
//
// Cleans up what the user typed and refuses blanks before anything hits disk.

use crate::error::{CommandsError, Result};
use crate::store::{Record, RecordStore};
use log::info;

// Plenty for a command and a one-line description
pub const MAX_FIELD_LENGTH: usize = 1_000;

pub struct Recorder {
    max_field_length: usize,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            max_field_length: MAX_FIELD_LENGTH,
        }
    }

    // Main recording function. Validates both fields, cleans them up, appends.
    pub async fn record(
        &self,
        store: &mut RecordStore,
        name: &str,
        description: &str,
    ) -> Result<Record> {
        let record = match self.prepare(name, description) {
            Ok(record) => record,
            Err(e) => {
                info!("rejected new command: {}", e);
                return Err(e);
            }
        };

        store.append(record.clone()).await?;

        Ok(record)
    }

    // Turn raw input into a record without touching the store
    pub fn prepare(&self, name: &str, description: &str) -> Result<Record> {
        let name = self.sanitize_field(name);
        let description = self.sanitize_field(description);

        self.validate_field("name", &name)?;
        self.validate_field("description", &description)?;

        Record::new(name, description)
    }

    fn validate_field(&self, field: &'static str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(CommandsError::EmptyField(field));
        }

        if value.chars().count() > self.max_field_length {
            return Err(CommandsError::FieldTooLong {
                field,
                max: self.max_field_length,
            });
        }

        Ok(())
    }

    // Drop null bytes and squeeze every whitespace run (tabs, newlines too)
    // into one space, so a pasted description stays on one CSV line
    fn sanitize_field(&self, value: &str) -> String {
        value
            .replace('\0', "")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, RecordStore) {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::empty(dir.path().join("final.csv"));
        (dir, store)
    }

    #[tokio::test]
    async fn test_record_valid_command() {
        let (_dir, mut store) = create_test_store();
        let recorder = Recorder::new();

        let record = recorder
            .record(&mut store, "Copy", "Copy file")
            .await
            .unwrap();

        assert_eq!(record.name(), "Copy");
        assert_eq!(store.len(), 1);

        let reloaded = RecordStore::load(store.path()).await.unwrap();
        assert_eq!(reloaded.records(), store.records());
    }

    #[tokio::test]
    async fn test_record_empty_field() {
        let (_dir, mut store) = create_test_store();
        let recorder = Recorder::new();

        let result = recorder.record(&mut store, "Copy", "   ").await;

        match result {
            Err(CommandsError::EmptyField("description")) => {}
            other => panic!("Expected EmptyField error, got {:?}", other),
        }
        assert!(store.is_empty());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn test_record_field_too_long() {
        let (_dir, mut store) = create_test_store();
        let recorder = Recorder::new();

        let long_name = "a".repeat(MAX_FIELD_LENGTH + 1);
        let result = recorder.record(&mut store, &long_name, "too long").await;

        match result {
            Err(CommandsError::FieldTooLong { field: "name", .. }) => {}
            other => panic!("Expected FieldTooLong error, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_sanitize_field() {
        let recorder = Recorder::new();

        assert_eq!(recorder.sanitize_field("  git    status  "), "git status");
        assert!(!recorder.sanitize_field("cmd\0with\0nulls").contains('\0'));
        assert_eq!(recorder.sanitize_field("two\r\nlines\there"), "two lines here");
    }

    #[test]
    fn test_prepare_normalizes_input() {
        let recorder = Recorder::new();

        let record = recorder.prepare(" ls  -la ", "List\tall files ").unwrap();
        assert_eq!(record.name(), "ls -la");
        assert_eq!(record.description(), "List all files");
    }
}
