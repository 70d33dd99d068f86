/// Data models for stored commands
///
/// A parsed CSV row is loose (any column may be absent), a `Record` is not.
/// The only ways to get a `Record` are `Record::new` and `TryFrom<CsvRow>`.

use crate::error::{CommandsError, Result};
use serde::{Deserialize, Serialize};

/// Header name of the command column
pub const NAME_COLUMN: &str = "Command";
/// Header name of the description column
pub const DESCRIPTION_COLUMN: &str = "Description";

/// One searchable command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,
    description: String,
}

impl Record {
    /// Build a record, rejecting blank fields
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(CommandsError::EmptyField("name"));
        }
        if description.trim().is_empty() {
            return Err(CommandsError::EmptyField("description"));
        }

        Ok(Self { name, description })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check whether either field contains `needle`
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// A data row as it comes out of the CSV reader, keyed by header name
#[derive(Debug, Clone, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Command")]
    pub command: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
}

impl TryFrom<CsvRow> for Record {
    type Error = CommandsError;

    fn try_from(row: CsvRow) -> Result<Self> {
        let name = row.command.ok_or(CommandsError::EmptyField("name"))?;
        let description = row
            .description
            .ok_or(CommandsError::EmptyField("description"))?;
        Record::new(name, description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("ls", "List files").unwrap();
        assert_eq!(record.name(), "ls");
        assert_eq!(record.description(), "List files");
    }

    #[test]
    fn test_record_rejects_blank_fields() {
        match Record::new("", "List files") {
            Err(CommandsError::EmptyField("name")) => {}
            other => panic!("Expected EmptyField(name), got {:?}", other),
        }
        match Record::new("ls", "   ") {
            Err(CommandsError::EmptyField("description")) => {}
            other => panic!("Expected EmptyField(description), got {:?}", other),
        }
    }

    #[test]
    fn test_record_matches_is_case_insensitive() {
        let record = Record::new("List", "Show FILES").unwrap();
        assert!(record.matches("list"));
        assert!(record.matches("files"));
        assert!(!record.matches("remove"));
    }

    #[test]
    fn test_row_conversion() {
        let row = CsvRow {
            command: Some("rm".to_string()),
            description: Some("Delete file".to_string()),
        };
        let record = Record::try_from(row).unwrap();
        assert_eq!(record.name(), "rm");

        let row = CsvRow {
            command: Some("rm".to_string()),
            description: None,
        };
        assert!(Record::try_from(row).is_err());
    }

    #[test]
    fn test_record_serializes_with_field_names() {
        let record = Record::new("cp", "Copy file").unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "cp");
        assert_eq!(json["description"], "Copy file");
    }
}
