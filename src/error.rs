/// Error types for commands-search
///
/// Every failure is either a storage problem (the data file) or a
/// validation problem (user input). Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Broad category of a [`CommandsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Storage,
    Validation,
    Config,
}

/// Main error type for commands-search operations
#[derive(Error, Debug)]
pub enum CommandsError {
    /// Data file does not exist
    #[error("Data file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors (open, read, append)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or encode errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header row lacks a required column
    #[error("Missing column '{0}' in header")]
    MissingColumn(&'static str),

    /// A data row could not be turned into a record
    #[error("Malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// A required field was left empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// A field exceeds the allowed length
    #[error("Field '{field}' exceeds maximum allowed length of {max} characters")]
    FieldTooLong { field: &'static str, max: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for commands-search operations
pub type Result<T> = std::result::Result<T, CommandsError>;

impl CommandsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandsError::FileNotFound(_)
            | CommandsError::Io(_)
            | CommandsError::Csv(_)
            | CommandsError::MissingColumn(_)
            | CommandsError::MalformedRow { .. } => ErrorKind::Storage,
            CommandsError::EmptyField(_) | CommandsError::FieldTooLong { .. } => {
                ErrorKind::Validation
            }
            CommandsError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn is_storage(&self) -> bool {
        self.kind() == ErrorKind::Storage
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Convert to a message fit for showing the user
    pub fn user_message(&self) -> String {
        match self {
            CommandsError::FileNotFound(path) => {
                format!(
                    "Could not find the commands file '{}'. Check the path or add a command to create it.",
                    path.display()
                )
            }
            CommandsError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            CommandsError::Csv(e) => {
                format!("The commands file could not be read as CSV. Details: {}", e)
            }
            CommandsError::MissingColumn(column) => {
                format!("The commands file has no '{}' column", column)
            }
            CommandsError::MalformedRow { row, reason } => {
                format!("Row {} of the commands file is broken: {}", row, reason)
            }
            CommandsError::EmptyField(_) => {
                "Fill in both fields before adding a command.".to_string()
            }
            CommandsError::FieldTooLong { field, max } => {
                format!("The {} is too long (max {} characters)", field, max)
            }
            CommandsError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            CommandsError::FileNotFound(PathBuf::from("final.csv")).kind(),
            ErrorKind::Storage
        );
        assert_eq!(CommandsError::MissingColumn("Command").kind(), ErrorKind::Storage);
        assert!(CommandsError::EmptyField("name").is_validation());
        assert!(!CommandsError::EmptyField("name").is_storage());
        assert_eq!(
            CommandsError::Config("empty path".to_string()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_error_user_messages() {
        let err = CommandsError::FileNotFound(PathBuf::from("final.csv"));
        assert!(err.user_message().contains("final.csv"));

        let err = CommandsError::EmptyField("description");
        assert!(err.user_message().contains("both fields"));
    }

    #[test]
    fn test_error_display() {
        let err = CommandsError::MalformedRow {
            row: 3,
            reason: "missing field".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("Malformed row 3"));
    }
}
