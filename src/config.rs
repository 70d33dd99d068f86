/// Runtime configuration
///
/// The data file comes from `--file`, then `COMMANDS_SEARCH_FILE`, then
/// `final.csv` in the working directory.

use crate::error::{CommandsError, Result};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the data file
pub const FILE_ENV_VAR: &str = "COMMANDS_SEARCH_FILE";

/// Data file used when nothing else is given
pub const DEFAULT_DATA_FILE: &str = "final.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration from the command line and the process environment
    pub fn resolve(file_flag: Option<PathBuf>, verbose: bool) -> Result<Self> {
        Self::from_sources(file_flag, std::env::var_os(FILE_ENV_VAR), verbose)
    }

    pub fn from_sources(
        file_flag: Option<PathBuf>,
        file_env: Option<OsString>,
        verbose: bool,
    ) -> Result<Self> {
        let data_file = match (file_flag, file_env) {
            (Some(flag), _) => {
                if flag.as_os_str().is_empty() {
                    return Err(CommandsError::Config("--file must not be empty".to_string()));
                }
                flag
            }
            (None, Some(env)) => {
                if env.is_empty() {
                    return Err(CommandsError::Config(format!(
                        "{} is set but empty",
                        FILE_ENV_VAR
                    )));
                }
                PathBuf::from(env)
            }
            (None, None) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        Ok(Self { data_file, verbose })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_file() {
        let config = Config::from_sources(None, None, false).unwrap();
        assert_eq!(config.data_file, PathBuf::from("final.csv"));
        assert!(!config.verbose);
    }

    #[test]
    fn test_flag_beats_env() {
        let config = Config::from_sources(
            Some(PathBuf::from("flag.csv")),
            Some(OsString::from("env.csv")),
            true,
        )
        .unwrap();
        assert_eq!(config.data_file, PathBuf::from("flag.csv"));
        assert!(config.verbose);
    }

    #[test]
    fn test_env_used_without_flag() {
        let config = Config::from_sources(None, Some(OsString::from("env.csv")), false).unwrap();
        assert_eq!(config.data_file, PathBuf::from("env.csv"));
    }

    #[test]
    fn test_empty_values_rejected() {
        let err = Config::from_sources(None, Some(OsString::new()), false).unwrap_err();
        assert!(matches!(err, CommandsError::Config(_)));

        let err = Config::from_sources(Some(PathBuf::new()), None, false).unwrap_err();
        assert!(matches!(err, CommandsError::Config(_)));
    }
}
