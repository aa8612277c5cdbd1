//! Application layer errors

use thiserror::Error;

/// Startup configuration errors - fatal, the core refuses to become ready
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No bundle loaded for default locale '{0}'")]
    MissingDefaultBundle(String),

    #[error("Malformed property source for locale '{locale}' at line {line}: {reason}")]
    Malformed {
        locale: String,
        line: usize,
        reason: String,
    },

    #[error("Property file \"{0}\" is not named correctly")]
    BadResourceName(String),

    #[error("Duplicate command '{name}' under '{parent}'")]
    DuplicateCommand { parent: String, name: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Property source parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    pub line: usize,
    pub reason: String,
}

impl ParseError {
    pub fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }

    /// Attach the locale whose bundle failed to load
    pub fn into_config(self, locale: impl Into<String>) -> ConfigError {
        ConfigError::Malformed {
            locale: locale.into(),
            line: self.line,
            reason: self.reason,
        }
    }
}

/// Command execution errors, reported back to the sender
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid usage")]
    Usage,

    #[error("Command failed: {key}")]
    Failed { key: String, args: Vec<String> },

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

impl CommandError {
    /// Failure reported through a localized message key
    pub fn failed(key: impl Into<String>, args: Vec<String>) -> Self {
        CommandError::Failed {
            key: key.into(),
            args,
        }
    }
}
