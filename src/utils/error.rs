use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to spawn '{command}': {source}")]
    CommandSpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Transfer failed in {} (exit code {code:?})", .dir.display())]
    TransferFailedError { dir: PathBuf, code: Option<i32> },

    #[error("Failed to write progress output: {message}")]
    OutputError { message: String },
}

impl PublishError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            PublishError::IoError(e) => format!("File system operation failed: {}", e),
            PublishError::ConfigParseError(_) => "The config file is not valid TOML".to_string(),
            PublishError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            PublishError::CommandSpawnError { command, .. } => {
                format!("Could not start '{}'", command)
            }
            PublishError::TransferFailedError { dir, .. } => {
                format!("Upload from {} did not succeed", dir.display())
            }
            PublishError::OutputError { .. } => "Could not write progress output".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PublishError::IoError(_) => "Check that the base directory is readable",
            PublishError::ConfigParseError(_) => "Fix the syntax of the config file",
            PublishError::InvalidConfigValueError { .. } => {
                "Correct the config value or remove it to use the default"
            }
            PublishError::CommandSpawnError { .. } => {
                "Make sure the shell and transfer program are installed and on PATH"
            }
            PublishError::TransferFailedError { .. } => {
                "Check network access and the credentials for the destination host"
            }
            PublishError::OutputError { .. } => "Check that stdout is writable",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PublishError::ConfigParseError(_) | PublishError::InvalidConfigValueError { .. } => 1,
            PublishError::TransferFailedError { .. } => 2,
            PublishError::IoError(_)
            | PublishError::CommandSpawnError { .. }
            | PublishError::OutputError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PublishError>;
