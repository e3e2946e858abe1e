use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilecatError {
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File is not valid UTF-8 text: {}", path.display())]
    Encoding { path: PathBuf },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Io,
    Encoding,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FilecatError {
    /// 將 `std::io::Error` 與出錯的路徑綁在一起
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryNotFound { .. } => ErrorCategory::NotFound,
            Self::Io { .. } => ErrorCategory::Io,
            Self::Encoding { .. } => ErrorCategory::Encoding,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::DirectoryNotFound { .. } | Self::Encoding { .. } => ErrorSeverity::High,
            Self::Io { source, .. } => match source.kind() {
                std::io::ErrorKind::PermissionDenied | std::io::ErrorKind::NotFound => {
                    ErrorSeverity::High
                }
                _ => ErrorSeverity::Critical,
            },
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::DirectoryNotFound { path } => format!(
                "Check that '{}' exists and is a directory",
                path.display()
            ),
            Self::Io { path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check read/write permissions on '{}'", path.display())
                }
                _ => format!(
                    "Check that '{}' is accessible and the disk is not full",
                    path.display()
                ),
            },
            Self::Encoding { path } => format!(
                "Convert '{}' to UTF-8 or pick a suffix that excludes it",
                path.display()
            ),
            Self::ConfigError { .. } => {
                "Check the configuration file for TOML syntax errors".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and run again", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DirectoryNotFound { path } => {
                format!("Cannot find directory '{}'", path.display())
            }
            Self::Io { path, source } => {
                format!("Cannot access '{}': {}", path.display(), source)
            }
            Self::Encoding { path } => {
                format!("'{}' does not contain valid UTF-8 text", path.display())
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}", field, value, reason),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FilecatError>;
