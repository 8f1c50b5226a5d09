//! Error types for Preseed

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Preseed operations
pub type Result<T> = std::result::Result<T, PreseedError>;

/// Main error type for Preseed
#[derive(Error, Debug)]
pub enum PreseedError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Placeholder seeding errors
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Rule '{0}' has an empty marker")]
    EmptyMarker(String),

    #[error("Rule '{rule}' has an invalid match pattern: {error}")]
    InvalidPattern { rule: String, error: String },

    #[error("Rule '{rule}' has an invalid dir template: {error}")]
    InvalidTemplate { rule: String, error: String },

    #[error("Rule '{rule}' file name '{file}' must not contain path separators")]
    FileWithSeparator { rule: String, file: String },
}

/// Placeholder seeding errors
///
/// A file already present at the target path is never an error; seeding
/// short-circuits and reports it as an outcome instead.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Permission denied while seeding '{path}'")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to write placeholder '{path}': {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("Dir template for task '{task}' did not resolve: {error}")]
    Template { task: String, error: String },
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Task '{0}' is not registered")]
    UnknownTask(String),

    #[error("Failed to spawn command: {0}")]
    Spawn(io::Error),

    #[error("Command failed with exit code {0:?}")]
    CommandFailed(Option<i32>),
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for seeding operations
pub type SeedResult<T> = std::result::Result<T, SeedError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;

/// Helper function to determine if a seed error is a permission failure
/// (fatal at configuration time, never retried)
pub fn is_permission_denied(err: &SeedError) -> bool {
    matches!(err, SeedError::PermissionDenied { .. })
}
