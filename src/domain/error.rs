use std::io;

use thiserror::Error;

/// Library-wide error type for nsgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// ACTION is not one of add, modify, remove.
    #[error("Unknown action '{0}': expected add, modify or remove")]
    UnknownAction(String),

    /// A template file required by the selected workflow is absent.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// The overlay directory targeted by a remove does not exist.
    #[error("Target directory not found: {0}")]
    TargetDirectoryMissing(String),

    /// The template directory already holds overlay templates.
    #[error("Templates already exist in {0}")]
    TemplatesExist(String),

    /// A resolved path escapes the repository root.
    #[error("Path escapes repository root: {0}")]
    PathTraversal(String),

    /// The operating system could not supply random bytes.
    #[error("Randomness source unavailable: {0}")]
    Randomness(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) | AppError::UnknownAction(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) | AppError::TargetDirectoryMissing(_) => {
                io::ErrorKind::NotFound
            }
            AppError::TemplatesExist(_) => io::ErrorKind::AlreadyExists,
            AppError::PathTraversal(_) => io::ErrorKind::PermissionDenied,
            AppError::Randomness(_) => io::ErrorKind::Other,
        }
    }
}
