//! Error types for the gog CLI.
//!
//! Uses thiserror for derive macros. Every variant aborts the current
//! build or serve operation; nothing is retried or recovered locally.

use crate::exit_codes;
use crate::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for gog operations.
#[derive(Error, Debug)]
pub enum GogError {
    /// The source directory is missing from the working directory or is not a directory.
    #[error("source directory not found: {}", .0.display())]
    MissingSourceTree(PathBuf),

    /// The source directory exists but has no layout file.
    #[error("layout file not found: {}", .0.display())]
    MissingLayout(PathBuf),

    #[error("failed to create directory '{}': {source}", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Open, create, read, write, copy or walk failure.
    #[error("{context}: {source}")]
    FileIoFailed {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse template '{}': {source}", path.display())]
    TemplateParseFailed {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    #[error("failed to render template '{}': {source}", path.display())]
    TemplateRenderFailed {
        path: PathBuf,
        #[source]
        source: TemplateError,
    },

    /// The build hook exited non-zero or could not be spawned.
    #[error("build hook '{}' failed: {reason}", script.display())]
    BuildHookFailed { script: PathBuf, reason: String },

    /// The server address could not be resolved, bound, or served.
    #[error("server on '{addr}' failed: {reason}")]
    ServerBindFailed { addr: String, reason: String },
}

impl GogError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileIoFailed {
            context: context.into(),
            source,
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GogError::MissingSourceTree(_)
            | GogError::MissingLayout(_)
            | GogError::DirectoryCreationFailed { .. }
            | GogError::FileIoFailed { .. }
            | GogError::TemplateParseFailed { .. }
            | GogError::TemplateRenderFailed { .. }
            | GogError::BuildHookFailed { .. }
            | GogError::ServerBindFailed { .. } => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for gog operations.
pub type Result<T> = std::result::Result<T, GogError>;
