//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not broken
//! training rules. Malformed snapshots are `DomainError` from `crate::domain`,
//! and rule breaches are plain data in a `ValidationResult`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stored program matches the given id or name.
    #[error("Program not found: {id}")]
    ProgramNotFound { id: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Program store error")]
    StoreLockError,

    /// A manifest file could not be decoded.
    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// A manifest names an exercise the catalog does not know.
    #[error("Unknown exercise '{name}' in program '{program}'")]
    UnknownExercise { name: String, program: String },

    /// Reading a manifest or directory failed.
    #[error("I/O error at {path}: {reason}")]
    Io { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProgramNotFound { id } => vec![
                format!("No program registered as: {}", id),
                "Check the manifest path and program name".into(),
            ],
            Self::StoreLockError => vec![
                "The program store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ManifestParse { path, .. } => vec![
                format!("Fix the syntax in: {}", path.display()),
                "Manifests must be .toml or .json".into(),
                "Unknown keys are rejected; check field names against [program], [templates.*] and [[weeks]]".into(),
            ],
            Self::UnknownExercise { name, .. } => vec![
                format!("'{}' is not in the exercise catalog", name),
                "Try: liftcheck exercises to see known exercises".into(),
                "Or define it inline under [[exercises]] in the manifest".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the file exists and is readable".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProgramNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError | Self::Io { .. } => ErrorCategory::Internal,
            Self::ManifestParse { .. } | Self::UnknownExercise { .. } => ErrorCategory::Validation,
        }
    }
}
