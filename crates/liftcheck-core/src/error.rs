//! Unified error handling for Liftcheck Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.
//!
//! Rule violations found in a training program are *not* errors: they are
//! returned as data in a [`crate::domain::ValidationResult`]. The types here
//! cover malformed input, missing programs and infrastructure failures.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Liftcheck Core operations.
#[derive(Debug, Error, Clone)]
pub enum LiftcheckError {
    /// Errors from the domain layer (malformed snapshot data).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl LiftcheckError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Liftcheck".into(),
                "Please report this issue at: https://github.com/cosecruz/liftcheck/issues".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::StoreLockError))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type LiftcheckResult<T> = Result<T, LiftcheckError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> LiftcheckResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> LiftcheckResult<T> {
        self.map_err(|e| LiftcheckError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_validation_category() {
        let err: LiftcheckError = DomainError::DuplicateWeek { week_number: 2 }.into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn not_found_is_preserved_through_application_layer() {
        let err: LiftcheckError = ApplicationError::ProgramNotFound { id: "x".into() }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(!err.is_retryable());
    }

    #[test]
    fn store_lock_is_retryable() {
        let err: LiftcheckError = ApplicationError::StoreLockError.into();
        assert!(err.is_retryable());
    }

    #[test]
    fn context_wraps_foreign_errors_as_internal() {
        let raw: Result<(), std::io::Error> = Err(std::io::Error::other("disk gone"));
        let err = raw.context("reading manifest").unwrap_err();
        assert!(matches!(err, LiftcheckError::Internal { .. }));
        assert!(err.to_string().contains("reading manifest: disk gone"));
    }
}
