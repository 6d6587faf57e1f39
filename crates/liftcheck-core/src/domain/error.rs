// ============================================================================
// domain/error.rs - STRUCTURAL ERRORS FOR PROGRAM SNAPSHOTS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// These describe snapshots that cannot be constructed or accepted (a
/// duplicated week, an exercise with zero sets). Exercise-science rule
/// breaches are never `DomainError`s; they are `Violation`s.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    #[error("Week {week_number} appears more than once")]
    DuplicateWeek { week_number: u32 },

    #[error("Exercise '{exercise}' has invalid set count {set_count}")]
    InvalidSetCount { exercise: String, set_count: u32 },

    #[error("Exercise '{exercise}' has invalid rep range {min}-{max}")]
    InvalidRepRange {
        exercise: String,
        min: u32,
        max: u32,
    },

    #[error("Invalid program record: {0}")]
    InvalidRecord(String),

    // ========================================================================
    // Parse Errors
    // ========================================================================
    #[error("unknown {kind}: '{value}'")]
    UnknownValue { kind: &'static str, value: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProgram(msg) => vec![
                "Check the program definition".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicateWeek { week_number } => vec![
                format!("Week {} is defined twice", week_number),
                "Give every week a unique, 1-based number".into(),
            ],
            Self::InvalidSetCount { exercise, .. } => vec![
                format!("'{}' must have at least one set", exercise),
            ],
            Self::InvalidRepRange { exercise, min, max } => vec![
                format!("'{}' lists reps {}-{}", exercise, min, max),
                "The lower bound of a rep range cannot exceed the upper bound".into(),
            ],
            Self::UnknownValue { kind, .. } => vec![
                format!("Check the spelling of the {}", kind),
                match *kind {
                    "experience level" => {
                        "  • beginner, novice, intermediate, advanced, elite".into()
                    }
                    "weekday" => "  • monday .. sunday (or mon .. sun)".into(),
                    "muscle group" => "  • Try: liftcheck exercises to see muscle names".into(),
                    _ => "  • See documentation for accepted values".into(),
                },
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Add the '{}' field", field),
            ],
            Self::InvalidRecord(_) => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProgram(_)
            | Self::DuplicateWeek { .. }
            | Self::InvalidSetCount { .. }
            | Self::InvalidRepRange { .. }
            | Self::UnknownValue { .. }
            | Self::MissingRequiredField { .. } => ErrorCategory::Validation,
            Self::InvalidRecord(_) => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
