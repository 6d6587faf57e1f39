// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Liftcheck.
//!
//! This module contains the program snapshot and the rule engine that
//! checks it. All I/O concerns (manifest files, stores, catalogs) are
//! handled via ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable input**: The validator only ever borrows a `Program`
//! - **Rich domain model**: Traversal helpers live on the entities
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod rules;
pub mod thresholds;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    exercise::Exercise,
    program::{Day, Program, ProgramBuilder, ProgramRecord, Week},
    template::{TemplateExercise, WorkoutTemplate},
};

pub use error::{DomainError, ErrorCategory};

pub use rules::{ProgramValidator, RuleTag, ValidationResult, Violation};

pub use value_objects::{ExerciseCategory, ExperienceLevel, MuscleGroup, Weekday};

pub use validation::DomainValidator;
