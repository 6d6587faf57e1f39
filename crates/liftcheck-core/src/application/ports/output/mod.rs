//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `liftcheck-adapters` crate provides implementations.

use uuid::Uuid;

use crate::domain::{Exercise, Program, ProgramRecord};
use crate::error::LiftcheckResult;

/// Port for program storage and retrieval.
///
/// Implemented by:
/// - `liftcheck_adapters::program_store::InMemoryProgramStore`
#[cfg_attr(test, mockall::automock)]
pub trait ProgramStore: Send + Sync {
    /// Get a program by its instance id.
    ///
    /// Returns `ApplicationError::ProgramNotFound` when absent.
    fn get(&self, id: &Uuid) -> LiftcheckResult<ProgramRecord>;

    /// Find the first program with this exact name.
    fn find_by_name(&self, name: &str) -> LiftcheckResult<Option<ProgramRecord>>;

    /// List all stored programs, oldest first.
    fn list(&self) -> LiftcheckResult<Vec<ProgramRecord>>;

    /// Store a program and return its new id.
    fn insert(&self, program: Program) -> LiftcheckResult<Uuid>;

    /// Remove a program.
    fn remove(&self, id: &Uuid) -> LiftcheckResult<()>;
}

/// Port for exercise definitions.
///
/// Implemented by:
/// - `liftcheck_adapters::exercise_catalog::InMemoryCatalog` (built-ins plus manifest extras)
#[cfg_attr(test, mockall::automock)]
pub trait ExerciseCatalog: Send + Sync {
    /// Look up an exercise by name. Matching ignores case.
    fn lookup(&self, name: &str) -> Option<Exercise>;

    /// All known exercises, sorted by name.
    fn list(&self) -> Vec<Exercise>;
}
