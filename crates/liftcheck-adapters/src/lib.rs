//! Infrastructure adapters for Liftcheck.
//!
//! This crate implements the ports defined in `liftcheck-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_exercises;
pub mod exercise_catalog;
pub mod program_loader;
pub mod program_store;

// Re-export commonly used adapters
pub use exercise_catalog::InMemoryCatalog;
pub use program_loader::{LoadedProgram, ManifestFormat, ProgramLoader};
pub use program_store::InMemoryProgramStore;
