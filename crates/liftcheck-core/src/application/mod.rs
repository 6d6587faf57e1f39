//! Application layer for Liftcheck.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! training rules itself. All rules live in `crate::domain::rules`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CatalogService,
    ValidationReport, // DTO for a single validation run
    ValidationService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{ExerciseCatalog, ProgramStore};

pub use error::ApplicationError;
