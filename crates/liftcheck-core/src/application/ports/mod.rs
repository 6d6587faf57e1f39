//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `liftcheck-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProgramStore`: Program storage/retrieval
//!   - `ExerciseCatalog`: Exercise definitions referenced by name
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{ExerciseCatalog, ProgramStore};

#[cfg(test)]
pub use output::{MockExerciseCatalog, MockProgramStore};
