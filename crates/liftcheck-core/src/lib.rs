//! Liftcheck Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Liftcheck,
//! a validator for multi-week training programs, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          liftcheck-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (ValidationService, CatalogService)   │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: ProgramStore, Catalog)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    liftcheck-adapters (Infrastructure)  │
//! │  (InMemoryProgramStore, ProgramLoader)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │   (Program, Week, ProgramValidator)     │
//! │         No I/O, no async                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use liftcheck_core::domain::{
//!     Day, Exercise, ExerciseCategory, ExperienceLevel, MuscleGroup, Program,
//!     ProgramValidator, TemplateExercise, Week, Weekday, WorkoutTemplate,
//! };
//!
//! let squat = Exercise::new("Back Squat", ExerciseCategory::Strength)
//!     .compound()
//!     .with_primary(MuscleGroup::Quadriceps);
//! let legs = WorkoutTemplate::new("Legs").with_exercise(TemplateExercise::new(squat, 5));
//!
//! let program = Program::builder()
//!     .name("Squat block")
//!     .add_week(Week::new(1).with_day(Day::training(Weekday::Monday, legs)))
//!     .build()
//!     .unwrap();
//!
//! let result = ProgramValidator::new().validate(&program, Some(ExperienceLevel::Intermediate));
//! assert!(result.is_valid());
//! ```

// Domain layer (snapshot types and the rule engine)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, ValidationReport, ValidationService,
        ports::{ExerciseCatalog, ProgramStore},
    };
    pub use crate::domain::{
        Day, Exercise, ExerciseCategory, ExperienceLevel, MuscleGroup, Program, ProgramRecord,
        ProgramValidator, RuleTag, TemplateExercise, ValidationResult, Violation, Week, Weekday,
        WorkoutTemplate,
    };
    pub use crate::error::{LiftcheckError, LiftcheckResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
