pub mod exercise;
pub mod program;
pub mod template;

pub use crate::domain::DomainError;
pub use exercise::Exercise;
pub use program::{Day, Program, ProgramBuilder, ProgramRecord, Week};
pub use template::{TemplateExercise, WorkoutTemplate};
