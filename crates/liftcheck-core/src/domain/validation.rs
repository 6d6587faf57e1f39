use crate::domain::{
    entities::{Exercise, Program, ProgramRecord},
    error::DomainError,
};

/// Centralized structural validation.
///
/// Loaders and stores call this before accepting a snapshot. The rule
/// engine never does: it tolerates whatever shape it is given.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_program(program: &Program) -> Result<(), DomainError> {
        program.validate()
    }

    pub fn validate_program_record(record: &ProgramRecord) -> Result<(), DomainError> {
        record.validate()
    }

    pub fn validate_exercise(exercise: &Exercise) -> Result<(), DomainError> {
        exercise.validate()
    }
}
