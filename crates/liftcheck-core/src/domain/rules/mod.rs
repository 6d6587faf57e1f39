//! Training-program rule engine.
//!
//! [`ProgramValidator`] runs five independent passes over a [`Program`]
//! snapshot and collects every breach into a [`ValidationResult`]:
//!
//! | # | Pass | Tags | Deload weeks |
//! |---|------|------|--------------|
//! | 1 | `deload`   | `DeloadRequired`, `DeloadVolumeInvalid` | checked |
//! | 2 | `volume`   | `VolumeExceedsMRV` | skipped |
//! | 3 | `cns`      | `CnsOverload` | checked |
//! | 4 | `beginner` | `BeginnerOvertraining` | skipped |
//! | 5 | `recovery` | `InsufficientRecovery` | checked |
//!
//! Passes never fail. Missing templates, unresolved exercises and empty
//! collections simply contribute nothing. The pass order fixes the order of
//! violations in the result; it does not change which violations appear.

mod beginner;
mod cns;
mod deload;
mod recovery;
mod result;
mod volume;

use tracing::{debug, instrument};

use crate::domain::{entities::Program, value_objects::ExperienceLevel};

pub use result::{RuleTag, ValidationResult, Violation};

/// Stateless rule engine. Cheap to copy and safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramValidator;

impl ProgramValidator {
    pub const fn new() -> Self {
        Self
    }

    /// Check `program` against every rule for an athlete at `level`.
    ///
    /// `None` means the level is unknown: the default MRV applies and the
    /// beginner-only rule is skipped.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            program = %program.name,
            level = level.map_or("unspecified", |l| l.as_str()),
            weeks = program.weeks.len()
        )
    )]
    pub fn validate(&self, program: &Program, level: Option<ExperienceLevel>) -> ValidationResult {
        let mut result = ValidationResult::default();

        deload::check(program, &mut result);
        volume::check(program, level, &mut result);
        cns::check(program, &mut result);
        beginner::check(program, level, &mut result);
        recovery::check(program, &mut result);

        debug!(violations = result.len(), "Rule passes complete");
        result
    }
}
