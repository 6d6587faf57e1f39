//! Validation Service - main application orchestrator.
//!
//! This service coordinates the validation workflow:
//! 1. Accept a program (directly or from the store)
//! 2. Run the rule engine for the athlete's experience level
//! 3. Package the outcome as a [`ValidationReport`]

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{ApplicationError, ports::ProgramStore},
    domain::{
        DomainValidator as validator, ExperienceLevel, Program, ProgramRecord, ProgramValidator,
        RuleTag, ValidationResult, Violation,
    },
    error::{LiftcheckError, LiftcheckResult},
};

/// Outcome of validating one program, ready for display or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Store id, when the program came from a store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<Uuid>,
    pub program: String,
    pub experience_level: Option<ExperienceLevel>,
    pub validated_at: DateTime<Utc>,
    pub is_valid: bool,
    pub violations: Vec<Violation>,
    /// Violation count per rule. Rules with no violations are omitted.
    pub summary: BTreeMap<RuleTag, usize>,
}

impl ValidationReport {
    fn from_result(
        program_id: Option<Uuid>,
        program: &Program,
        level: Option<ExperienceLevel>,
        result: ValidationResult,
    ) -> Self {
        let mut summary = BTreeMap::new();
        for violation in &result {
            *summary.entry(violation.rule).or_insert(0) += 1;
        }

        Self {
            program_id,
            program: program.name.clone(),
            experience_level: level,
            validated_at: Utc::now(),
            is_valid: result.is_valid(),
            violations: result.into_violations(),
            summary,
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Main validation service.
///
/// Owns the rule engine and the program store used by batch runs.
pub struct ValidationService {
    store: Box<dyn ProgramStore>,
    validator: ProgramValidator,
}

impl ValidationService {
    /// Create a new validation service backed by `store`.
    pub fn new(store: Box<dyn ProgramStore>) -> Self {
        Self {
            store,
            validator: ProgramValidator::new(),
        }
    }

    /// Check structure, then add the program to the store.
    pub fn register(&self, program: Program) -> LiftcheckResult<Uuid> {
        validator::validate_program(&program).map_err(LiftcheckError::Domain)?;
        let id = self.store.insert(program)?;
        debug!(%id, "Program registered");
        Ok(id)
    }

    /// Validate a program that is not in the store.
    #[instrument(skip_all, fields(program = %program.name))]
    pub fn validate(&self, program: &Program, level: Option<ExperienceLevel>) -> ValidationReport {
        self.run(None, program, level)
    }

    /// Validate one stored program.
    pub fn validate_stored(
        &self,
        id: &Uuid,
        level: Option<ExperienceLevel>,
    ) -> LiftcheckResult<ValidationReport> {
        let record = self.store.get(id)?;
        Ok(self.validate_record(&record, level))
    }

    /// Validate the first stored program with this name.
    pub fn validate_named(
        &self,
        name: &str,
        level: Option<ExperienceLevel>,
    ) -> LiftcheckResult<ValidationReport> {
        let record = self
            .store
            .find_by_name(name)?
            .ok_or_else(|| ApplicationError::ProgramNotFound { id: name.into() })?;
        Ok(self.validate_record(&record, level))
    }

    /// Validate every stored program, in store order.
    #[instrument(skip_all)]
    pub fn validate_all(
        &self,
        level: Option<ExperienceLevel>,
    ) -> LiftcheckResult<Vec<ValidationReport>> {
        let records = self.store.list()?;
        info!(programs = records.len(), "Validating stored programs");

        Ok(records
            .iter()
            .map(|record| self.validate_record(record, level))
            .collect())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    #[instrument(skip_all, fields(program = %record.program.name, id = %record.uuid))]
    fn validate_record(
        &self,
        record: &ProgramRecord,
        level: Option<ExperienceLevel>,
    ) -> ValidationReport {
        self.run(Some(record.uuid), &record.program, level)
    }

    fn run(
        &self,
        id: Option<Uuid>,
        program: &Program,
        level: Option<ExperienceLevel>,
    ) -> ValidationReport {
        let result = self.validator.validate(program, level);
        let report = ValidationReport::from_result(id, program, level, result);

        if report.is_valid {
            info!("Program passed all rules");
        } else {
            warn!(violations = report.violation_count(), "Program broke training rules");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::{
        application::ports::MockProgramStore,
        domain::{
            Day, DomainError, Exercise, ExerciseCategory, MuscleGroup, TemplateExercise, Week,
            Weekday, WorkoutTemplate,
        },
    };

    fn five_week_program() -> Program {
        let squat = Exercise::new("Squat", ExerciseCategory::Strength)
            .compound()
            .with_primary(MuscleGroup::Quadriceps);
        let legs = WorkoutTemplate::new("Legs").with_exercise(TemplateExercise::new(squat, 4));

        (1..=5)
            .fold(Program::builder().name("Five Week"), |builder, n| {
                let day = Day::training(Weekday::Monday, legs.clone());
                builder.add_week(Week::new(n).with_day(day))
            })
            .build()
            .unwrap()
    }

    fn compliant_program() -> Program {
        Program::builder()
            .name("Short")
            .add_week(Week::new(1).with_day(Day::rest(Weekday::Sunday)))
            .build()
            .unwrap()
    }

    #[test]
    fn report_summarizes_violations() {
        let service = ValidationService::new(Box::new(MockProgramStore::new()));
        let report = service.validate(&five_week_program(), Some(ExperienceLevel::Intermediate));

        assert!(!report.is_valid);
        assert_eq!(report.program, "Five Week");
        assert_eq!(report.program_id, None);
        assert_eq!(report.violation_count(), 1);
        assert_eq!(report.summary.get(&RuleTag::DeloadRequired), Some(&1));
        assert!(report.violations[0].message.contains("5 weeks"));
    }

    #[test]
    fn compliant_report_has_empty_summary() {
        let service = ValidationService::new(Box::new(MockProgramStore::new()));
        let report = service.validate(&compliant_program(), None);

        assert!(report.is_valid);
        assert!(report.summary.is_empty());
        assert_eq!(report.experience_level, None);
    }

    #[test]
    fn validate_stored_reads_from_store() {
        let record = ProgramRecord::new(five_week_program());
        let id = record.uuid;

        let mut store = MockProgramStore::new();
        store
            .expect_get()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(record.clone()));

        let service = ValidationService::new(Box::new(store));
        let report = service.validate_stored(&id, None).unwrap();

        assert_eq!(report.program_id, Some(id));
        assert!(report.summary.contains_key(&RuleTag::DeloadRequired));
    }

    #[test]
    fn validate_stored_propagates_not_found() {
        let mut store = MockProgramStore::new();
        store.expect_get().returning(|id| {
            Err(ApplicationError::ProgramNotFound { id: id.to_string() }.into())
        });

        let service = ValidationService::new(Box::new(store));
        let err = service.validate_stored(&Uuid::new_v4(), None).unwrap_err();
        assert!(matches!(
            err,
            LiftcheckError::Application(ApplicationError::ProgramNotFound { .. })
        ));
    }

    #[test]
    fn validate_named_reports_missing_name() {
        let mut store = MockProgramStore::new();
        store.expect_find_by_name().returning(|_| Ok(None));

        let service = ValidationService::new(Box::new(store));
        let err = service.validate_named("Ghost", None).unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn validate_all_keeps_store_order() {
        let records = vec![
            ProgramRecord::new(compliant_program()),
            ProgramRecord::new(five_week_program()),
        ];

        let mut store = MockProgramStore::new();
        store
            .expect_list()
            .times(1)
            .returning(move || Ok(records.clone()));

        let service = ValidationService::new(Box::new(store));
        let reports = service.validate_all(Some(ExperienceLevel::Advanced)).unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports[0].is_valid);
        assert!(!reports[1].is_valid);
    }

    #[test]
    fn register_rejects_malformed_programs_before_storing() {
        let mut store = MockProgramStore::new();
        store.expect_insert().never();

        let program = Program::builder()
            .name("Dupes")
            .add_week(Week::new(1))
            .add_week(Week::new(1))
            .build()
            .unwrap();

        let service = ValidationService::new(Box::new(store));
        let err = service.register(program).unwrap_err();
        assert!(matches!(
            err,
            LiftcheckError::Domain(DomainError::DuplicateWeek { week_number: 1 })
        ));
    }

    #[test]
    fn register_stores_valid_programs() {
        let id = Uuid::new_v4();
        let mut store = MockProgramStore::new();
        store.expect_insert().times(1).returning(move |_| Ok(id));

        let service = ValidationService::new(Box::new(store));
        assert_eq!(service.register(compliant_program()).unwrap(), id);
    }

    #[test]
    fn report_serializes_public_tags() {
        let service = ValidationService::new(Box::new(MockProgramStore::new()));
        let report = service.validate(&five_week_program(), Some(ExperienceLevel::Novice));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["experience_level"], "novice");
        assert_eq!(json["summary"]["DeloadRequired"], 1);
        assert_eq!(json["violations"][0]["rule"], "DeloadRequired");
        assert!(json.get("program_id").is_none());
    }
}
