//! Workout templates: the bundle of exercises performed on a training day.
//!
//! A template may be reused across days and weeks. The validator only ever
//! reads it.

use serde::{Deserialize, Serialize};

use super::exercise::Exercise;
use crate::domain::error::DomainError;

/// Rep range applied when none is given.
pub const DEFAULT_REP_RANGE: (u32, u32) = (8, 12);

/// One prescribed exercise inside a template.
///
/// `exercise` is optional because snapshots can arrive with dangling
/// references (a deleted library entry, a partially generated program).
/// An entry without an exercise contributes nothing to any rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    #[serde(default)]
    pub exercise: Option<Exercise>,
    pub set_count: u32,
    pub rep_min: u32,
    pub rep_max: u32,
}

impl TemplateExercise {
    pub fn new(exercise: Exercise, set_count: u32) -> Self {
        Self {
            exercise: Some(exercise),
            set_count,
            rep_min: DEFAULT_REP_RANGE.0,
            rep_max: DEFAULT_REP_RANGE.1,
        }
    }

    /// An entry whose exercise reference could not be resolved.
    pub fn unresolved(set_count: u32) -> Self {
        Self {
            exercise: None,
            set_count,
            rep_min: DEFAULT_REP_RANGE.0,
            rep_max: DEFAULT_REP_RANGE.1,
        }
    }

    pub fn with_reps(mut self, min: u32, max: u32) -> Self {
        self.rep_min = min;
        self.rep_max = max;
        self
    }

    fn display_name(&self) -> String {
        self.exercise
            .as_ref()
            .map_or_else(|| "<unresolved>".to_string(), |e| e.name.clone())
    }

    /// Check construction invariants: at least one set, ordered rep range.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.set_count == 0 {
            return Err(DomainError::InvalidSetCount {
                exercise: self.display_name(),
                set_count: self.set_count,
            });
        }
        if self.rep_min > self.rep_max {
            return Err(DomainError::InvalidRepRange {
                exercise: self.display_name(),
                min: self.rep_min,
                max: self.rep_max,
            });
        }
        if let Some(exercise) = &self.exercise {
            exercise.validate()?;
        }
        Ok(())
    }
}

/// A named session blueprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<TemplateExercise>,
}

impl WorkoutTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    pub fn with_exercise(mut self, entry: TemplateExercise) -> Self {
        self.exercises.push(entry);
        self
    }

    /// Entries paired with their exercise, skipping unresolved references.
    pub fn resolved_exercises(&self) -> impl Iterator<Item = (&TemplateExercise, &Exercise)> {
        self.exercises
            .iter()
            .filter_map(|entry| entry.exercise.as_ref().map(|ex| (entry, ex)))
    }

    /// Whether any resolved exercise is high CNS demand.
    pub fn has_high_cns_demand(&self) -> bool {
        self.resolved_exercises()
            .any(|(_, exercise)| exercise.is_high_cns_demand())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        self.exercises.iter().try_for_each(TemplateExercise::validate)
    }
}
