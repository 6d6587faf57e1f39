//! Program aggregate: Program → Week → Day → WorkoutTemplate.
//!
//! ## Ownership
//!
//! A `Program` exclusively owns its weeks, a week owns its days, and a day
//! owns an optional template. Traversal is strictly top-down, so no type
//! holds a back-reference to its parent.
//!
//! ## Tolerance
//!
//! The snapshot is deliberately permissive. `weeks.len()` may differ from
//! `duration_weeks`, a week may hold any subset of weekdays in any order,
//! and a non-rest day may lack a template. `validate()` reports structural
//! problems for loaders that want to reject such input; the rule engine
//! never calls it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::template::WorkoutTemplate;
use crate::domain::{error::DomainError, value_objects::Weekday};

// ============================================================================
// Day
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub weekday: Weekday,
    #[serde(default)]
    pub rest_day: bool,
    #[serde(default)]
    pub template: Option<WorkoutTemplate>,
}

impl Day {
    pub fn training(weekday: Weekday, template: WorkoutTemplate) -> Self {
        Self {
            weekday,
            rest_day: false,
            template: Some(template),
        }
    }

    pub fn rest(weekday: Weekday) -> Self {
        Self {
            weekday,
            rest_day: true,
            template: None,
        }
    }

    /// A training day with nothing planned yet.
    pub fn unplanned(weekday: Weekday) -> Self {
        Self {
            weekday,
            rest_day: false,
            template: None,
        }
    }

    /// The template to account for, if this is a training day that has one.
    pub fn workout(&self) -> Option<&WorkoutTemplate> {
        if self.rest_day {
            None
        } else {
            self.template.as_ref()
        }
    }
}

// ============================================================================
// Week
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based position in the program.
    pub week_number: u32,
    #[serde(default)]
    pub is_deload: bool,
    /// Fraction of baseline volume, 1.0 for a normal week.
    #[serde(default = "baseline_multiplier")]
    pub volume_multiplier: f64,
    #[serde(default)]
    pub days: Vec<Day>,
}

fn baseline_multiplier() -> f64 {
    1.0
}

impl Week {
    pub fn new(week_number: u32) -> Self {
        Self {
            week_number,
            is_deload: false,
            volume_multiplier: baseline_multiplier(),
            days: Vec::new(),
        }
    }

    /// Flag as a deload week running at `multiplier` of baseline volume.
    pub fn deload(mut self, multiplier: f64) -> Self {
        self.is_deload = true;
        self.volume_multiplier = multiplier;
        self
    }

    pub fn with_day(mut self, day: Day) -> Self {
        self.days.push(day);
        self
    }

    /// Days not flagged as rest, whether or not a template is attached.
    pub fn training_day_count(&self) -> usize {
        self.days.iter().filter(|day| !day.rest_day).count()
    }

    /// Days sorted Monday → Sunday, independent of insertion order.
    ///
    /// The sort is stable, so duplicate weekdays keep their relative order.
    pub fn days_in_weekday_order(&self) -> Vec<&Day> {
        let mut days: Vec<&Day> = self.days.iter().collect();
        days.sort_by_key(|day| day.weekday);
        days
    }

    /// Training days that carry a template, in insertion order.
    pub fn workouts(&self) -> impl Iterator<Item = (Weekday, &WorkoutTemplate)> {
        self.days
            .iter()
            .filter_map(|day| day.workout().map(|template| (day.weekday, template)))
    }
}

// ============================================================================
// Program
// ============================================================================

/// Root of the snapshot graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub duration_weeks: u32,
    #[serde(default)]
    pub weeks: Vec<Week>,
}

impl Program {
    /// Start the builder pattern for fluent construction.
    pub fn builder() -> ProgramBuilder {
        ProgramBuilder::default()
    }

    pub fn has_deload_week(&self) -> bool {
        self.weeks.iter().any(|week| week.is_deload)
    }

    /// Validate construction invariants.
    ///
    /// Checks:
    /// 1. Name is non-empty
    /// 2. Week numbers are 1-based and unique
    /// 3. Every template entry has sets and an ordered rep range
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidProgram(
                "Program name cannot be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        for week in &self.weeks {
            if week.week_number == 0 {
                return Err(DomainError::InvalidProgram(
                    "Week numbers start at 1".into(),
                ));
            }
            if !seen.insert(week.week_number) {
                return Err(DomainError::DuplicateWeek {
                    week_number: week.week_number,
                });
            }
        }

        for week in &self.weeks {
            for day in &week.days {
                if let Some(template) = &day.template {
                    template.validate()?;
                }
            }
        }

        Ok(())
    }
}

/// Builder for [`Program`].
///
/// `duration_weeks` defaults to the number of weeks added.
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    name: Option<String>,
    duration_weeks: Option<u32>,
    weeks: Vec<Week>,
}

impl ProgramBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn duration_weeks(mut self, weeks: u32) -> Self {
        self.duration_weeks = Some(weeks);
        self
    }

    /// Add a single week (accumulates).
    pub fn add_week(mut self, week: Week) -> Self {
        self.weeks.push(week);
        self
    }

    /// Consume builder and construct `Program`.
    ///
    /// # Errors
    ///
    /// - `MissingRequiredField` if no name was set
    pub fn build(self) -> Result<Program, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let duration_weeks = self
            .duration_weeks
            .unwrap_or_else(|| u32::try_from(self.weeks.len()).unwrap_or(u32::MAX));

        Ok(Program {
            name,
            duration_weeks,
            weeks: self.weeks,
        })
    }
}

// ============================================================================
// ProgramRecord - Instance Identity
// ============================================================================

/// A stored program instance.
///
/// Two records may hold equal programs; the UUID tells them apart.
#[derive(Debug, Clone)]
pub struct ProgramRecord {
    /// Unique instance identifier (never nil except in error states)
    pub uuid: Uuid,
    pub program: Program,
}

impl ProgramRecord {
    /// Create a new record with random UUID.
    pub fn new(program: Program) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            program,
        }
    }

    /// Create with specific UUID (for reconstruction from persistence).
    pub fn with_uuid(uuid: Uuid, program: Program) -> Self {
        Self { uuid, program }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.uuid.is_nil() {
            return Err(DomainError::InvalidRecord("UUID cannot be nil".into()));
        }
        self.program.validate()
    }
}
