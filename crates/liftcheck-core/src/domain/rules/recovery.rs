//! Recovery windows: 48 hours between sessions on the same primary muscle.
//!
//! Deload weeks are checked too. A muscle listed twice on the same day has a
//! gap of zero and is not flagged.

use std::collections::BTreeMap;

use super::{RuleTag, ValidationResult};
use crate::domain::{
    entities::{Program, Week},
    thresholds::MIN_RECOVERY_GAP_DAYS,
    value_objects::{MuscleGroup, Weekday},
};

pub(super) fn check(program: &Program, result: &mut ValidationResult) {
    for week in &program.weeks {
        for (muscle, mut days) in training_days_per_muscle(week) {
            days.sort();

            for pair in days.windows(2) {
                let (earlier, later) = (pair[0], pair[1]);
                let gap = later.ordinal() - earlier.ordinal();
                if gap > 0 && gap < MIN_RECOVERY_GAP_DAYS {
                    result.push(
                        RuleTag::InsufficientRecovery,
                        format!(
                            "Week {}: {} trained on {} and {} without 48h recovery",
                            week.week_number, muscle, earlier, later
                        ),
                    );
                }
            }
        }
    }
}

fn training_days_per_muscle(week: &Week) -> BTreeMap<MuscleGroup, Vec<Weekday>> {
    let mut schedule: BTreeMap<MuscleGroup, Vec<Weekday>> = BTreeMap::new();
    for (weekday, template) in week.workouts() {
        for (_, exercise) in template.resolved_exercises() {
            for muscle in &exercise.primary_muscles {
                schedule.entry(*muscle).or_default().push(weekday);
            }
        }
    }
    schedule
}
