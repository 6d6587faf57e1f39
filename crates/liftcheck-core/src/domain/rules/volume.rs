//! Volume limits: weekly sets per primary muscle capped at MRV.

use std::collections::BTreeMap;

use super::{RuleTag, ValidationResult};
use crate::domain::{
    entities::{Program, Week},
    thresholds::mrv_for,
    value_objects::{ExperienceLevel, MuscleGroup},
};

pub(super) fn check(
    program: &Program,
    level: Option<ExperienceLevel>,
    result: &mut ValidationResult,
) {
    let mrv = u64::from(mrv_for(level));

    for week in program.weeks.iter().filter(|week| !week.is_deload) {
        for (muscle, sets) in sets_per_muscle(week) {
            if sets > mrv {
                result.push(
                    RuleTag::VolumeExceedsMrv,
                    format!(
                        "Week {}: {} receives {} sets, above the MRV of {} sets/week",
                        week.week_number, muscle, sets, mrv
                    ),
                );
            }
        }
    }
}

/// Weekly set totals keyed by primary muscle.
///
/// Every primary muscle of an exercise receives the full set count.
/// Totals are `u64` so any number of `u32` set counts can be summed.
fn sets_per_muscle(week: &Week) -> BTreeMap<MuscleGroup, u64> {
    let mut volume = BTreeMap::new();
    for (_, template) in week.workouts() {
        for (entry, exercise) in template.resolved_exercises() {
            for muscle in &exercise.primary_muscles {
                *volume.entry(*muscle).or_insert(0) += u64::from(entry.set_count);
            }
        }
    }
    volume
}
