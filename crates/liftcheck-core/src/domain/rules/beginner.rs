//! Beginner constraints: cap weekly training frequency.

use super::{RuleTag, ValidationResult};
use crate::domain::{
    entities::Program, thresholds::BEGINNER_MAX_TRAINING_DAYS, value_objects::ExperienceLevel,
};

pub(super) fn check(
    program: &Program,
    level: Option<ExperienceLevel>,
    result: &mut ValidationResult,
) {
    // Novice shares the beginner MRV tier but not this limit.
    if level != Some(ExperienceLevel::Beginner) {
        return;
    }

    for week in program.weeks.iter().filter(|week| !week.is_deload) {
        let training_days = week.training_day_count();
        if training_days > BEGINNER_MAX_TRAINING_DAYS {
            result.push(
                RuleTag::BeginnerOvertraining,
                format!(
                    "Week {}: {} training days exceeds the beginner limit of {}",
                    week.week_number, training_days, BEGINNER_MAX_TRAINING_DAYS
                ),
            );
        }
    }
}
