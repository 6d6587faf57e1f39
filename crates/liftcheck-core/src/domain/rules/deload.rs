//! Deload requirement: long programs need a recovery week, and that week
//! must actually reduce volume.

use super::{RuleTag, ValidationResult};
use crate::domain::{
    entities::Program,
    thresholds::{
        DELOAD_REQUIRED_MIN_WEEKS, DELOAD_VOLUME_MAX, DELOAD_VOLUME_MIN, deload_volume_in_range,
    },
};

pub(super) fn check(program: &Program, result: &mut ValidationResult) {
    if program.duration_weeks >= DELOAD_REQUIRED_MIN_WEEKS && !program.has_deload_week() {
        result.push(
            RuleTag::DeloadRequired,
            format!(
                "Program runs {} weeks with no deload week; programs of {} weeks or longer need one",
                program.duration_weeks, DELOAD_REQUIRED_MIN_WEEKS
            ),
        );
    }

    for week in program.weeks.iter().filter(|week| week.is_deload) {
        if !deload_volume_in_range(week.volume_multiplier) {
            result.push(
                RuleTag::DeloadVolumeInvalid,
                format!(
                    "Week {} deload runs at {:.0}% of baseline volume; expected {:.0}%-{:.0}%",
                    week.week_number,
                    week.volume_multiplier * 100.0,
                    DELOAD_VOLUME_MIN * 100.0,
                    DELOAD_VOLUME_MAX * 100.0
                ),
            );
        }
    }
}
