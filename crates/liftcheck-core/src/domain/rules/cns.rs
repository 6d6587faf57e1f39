//! CNS load: bound runs of consecutive high-neurological-demand days.
//!
//! A violation is emitted for every day the streak stays above the limit,
//! so one five-day streak yields three violations.

use super::{RuleTag, ValidationResult};
use crate::domain::{entities::Program, thresholds::MAX_CONSECUTIVE_HIGH_CNS_DAYS};

pub(super) fn check(program: &Program, result: &mut ValidationResult) {
    for week in &program.weeks {
        let mut streak = 0u32;

        for day in week.days_in_weekday_order() {
            let Some(template) = day.workout() else {
                streak = 0;
                continue;
            };

            if !template.has_high_cns_demand() {
                streak = 0;
                continue;
            }

            streak += 1;
            if streak > MAX_CONSECUTIVE_HIGH_CNS_DAYS {
                result.push(
                    RuleTag::CnsOverload,
                    format!(
                        "Week {}: {} consecutive high-CNS days through {} (limit {})",
                        week.week_number, streak, day.weekday, MAX_CONSECUTIVE_HIGH_CNS_DAYS
                    ),
                );
            }
        }
    }
}
