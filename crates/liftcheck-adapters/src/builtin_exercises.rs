//! Built-in exercise library.
//!
//! [`all_exercises`] returns the movements that ship with Liftcheck. Program
//! manifests refer to them by name, and a manifest's own `[[exercises]]`
//! table or a user catalog file can add more.

use liftcheck_core::domain::{Exercise, ExerciseCategory, MuscleGroup};

use ExerciseCategory::{Cardio, Hypertrophy, Mobility, Plyometric, Power, Strength};
use MuscleGroup::{
    Back, Biceps, Calves, Chest, Core, Forearms, Glutes, Hamstrings, Lats, Quadriceps, Shoulders,
    Traps, Triceps,
};

/// Compact row: name, compound, category, primary, secondary.
type Row = (
    &'static str,
    bool,
    ExerciseCategory,
    &'static [MuscleGroup],
    &'static [MuscleGroup],
);

const LIBRARY: &[Row] = &[
    // ── Squat / hinge ──────────────────────────────────────────────────
    ("Back Squat", true, Strength, &[Quadriceps, Glutes], &[Hamstrings, Core]),
    ("Front Squat", true, Strength, &[Quadriceps], &[Glutes, Core]),
    ("Deadlift", true, Strength, &[Hamstrings, Glutes, Back], &[Traps, Forearms]),
    ("Romanian Deadlift", true, Hypertrophy, &[Hamstrings, Glutes], &[Back]),
    ("Leg Press", true, Hypertrophy, &[Quadriceps], &[Glutes]),
    ("Walking Lunge", true, Hypertrophy, &[Quadriceps, Glutes], &[Hamstrings]),
    ("Leg Curl", false, Hypertrophy, &[Hamstrings], &[]),
    ("Leg Extension", false, Hypertrophy, &[Quadriceps], &[]),
    ("Standing Calf Raise", false, Hypertrophy, &[Calves], &[]),
    // ── Push ───────────────────────────────────────────────────────────
    ("Bench Press", true, Strength, &[Chest], &[Triceps, Shoulders]),
    ("Incline Dumbbell Press", true, Hypertrophy, &[Chest], &[Shoulders, Triceps]),
    ("Overhead Press", true, Strength, &[Shoulders], &[Triceps, Core]),
    ("Dip", true, Hypertrophy, &[Chest, Triceps], &[Shoulders]),
    ("Lateral Raise", false, Hypertrophy, &[Shoulders], &[]),
    ("Triceps Pushdown", false, Hypertrophy, &[Triceps], &[]),
    // ── Pull ───────────────────────────────────────────────────────────
    ("Barbell Row", true, Strength, &[Back, Lats], &[Biceps]),
    ("Pull-Up", true, Strength, &[Lats], &[Biceps, Back]),
    ("Lat Pulldown", true, Hypertrophy, &[Lats], &[Biceps]),
    ("Face Pull", false, Hypertrophy, &[Shoulders, Traps], &[]),
    ("Barbell Curl", false, Hypertrophy, &[Biceps], &[Forearms]),
    ("Shrug", false, Hypertrophy, &[Traps], &[]),
    // ── Power / conditioning ───────────────────────────────────────────
    ("Power Clean", true, Power, &[Quadriceps, Hamstrings, Traps], &[Glutes, Back]),
    ("Box Jump", true, Plyometric, &[Quadriceps, Glutes], &[Calves]),
    ("Plank", false, Hypertrophy, &[Core], &[]),
    ("Rowing Machine", false, Cardio, &[], &[Back, Quadriceps]),
    ("Hip Mobility Flow", false, Mobility, &[], &[]),
];

/// Every built-in exercise, in library order.
pub fn all_exercises() -> Vec<Exercise> {
    LIBRARY
        .iter()
        .map(|(name, compound, category, primary, secondary)| {
            let mut exercise = Exercise::new(*name, *category);
            exercise.is_compound = *compound;
            let exercise = primary.iter().fold(exercise, |e, m| e.with_primary(*m));
            secondary.iter().fold(exercise, |e, m| e.with_secondary(*m))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn names_are_unique_ignoring_case() {
        let exercises = all_exercises();
        let names: HashSet<String> = exercises.iter().map(|e| e.name.to_lowercase()).collect();
        assert_eq!(names.len(), exercises.len());
    }

    #[test]
    fn every_builtin_is_structurally_valid() {
        for exercise in all_exercises() {
            assert!(exercise.validate().is_ok(), "{} is invalid", exercise.name);
        }
    }

    #[test]
    fn main_lifts_are_high_cns() {
        let exercises = all_exercises();
        for name in ["Back Squat", "Deadlift", "Bench Press", "Power Clean"] {
            let lift = exercises.iter().find(|e| e.name == name).unwrap();
            assert!(lift.is_high_cns_demand(), "{name} should be high CNS");
        }
        let curl = exercises.iter().find(|e| e.name == "Barbell Curl").unwrap();
        assert!(!curl.is_high_cns_demand());
    }
}
