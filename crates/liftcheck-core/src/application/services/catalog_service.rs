//! Catalog Service - exercise library queries.
//!
//! Separated from ValidationService for single responsibility.

use crate::{
    application::ports::ExerciseCatalog,
    domain::{Exercise, MuscleGroup},
};

/// Service for exercise catalog operations.
pub struct CatalogService {
    catalog: Box<dyn ExerciseCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Box<dyn ExerciseCatalog>) -> Self {
        Self { catalog }
    }

    /// List all exercises.
    pub fn list(&self) -> Vec<Exercise> {
        self.catalog.list()
    }

    /// Exercises that train `muscle` as a primary mover.
    pub fn by_muscle(&self, muscle: MuscleGroup) -> Vec<Exercise> {
        self.catalog
            .list()
            .into_iter()
            .filter(|exercise| exercise.targets(muscle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{application::ports::MockExerciseCatalog, domain::ExerciseCategory};

    fn library() -> Vec<Exercise> {
        vec![
            Exercise::new("Bench Press", ExerciseCategory::Strength)
                .compound()
                .with_primary(MuscleGroup::Chest)
                .with_secondary(MuscleGroup::Triceps),
            Exercise::new("Skull Crusher", ExerciseCategory::Hypertrophy)
                .with_primary(MuscleGroup::Triceps),
        ]
    }

    #[test]
    fn by_muscle_matches_primary_only() {
        let mut catalog = MockExerciseCatalog::new();
        catalog.expect_list().returning(library);

        let service = CatalogService::new(Box::new(catalog));
        let triceps = service.by_muscle(MuscleGroup::Triceps);

        assert_eq!(triceps.len(), 1);
        assert_eq!(triceps[0].name, "Skull Crusher");
    }
}
