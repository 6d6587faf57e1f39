//! In-memory exercise catalog with built-in exercises.

use std::collections::BTreeMap;

use tracing::debug;

use liftcheck_core::{
    application::ports::ExerciseCatalog,
    domain::{DomainValidator as validator, Exercise},
    error::LiftcheckResult,
};

use crate::builtin_exercises;

/// Exercise catalog keyed by lowercase name.
///
/// Later additions replace earlier entries with the same name, so user
/// definitions override built-ins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: BTreeMap<String, Exercise>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the built-in library loaded.
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        for exercise in builtin_exercises::all_exercises() {
            catalog.entries.insert(key(&exercise.name), exercise);
        }
        catalog
    }

    /// Add or replace an exercise after checking it has a name.
    pub fn add(&mut self, exercise: Exercise) -> LiftcheckResult<()> {
        validator::validate_exercise(&exercise)?;
        if self.entries.insert(key(&exercise.name), exercise).is_some() {
            debug!("Catalog entry replaced");
        }
        Ok(())
    }

    /// Add many exercises, stopping at the first invalid one.
    pub fn extend(&mut self, exercises: impl IntoIterator<Item = Exercise>) -> LiftcheckResult<()> {
        exercises.into_iter().try_for_each(|exercise| self.add(exercise))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ExerciseCatalog for InMemoryCatalog {
    fn lookup(&self, name: &str) -> Option<Exercise> {
        self.entries.get(&key(name)).cloned()
    }

    fn list(&self) -> Vec<Exercise> {
        self.entries.values().cloned().collect()
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}
