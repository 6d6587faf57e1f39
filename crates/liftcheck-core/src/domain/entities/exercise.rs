use serde::{Deserialize, Serialize};

use crate::domain::{
    error::DomainError,
    value_objects::{ExerciseCategory, MuscleGroup},
};

/// A movement from the exercise library.
///
/// Muscle lists are ordered and free of duplicates. Only
/// `primary_muscles` counts toward volume and recovery accounting;
/// `secondary_muscles` is carried for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(default)]
    pub is_compound: bool,
    pub category: ExerciseCategory,
    #[serde(default)]
    pub primary_muscles: Vec<MuscleGroup>,
    #[serde(default)]
    pub secondary_muscles: Vec<MuscleGroup>,
}

impl Exercise {
    /// An isolation movement with no muscles yet. Use the fluent setters to
    /// fill it in.
    pub fn new(name: impl Into<String>, category: ExerciseCategory) -> Self {
        Self {
            name: name.into(),
            is_compound: false,
            category,
            primary_muscles: Vec::new(),
            secondary_muscles: Vec::new(),
        }
    }

    /// Mark as a multi-joint movement.
    pub fn compound(mut self) -> Self {
        self.is_compound = true;
        self
    }

    pub fn with_primary(mut self, muscle: MuscleGroup) -> Self {
        if !self.primary_muscles.contains(&muscle) {
            self.primary_muscles.push(muscle);
        }
        self
    }

    pub fn with_secondary(mut self, muscle: MuscleGroup) -> Self {
        if !self.secondary_muscles.contains(&muscle) {
            self.secondary_muscles.push(muscle);
        }
        self
    }

    /// Compound strength or power work.
    pub fn is_high_cns_demand(&self) -> bool {
        self.is_compound && self.category.is_neurally_demanding()
    }

    pub fn targets(&self, muscle: MuscleGroup) -> bool {
        self.primary_muscles.contains(&muscle)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "exercise.name",
            });
        }
        Ok(())
    }
}
