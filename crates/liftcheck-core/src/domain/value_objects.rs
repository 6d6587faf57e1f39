//! Domain value objects: ExperienceLevel, Weekday, MuscleGroup, ExerciseCategory.
//!
//! # Design
//!
//! These are pure value types: `Copy` and compared by value.
//! They hold NO threshold logic. All numeric limits live in
//! `thresholds.rs`. This file's only job is to define the types, their
//! string representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. If the variant carries a limit, add it to `thresholds.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ExperienceLevel ───────────────────────────────────────────────────────────

/// Training age of the athlete a program is written for.
///
/// Rules consume this as `Option<ExperienceLevel>`: `None` stands for an
/// unknown or unrecognised level and takes every rule's default branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Novice,
    Intermediate,
    Advanced,
    Elite,
}

impl ExperienceLevel {
    pub const ALL: [Self; 5] = [
        Self::Beginner,
        Self::Novice,
        Self::Intermediate,
        Self::Advanced,
        Self::Elite,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Novice => "novice",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Elite => "elite",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "novice" => Ok(Self::Novice),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "elite" => Ok(Self::Elite),
            other => Err(DomainError::UnknownValue {
                kind: "experience level",
                value: other.to_string(),
            }),
        }
    }
}

// ── Weekday ───────────────────────────────────────────────────────────────────

/// Day of the training week.
///
/// Variant order is calendar order, so the derived `Ord` sorts Monday first.
/// [`Weekday::ordinal`] gives Monday = 0 through Sunday = 6 for gap maths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Capitalised name for human-readable messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Self::Monday),
            "tuesday" | "tue" | "tues" => Ok(Self::Tuesday),
            "wednesday" | "wed" => Ok(Self::Wednesday),
            "thursday" | "thu" | "thurs" => Ok(Self::Thursday),
            "friday" | "fri" => Ok(Self::Friday),
            "saturday" | "sat" => Ok(Self::Saturday),
            "sunday" | "sun" => Ok(Self::Sunday),
            other => Err(DomainError::UnknownValue {
                kind: "weekday",
                value: other.to_string(),
            }),
        }
    }
}

// ── MuscleGroup ───────────────────────────────────────────────────────────────

/// Muscle group targeted by an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Lats,
    Traps,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Core,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
}

impl MuscleGroup {
    pub const ALL: [Self; 13] = [
        Self::Chest,
        Self::Back,
        Self::Lats,
        Self::Traps,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Core,
        Self::Quadriceps,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Lats => "lats",
            Self::Traps => "traps",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Core => "core",
            Self::Quadriceps => "quadriceps",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "chest" | "pecs" => Ok(Self::Chest),
            "back" | "upper_back" => Ok(Self::Back),
            "lats" | "latissimus" => Ok(Self::Lats),
            "traps" | "trapezius" => Ok(Self::Traps),
            "shoulders" | "delts" | "deltoids" => Ok(Self::Shoulders),
            "biceps" => Ok(Self::Biceps),
            "triceps" => Ok(Self::Triceps),
            "forearms" => Ok(Self::Forearms),
            "core" | "abs" | "abdominals" => Ok(Self::Core),
            "quadriceps" | "quads" => Ok(Self::Quadriceps),
            "hamstrings" | "hamstring" | "hams" => Ok(Self::Hamstrings),
            "glutes" | "glute" => Ok(Self::Glutes),
            "calves" | "calf" => Ok(Self::Calves),
            other => Err(DomainError::UnknownValue {
                kind: "muscle group",
                value: other.to_string(),
            }),
        }
    }
}

// ── ExerciseCategory ──────────────────────────────────────────────────────────

/// Training modality of an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Strength,
    Power,
    Hypertrophy,
    Plyometric,
    Cardio,
    Flexibility,
    Mobility,
}

impl ExerciseCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Hypertrophy => "hypertrophy",
            Self::Plyometric => "plyometric",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Mobility => "mobility",
        }
    }

    /// Categories whose compound movements tax the nervous system.
    ///
    /// Only this flag and `Exercise::is_compound` feed the CNS rule.
    pub const fn is_neurally_demanding(self) -> bool {
        matches!(self, Self::Strength | Self::Power)
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "power" => Ok(Self::Power),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "plyometric" | "plyo" => Ok(Self::Plyometric),
            "cardio" | "conditioning" => Ok(Self::Cardio),
            "flexibility" => Ok(Self::Flexibility),
            "mobility" => Ok(Self::Mobility),
            other => Err(DomainError::UnknownValue {
                kind: "exercise category",
                value: other.to_string(),
            }),
        }
    }
}
