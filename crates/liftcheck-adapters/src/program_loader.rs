//! Filesystem-based program loader.
//!
//! Parses program manifests written in TOML or JSON, resolves exercise
//! names against an [`ExerciseCatalog`] and produces domain [`Program`]
//! snapshots ready for the rule engine.
//!
//! # `program.toml` format
//!
//! ```toml
//! [program]
//! name           = "Upper/Lower"
//! duration_weeks = 5               # optional; defaults to the number of weeks
//! level          = "intermediate"  # optional; athlete level for this program
//!
//! # Optional: exercises not in the catalog, visible to this manifest only.
//! [[exercises]]
//! name      = "Zercher Squat"
//! category  = "strength"
//! compound  = true
//! primary   = ["quads", "glutes"]
//! secondary = ["core"]
//!
//! [templates.upper]
//! name      = "Upper"              # optional; defaults to the table key
//! exercises = [
//!     { exercise = "Bench Press", sets = 4, reps = [6, 8] },
//!     { exercise = "Barbell Row", sets = 4 },
//! ]
//!
//! [[weeks]]
//! repeat = 4                       # optional; copies this week with consecutive numbers
//! days   = [
//!     { day = "mon", template = "upper" },
//!     { day = "tue", rest = true },
//! ]
//!
//! [[weeks]]
//! deload = true
//! volume = 0.5
//! days   = [{ day = "mon", template = "upper" }]
//! ```
//!
//! Week numbers may be given with `week = N`; otherwise they continue from
//! the previous week. JSON manifests use the same structure.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use liftcheck_core::{
    application::{ApplicationError, ports::ExerciseCatalog},
    domain::{
        Day, DomainValidator as validator, Exercise, ExerciseCategory, ExperienceLevel,
        MuscleGroup, Program, TemplateExercise, Week, Weekday, WorkoutTemplate,
        entities::template::DEFAULT_REP_RANGE,
    },
    error::LiftcheckResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a program manifest.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProgramManifest {
    pub program: ProgramSection,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    pub templates: HashMap<String, TemplateEntry>,
    #[serde(default)]
    pub weeks: Vec<WeekEntry>,
}

/// `[program]` section.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProgramSection {
    pub name: String,
    pub duration_weeks: Option<u32>,
    pub level: Option<String>,
}

/// `[[exercises]]` entry. Also the row format of catalog files.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ExerciseEntry {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub compound: bool,
    #[serde(default)]
    pub primary: Vec<String>,
    #[serde(default)]
    pub secondary: Vec<String>,
}

/// `[templates.<key>]` table.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TemplateEntry {
    pub name: Option<String>,
    #[serde(default)]
    pub exercises: Vec<PrescriptionEntry>,
}

/// One exercise prescription inside a template.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct PrescriptionEntry {
    pub exercise: String,
    pub sets: u32,
    pub reps: Option<(u32, u32)>,
}

/// `[[weeks]]` entry.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct WeekEntry {
    pub week: Option<u32>,
    #[serde(default)]
    pub deload: bool,
    pub volume: Option<f64>,
    pub repeat: Option<u32>,
    #[serde(default)]
    pub days: Vec<DayEntry>,
}

/// One day inside a week.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DayEntry {
    pub day: String,
    #[serde(default)]
    pub rest: bool,
    pub template: Option<String>,
}

/// Catalog file: a bare list of `[[exercises]]`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogManifest {
    #[serde(default)]
    exercises: Vec<ExerciseEntry>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Upper bound on `repeat` for a single `[[weeks]]` entry (ten years).
pub const MAX_REPEAT: u32 = 520;

/// Manifest encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Toml,
    Json,
}

impl ManifestFormat {
    /// `None` for anything other than `.toml` or `.json`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A parsed manifest, ready to validate.
#[derive(Debug, Clone)]
pub struct LoadedProgram {
    pub path: PathBuf,
    pub program: Program,
    /// Level declared in the manifest, if any.
    pub level: Option<ExperienceLevel>,
}

/// Loads program manifests, resolving exercise names against a catalog.
///
/// # Example
///
/// ```rust,no_run
/// use liftcheck_adapters::{InMemoryCatalog, ProgramLoader};
///
/// let catalog = InMemoryCatalog::with_builtin();
/// let loader = ProgramLoader::new(&catalog);
/// let loaded = loader.load_path("programs/")?;
/// println!("Loaded {} programs", loaded.len());
/// # Ok::<(), liftcheck_core::error::LiftcheckError>(())
/// ```
pub struct ProgramLoader<'a> {
    catalog: &'a dyn ExerciseCatalog,
}

impl<'a> ProgramLoader<'a> {
    pub fn new(catalog: &'a dyn ExerciseCatalog) -> Self {
        Self { catalog }
    }

    /// Load a single manifest, or every manifest under a directory.
    pub fn load_path(&self, path: impl AsRef<Path>) -> LiftcheckResult<Vec<LoadedProgram>> {
        let path = path.as_ref();
        if path.is_dir() {
            self.load_dir(path)
        } else {
            Ok(vec![self.load_file(path)?])
        }
    }

    /// Load every `.toml` / `.json` file under `dir`, sorted by path.
    ///
    /// Any manifest that fails to load fails the whole batch.
    #[instrument(skip(self), fields(dir = %dir.display()))]
    pub fn load_dir(&self, dir: &Path) -> LiftcheckResult<Vec<LoadedProgram>> {
        let mut programs = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::Io {
                path: e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
                reason: e.to_string(),
            })?;

            if entry.file_type().is_file() && ManifestFormat::from_path(entry.path()).is_some() {
                programs.push(self.load_file(entry.path())?);
            }
        }

        debug!(count = programs.len(), "finished loading manifests");
        Ok(programs)
    }

    /// Load one manifest file.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn load_file(&self, path: &Path) -> LiftcheckResult<LoadedProgram> {
        let format = manifest_format(path)?;

        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        self.parse_str(&raw, format, path)
    }

    /// Parse manifest text. `origin` is only used in error messages.
    pub fn parse_str(
        &self,
        raw: &str,
        format: ManifestFormat,
        origin: &Path,
    ) -> LiftcheckResult<LoadedProgram> {
        let manifest: ProgramManifest = decode(raw, format, origin)?;
        let (program, level) = self.build(manifest, origin)?;
        debug!(program = %program.name, weeks = program.weeks.len(), "loaded program");

        Ok(LoadedProgram {
            path: origin.to_path_buf(),
            program,
            level,
        })
    }

    fn build(
        &self,
        manifest: ProgramManifest,
        origin: &Path,
    ) -> LiftcheckResult<(Program, Option<ExperienceLevel>)> {
        let invalid = |reason: String| ApplicationError::ManifestParse {
            path: origin.to_path_buf(),
            reason,
        };

        let program_name = manifest.program.name;
        let level = manifest
            .program
            .level
            .as_deref()
            .map(ExperienceLevel::from_str)
            .transpose()
            .map_err(|e| invalid(e.to_string()))?;

        // Inline exercises shadow the catalog for this manifest.
        let mut local: HashMap<String, Exercise> = HashMap::new();
        for entry in &manifest.exercises {
            let exercise = exercise_from_entry(entry).map_err(invalid)?;
            local.insert(entry.name.trim().to_lowercase(), exercise);
        }

        let resolve = |name: &str| -> LiftcheckResult<Exercise> {
            local
                .get(&name.trim().to_lowercase())
                .cloned()
                .or_else(|| self.catalog.lookup(name))
                .ok_or_else(|| {
                    ApplicationError::UnknownExercise {
                        name: name.to_string(),
                        program: program_name.clone(),
                    }
                    .into()
                })
        };

        let mut templates: HashMap<String, WorkoutTemplate> = HashMap::new();
        for (key, entry) in &manifest.templates {
            let name = entry.name.clone().unwrap_or_else(|| key.clone());
            let mut template = WorkoutTemplate::new(name);
            for prescription in &entry.exercises {
                let (rep_min, rep_max) = prescription.reps.unwrap_or(DEFAULT_REP_RANGE);
                template = template.with_exercise(
                    TemplateExercise::new(resolve(&prescription.exercise)?, prescription.sets)
                        .with_reps(rep_min, rep_max),
                );
            }
            templates.insert(key.clone(), template);
        }

        let mut builder = Program::builder().name(program_name.clone());
        if let Some(duration) = manifest.program.duration_weeks {
            builder = builder.duration_weeks(duration);
        }

        let overflow = || invalid(format!("week numbers run past {}", u32::MAX));

        // `None` once a week numbered u32::MAX has been added.
        let mut next_number = Some(1);
        for entry in &manifest.weeks {
            let number = match entry.week {
                Some(number) => number,
                None => next_number.ok_or_else(overflow)?,
            };
            let repeat = entry.repeat.unwrap_or(1).max(1);
            if repeat > MAX_REPEAT {
                return Err(invalid(format!(
                    "week {number} repeats {repeat} times; the limit is {MAX_REPEAT}"
                ))
                .into());
            }

            let mut week = Week::new(number);
            if entry.deload {
                week = week.deload(entry.volume.unwrap_or(1.0));
            } else if let Some(volume) = entry.volume {
                week.volume_multiplier = volume;
            }

            for day in &entry.days {
                week = week.with_day(day_from_entry(day, &templates).map_err(invalid)?);
            }

            for copy in 0..repeat {
                if copy > 0 {
                    week.week_number = week.week_number.checked_add(1).ok_or_else(overflow)?;
                }
                builder = builder.add_week(week.clone());
            }
            next_number = week.week_number.checked_add(1);
        }

        let program = builder.build()?;
        validator::validate_program(&program).map_err(|e| invalid(e.to_string()))?;
        Ok((program, level))
    }
}

/// Load a catalog file containing only `[[exercises]]`.
#[instrument(fields(path = %path.display()))]
pub fn load_catalog_file(path: &Path) -> LiftcheckResult<Vec<Exercise>> {
    let format = manifest_format(path)?;

    let raw = fs::read_to_string(path).map_err(|e| ApplicationError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let manifest: CatalogManifest = decode(&raw, format, path)?;
    let exercises = manifest
        .exercises
        .iter()
        .map(exercise_from_entry)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|reason| ApplicationError::ManifestParse {
            path: path.to_path_buf(),
            reason,
        })?;

    debug!(count = exercises.len(), "loaded catalog exercises");
    Ok(exercises)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn manifest_format(path: &Path) -> LiftcheckResult<ManifestFormat> {
    ManifestFormat::from_path(path).ok_or_else(|| {
        ApplicationError::ManifestParse {
            path: path.to_path_buf(),
            reason: "expected a .toml or .json file".into(),
        }
        .into()
    })
}

fn decode<T: DeserializeOwned>(
    raw: &str,
    format: ManifestFormat,
    origin: &Path,
) -> LiftcheckResult<T> {
    let parsed = match format {
        ManifestFormat::Toml => toml::from_str(raw).map_err(|e| e.to_string()),
        ManifestFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| {
        ApplicationError::ManifestParse {
            path: origin.to_path_buf(),
            reason,
        }
        .into()
    })
}

fn exercise_from_entry(entry: &ExerciseEntry) -> Result<Exercise, String> {
    let category = ExerciseCategory::from_str(&entry.category).map_err(|e| e.to_string())?;

    let mut exercise = Exercise::new(entry.name.trim(), category);
    exercise.is_compound = entry.compound;

    for muscle in &entry.primary {
        exercise = exercise.with_primary(MuscleGroup::from_str(muscle).map_err(|e| e.to_string())?);
    }
    for muscle in &entry.secondary {
        exercise =
            exercise.with_secondary(MuscleGroup::from_str(muscle).map_err(|e| e.to_string())?);
    }

    validator::validate_exercise(&exercise).map_err(|e| e.to_string())?;
    Ok(exercise)
}

fn day_from_entry(
    entry: &DayEntry,
    templates: &HashMap<String, WorkoutTemplate>,
) -> Result<Day, String> {
    let weekday = Weekday::from_str(&entry.day).map_err(|e| e.to_string())?;

    if entry.rest {
        return Ok(Day::rest(weekday));
    }

    match &entry.template {
        Some(key) => templates
            .get(key)
            .cloned()
            .map(|template| Day::training(weekday, template))
            .ok_or_else(|| format!("{weekday} refers to unknown template '{key}'")),
        None => Ok(Day::unplanned(weekday)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use liftcheck_core::{
        application::ApplicationError,
        domain::{ProgramValidator, RuleTag},
        error::LiftcheckError,
    };
    use tempfile::TempDir;

    use super::*;
    use crate::InMemoryCatalog;

    // ── helpers ───────────────────────────────────────────────────────────

    const UPPER_LOWER: &str = r#"
[program]
name  = "Upper/Lower"
level = "intermediate"

[templates.upper]
name = "Upper"
exercises = [
    { exercise = "Bench Press", sets = 4, reps = [5, 8] },
    { exercise = "Barbell Row", sets = 4 },
]

[templates.lower]
exercises = [{ exercise = "back squat", sets = 5 }]

[[weeks]]
repeat = 5
days = [
    { day = "mon", template = "upper" },
    { day = "tue", template = "lower" },
    { day = "wed", rest = true },
    { day = "thu", template = "upper" },
    { day = "fri", template = "lower" },
]
"#;

    fn parse(raw: &str) -> LiftcheckResult<LoadedProgram> {
        let catalog = InMemoryCatalog::with_builtin();
        ProgramLoader::new(&catalog).parse_str(raw, ManifestFormat::Toml, Path::new("test.toml"))
    }

    fn reason(err: LiftcheckError) -> String {
        match err {
            LiftcheckError::Application(ApplicationError::ManifestParse { reason, .. }) => reason,
            other => panic!("expected ManifestParse, got {other:?}"),
        }
    }

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn repeat_expands_weeks_with_consecutive_numbers() {
        let loaded = parse(UPPER_LOWER).unwrap();
        let numbers: Vec<u32> = loaded.program.weeks.iter().map(|w| w.week_number).collect();

        assert_eq!(numbers, [1, 2, 3, 4, 5]);
        assert_eq!(loaded.program.duration_weeks, 5);
        assert_eq!(loaded.level, Some(ExperienceLevel::Intermediate));
    }

    #[test]
    fn templates_resolve_catalog_exercises() {
        let loaded = parse(UPPER_LOWER).unwrap();
        let monday = loaded.program.weeks[0].days[0].template.as_ref().unwrap();

        assert_eq!(monday.name, "Upper");
        assert_eq!(monday.exercises[0].rep_min, 5);
        assert_eq!(monday.exercises[1].rep_max, DEFAULT_REP_RANGE.1);

        let tuesday = loaded.program.weeks[0].days[1].template.as_ref().unwrap();
        assert_eq!(tuesday.name, "lower");
        assert_eq!(
            tuesday.exercises[0].exercise.as_ref().unwrap().name,
            "Back Squat"
        );
    }

    #[test]
    fn loaded_block_only_needs_a_deload() {
        let loaded = parse(UPPER_LOWER).unwrap();
        let result = ProgramValidator::new().validate(&loaded.program, loaded.level);

        assert_eq!(result.len(), 1);
        assert!(result.has(RuleTag::DeloadRequired));
    }

    #[test]
    fn deload_week_carries_volume_and_explicit_number() {
        let raw = r#"
[program]
name = "Short"

[[weeks]]
days = [{ day = "monday" }]

[[weeks]]
week = 4
deload = true
volume = 0.5
"#;
        let loaded = parse(raw).unwrap();
        let deload = &loaded.program.weeks[1];

        assert_eq!(deload.week_number, 4);
        assert!(deload.is_deload);
        assert_eq!(deload.volume_multiplier, 0.5);
        assert!(loaded.program.weeks[0].days[0].template.is_none());
        assert_eq!(loaded.level, None);
    }

    #[test]
    fn inline_exercises_extend_catalog() {
        let raw = r#"
[program]
name = "Custom"

[[exercises]]
name = "Zercher Squat"
category = "strength"
compound = true
primary = ["quads", "glutes"]

[templates.a]
exercises = [{ exercise = "zercher squat", sets = 3 }]

[[weeks]]
days = [{ day = "sat", template = "a" }]
"#;
        let loaded = parse(raw).unwrap();
        let template = loaded.program.weeks[0].days[0].template.as_ref().unwrap();
        let exercise = template.exercises[0].exercise.as_ref().unwrap();

        assert!(exercise.is_high_cns_demand());
        assert_eq!(
            exercise.primary_muscles,
            [MuscleGroup::Quadriceps, MuscleGroup::Glutes]
        );
    }

    #[test]
    fn json_manifests_share_the_format() {
        let raw = r#"{
            "program": { "name": "Json", "duration_weeks": 6 },
            "templates": { "a": { "exercises": [{ "exercise": "Deadlift", "sets": 3 }] } },
            "weeks": [{ "days": [{ "day": "Tue", "template": "a" }] }]
        }"#;
        let catalog = InMemoryCatalog::with_builtin();
        let loaded = ProgramLoader::new(&catalog)
            .parse_str(raw, ManifestFormat::Json, Path::new("p.json"))
            .unwrap();

        assert_eq!(loaded.program.duration_weeks, 6);
        assert_eq!(loaded.program.weeks.len(), 1);
    }

    #[test]
    fn last_possible_week_number_loads() {
        let raw = "[program]\nname = \"X\"\n[[weeks]]\nweek = 4294967295\n";
        let loaded = parse(raw).unwrap();
        assert_eq!(loaded.program.weeks[0].week_number, u32::MAX);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn week_numbers_past_u32_max_are_parse_errors() {
        let repeated = "[program]\nname = \"X\"\n[[weeks]]\nweek = 4294967295\nrepeat = 2\n";
        assert!(reason(parse(repeated).unwrap_err()).contains("week numbers run past"));

        let continued = "[program]\nname = \"X\"\n[[weeks]]\nweek = 4294967295\n[[weeks]]\n";
        assert!(reason(parse(continued).unwrap_err()).contains("week numbers run past"));
    }

    #[test]
    fn repeat_is_capped() {
        let huge = "[program]\nname = \"X\"\n[[weeks]]\nrepeat = 4000000000\n";
        assert!(reason(parse(huge).unwrap_err()).contains("limit is 520"));

        let at_limit = format!("[program]\nname = \"X\"\n[[weeks]]\nrepeat = {MAX_REPEAT}\n");
        assert_eq!(parse(&at_limit).unwrap().program.weeks.len(), 520);
    }

    #[test]
    fn unknown_exercise_names_the_program() {
        let raw = r#"
[program]
name = "Typos"

[templates.a]
exercises = [{ exercise = "Bench Pres", sets = 3 }]
"#;
        match parse(raw).unwrap_err() {
            LiftcheckError::Application(ApplicationError::UnknownExercise { name, program }) => {
                assert_eq!(name, "Bench Pres");
                assert_eq!(program, "Typos");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_template_key_is_a_parse_error() {
        let raw = r#"
[program]
name = "Missing"

[[weeks]]
days = [{ day = "mon", template = "nope" }]
"#;
        assert!(reason(parse(raw).unwrap_err()).contains("'nope'"));
    }

    #[test]
    fn bad_values_are_parse_errors() {
        let bad_day = "[program]\nname = \"X\"\n[[weeks]]\ndays = [{ day = \"someday\" }]\n";
        assert!(reason(parse(bad_day).unwrap_err()).contains("someday"));

        let bad_level = "[program]\nname = \"X\"\nlevel = \"pro\"\n";
        assert!(reason(parse(bad_level).unwrap_err()).contains("pro"));

        let unknown_field = "[program]\nname = \"X\"\nweeks_total = 3\n";
        assert!(parse(unknown_field).is_err());
    }

    #[test]
    fn structural_problems_are_rejected() {
        let raw = r#"
[program]
name = "Dupes"

[[weeks]]
week = 2

[[weeks]]
week = 2
"#;
        assert!(reason(parse(raw).unwrap_err()).contains("2"));

        let zero_sets = r#"
[program]
name = "Zero"

[templates.a]
exercises = [{ exercise = "Deadlift", sets = 0 }]

[[weeks]]
days = [{ day = "mon", template = "a" }]
"#;
        assert!(parse(zero_sets).is_err());
    }

    // ── filesystem ────────────────────────────────────────────────────────

    #[test]
    fn load_dir_walks_nested_manifests_in_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("nested")).unwrap();
        fs::write(temp.path().join("b.toml"), "[program]\nname = \"B\"\n").unwrap();
        fs::write(
            temp.path().join("nested/a.json"),
            r#"{ "program": { "name": "A" } }"#,
        )
        .unwrap();
        fs::write(temp.path().join("README.md"), "ignored").unwrap();

        let catalog = InMemoryCatalog::with_builtin();
        let loaded = ProgramLoader::new(&catalog).load_path(temp.path()).unwrap();
        let names: Vec<&str> = loaded.iter().map(|l| l.program.name.as_str()).collect();

        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let catalog = InMemoryCatalog::new();
        let err = ProgramLoader::new(&catalog)
            .load_file(Path::new("/does/not/exist.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            LiftcheckError::Application(ApplicationError::Io { .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let catalog = InMemoryCatalog::new();
        let err = ProgramLoader::new(&catalog)
            .load_file(Path::new("plan.yaml"))
            .unwrap_err();
        assert!(reason(err).contains(".toml"));
    }

    #[test]
    fn catalog_file_loads_exercises() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.toml");
        fs::write(
            &path,
            r#"
[[exercises]]
name = "Sled Push"
category = "conditioning"
primary = ["quads"]
"#,
        )
        .unwrap();

        let exercises = load_catalog_file(&path).unwrap();
        assert_eq!(exercises.len(), 1);
        assert_eq!(exercises[0].category, ExerciseCategory::Cardio);
    }
}
