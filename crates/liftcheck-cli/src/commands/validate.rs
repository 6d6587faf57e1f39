//! `liftcheck validate`: load manifests and run the rule engine.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument};

use liftcheck_adapters::{InMemoryProgramStore, LoadedProgram, ProgramLoader};
use liftcheck_core::{
    application::{ValidationReport, ValidationService},
    domain::ExperienceLevel,
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One validated manifest.
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    #[serde(flatten)]
    report: ValidationReport,
}

#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let output = output.with_format(args.format);
    let catalog = super::build_catalog(&config)?;
    let loader = ProgramLoader::new(&catalog);

    let mut loaded = Vec::new();
    for path in &args.paths {
        if !path.exists() {
            return Err(CliError::NoProgramsFound {
                paths: path.display().to_string(),
            });
        }
        loaded.extend(loader.load_path(path)?);
    }

    if loaded.is_empty() {
        return Err(CliError::NoProgramsFound {
            paths: join_paths(&args.paths),
        });
    }

    let flag_level = args.level.map(ExperienceLevel::from);
    let config_level = config.default_level()?;
    let reports = validate_all(loaded, flag_level, config_level)?;

    match output.format() {
        OutputFormat::Json => output.json(&reports)?,
        _ => render_text(&output, &reports)?,
    }

    let invalid = reports.iter().filter(|r| !r.report.is_valid).count();
    info!(total = reports.len(), invalid, "validation finished");

    if invalid > 0 {
        return Err(CliError::ProgramInvalid {
            invalid,
            total: reports.len(),
        });
    }
    Ok(())
}

/// Register every program in a fresh store and validate each in load order.
///
/// Level precedence: `--level`, then the manifest, then `defaults.level`.
fn validate_all(
    loaded: Vec<LoadedProgram>,
    flag_level: Option<ExperienceLevel>,
    config_level: Option<ExperienceLevel>,
) -> CliResult<Vec<FileReport>> {
    let service = ValidationService::new(Box::new(InMemoryProgramStore::new()));

    loaded
        .into_iter()
        .map(|LoadedProgram { path, program, level }| -> CliResult<FileReport> {
            let level = flag_level.or(level).or(config_level);
            let id = service.register(program)?;
            let report = service.validate_stored(&id, level)?;
            Ok(FileReport { path, report })
        })
        .collect()
}

fn render_text(output: &OutputManager, reports: &[FileReport]) -> CliResult<()> {
    output.header(&format!("Validating {} program(s)", reports.len()))?;
    output.detail(&chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string())?;
    output.print("")?;

    for FileReport { path, report } in reports {
        let level = report
            .experience_level
            .map_or_else(|| "unknown level".to_string(), |l| l.to_string());
        let title = format!("{} ({}, {})", report.program, path.display(), level);

        if report.is_valid {
            output.success(&format!("{title}: compliant"))?;
            continue;
        }

        output.error(&format!(
            "{title}: {} violation(s)",
            report.violation_count()
        ))?;
        for violation in &report.violations {
            output.print(&format!("    {violation}"))?;
        }
    }

    let failed = reports.iter().filter(|r| !r.report.is_valid).count();
    output.print("")?;
    if failed == 0 {
        output.success(&format!("All {} program(s) passed", reports.len()))?;
    } else {
        output.warning(&format!(
            "{failed} of {} program(s) need changes",
            reports.len()
        ))?;
    }
    Ok(())
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use liftcheck_core::domain::{
        Day, Exercise, ExerciseCategory, MuscleGroup, Program, RuleTag, TemplateExercise, Week,
        Weekday, WorkoutTemplate,
    };

    use super::*;

    fn full_body() -> WorkoutTemplate {
        let squat = Exercise::new("Back Squat", ExerciseCategory::Strength)
            .compound()
            .with_primary(MuscleGroup::Quadriceps);
        WorkoutTemplate::new("Full Body").with_exercise(TemplateExercise::new(squat, 3))
    }

    fn four_day_week(number: u32) -> Week {
        [
            Weekday::Monday,
            Weekday::Wednesday,
            Weekday::Friday,
            Weekday::Sunday,
        ]
        .into_iter()
        .fold(Week::new(number), |week, day| {
            week.with_day(Day::training(day, full_body()))
        })
    }

    fn loaded(level: Option<ExperienceLevel>) -> LoadedProgram {
        let program = Program::builder()
            .name("Four Day")
            .add_week(four_day_week(1))
            .build()
            .unwrap();
        LoadedProgram {
            path: PathBuf::from("four.toml"),
            program,
            level,
        }
    }

    #[test]
    fn flag_level_beats_manifest_level() {
        let reports = validate_all(
            vec![loaded(Some(ExperienceLevel::Beginner))],
            Some(ExperienceLevel::Advanced),
            None,
        )
        .unwrap();
        assert_eq!(
            reports[0].report.experience_level,
            Some(ExperienceLevel::Advanced)
        );
        assert!(reports[0].report.is_valid);
    }

    #[test]
    fn manifest_level_beats_config_level() {
        let reports = validate_all(
            vec![loaded(Some(ExperienceLevel::Beginner))],
            None,
            Some(ExperienceLevel::Elite),
        )
        .unwrap();
        let report = &reports[0].report;
        assert_eq!(report.experience_level, Some(ExperienceLevel::Beginner));
        assert_eq!(report.summary.get(&RuleTag::BeginnerOvertraining), Some(&1));
    }

    #[test]
    fn config_level_is_the_fallback() {
        let reports =
            validate_all(vec![loaded(None)], None, Some(ExperienceLevel::Beginner)).unwrap();
        assert!(!reports[0].report.is_valid);

        let reports = validate_all(vec![loaded(None)], None, None).unwrap();
        assert_eq!(reports[0].report.experience_level, None);
    }

    #[test]
    fn json_report_carries_path_and_tags() {
        let reports =
            validate_all(vec![loaded(None)], Some(ExperienceLevel::Beginner), None).unwrap();
        let json = serde_json::to_value(&reports).unwrap();
        assert_eq!(json[0]["path"], "four.toml");
        assert_eq!(json[0]["program"], "Four Day");
        assert_eq!(json[0]["violations"][0]["rule"], "BeginnerOvertraining");
        assert_eq!(json[0]["summary"]["BeginnerOvertraining"], 1);
    }

    #[test]
    fn paths_are_joined_for_messages() {
        let joined = join_paths(&[PathBuf::from("a.toml"), PathBuf::from("dir")]);
        assert_eq!(joined, "a.toml, dir");
    }
}
