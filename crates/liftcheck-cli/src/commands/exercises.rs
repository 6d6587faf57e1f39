//! Implementation of the `liftcheck exercises` command.

use liftcheck_core::{
    application::CatalogService,
    domain::{Exercise, MuscleGroup},
};

use crate::{
    cli::{ExercisesArgs, ListFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ExercisesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::build_catalog(&config)?;
    let service = CatalogService::new(Box::new(catalog));

    let exercises = match args.muscle {
        Some(muscle) => service.by_muscle(muscle),
        None => service.list(),
    };

    if exercises.is_empty() {
        if let Some(muscle) = args.muscle {
            output.warning(&format!("No exercises train {muscle} as a primary muscle"))?;
        }
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Exercises ({}):", exercises.len()))?;
            for exercise in &exercises {
                output.print(&format!(
                    "  {:<26} {:<12} {:<10} {}",
                    exercise.name,
                    exercise.category.as_str(),
                    if exercise.is_compound { "compound" } else { "isolation" },
                    muscles(&exercise.primary_muscles, ", "),
                ))?;
            }
        }

        // Written even with --quiet.
        ListFormat::Json => output.json(&exercises)?,

        ListFormat::List => {
            for exercise in &exercises {
                println!("{}", exercise.name);
            }
        }

        ListFormat::Csv => {
            println!("name,category,compound,primary,secondary");
            for exercise in &exercises {
                println!("{}", csv_row(exercise));
            }
        }
    }

    Ok(())
}

fn muscles(list: &[MuscleGroup], sep: &str) -> String {
    list.iter()
        .map(MuscleGroup::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

fn csv_row(exercise: &Exercise) -> String {
    format!(
        "{},{},{},{},{}",
        csv_field(&exercise.name),
        exercise.category,
        exercise.is_compound,
        muscles(&exercise.primary_muscles, ";"),
        muscles(&exercise.secondary_muscles, ";"),
    )
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use liftcheck_core::domain::ExerciseCategory;

    use super::*;

    #[test]
    fn csv_row_joins_muscles_with_semicolons() {
        let exercise = Exercise::new("Romanian Deadlift", ExerciseCategory::Strength)
            .compound()
            .with_primary(MuscleGroup::Hamstrings)
            .with_primary(MuscleGroup::Glutes)
            .with_secondary(MuscleGroup::Core);

        let row = csv_row(&exercise);
        assert!(row.starts_with("Romanian Deadlift,"));
        assert!(row.contains(",true,"));
        assert_eq!(row.matches(';').count(), 1);
    }

    #[test]
    fn csv_field_quotes_commas_and_quotes() {
        assert_eq!(csv_field("Squat"), "Squat");
        assert_eq!(csv_field("Curl, cable"), "\"Curl, cable\"");
        assert_eq!(csv_field("The \"Big\" One"), "\"The \"\"Big\"\" One\"");
    }

    #[test]
    fn csv_field_quotes_line_breaks() {
        assert_eq!(csv_field("Sled\nPush"), "\"Sled\nPush\"");
        assert_eq!(csv_field("Sled\rPush"), "\"Sled\rPush\"");
    }
}
