//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use liftcheck_core::domain::{ExperienceLevel, MuscleGroup};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "liftcheck",
    bin_name = "liftcheck",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3cb} Training-program validator",
    long_about = "Liftcheck checks multi-week training programs against \
                  exercise-science rules: deloads, weekly volume, CNS load, \
                  beginner frequency and recovery windows.",
    after_help = "EXAMPLES:\n\
        \x20 liftcheck validate block.toml --level intermediate\n\
        \x20 liftcheck validate programs/ --output-format json\n\
        \x20 liftcheck exercises --muscle quads\n\
        \x20 liftcheck completions bash > /usr/share/bash-completion/completions/liftcheck",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate program manifests.
    #[command(
        visible_alias = "check",
        about = "Validate training programs",
        after_help = "EXAMPLES:\n\
            \x20 liftcheck validate block.toml\n\
            \x20 liftcheck validate block.toml --level beginner\n\
            \x20 liftcheck validate programs/ other.json --format json"
    )]
    Validate(ValidateArgs),

    /// List exercises in the catalog.
    #[command(
        visible_alias = "ls",
        about = "List known exercises",
        after_help = "EXAMPLES:\n\
            \x20 liftcheck exercises\n\
            \x20 liftcheck exercises --muscle hamstrings\n\
            \x20 liftcheck exercises --format csv"
    )]
    Exercises(ExercisesArgs),

    /// Describe every rule and its thresholds.
    #[command(about = "Show the rules and their limits")]
    Rules,

    /// Initialise a Liftcheck configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 liftcheck init                       # default location\n\
            \x20 liftcheck --config ./lc.toml init    # explicit file\n\
            \x20 liftcheck init --force               # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 liftcheck completions bash > ~/.local/share/bash-completion/completions/liftcheck\n\
            \x20 liftcheck completions zsh  > ~/.zfunc/_liftcheck\n\
            \x20 liftcheck completions fish > ~/.config/fish/completions/liftcheck.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Liftcheck configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 liftcheck config get defaults.level\n\
            \x20 liftcheck config list\n\
            \x20 liftcheck config path"
    )]
    Config(ConfigCommands),
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `liftcheck validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Manifest files or directories to validate.
    #[arg(value_name = "PATH", required = true, num_args = 1..)]
    pub paths: Vec<PathBuf>,

    /// Athlete experience level. Overrides the manifest and config.
    #[arg(
        short = 'l',
        long = "level",
        value_name = "LEVEL",
        value_enum,
        help = "Athlete experience level"
    )]
    pub level: Option<Level>,

    /// Report format for this run. Overrides `--output-format`.
    #[arg(long = "format", value_enum, help = "Report format")]
    pub format: Option<OutputFormat>,
}

// ── exercises ─────────────────────────────────────────────────────────────────

/// Arguments for `liftcheck exercises`.
#[derive(Debug, Args)]
pub struct ExercisesArgs {
    /// Only exercises with this primary muscle.
    #[arg(
        short = 'm',
        long = "muscle",
        value_name = "MUSCLE",
        value_parser = parse_muscle,
        help = "Filter by primary muscle (e.g. quads, chest)"
    )]
    pub muscle: Option<MuscleGroup>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

fn parse_muscle(value: &str) -> Result<MuscleGroup, String> {
    value.parse::<MuscleGroup>().map_err(|e| e.to_string())
}

/// Output format for the `exercises` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `liftcheck init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `liftcheck completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `liftcheck config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.level`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Athlete experience level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Novice,
    /// Also accepted as `mid`.
    #[value(alias = "mid")]
    Intermediate,
    Advanced,
    Elite,
}

impl From<Level> for ExperienceLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Beginner => Self::Beginner,
            Level::Novice => Self::Novice,
            Level::Intermediate => Self::Intermediate,
            Level::Advanced => Self::Advanced,
            Level::Elite => Self::Elite,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn level_converts_to_domain() {
        assert_eq!(
            ExperienceLevel::from(Level::Beginner),
            ExperienceLevel::Beginner
        );
        assert_eq!(ExperienceLevel::from(Level::Elite), ExperienceLevel::Elite);
    }

    #[test]
    fn parse_validate_command() {
        let cli = Cli::parse_from([
            "liftcheck",
            "validate",
            "a.toml",
            "programs/",
            "--level",
            "mid",
            "--format",
            "json",
        ]);
        if let Commands::Validate(args) = cli.command {
            assert_eq!(args.paths.len(), 2);
            assert_eq!(args.level, Some(Level::Intermediate));
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("expected Validate command");
        }
    }

    #[test]
    fn validate_requires_a_path() {
        assert!(Cli::try_parse_from(["liftcheck", "validate"]).is_err());
    }

    #[test]
    fn muscle_filter_accepts_aliases() {
        let cli = Cli::parse_from(["liftcheck", "exercises", "--muscle", "quads"]);
        if let Commands::Exercises(args) = cli.command {
            assert_eq!(args.muscle, Some(MuscleGroup::Quadriceps));
        } else {
            panic!("expected Exercises command");
        }

        assert!(Cli::try_parse_from(["liftcheck", "exercises", "--muscle", "neck"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["liftcheck", "--quiet", "--verbose", "rules"]);
        assert!(result.is_err());
    }
}
