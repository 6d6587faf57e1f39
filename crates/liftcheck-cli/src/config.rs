//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `LIFTCHECK_<SECTION>__<KEY>`, e.g.
//!    `LIFTCHECK_DEFAULTS__LEVEL=beginner`
//! 3. Config file (`--config FILE`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use liftcheck_core::domain::ExperienceLevel;

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied when a manifest or flag says nothing.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Extra exercise definitions.
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Athlete level used when neither `--level` nor the manifest sets one.
    pub level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// TOML/JSON file with `[[exercises]]` merged over the built-ins.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file.map(PathBuf::as_path));
        debug!(path = %path.display(), "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default()).context("encoding defaults")?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix("LIFTCHECK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading {}", path.display()))?;

        config
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// The file `load` reads: the explicit path if given, else the default.
    pub fn active_path(explicit: Option<&Path>) -> PathBuf {
        explicit.map_or_else(Self::config_path, Path::to_path_buf)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.liftcheck.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "liftcheck", "liftcheck")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".liftcheck.toml"))
    }

    /// Parsed `defaults.level`.
    pub fn default_level(&self) -> CliResult<Option<ExperienceLevel>> {
        self.defaults
            .level
            .as_deref()
            .map(str::parse::<ExperienceLevel>)
            .transpose()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.level: {e}"),
                source: Some(Box::new(e)),
            })
    }
}
