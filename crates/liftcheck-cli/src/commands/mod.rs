//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod exercises;
pub mod init;
pub mod rules;
pub mod validate;

use tracing::debug;

use liftcheck_adapters::{InMemoryCatalog, program_loader::load_catalog_file};

use crate::{config::AppConfig, error::CliResult};

/// Built-in exercises plus `catalog.path` from the config, if set.
pub(crate) fn build_catalog(config: &AppConfig) -> CliResult<InMemoryCatalog> {
    let mut catalog = InMemoryCatalog::with_builtin();

    if let Some(path) = &config.catalog.path {
        let extra = load_catalog_file(path)?;
        debug!(path = %path.display(), count = extra.len(), "merging extra exercises");
        catalog.extend(extra)?;
    }

    Ok(catalog)
}
