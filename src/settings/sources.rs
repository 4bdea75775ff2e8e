use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, Environment, File};
use portgrid::app_dirs;

use crate::cli::CliArgs;

const ENV_PREFIX: &str = "portgrid";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
///
/// Later sources win: default files, then `--config` files, then
/// `PORTGRID__SECTION__KEY` environment variables.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(environment());

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Environment source for `PORTGRID__SECTION__KEY` variables.
///
/// Values stay strings; `output.columns` splits its own comma-separated form.
pub(super) fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(path) = app_dirs::config_file() {
        files.push(path);
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".portgrid.toml"));
        files.push(current_dir.join("portgrid.toml"));
    }

    files
}
