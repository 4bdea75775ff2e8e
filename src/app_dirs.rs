//! On-disk locations `portgrid` reads from.
//!
//! Two files live outside the working directory: `config.toml`, the
//! lowest-priority settings layer, and `ports.toml`, the catalog loaded when
//! neither `--catalog` nor `catalog.path` names one. `PORTGRID_CONFIG_DIR` and
//! `PORTGRID_DATA_DIR` replace the platform directories for each.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// Name of the user settings file inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";
/// Name of the default catalog inside the data directory.
pub const CATALOG_FILE: &str = "ports.toml";

#[derive(Debug, Clone, Copy)]
enum Location {
    Config,
    Data,
}

impl Location {
    fn override_var(self) -> &'static str {
        match self {
            Self::Config => "PORTGRID_CONFIG_DIR",
            Self::Data => "PORTGRID_DATA_DIR",
        }
    }

    fn platform_dir(self, dirs: &ProjectDirs) -> &Path {
        match self {
            Self::Config => dirs.config_local_dir(),
            Self::Data => dirs.data_local_dir(),
        }
    }

    fn resolve(self) -> Result<PathBuf> {
        if let Some(dir) = override_dir(env::var_os(self.override_var())) {
            return Ok(dir);
        }

        let dirs = ProjectDirs::from("com", "portgrid", "portgrid")
            .ok_or_else(|| anyhow!("no home directory to place portgrid files in"))?;
        Ok(self.platform_dir(&dirs).to_path_buf())
    }
}

// Empty counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Directory searched for [`CONFIG_FILE`].
pub fn get_config_dir() -> Result<PathBuf> {
    Location::Config.resolve()
}

/// Directory holding the default [`CATALOG_FILE`].
pub fn get_data_dir() -> Result<PathBuf> {
    Location::Data.resolve()
}

/// Full path of the user settings file. It may not exist.
pub fn config_file() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// Catalog loaded when no path is configured.
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(CATALOG_FILE))
}
