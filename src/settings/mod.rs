//! Layered settings for the `portgrid` binary.
//!
//! Raw sections are deserialized from the merged `config` sources, CLI flags
//! are written over them, and [`RawConfig::resolve`] validates the result into
//! a [`ResolvedConfig`].

mod errors;
mod sources;

use std::collections::HashSet;
use std::fmt::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use portgrid::app_dirs;
use serde::Deserialize;

use crate::cli::{CliArgs, Column, OutputFormat};
use errors::SettingError;
use sources::build_config;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    catalog: CatalogSection,
    search: SearchSection,
    output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CatalogSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SearchSection {
    initial_query: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OutputSection {
    format: Option<String>,
    columns: Option<ColumnList>,
}

/// Column names as a TOML array or a comma-separated string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ColumnList {
    Items(Vec<String>),
    Joined(String),
}

impl ColumnList {
    fn into_items(self) -> Vec<String> {
        match self {
            Self::Items(items) => items,
            Self::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        }
    }
}

/// Settings after merging every source and validating values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub(crate) catalog_path: PathBuf,
    pub(crate) initial_query: String,
    pub(crate) output: OutputFormat,
    pub(crate) columns: Vec<Column>,
}

impl ResolvedConfig {
    pub(crate) fn summary(&self) -> String {
        let mut text = String::from("Effective configuration:\n");
        let _ = writeln!(text, "  Catalog: {}", self.catalog_path.display());
        if self.initial_query.is_empty() {
            let _ = writeln!(text, "  Initial query: (none)");
        } else {
            let _ = writeln!(text, "  Initial query: '{}'", self.initial_query);
        }
        let _ = writeln!(text, "  Output: {}", self.output.as_str());
        let columns: Vec<&str> = self.columns.iter().map(|column| column.as_str()).collect();
        let _ = writeln!(text, "  Columns: {}", columns.join(", "));
        text
    }
}

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.catalog.clone() {
            self.catalog.path = Some(path);
        }
        if let Some(format) = cli.output {
            self.output.format = Some(format.as_str().to_string());
        }
        if let Some(columns) = &cli.columns {
            self.output.columns = Some(ColumnList::Items(
                columns
                    .iter()
                    .map(|column| column.as_str().to_string())
                    .collect(),
            ));
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let catalog_path = match self.catalog.path {
            Some(path) => path,
            None => app_dirs::default_catalog_path()
                .context("failed to locate the default catalog")?,
        };

        let output = match self.output.format {
            Some(value) => parse_format(&value)?,
            None => OutputFormat::default(),
        };

        let columns = match self.output.columns {
            Some(values) => parse_columns(values.into_items())?,
            None => Vec::new(),
        };
        let columns = if columns.is_empty() {
            Column::DEFAULTS.to_vec()
        } else {
            columns
        };

        Ok(ResolvedConfig {
            catalog_path,
            initial_query: self.search.initial_query.unwrap_or_default(),
            output,
            columns,
        })
    }
}

fn parse_format(value: &str) -> Result<OutputFormat, SettingError> {
    OutputFormat::from_str(value.trim(), true)
        .map_err(|_| SettingError::invalid("output.format", value, "expected plain or json"))
}

/// Parse column names, skipping blanks and repeated entries.
fn parse_columns(values: Vec<String>) -> Result<Vec<Column>, SettingError> {
    let mut seen = HashSet::new();
    let mut columns = Vec::new();
    for value in values {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let column = Column::from_str(trimmed, true).map_err(|_| {
            SettingError::invalid("output.columns", trimmed, "unknown column")
        })?;
        if seen.insert(column.as_str()) {
            columns.push(column);
        }
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;
    use config::{Config, Map};
    use tempfile::tempdir;

    use super::*;

    fn cli(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("portgrid").chain(args.iter().copied()))
            .expect("parses")
    }

    #[test]
    fn defaults_apply_without_sources() {
        let resolved = RawConfig::default().resolve().unwrap();
        assert!(resolved.catalog_path.ends_with(app_dirs::CATALOG_FILE));
        assert_eq!(resolved.initial_query, "");
        assert_eq!(resolved.output, OutputFormat::Plain);
        assert_eq!(resolved.columns, Column::DEFAULTS);
    }

    #[test]
    fn config_file_values_are_resolved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            r#"
                [catalog]
                path = "/srv/ports.json"

                [search]
                initial_query = " Vim"

                [output]
                format = "JSON"
                columns = ["name", " stars ", "", "name"]
            "#,
        )
        .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let resolved = load(&cli(&["-n", "-c", path_arg.as_str()])).unwrap();
        assert_eq!(resolved.catalog_path, PathBuf::from("/srv/ports.json"));
        assert_eq!(resolved.initial_query, " Vim");
        assert_eq!(resolved.output, OutputFormat::Json);
        assert_eq!(resolved.columns, [Column::Name, Column::Stars]);
    }

    #[test]
    fn cli_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "[catalog]\npath = \"from-file.toml\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let resolved = load(&cli(&[
            "-n",
            "-c",
            path_arg.as_str(),
            "--catalog",
            "from-cli.json",
            "-o",
            "plain",
            "--columns",
            "url",
        ]))
        .unwrap();
        assert_eq!(resolved.catalog_path, PathBuf::from("from-cli.json"));
        assert_eq!(resolved.output, OutputFormat::Plain);
        assert_eq!(resolved.columns, [Column::Url]);
    }

    fn resolve_env(vars: &[(&str, &str)]) -> ResolvedConfig {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let raw: RawConfig = Config::builder()
            .add_source(sources::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        raw.resolve().unwrap()
    }

    #[test]
    fn environment_values_are_taken_verbatim() {
        let resolved = resolve_env(&[
            ("PORTGRID__SEARCH__INITIAL_QUERY", "007"),
            ("PORTGRID__OUTPUT__COLUMNS", "name, stars"),
            ("PORTGRID__OUTPUT__FORMAT", "JSON"),
        ]);
        assert_eq!(resolved.initial_query, "007");
        assert_eq!(resolved.columns, [Column::Name, Column::Stars]);
        assert_eq!(resolved.output, OutputFormat::Json);

        let resolved = resolve_env(&[("PORTGRID__SEARCH__INITIAL_QUERY", "TRUE")]);
        assert_eq!(resolved.initial_query, "TRUE");
    }

    #[test]
    fn comma_separated_columns_are_accepted_in_files() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[output]\ncolumns = \"repository,logo\"\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let resolved = load(&cli(&["-n", "-c", path_arg.as_str()])).unwrap();
        assert_eq!(resolved.columns, [Column::Repository, Column::Logo]);
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[output]\ntheme = \"nord\"\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        assert!(load(&cli(&["-n", "-c", path_arg.as_str()])).is_err());
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path_arg = path.to_string_lossy().into_owned();
        assert!(load(&cli(&["-n", "-c", path_arg.as_str()])).is_err());
    }

    #[test]
    fn invalid_values_name_the_key() {
        let err = parse_format("yaml").unwrap_err();
        assert_eq!(err.key, "output.format");
        assert!(err.to_string().contains("yaml"));

        let err = parse_columns(vec!["name".into(), "color".into()]).unwrap_err();
        assert_eq!(err.key, "output.columns");
        assert_eq!(err.value, "color");
    }

    #[test]
    fn blank_column_list_falls_back_to_defaults() {
        let raw = RawConfig {
            output: OutputSection {
                format: None,
                columns: Some(ColumnList::Items(vec![" ".into()])),
            },
            ..RawConfig::default()
        };
        assert_eq!(raw.resolve().unwrap().columns, Column::DEFAULTS);
    }

    #[test]
    fn summary_lists_effective_values() {
        let resolved = ResolvedConfig {
            catalog_path: PathBuf::from("ports.json"),
            initial_query: String::new(),
            output: OutputFormat::Json,
            columns: vec![Column::Project, Column::Url],
        };
        let summary = resolved.summary();
        assert!(summary.contains("Catalog: ports.json"));
        assert!(summary.contains("Initial query: (none)"));
        assert!(summary.contains("Output: json"));
        assert!(summary.contains("Columns: project, url"));
    }
}
