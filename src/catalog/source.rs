use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{Catalog, CatalogError};
use crate::types::Port;

/// Serialization formats a catalog file can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Infer the format from the file extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnsupportedFormat`] when the extension is
    /// missing or is neither `json` nor `toml`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// On-disk shape of a catalog: a list of ports under a `ports` key.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    ports: Vec<Port>,
}

impl Catalog {
    /// Load a catalog from a `.json` or `.toml` metadata file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, fails to deserialize, or contains a port without search
    /// terms.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents, format)?;
        debug!(path = %path.display(), ports = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Parse a catalog from a string in the given format.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn parse(contents: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        match format {
            CatalogFormat::Json => Self::from_json_str(contents),
            CatalogFormat::Toml => Self::from_toml_str(contents),
        }
    }

    /// Parse a JSON document of the form `{ "ports": [...] }`.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(contents)?;
        document.into_catalog()
    }

    /// Parse a TOML document made of `[[ports]]` tables.
    ///
    /// # Errors
    ///
    /// See [`Catalog::load`].
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(contents)?;
        document.into_catalog()
    }
}

impl CatalogDocument {
    fn into_catalog(self) -> Result<Catalog, CatalogError> {
        if let Some(port) = self
            .ports
            .iter()
            .find(|port| port.search_terms().is_empty())
        {
            return Err(CatalogError::MissingSearchTerms {
                name: port.name.clone(),
            });
        }

        Ok(Catalog::new(self.ports))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::tempdir;

    use super::*;

    const JSON_CATALOG: &str = r#"{
        "ports": [
            { "name": "redis", "project_name": "Nord Redis", "search_terms": ["redis", "cache"] },
            { "name": "nginx", "project_name": "Nord Nginx", "search_terms": ["NGINX", "proxy"],
              "release_latest": { "version": "1.0.0", "url": "https://example.com/1.0.0" } }
        ]
    }"#;

    const TOML_CATALOG: &str = r#"
        [[ports]]
        name = "vim"
        project_name = "Nord Vim"
        stargazers = 2100
        search_terms = ["vim", "neovim"]

        [[ports]]
        name = "tmux"
        project_name = "Nord tmux"
        url = "https://www.nordtheme.com/ports/tmux"
        search_terms = ["tmux", "terminal"]
    "#;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            CatalogFormat::from_path(Path::new("ports.json")).unwrap(),
            CatalogFormat::Json
        );
        assert_eq!(
            CatalogFormat::from_path(Path::new("ports.TOML")).unwrap(),
            CatalogFormat::Toml
        );
        assert!(matches!(
            CatalogFormat::from_path(Path::new("ports.yaml")),
            Err(CatalogError::UnsupportedFormat { .. })
        ));
        assert!(CatalogFormat::from_path(Path::new("ports")).is_err());
    }

    #[test]
    fn parses_json_catalog_in_order() {
        let catalog = Catalog::from_json_str(JSON_CATALOG).unwrap();
        let names: Vec<_> = catalog.iter().map(|port| port.name.as_str()).collect();
        assert_eq!(names, ["redis", "nginx"]);
        assert_eq!(catalog.as_slice()[1].search_terms(), ["nginx", "proxy"]);
    }

    #[test]
    fn parses_toml_catalog() {
        let catalog = Catalog::from_toml_str(TOML_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.as_slice()[0].stargazers, Some(2100));
        assert_eq!(
            catalog.as_slice()[1].url.as_deref(),
            Some("https://www.nordtheme.com/ports/tmux")
        );
    }

    #[test]
    fn bundled_demo_catalog_parses() {
        let catalog = Catalog::from_toml_str(include_str!("../../demos/ports.toml")).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().all(|port| !port.search_terms().is_empty()));
    }

    #[test]
    fn document_without_ports_is_an_empty_catalog() {
        assert!(Catalog::from_json_str("{}").unwrap().is_empty());
        assert!(Catalog::from_toml_str("").unwrap().is_empty());
    }

    #[test]
    fn rejects_ports_without_search_terms() {
        let err = Catalog::from_json_str(
            r#"{ "ports": [ { "name": "bare", "project_name": "Bare", "search_terms": [] } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::MissingSearchTerms { ref name } if name == "bare"));
    }

    #[test]
    fn rejects_unknown_root_keys() {
        let err = Catalog::from_json_str(r#"{ "ports": [], "routes": {} }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn loads_catalog_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ports.toml");
        fs::write(&path, TOML_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = PathBuf::from("/nonexistent/portgrid/ports.json");
        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("ports.json"));
    }
}
