use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a [`Catalog`](super::Catalog) from metadata.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The metadata file could not be read.
    #[error("failed to read catalog {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The metadata file extension does not name a supported format.
    #[error("unsupported catalog format for {} (expected .json or .toml)", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// A port declares no search terms and could never be matched.
    #[error("port '{name}' has no search terms")]
    MissingSearchTerms { name: String },
}
