use serde::{Deserialize, Deserializer, Serialize};

/// A single port project shown as a card in the catalog grid.
///
/// Ports are immutable once built. Every field except `search_terms` is opaque
/// to the filter and only carried through to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Port {
    /// Identifier used as the rendering key for the card.
    pub name: String,
    /// Human readable project name.
    #[serde(alias = "projectName")]
    pub project_name: String,
    /// Source repository of the port.
    #[serde(default, alias = "gitHubRepositoryUrl")]
    pub repository_url: Option<String>,
    #[serde(default, alias = "releaseLatest")]
    pub release_latest: Option<Release>,
    /// Popularity metric, typically the repository star count.
    #[serde(default)]
    pub stargazers: Option<u64>,
    /// Landing or documentation page of the port.
    #[serde(default)]
    pub url: Option<String>,
    /// Key of the logo asset rendered on the card.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(alias = "searchTerms", deserialize_with = "lowercase_terms")]
    search_terms: Vec<String>,
}

/// Latest published release of a port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Release {
    pub version: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Port {
    /// Create a port with the given name and project name and no search terms.
    #[must_use]
    pub fn new(name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project_name: project_name.into(),
            repository_url: None,
            release_latest: None,
            stargazers: None,
            url: None,
            logo: None,
            search_terms: Vec::new(),
        }
    }

    /// Replace the search terms. Terms are lowercased as they are stored.
    #[must_use]
    pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.search_terms = terms
            .into_iter()
            .map(|term| term.as_ref().to_lowercase())
            .collect();
        self
    }

    #[must_use]
    pub fn with_repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_release(mut self, release: Release) -> Self {
        self.release_latest = Some(release);
        self
    }

    #[must_use]
    pub fn with_stargazers(mut self, stargazers: u64) -> Self {
        self.stargazers = Some(stargazers);
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Lowercase keywords this port is matched against, in declaration order.
    #[must_use]
    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    /// Return `true` when any search term contains `normalized_term`.
    ///
    /// The needle must already be lowercased; see
    /// [`normalize_term`](crate::search::normalize_term).
    #[must_use]
    pub fn matches(&self, normalized_term: &str) -> bool {
        self.search_terms
            .iter()
            .any(|term| term.contains(normalized_term))
    }
}

impl Release {
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            url: None,
        }
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

fn lowercase_terms<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let terms = Vec::<String>::deserialize(deserializer)?;
    Ok(terms.into_iter().map(|term| term.to_lowercase()).collect())
}
