use clap::ValueEnum;

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl OutputFormat {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}

/// Card fields that can be shown as columns of the plain grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Column {
    Name,
    Project,
    Repository,
    Release,
    Stars,
    Url,
    Logo,
}

impl Column {
    pub(crate) const DEFAULTS: [Column; 4] =
        [Column::Project, Column::Release, Column::Stars, Column::Url];

    /// Return the identifier accepted on the command line and in config files.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Project => "project",
            Column::Repository => "repository",
            Column::Release => "release",
            Column::Stars => "stars",
            Column::Url => "url",
            Column::Logo => "logo",
        }
    }

    /// Header shown above the column in the plain grid.
    pub(crate) fn header(self) -> &'static str {
        match self {
            Column::Name => "NAME",
            Column::Project => "PROJECT",
            Column::Repository => "REPOSITORY",
            Column::Release => "RELEASE",
            Column::Stars => "STARS",
            Column::Url => "URL",
            Column::Logo => "LOGO",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_value_enum() {
        for column in Column::value_variants() {
            assert_eq!(Column::from_str(column.as_str(), false), Ok(*column));
        }
        for format in OutputFormat::value_variants() {
            assert_eq!(OutputFormat::from_str(format.as_str(), false), Ok(*format));
        }
    }

    #[test]
    fn parsing_ignores_case_when_asked() {
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert!(Column::from_str("Stars", false).is_err());
    }
}
