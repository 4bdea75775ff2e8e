use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Parser};
use portgrid::app_dirs;

use super::options::{Column, OutputFormat};

/// Produce the full version banner including the config file and default catalog.
fn long_version() -> &'static str {
    let config_file = match app_dirs::config_file() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };
    let catalog = match app_dirs::default_catalog_path() {
        Ok(path) => path.display().to_string(),
        Err(err) => format!("unavailable ({err})"),
    };

    let mut details = format!("portgrid {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(details);
    let _ = writeln!(details, "config file: {config_file}");
    let _ = writeln!(details, "default catalog: {catalog}");

    Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
    CliArgs::parse()
}

#[derive(Parser, Debug)]
#[command(
    name = "portgrid",
    version,
    long_version = long_version(),
    about = "Find port projects by filtering a catalog as you type",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
/// Command-line arguments accepted by the `portgrid` binary.
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "PORTGRID_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'C',
        long,
        value_name = "FILE",
        help = "Catalog metadata file, .json or .toml (default: ports.toml in the data directory)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        short = 'q',
        long = "query",
        value_name = "TERM",
        action = ArgAction::Append,
        allow_hyphen_values = true,
        help = "Search input to apply; repeat to replay several inputs in order"
    )]
    pub(crate) queries: Vec<String>,
    #[arg(
        short = 'i',
        long,
        help = "Read one search input per line from stdin until EOF (default: disabled)"
    )]
    pub(crate) interactive: bool,
    #[arg(
        short = 'o',
        long,
        value_enum,
        help = "Output format for the visible ports (default: plain)"
    )]
    pub(crate) output: Option<OutputFormat>,
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        value_name = "COLUMNS",
        help = "Comma-separated columns of the plain grid (default: project,release,stars,url)"
    )]
    pub(crate) columns: Option<Vec<Column>>,
    #[arg(
        long = "print-config",
        help = "Print the effective configuration to stderr before searching"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity; PORTGRID_LOG overrides it"
    )]
    pub(crate) verbose: u8,
}
