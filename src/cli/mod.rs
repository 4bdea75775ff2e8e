mod args;
mod options;
mod output;

pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use options::{Column, OutputFormat};
pub(crate) use output::GridPrinter;
