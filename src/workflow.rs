use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use portgrid::{Catalog, SearchEvent, SearchState, reduce, search};
use tracing::{debug, info};

use crate::cli::GridPrinter;
use crate::settings::ResolvedConfig;

/// Drives the search reducer from command-line queries and stdin lines.
///
/// The configured initial query, every `--query` and every input line are
/// input events, and the grid is printed after each one. When neither an
/// initial query nor `--query` is given, the unfiltered view is printed first.
pub(crate) struct SearchWorkflow {
    catalog: Catalog,
    initial_query: String,
    queries: Vec<String>,
    interactive: bool,
    printer: GridPrinter,
}

impl SearchWorkflow {
    pub(crate) fn from_config(
        config: ResolvedConfig,
        queries: Vec<String>,
        interactive: bool,
    ) -> Result<Self> {
        let catalog = Catalog::load(&config.catalog_path).with_context(|| {
            format!("failed to load catalog {}", config.catalog_path.display())
        })?;
        info!(ports = catalog.len(), "catalog ready");

        Ok(Self::new(catalog, config, queries, interactive))
    }

    pub(crate) fn new(
        catalog: Catalog,
        config: ResolvedConfig,
        queries: Vec<String>,
        interactive: bool,
    ) -> Self {
        Self {
            catalog,
            initial_query: config.initial_query,
            queries,
            interactive,
            printer: GridPrinter::new(config.output, config.columns),
        }
    }

    /// Run the session, reading interactive input from `input`.
    ///
    /// Returns the state after the last event.
    pub(crate) fn run(self, mut input: impl BufRead, out: &mut impl Write) -> Result<SearchState> {
        let Self {
            catalog,
            initial_query,
            queries,
            interactive,
            printer,
        } = self;

        let mut state = search::initialize(catalog);
        if !initial_query.is_empty() {
            state = reduce(state, SearchEvent::term(initial_query));
            printer.print(&state, out)?;
        } else if queries.is_empty() {
            printer.print(&state, out)?;
        }

        for query in queries {
            debug!(term = %query, "applying query");
            state = reduce(state, SearchEvent::TermChanged(query));
            printer.print(&state, out)?;
        }

        if interactive {
            while let Some(line) = read_input_line(&mut input)? {
                state = reduce(state, SearchEvent::TermChanged(line));
                printer.print(&state, out)?;
                out.flush()?;
            }
            debug!("input closed");
        }

        Ok(state)
    }
}

/// Read one line without its terminator, or `None` at end of input.
///
/// Bytes that are not UTF-8 become U+FFFD.
fn read_input_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("failed to read search input")?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
