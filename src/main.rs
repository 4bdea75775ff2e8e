mod cli;
mod settings;
mod workflow;

use std::io;

use anyhow::Result;
use cli::parse_cli;
use portgrid::logging;
use tracing::debug;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();
    logging::initialize(cli.verbose)?;

    let resolved = settings::load(&cli)?;
    if cli.print_config {
        eprint!("{}", resolved.summary());
    }

    let workflow = SearchWorkflow::from_config(resolved, cli.queries, cli.interactive)?;
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let state = workflow.run(stdin, &mut stdout)?;
    debug!(
        term = %state.term(),
        visible = state.visible_len(),
        "session finished"
    );

    Ok(())
}
