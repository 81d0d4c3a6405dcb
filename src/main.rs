mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SelectWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_session(&cli, resolved)
}

/// Replay the scripted events and print output in the chosen format.
fn run_session(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
	let workflow = SelectWorkflow::from_cli(cli, settings)?;
	let outcome = workflow.run()?;

	match cli.output {
		OutputFormat::Plain => print_plain(&outcome, cli.chip_width)?,
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
