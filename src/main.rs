mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in tartil::ui::style::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    run_search(&cli, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(cli: &CliArgs, settings: ResolvedConfig) -> Result<()> {
    let workflow = SearchWorkflow::from_config(settings)?;
    let report = workflow.run(cli.headless)?;

    match cli.output {
        OutputFormat::Plain => print_plain(&report),
        OutputFormat::Json => print_json(&report)?,
    }

    Ok(())
}
