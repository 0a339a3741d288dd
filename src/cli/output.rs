use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tartil::{FilterSet, Record, SearchOutcome, SearchSession, SearchStatus};

/// How the final report is written to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// One tab-separated line per record.
    #[default]
    Plain,
    Json,
}

/// Result of a search run without the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct HeadlessReport {
    pub(crate) query: String,
    pub(crate) filters: FilterSet,
    pub(crate) status: SearchStatus,
    pub(crate) results: Vec<Record>,
}

impl HeadlessReport {
    pub(crate) fn from_session(session: &SearchSession) -> Self {
        Self {
            query: session.query().to_string(),
            filters: session.filters().clone(),
            status: session.status(),
            results: session.results().cloned().collect(),
        }
    }
}

/// Anything the binary prints when it finishes.
pub(crate) enum Report {
    Interactive(SearchOutcome),
    Headless(HeadlessReport),
}

fn record_line(record: &Record) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        record.id, record.kind, record.title, record.subtitle
    )
}

/// Print a plain-text representation of the report.
pub(crate) fn print_plain(report: &Report) {
    match report {
        Report::Interactive(outcome) => {
            if !outcome.accepted {
                println!("Search cancelled (query: '{}')", outcome.query);
                return;
            }
            match &outcome.selection {
                Some(record) => println!("{}", record_line(record)),
                None => println!("No selection"),
            }
        }
        Report::Headless(report) => match report.status {
            SearchStatus::Results(_) => {
                for record in &report.results {
                    println!("{}", record_line(record));
                }
            }
            SearchStatus::NoResults => println!("No results for '{}'", report.query),
            SearchStatus::Empty => println!("No records match the active filters"),
            SearchStatus::Idle => println!("Nothing to search: give a query or a filter"),
            SearchStatus::Searching => println!("Search did not finish"),
        },
    }
}

/// Format the report as pretty-printed JSON.
pub(crate) fn format_report_json(report: &Report) -> Result<String> {
    let json = match report {
        Report::Interactive(outcome) => serde_json::to_string_pretty(outcome)?,
        Report::Headless(report) => serde_json::to_string_pretty(report)?,
    };
    Ok(json)
}

/// Print the JSON representation of the report.
pub(crate) fn print_json(report: &Report) -> Result<()> {
    println!("{}", format_report_json(report)?);
    Ok(())
}
