use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use crate::cli::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `tartil` binary.
#[derive(Parser, Debug)]
#[command(
    name = "tartil",
    version,
    long_version = long_version(),
    about = "Search a Quran recitation catalog from the terminal",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "TARTIL_CONFIG",
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
        short = 'q',
        long = "query",
        value_name = "QUERY",
        help = "Submit an initial search query on start (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        short = 'f',
        long = "filter",
        value_name = "CATEGORY=VALUE",
        action = ArgAction::Append,
        help = "Add an initial filter; CATEGORY is reader, surah or recitationType (repeatable)"
    )]
    pub(crate) filters: Vec<String>,
    #[arg(
        long = "ai",
        help = "Send the initial query through the AI search path (default: disabled)"
    )]
    pub(crate) ai: bool,
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "Load the catalog from a JSON file (default: built-in catalog)"
    )]
    pub(crate) catalog: Option<PathBuf>,
    #[arg(
        long = "latency-ms",
        value_name = "MS",
        help = "Simulated search latency in milliseconds (default: 800)"
    )]
    pub(crate) latency_ms: Option<u64>,
    #[arg(
        long = "discard-stale",
        help = "Only apply the most recently issued search (default: last resolved wins)"
    )]
    pub(crate) discard_stale: bool,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: sage)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 't',
        long,
        value_name = "TITLE",
        help = "Override the page title (default: catalog title)"
    )]
    pub(crate) title: Option<String>,
    #[arg(
        long = "voice-command",
        value_name = "CMD",
        help = "Program that prints a speech transcript on stdout (default: voice disabled)"
    )]
    pub(crate) voice_command: Option<String>,
    #[arg(
        long = "voice-lang",
        value_name = "LANG",
        help = "Language tag handed to the voice command (default: ar-SA)"
    )]
    pub(crate) voice_lang: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log verbosity for the log panel (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "headless",
        help = "Run the initial search without the TUI and print the results"
    )]
    pub(crate) headless: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print the result"
    )]
    pub(crate) output: OutputFormat,
}
