mod args;
mod output;

pub(crate) use args::{CliArgs, parse_cli};
pub(crate) use output::{HeadlessReport, OutputFormat, Report, print_json, print_plain};
