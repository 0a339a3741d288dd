use clap::{CommandFactory, FromArgMatches};

use crate::cli::OutputFormat;

use super::CliArgs;

fn parse(args: &[&str]) -> CliArgs {
    let command = CliArgs::command();
    let mut matches = command
        .try_get_matches_from(args.iter().copied())
        .expect("arguments parse");
    CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_definition_is_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
    let parsed = parse(&["tartil"]);
    assert_eq!(parsed.output, OutputFormat::Plain);
    assert!(parsed.filters.is_empty());
    assert!(!parsed.headless);
}

#[test]
fn filters_and_query_are_collected() {
    let parsed = parse(&[
        "tartil",
        "-q",
        "البقرة",
        "-f",
        "reader=مشاري العفاسي",
        "--filter",
        "surah=الفاتحة",
        "--ai",
        "--headless",
        "-o",
        "json",
    ]);
    assert_eq!(parsed.initial_query.as_deref(), Some("البقرة"));
    assert_eq!(
        parsed.filters,
        vec!["reader=مشاري العفاسي".to_string(), "surah=الفاتحة".to_string()]
    );
    assert!(parsed.ai);
    assert!(parsed.headless);
    assert_eq!(parsed.output, OutputFormat::Json);
}
