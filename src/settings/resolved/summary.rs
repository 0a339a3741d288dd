use super::ResolvedConfig;
use tartil::search::ResultPolicy;

pub(super) fn print_summary(config: &ResolvedConfig) {
    println!("Effective configuration:");
    match &config.catalog_path {
        Some(path) => println!("  Catalog: {}", path.display()),
        None => println!("  Catalog: (built-in)"),
    }
    println!("  Latency: {} ms", config.latency.as_millis());
    println!("  Result policy: {}", policy_to_word(config.policy));
    if !config.initial_query.is_empty() {
        println!("  Initial query: {}", config.initial_query);
    }
    if !config.initial_filters.is_empty() {
        let filters: Vec<String> = config
            .initial_filters
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("  Initial filters: {}", filters.join(", "));
    }
    println!("  AI search: {}", bool_to_word(config.ai));
    println!(
        "  UI theme: {}",
        config
            .theme
            .as_deref()
            .unwrap_or("(use the library default)")
    );
    println!("  Title: {}", config.ui.labels.title);
    match &config.voice.command {
        Some(command) if config.voice.args.is_empty() => {
            println!("  Voice command: {command}");
        }
        Some(command) => println!("  Voice command: {command} {}", config.voice.args.join(" ")),
        None => println!("  Voice command: (unavailable)"),
    }
    println!("  Voice language: {}", config.voice.language);
    println!("  Log level: {}", config.log_level);
}

fn policy_to_word(policy: ResultPolicy) -> &'static str {
    match policy {
        ResultPolicy::LastResolved => "last resolved wins",
        ResultPolicy::LatestIssued => "discard stale responses",
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
