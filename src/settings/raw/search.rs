use serde::Deserialize;

use crate::cli::CliArgs;

/// `[search]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
    pub(super) latency_ms: Option<u64>,
    pub(super) discard_stale: Option<bool>,
    pub(super) initial_query: Option<String>,
    pub(super) initial_filters: Option<Vec<String>>,
}

impl SearchSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(latency) = cli.latency_ms {
            self.latency_ms = Some(latency);
        }
        if cli.discard_stale {
            self.discard_stale = Some(true);
        }
        if let Some(query) = cli.initial_query.clone() {
            self.initial_query = Some(query);
        }
        if !cli.filters.is_empty() {
            self.initial_filters = Some(cli.filters.clone());
        }
    }
}
