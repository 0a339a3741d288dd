use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Error, Result};
use log::LevelFilter;
use serde::Deserialize;
use tartil::search::{DEFAULT_LATENCY, ResultPolicy};

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource, parse_filters, parse_level};

mod search;
mod ui;
mod voice;

use search::SearchSection;
use ui::UiSection;
use voice::VoiceSection;

/// `[catalog]` values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
    pub(super) path: Option<PathBuf>,
}

/// `[logging]` values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
    pub(super) level: Option<String>,
}

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    catalog: CatalogSection,
    search: SearchSection,
    ui: UiSection,
    voice: VoiceSection,
    logging: LoggingSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.catalog.clone() {
            self.catalog.path = Some(path);
        }
        if let Some(level) = cli.log_level.clone() {
            self.logging.level = Some(level);
        }
        self.search.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.voice.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            latency_ms: detect_source(
                cli.latency_ms.is_some(),
                self.search.latency_ms.is_some(),
                "TARTIL__SEARCH__LATENCY_MS",
                "--latency-ms",
                "search.latency_ms",
            ),
            initial_filters: detect_source(
                !cli.filters.is_empty(),
                self.search.initial_filters.is_some(),
                "TARTIL__SEARCH__INITIAL_FILTERS",
                "--filter",
                "search.initial_filters",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "TARTIL__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            log_level: detect_source(
                cli.log_level.is_some(),
                self.logging.level.is_some(),
                "TARTIL__LOGGING__LEVEL",
                "--log-level",
                "logging.level",
            ),
        };

        let initial_filters = parse_filters(
            self.search.initial_filters.as_deref().unwrap_or_default(),
            sources.source_for_initial_filters(),
        )?;
        let log_level = match self.logging.level.as_deref() {
            Some(level) => parse_level(level, sources.source_for_log_level())?,
            None => LevelFilter::Info,
        };

        let policy = if self.search.discard_stale.unwrap_or(false) {
            ResultPolicy::LatestIssued
        } else {
            ResultPolicy::LastResolved
        };
        let latency = self
            .search
            .latency_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LATENCY);
        let (ui, theme) = self.ui.finalize();

        let config = ResolvedConfig {
            catalog_path: self.catalog.path,
            latency,
            policy,
            initial_query: self.search.initial_query.unwrap_or_default(),
            initial_filters,
            ai: cli.ai,
            theme,
            ui,
            voice: self.voice.finalize(),
            log_level,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
