use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use tartil::UiConfig;
use tartil::catalog::FilterSet;
use tartil::search::ResultPolicy;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};
pub(crate) use validation::{parse_filters, parse_level};

/// External recognizer configuration for the voice button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSettings {
    pub command: Option<String>,
    pub args: Vec<String>,
    pub language: String,
}

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub catalog_path: Option<PathBuf>,
    pub latency: Duration,
    pub policy: ResultPolicy,
    pub initial_query: String,
    pub initial_filters: FilterSet,
    pub ai: bool,
    pub theme: Option<String>,
    pub ui: UiConfig,
    pub voice: VoiceSettings,
    pub log_level: LevelFilter,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}

#[cfg(test)]
impl ResolvedConfig {
    pub(crate) fn for_tests() -> Self {
        Self {
            catalog_path: None,
            latency: tartil::search::DEFAULT_LATENCY,
            policy: ResultPolicy::LastResolved,
            initial_query: String::new(),
            initial_filters: FilterSet::new(),
            ai: false,
            theme: None,
            ui: UiConfig::default(),
            voice: VoiceSettings {
                command: None,
                args: Vec::new(),
                language: tartil::voice::DEFAULT_LANGUAGE.to_string(),
            },
            log_level: LevelFilter::Info,
        }
    }
}
