use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) latency_ms: Option<SettingSource>,
    pub(crate) initial_filters: Option<SettingSource>,
    pub(crate) theme: Option<SettingSource>,
    pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_latency(&self) -> SettingSource {
        self.latency_ms
            .clone()
            .unwrap_or(SettingSource::ConfigKey("search.latency_ms"))
    }

    pub(crate) fn source_for_initial_filters(&self) -> SettingSource {
        self.initial_filters
            .clone()
            .unwrap_or(SettingSource::ConfigKey("search.initial_filters"))
    }

    pub(crate) fn source_for_theme(&self) -> SettingSource {
        self.theme
            .clone()
            .unwrap_or(SettingSource::ConfigKey("ui.theme"))
    }

    pub(crate) fn source_for_log_level(&self) -> SettingSource {
        self.log_level
            .clone()
            .unwrap_or(SettingSource::ConfigKey("logging.level"))
    }
}
