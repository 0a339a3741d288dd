use thiserror::Error;

use super::SettingSource;

/// A setting that was read successfully but carries a value `tartil` cannot
/// use. The origin names the flag, variable or key to fix.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) reason: String,
}

impl ConfigError {
    pub(crate) fn invalid(
        key: &'static str,
        value: impl Into<String>,
        origin: SettingSource,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            key,
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_key_origin_and_value() {
        let err = ConfigError::invalid(
            "search.latency_ms",
            "99999",
            SettingSource::Environment("TARTIL__SEARCH__LATENCY_MS"),
            "must be at most 60000",
        );
        assert_eq!(
            err.to_string(),
            "invalid value for search.latency_ms from environment variable \
             `TARTIL__SEARCH__LATENCY_MS`: must be at most 60000 (value: 99999)"
        );
    }
}
