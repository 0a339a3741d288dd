use log::LevelFilter;
use tartil::catalog::{Filter, FilterSet};

use super::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Longest simulated latency accepted from configuration.
const MAX_LATENCY_MS: u128 = 60_000;

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    let latency_ms = config.latency.as_millis();
    if latency_ms > MAX_LATENCY_MS {
        return Err(ConfigError::invalid(
            "search.latency_ms",
            latency_ms.to_string(),
            sources.source_for_latency(),
            format!("must be at most {MAX_LATENCY_MS}"),
        ));
    }

    if let Some(theme) = &config.theme
        && tartil::ui::style::by_name(theme).is_none()
    {
        return Err(ConfigError::invalid(
            "ui.theme",
            theme.clone(),
            sources.source_for_theme(),
            format!(
                "unknown theme (available: {})",
                tartil::ui::style::names().join(", ")
            ),
        ));
    }

    Ok(())
}

/// Parse `CATEGORY=VALUE` entries into an ordered filter set.
pub(crate) fn parse_filters(
    values: &[String],
    source: SettingSource,
) -> Result<FilterSet, ConfigError> {
    let mut filters = FilterSet::new();
    for value in values {
        let filter = value.parse::<Filter>().map_err(|err| {
            ConfigError::invalid(
                "search.initial_filters",
                value.clone(),
                source.clone(),
                err.to_string(),
            )
        })?;
        filters.insert(filter);
    }
    Ok(filters)
}

pub(crate) fn parse_level(value: &str, source: SettingSource) -> Result<LevelFilter, ConfigError> {
    tartil::logging::parse_level(value).ok_or_else(|| {
        ConfigError::invalid(
            "logging.level",
            value,
            source,
            "expected one of off, error, warn, info, debug, trace",
        )
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tartil::catalog::FilterCategory;

    use super::*;

    #[test]
    fn validation_rejects_excessive_latency() {
        let mut config = ResolvedConfig::for_tests();
        config.latency = Duration::from_millis(120_000);

        let sources = ConfigSources {
            latency_ms: Some(SettingSource::CliFlag("--latency-ms")),
            ..ConfigSources::default()
        };

        let err = validate(&config, &sources).unwrap_err();
        assert!(matches!(err.key, "search.latency_ms"));
        let message = err.to_string();
        assert!(message.contains("value: 120000"));
        assert!(message.contains("CLI flag"));
    }

    #[test]
    fn validation_rejects_unknown_theme() {
        let mut config = ResolvedConfig::for_tests();
        config.theme = Some("neon".into());

        let sources = ConfigSources {
            theme: Some(SettingSource::Environment("TARTIL__UI__THEME")),
            ..ConfigSources::default()
        };

        let err = validate(&config, &sources).unwrap_err();
        assert!(matches!(err.key, "ui.theme"));
        let message = err.to_string();
        assert!(message.contains("value: neon"));
        assert!(message.contains("environment variable"));
    }

    #[test]
    fn default_config_is_valid() {
        let config = ResolvedConfig::for_tests();
        assert!(validate(&config, &ConfigSources::default()).is_ok());
    }

    #[test]
    fn filters_parse_in_order_without_duplicates() {
        let values = vec![
            "reader=مشاري العفاسي".to_string(),
            "surah=البقرة".to_string(),
            "reader=مشاري العفاسي".to_string(),
        ];
        let filters = parse_filters(&values, SettingSource::CliFlag("--filter")).unwrap();
        let parsed: Vec<_> = filters.iter().cloned().collect();
        assert_eq!(
            parsed,
            vec![
                Filter::new(FilterCategory::Reader, "مشاري العفاسي"),
                Filter::new(FilterCategory::Surah, "البقرة"),
            ]
        );
    }

    #[test]
    fn malformed_filter_names_its_origin() {
        let values = vec!["narrator=x".to_string()];
        let err = parse_filters(&values, SettingSource::ConfigKey("search.initial_filters"))
            .unwrap_err();
        assert!(err.to_string().contains("configuration key"));
        assert!(err.to_string().contains("narrator"));
    }

    #[test]
    fn unknown_log_level_is_rejected() {
        let err = parse_level("loud", SettingSource::CliFlag("--log-level")).unwrap_err();
        assert!(matches!(err.key, "logging.level"));
        assert_eq!(
            parse_level("debug", SettingSource::CliFlag("--log-level")).unwrap(),
            LevelFilter::Debug
        );
    }
}
