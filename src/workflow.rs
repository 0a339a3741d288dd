use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use tartil::voice::{CommandRecognizer, VoiceInput};
use tartil::{Catalog, FilterSet, SearchOptions, SearchSession, SearchUi, logging};

use crate::cli::{HeadlessReport, Report};
use crate::settings::{ResolvedConfig, VoiceSettings};

/// Extra time granted past the simulated latency before a headless search
/// is considered stuck.
const SETTLE_MARGIN: Duration = Duration::from_secs(5);

/// Coordinates building and running a search, interactive or headless.
pub(crate) struct SearchWorkflow {
    catalog: Arc<Catalog>,
    options: SearchOptions,
    query: String,
    filters: FilterSet,
    ai: bool,
    search_ui: SearchUi,
}

impl SearchWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        logging::set_level(config.log_level);

        let catalog = Arc::new(load_catalog(config.catalog_path.as_deref())?);
        log::info!(
            "catalog ready with {} records, latency {} ms",
            catalog.len(),
            config.latency.as_millis()
        );

        let options = SearchOptions {
            latency: config.latency,
            policy: config.policy,
        };
        let search_ui = SearchUiFactory::build(Arc::clone(&catalog), options, &config);

        Ok(Self {
            catalog,
            options,
            query: config.initial_query,
            filters: config.initial_filters,
            ai: config.ai,
            search_ui,
        })
    }

    pub(crate) fn run(self, headless: bool) -> Result<Report> {
        if headless {
            return self.run_headless().map(Report::Headless);
        }
        self.search_ui.run().map(Report::Interactive)
    }

    fn run_headless(self) -> Result<HeadlessReport> {
        let mut session = SearchSession::new(self.catalog, self.options);
        session.set_filters(self.filters);
        if self.query.is_empty() && session.filters().is_empty() {
            return Ok(HeadlessReport::from_session(&session));
        }

        if self.ai {
            log::debug!("headless ai search for '{}'", self.query);
            session.submit_ai_query(self.query);
        } else {
            log::debug!("headless search for '{}'", self.query);
            session.submit_query(self.query);
        }

        if !session.wait_until_settled(session.latency() + SETTLE_MARGIN) {
            bail!("search did not finish within {} ms", session.latency().as_millis());
        }
        Ok(HeadlessReport::from_session(&session))
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}

/// Helper for translating resolved configuration into a configured `SearchUi`.
struct SearchUiFactory {
    search_ui: SearchUi,
}

impl SearchUiFactory {
    fn build(catalog: Arc<Catalog>, options: SearchOptions, config: &ResolvedConfig) -> SearchUi {
        Self::new(catalog, options)
            .with_ui_config(config)
            .with_initial_search(config)
            .with_theme(config.theme.as_deref())
            .with_voice(&config.voice)
            .finish()
    }

    fn new(catalog: Arc<Catalog>, options: SearchOptions) -> Self {
        let search_ui = SearchUi::new(catalog).with_search_options(options);
        Self { search_ui }
    }

    fn with_ui_config(mut self, config: &ResolvedConfig) -> Self {
        self.search_ui = self.search_ui.with_ui_config(config.ui.clone());
        self
    }

    fn with_initial_search(mut self, config: &ResolvedConfig) -> Self {
        self.search_ui = self
            .search_ui
            .with_initial_query(config.initial_query.clone())
            .with_initial_filters(config.initial_filters.clone())
            .with_ai_query(config.ai);
        self
    }

    fn with_theme(mut self, theme: Option<&str>) -> Self {
        if let Some(theme) = theme {
            self.search_ui = self.search_ui.with_theme_name(theme);
        }
        self
    }

    fn with_voice(mut self, voice: &VoiceSettings) -> Self {
        let input = match &voice.command {
            Some(command) => VoiceInput::new(
                Arc::new(CommandRecognizer::new(command.clone(), voice.args.clone())),
                voice.language.clone(),
            ),
            None => VoiceInput::unavailable(),
        };
        self.search_ui = self.search_ui.with_voice(input);
        self
    }

    fn finish(self) -> SearchUi {
        self.search_ui
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tartil::SearchStatus;
    use tartil::catalog::{Filter, FilterCategory};

    use super::*;

    fn quick_config() -> ResolvedConfig {
        let mut config = ResolvedConfig::for_tests();
        config.latency = Duration::from_millis(5);
        config
    }

    #[test]
    fn headless_text_search_reports_matches() {
        let mut config = quick_config();
        config.initial_query = "البقرة".into();

        let report = SearchWorkflow::from_config(config)
            .unwrap()
            .run_headless()
            .unwrap();
        assert_eq!(report.status, SearchStatus::Results(3));
        let ids: Vec<_> = report.results.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "5"]);
    }

    #[test]
    fn headless_filter_only_search_runs() {
        let mut config = quick_config();
        config.initial_filters = [Filter::new(FilterCategory::RecitationType, "مجود")]
            .into_iter()
            .collect();

        let report = SearchWorkflow::from_config(config)
            .unwrap()
            .run_headless()
            .unwrap();
        let ids: Vec<_> = report.results.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn headless_without_input_stays_idle() {
        let report = SearchWorkflow::from_config(quick_config())
            .unwrap()
            .run_headless()
            .unwrap();
        assert_eq!(report.status, SearchStatus::Idle);
        assert!(report.results.is_empty());
    }

    #[test]
    fn headless_ai_search_uses_the_same_evaluation() {
        let mut config = quick_config();
        config.initial_query = "xyz".into();
        config.ai = true;

        let report = SearchWorkflow::from_config(config)
            .unwrap()
            .run_headless()
            .unwrap();
        assert_eq!(report.status, SearchStatus::NoResults);
    }

    #[test]
    fn catalog_is_loaded_from_a_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"records":[{{"id":"a","title":"سورة يس","subtitle":"الحصري","type":"surah"}}]}}"#
        )
        .unwrap();

        let mut config = quick_config();
        config.catalog_path = Some(file.path().to_path_buf());
        config.initial_query = "يس".into();

        let report = SearchWorkflow::from_config(config)
            .unwrap()
            .run_headless()
            .unwrap();
        assert_eq!(report.status, SearchStatus::Results(1));
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let mut config = quick_config();
        config.catalog_path = Some("/nonexistent/catalog.json".into());
        assert!(SearchWorkflow::from_config(config).is_err());
    }
}
