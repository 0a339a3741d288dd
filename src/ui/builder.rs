use std::sync::Arc;

use anyhow::Result;

use super::state::InitialSearch;
use super::style::{Theme, by_name};
use super::{App, SearchOutcome, UiConfig};
use crate::catalog::{Catalog, FilterSet};
use crate::search::{SearchOptions, SearchSession};
use crate::voice::VoiceInput;

/// A small builder for configuring the interactive search UI before running
/// it.
pub struct SearchUi {
    catalog: Arc<Catalog>,
    options: SearchOptions,
    ui_config: Option<UiConfig>,
    theme: Option<Theme>,
    initial: InitialSearch,
    voice: Option<VoiceInput>,
}

impl SearchUi {
    /// Create a new search UI over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            options: SearchOptions::default(),
            ui_config: None,
            theme: None,
            initial: InitialSearch::default(),
            voice: None,
        }
    }

    pub fn with_search_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_ui_config(mut self, config: UiConfig) -> Self {
        self.ui_config = Some(config);
        self
    }

    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial.query = query.into();
        self
    }

    pub fn with_initial_filters(mut self, filters: FilterSet) -> Self {
        self.initial.filters = filters;
        self
    }

    /// Send the initial query down the AI search path.
    pub fn with_ai_query(mut self, ai: bool) -> Self {
        self.initial.ai = ai;
        self
    }

    /// Unknown names keep the default theme.
    pub fn with_theme_name(mut self, name: &str) -> Self {
        match by_name(name) {
            Some(theme) => self.theme = Some(theme),
            None => log::warn!("unknown theme '{name}', keeping the default"),
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_voice(mut self, voice: VoiceInput) -> Self {
        self.voice = Some(voice);
        self
    }

    /// Build the [`App`] without starting the terminal.
    pub fn into_app(self) -> App<'static> {
        let session = SearchSession::new(self.catalog, self.options);
        let mut app = App::with_session(
            session,
            self.ui_config.unwrap_or_default(),
            self.theme.unwrap_or_default(),
        );
        if let Some(voice) = self.voice {
            app.set_voice(voice);
        }
        app.set_initial_search(self.initial);
        app
    }

    /// Run the interactive search UI with the configured options.
    pub fn run(self) -> Result<SearchOutcome> {
        let mut app = self.into_app();
        app.run()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::catalog::{Filter, FilterCategory};
    use crate::search::SearchStatus;

    #[test]
    fn builder_carries_options_into_the_app() {
        let filters: FilterSet = [Filter::new(FilterCategory::Surah, "الفاتحة")]
            .into_iter()
            .collect();
        let mut app = SearchUi::new(Arc::new(Catalog::builtin()))
            .with_search_options(SearchOptions {
                latency: Duration::from_millis(5),
                ..SearchOptions::default()
            })
            .with_ui_config(UiConfig::default().with_title("تلاوة"))
            .with_theme_name("slate")
            .with_initial_filters(filters)
            .into_app();

        assert_eq!(app.ui.labels.title, "تلاوة");
        assert_eq!(app.session.latency(), Duration::from_millis(5));
        app.hydrate_initial_results();
        assert!(app.session.wait_until_settled(Duration::from_secs(3)));
        assert_eq!(app.session.status(), SearchStatus::Results(1));
    }
}
