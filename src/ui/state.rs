//! Core state container for the terminal front-end.
//!
//! [`App`] bundles the [`SearchSession`] with the widgets that feed it: the
//! search bar and its suggestions, the filter panel, the AI panel, the voice
//! toggle and the log overlay.

use std::sync::Arc;

use ratatui::widgets::ListState;
use throbber_widgets_tui::ThrobberState;

use super::components::{AiPanel, FilterPanel, LogPanel, SearchInput, Suggestions};
use super::config::UiConfig;
use super::style::Theme;
use crate::catalog::{Catalog, FilterSet};
use crate::search::{SearchOptions, SearchSession};
use crate::voice::VoiceInput;

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchBar,
    Filters,
    Ai,
    Results,
}

/// Search applied once the event loop starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialSearch {
    pub query: String,
    pub filters: FilterSet,
    /// Submit the query through the AI panel path instead of the search bar.
    pub ai: bool,
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
    pub session: SearchSession,
    pub search_input: SearchInput<'a>,
    pub list_state: ListState,
    pub theme: Theme,
    pub(crate) suggestions: Suggestions,
    pub(crate) filter_panel: FilterPanel,
    pub(crate) ai_panel: AiPanel<'a>,
    pub(crate) voice: VoiceInput,
    pub(crate) logs: LogPanel,
    pub(crate) show_logs: bool,
    pub(crate) focus: Focus,
    pub(crate) ui: UiConfig,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) initial: Option<InitialSearch>,
}

impl<'a> App<'a> {
    /// Construct an [`App`] over `catalog` with default options.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let session = SearchSession::new(catalog, SearchOptions::default());
        Self::with_session(session, UiConfig::default(), Theme::default())
    }

    pub fn with_session(session: SearchSession, ui: UiConfig, theme: Theme) -> Self {
        crate::logging::initialize();
        let labels = &ui.labels;
        let search_input = SearchInput::new(session.query())
            .with_placeholder(labels.search_placeholder.clone(), theme.empty_style());
        let suggestions = Suggestions::new(session.catalog().suggestions().to_vec());
        let filter_panel = FilterPanel::new(session.filters().clone());
        let ai_panel = AiPanel::new(labels, &theme);

        Self {
            session,
            search_input,
            list_state: ListState::default(),
            theme,
            suggestions,
            filter_panel,
            ai_panel,
            voice: VoiceInput::unavailable(),
            logs: LogPanel::new(),
            show_logs: false,
            focus: Focus::SearchBar,
            ui,
            throbber_state: ThrobberState::default(),
            initial: None,
        }
    }

    pub fn set_voice(&mut self, voice: VoiceInput) {
        self.voice = voice;
    }

    pub fn set_initial_search(&mut self, initial: InitialSearch) {
        self.initial = Some(initial);
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.search_input.set_focused(focus == Focus::SearchBar);
        self.ai_panel.input_mut().set_focused(focus == Focus::Ai);
        if focus != Focus::SearchBar {
            self.suggestions.hide();
        }
    }

    /// Panes reachable with Tab, in order. Closed panels are skipped.
    pub(crate) fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::SearchBar];
        if self.filter_panel.is_open() {
            order.push(Focus::Filters);
        }
        if self.ai_panel.is_expanded() {
            order.push(Focus::Ai);
        }
        order.push(Focus::Results);
        order
    }

    /// Submit the search bar contents as a text search.
    pub(crate) fn submit_text(&mut self, query: String) {
        if self.search_input.text() != query {
            self.search_input.set_text(query.clone());
        }
        self.session.submit_query(query);
        self.list_state.select(None);
    }

    pub(crate) fn submit_ai(&mut self, query: String) {
        self.session.submit_ai_query(query);
        self.list_state.select(None);
        self.set_focus(Focus::SearchBar);
    }

    pub(crate) fn submit_transcript(&mut self, transcript: String) {
        self.search_input.set_text(transcript.clone());
        self.suggestions.hide();
        self.session.submit_transcript(transcript);
        self.list_state.select(None);
    }

    /// Push the panel's filter set into the session.
    pub(crate) fn apply_filters(&mut self) {
        let filters: FilterSet = self.filter_panel.filters().clone();
        log::info!("active filters: {}", describe(&filters));
        self.session.set_filters(filters);
        self.list_state.select(None);
    }

    /// Drain search completions and voice transcripts.
    pub(crate) fn pump(&mut self) {
        if self.session.pump() {
            self.ensure_selection();
        }
        if let Some(transcript) = self.voice.poll() {
            self.submit_transcript(transcript);
        }
    }

    /// Keep the result selection inside the current result list.
    pub(crate) fn ensure_selection(&mut self) {
        let len = self.session.result_count();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(selected) if selected >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
            None if self.focus == Focus::Results => self.list_state.select(Some(0)),
            None => {}
        }
    }
}

fn describe(filters: &FilterSet) -> String {
    if filters.is_empty() {
        return "none".to_string();
    }
    filters
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App<'static> {
        App::new(Arc::new(Catalog::builtin()))
    }

    #[test]
    fn closed_panels_are_skipped_by_focus_order() {
        let mut app = app();
        assert_eq!(app.focus_order(), vec![Focus::SearchBar, Focus::Results]);
        app.filter_panel.toggle();
        app.ai_panel.toggle();
        assert_eq!(
            app.focus_order(),
            vec![Focus::SearchBar, Focus::Filters, Focus::Ai, Focus::Results]
        );
    }

    #[test]
    fn filter_description_lists_each_filter() {
        let filters: FilterSet = ["reader=مشاري العفاسي", "surah=البقرة"]
            .iter()
            .map(|raw| raw.parse().expect("filter"))
            .collect();
        assert_eq!(describe(&filters), "reader=مشاري العفاسي, surah=البقرة");
        assert_eq!(describe(&FilterSet::new()), "none");
    }
}
