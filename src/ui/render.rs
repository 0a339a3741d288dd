use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::App;
use super::components::{
    ResultsContext, TitleEdge, ai_panel, filters, render_ai_panel, render_border_title,
    render_chips, render_panel, render_progress, render_results, render_suggestions,
};
use super::state::Focus;
use crate::catalog::FilterCategory;

const KEY_HINTS: &str = "F2 filters · F3 AI · F4 voice · F12 log · Tab focus · Esc quit";

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let vocabulary = self.session.catalog().vocabulary();
        let filter_height = if self.filter_panel.is_open() {
            let rows = FilterCategory::ALL
                .iter()
                .map(|category| vocabulary.values(*category).len())
                .max()
                .unwrap_or(0) as u16;
            rows + 3
        } else {
            0
        };
        let ai_height =
            ai_panel::panel_height(&self.ai_panel, self.session.catalog().ai_prompts().len());

        let [
            title_area,
            subtitle_area,
            search_area,
            chips_area,
            filters_area,
            ai_area,
            results_area,
            footer_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(filters::chips_height(&self.filter_panel)),
            Constraint::Length(filter_height),
            Constraint::Length(ai_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let labels = &self.ui.labels;
        frame.render_widget(
            Paragraph::new(labels.title.clone())
                .alignment(Alignment::Center)
                .style(self.theme.header_style()),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(labels.subtitle.clone())
                .alignment(Alignment::Center)
                .style(self.theme.empty_style()),
            subtitle_area,
        );

        let input_area = self.render_search_bar(frame, search_area);
        render_chips(frame, chips_area, &self.filter_panel, labels, &self.theme);
        render_panel(
            frame,
            filters_area,
            &self.filter_panel,
            vocabulary,
            labels,
            &self.theme,
            self.focus == Focus::Filters,
        );
        render_ai_panel(
            frame,
            ai_area,
            &self.ai_panel,
            self.session.catalog().ai_prompts(),
            labels,
            &self.theme,
            self.focus == Focus::Ai,
        );

        let context = ResultsContext {
            session: &self.session,
            labels,
            theme: &self.theme,
            throbber_state: &self.throbber_state,
            focused: self.focus == Focus::Results,
        };
        render_results(frame, results_area, context, &mut self.list_state);
        self.render_footer(frame, footer_area);

        render_suggestions(frame, input_area, area, &self.suggestions, &self.theme);

        if self.show_logs {
            let overlay = area.inner(Margin {
                vertical: 1,
                horizontal: 2,
            });
            self.logs
                .render(frame, overlay, &self.ui.labels.logs_title, &self.theme);
        }
    }

    /// Draw the bordered search bar and return the inner input row.
    fn render_search_bar(&self, frame: &mut Frame, area: Rect) -> Rect {
        let labels = &self.ui.labels;
        let voice_label = if self.voice.is_listening() {
            &labels.voice_stop
        } else {
            &labels.voice_start
        };
        let voice_style = if self.voice.is_listening() {
            self.theme.highlight_style()
        } else {
            self.theme.empty_style()
        };
        let voice_hint = Line::from(Span::styled(format!("F4 {voice_label}"), voice_style));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focus == Focus::SearchBar));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        render_border_title(frame, area, voice_hint.left_aligned(), TitleEdge::Bottom);
        self.search_input.render_textarea(frame, inner);
        if self.session.is_loading() {
            render_progress(
                frame,
                inner,
                &labels.loading,
                &self.throbber_state,
                &self.theme,
            );
        }
        inner
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match self.voice.last_error() {
            Some(error) => Line::from(Span::styled(error.to_string(), self.theme.error_style())),
            None => Line::from(Span::styled(KEY_HINTS, self.theme.empty_style())),
        };
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }
}
