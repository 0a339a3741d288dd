use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use super::input::SearchInput;
use super::title::{TitleEdge, render_border_title};
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

/// Collapsible free-text search box with canned prompts.
pub struct AiPanel<'a> {
    expanded: bool,
    input: SearchInput<'a>,
    prompt: Option<usize>,
}

impl<'a> AiPanel<'a> {
    pub fn new(labels: &UiLabels, theme: &Theme) -> Self {
        let mut input =
            SearchInput::new("").with_placeholder(labels.ai_placeholder.clone(), theme.empty_style());
        input.set_focused(false);
        Self {
            expanded: false,
            input,
            prompt: None,
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        self.prompt = None;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
        self.prompt = None;
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.input.text()
    }

    pub fn input_mut(&mut self) -> &mut SearchInput<'a> {
        &mut self.input
    }

    #[must_use]
    pub fn highlighted_prompt(&self) -> Option<usize> {
        self.prompt
    }

    pub fn next_prompt(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.prompt = Some(match self.prompt {
            None => 0,
            Some(index) => (index + 1).min(count - 1),
        });
    }

    pub fn previous_prompt(&mut self) {
        if let Some(index) = self.prompt {
            self.prompt = Some(index.saturating_sub(1));
        }
    }

    /// Resolve what Enter submits.
    ///
    /// Typed text wins when it is not blank; it is returned untrimmed and the
    /// box is cleared. Otherwise the highlighted prompt is used. The panel
    /// collapses whenever something is returned.
    pub fn submit(&mut self, prompts: &[String]) -> Option<String> {
        if !self.input.text().trim().is_empty() {
            let query = self.input.text().to_string();
            self.input.clear();
            self.collapse();
            return Some(query);
        }

        let prompt = self.prompt.and_then(|index| prompts.get(index)).cloned()?;
        self.collapse();
        Some(prompt)
    }
}

/// Rows the panel occupies for the given prompt count.
#[must_use]
pub fn panel_height(panel: &AiPanel<'_>, prompts: usize) -> u16 {
    if panel.is_expanded() {
        // borders + hint + input + prompts header + prompts
        5 + prompts as u16
    } else {
        1
    }
}

pub fn render_ai_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &AiPanel<'_>,
    prompts: &[String],
    labels: &UiLabels,
    theme: &Theme,
    focused: bool,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let marker = if panel.is_expanded() { "▾ " } else { "▸ " };
    let title = Line::from(vec![
        Span::styled(labels.ai_title.clone(), theme.header_style()),
        Span::raw(" "),
        Span::raw(marker),
    ])
    .right_aligned();

    if !panel.is_expanded() {
        let style = if focused {
            theme.highlight_style()
        } else {
            theme.prompt_style()
        };
        frame.render_widget(Paragraph::new(title).style(style), area);
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_border_title(frame, area, title, TitleEdge::Top);

    let [hint_area, input_area, header_area, prompts_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Line::from(labels.ai_hint.clone()).right_aligned()).style(theme.empty_style()),
        hint_area,
    );
    panel.input.render_textarea(frame, input_area);
    frame.render_widget(
        Paragraph::new(Line::from(labels.ai_suggestions.clone()).right_aligned())
            .style(theme.prompt_style()),
        header_area,
    );

    let items: Vec<ListItem> = prompts
        .iter()
        .map(|prompt| ListItem::new(Line::from(prompt.clone()).right_aligned()))
        .collect();
    let list = List::new(items).highlight_style(theme.row_highlight_style());
    let mut state = ListState::default().with_selected(panel.highlighted_prompt());
    frame.render_stateful_widget(list, prompts_area, &mut state);
}
