use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, Wrap};
use throbber_widgets_tui::ThrobberState;
use unicode_width::UnicodeWidthStr;

use super::progress::progress_line;
use crate::catalog::Record;
use crate::search::{SearchSession, SearchStatus};
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Argument bundle for rendering the results pane.
pub struct ResultsContext<'a> {
    pub session: &'a SearchSession,
    pub labels: &'a UiLabels,
    pub theme: &'a Theme,
    pub throbber_state: &'a ThrobberState,
    pub focused: bool,
}

pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    context: ResultsContext<'_>,
    list_state: &mut ListState,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let ResultsContext {
        session,
        labels,
        theme,
        throbber_state,
        focused,
    } = context;

    match session.status() {
        SearchStatus::Searching => {
            let line = progress_line(&labels.loading, true, throbber_state, theme);
            let paragraph = Paragraph::new(line).alignment(Alignment::Center);
            frame.render_widget(paragraph, centered_row(area));
        }
        SearchStatus::NoResults => {
            let message = labels.no_results_for(session.query());
            let paragraph = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(theme.empty_style())
                .wrap(Wrap { trim: true });
            frame.render_widget(paragraph, centered_row(area));
        }
        SearchStatus::Results(count) => {
            let [header_area, list_area] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            let header = Paragraph::new(labels.results_header_for(count))
                .alignment(Alignment::Right)
                .style(theme.header_style());
            frame.render_widget(header, header_area);

            let card_width = list_area.width.saturating_sub(2 + HIGHLIGHT_SYMBOL.width() as u16);
            let items: Vec<ListItem> = session
                .results()
                .map(|record| ListItem::new(card(record, labels, theme, card_width)))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::TOP)
                        .border_style(theme.border_style(focused)),
                )
                .highlight_style(theme.row_highlight_style())
                .highlight_symbol(HIGHLIGHT_SYMBOL)
                .highlight_spacing(HighlightSpacing::WhenSelected);
            frame.render_stateful_widget(list, list_area, list_state);
        }
        SearchStatus::Idle | SearchStatus::Empty => {}
    }
}

/// Lines for one result: badge and title, subtitle, then the description.
fn card(record: &Record, labels: &UiLabels, theme: &Theme, width: u16) -> Text<'static> {
    let badge = format!("[{}]", labels.badge(record.kind));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(record.title.clone(), theme.highlight_style().add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(badge, theme.badge_style()),
        ]),
        Line::from(Span::styled(record.subtitle.clone(), theme.prompt_style())),
    ];
    if let Some(description) = &record.description {
        lines.push(Line::from(Span::styled(
            truncate_to_width(description, width as usize),
            theme.empty_style(),
        )));
    }
    lines.push(Line::default());
    Text::from(lines).alignment(Alignment::Right)
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 || text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn centered_row(area: Rect) -> Rect {
    let top = area.y + area.height.saturating_sub(1) / 2;
    Rect {
        y: top,
        height: area.bottom().saturating_sub(top).min(2),
        ..area
    }
}
