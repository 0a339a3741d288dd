use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::style::Theme;

/// Spinner followed by `label`, or just the label once work is done.
#[must_use]
pub fn progress_line(
    label: &str,
    busy: bool,
    throbber_state: &ThrobberState,
    theme: &Theme,
) -> Line<'static> {
    let muted_style = theme.empty_style();
    let mut line = Line::default();
    if busy {
        let spinner = Throbber::default()
            .style(muted_style)
            .throbber_style(muted_style);
        line.spans.push(spinner.to_symbol_span(throbber_state));
    }
    line.spans.push(Span::styled(label.to_string(), muted_style));
    line
}

/// Right-align a spinning indicator on the first row of `area`.
pub fn render_progress(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 || label.is_empty() {
        return;
    }

    let line = progress_line(label, true, throbber_state, theme);
    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };
    let max_width = area.right().saturating_sub(start_x).min(line_width);
    frame
        .buffer_mut()
        .set_line(start_x, area.top(), &line, max_width);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_indicator_has_no_spinner() {
        let state = ThrobberState::default();
        let line = progress_line("جاري البحث...", false, &state, &Theme::default());
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn busy_indicator_leads_with_spinner() {
        let state = ThrobberState::default();
        let line = progress_line("جاري البحث...", true, &state, &Theme::default());
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, "جاري البحث...");
    }
}
