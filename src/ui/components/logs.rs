use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::ui::style::Theme;

/// Widget state for the runtime log overlay.
pub struct LogPanel {
    widget: TuiWidgetState,
}

impl LogPanel {
    pub fn new() -> Self {
        let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
        Self { widget }
    }

    /// Forward navigation keys to the logger widget. Returns `true` when the
    /// key was consumed.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let event = match key.code {
            KeyCode::Char(' ') => Some(TuiWidgetEvent::SpaceKey),
            KeyCode::Char('h') | KeyCode::Char('H') => Some(TuiWidgetEvent::HideKey),
            KeyCode::Char('f') | KeyCode::Char('F') => Some(TuiWidgetEvent::FocusKey),
            KeyCode::Char('+') => Some(TuiWidgetEvent::PlusKey),
            KeyCode::Char('-') => Some(TuiWidgetEvent::MinusKey),
            KeyCode::Up => Some(TuiWidgetEvent::UpKey),
            KeyCode::Down => Some(TuiWidgetEvent::DownKey),
            KeyCode::Left => Some(TuiWidgetEvent::LeftKey),
            KeyCode::Right => Some(TuiWidgetEvent::RightKey),
            KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
            _ => None,
        };

        match event {
            Some(event) => {
                self.widget.transition(event);
                true
            }
            None => false,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
        frame.render_widget(Clear, area);
        if area.width == 0 || area.height == 0 {
            return;
        }

        let widget = TuiLoggerSmartWidget::default()
            .title_log(title)
            .title_target("Targets")
            .highlight_style(theme.highlight_style())
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .state(&self.widget);
        frame.render_widget(widget, area);
    }
}

impl Default for LogPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::crossterm::event::KeyModifiers;

    use super::*;

    #[test]
    fn navigation_keys_are_consumed() {
        let panel = LogPanel::new();
        assert!(panel.handle_key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE)));
        assert!(panel.handle_key(KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE)));
    }

    #[test]
    fn unrelated_keys_fall_through() {
        let panel = LogPanel::new();
        assert!(!panel.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!panel.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)));
    }
}
