use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text input backed by `tui-textarea`.
pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
    placeholder: Option<(String, Style)>,
    focused: bool,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        let mut input = Self {
            textarea: TextArea::default(),
            placeholder: None,
            focused: true,
        };
        input.set_text(initial);
        input
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>, style: Style) -> Self {
        self.placeholder = Some((placeholder.into(), style));
        let text = self.text().to_string();
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let mut textarea = TextArea::new(vec![text.into()]);
        textarea.set_cursor_line_style(Style::default());
        if let Some((placeholder, style)) = &self.placeholder {
            textarea.set_placeholder_text(placeholder.clone());
            textarea.set_placeholder_style(*style);
        }
        textarea.move_cursor(CursorMove::End);
        self.textarea = textarea;
        self.apply_cursor_style();
    }

    pub fn clear(&mut self) {
        self.set_text(String::new());
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        self.apply_cursor_style();
    }

    fn apply_cursor_style(&mut self) {
        let style = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(style);
    }

    /// Feed a key press to the editor. Returns `true` when the text changed.
    /// Line breaks are swallowed so the input stays on one line.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let newline = matches!(key.code, KeyCode::Enter)
            || (key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
        if newline {
            return false;
        }
        self.textarea.input(key)
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}
