use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub highlight: Style,
    pub badge: Style,
    pub chip: Style,
    pub error: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn badge_style(&self) -> Style {
        self.badge
    }

    #[must_use]
    pub fn chip_style(&self) -> Style {
        self.chip
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    /// Border style for a pane, brighter when it holds keyboard focus.
    #[must_use]
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.header_fg())
        } else {
            self.empty
        }
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(name))
    }
}
