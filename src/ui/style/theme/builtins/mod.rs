use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SAGE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(236, 253, 245))
        .bg(Color::Rgb(6, 95, 70)),
    row_highlight: Style::new()
        .bg(Color::Rgb(209, 250, 229))
        .fg(Color::Rgb(6, 78, 59)),
    prompt: Style::new().fg(Color::Rgb(16, 185, 129)),
    empty: Style::new().fg(Color::Rgb(120, 140, 120)),
    highlight: Style::new()
        .fg(Color::Rgb(5, 150, 105))
        .add_modifier(Modifier::BOLD),
    badge: Style::new()
        .fg(Color::Rgb(4, 120, 87))
        .bg(Color::Rgb(209, 250, 229)),
    chip: Style::new()
        .fg(Color::Rgb(4, 120, 87))
        .bg(Color::Rgb(236, 253, 245)),
    error: Style::new().fg(Color::Rgb(239, 68, 68)),
};

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::LightCyan),
    empty: Style::new().fg(Color::DarkGray),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    badge: Style::new().fg(Color::Black).bg(Color::LightCyan),
    chip: Style::new().fg(Color::LightCyan).bg(Color::Rgb(30, 41, 59)),
    error: Style::new().fg(Color::LightRed),
};

pub(super) const DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("sage", SAGE).with_aliases(&["default", "emerald"]),
    ThemeDefinition::new("slate", SLATE).with_aliases(&["dark"]),
];
