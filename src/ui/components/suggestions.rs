use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use crate::ui::style::Theme;

/// Autocomplete list shown under the search bar.
#[derive(Debug, Clone, Default)]
pub struct Suggestions {
    items: Vec<String>,
    filtered: Vec<usize>,
    active: Option<usize>,
    visible: bool,
}

impl Suggestions {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Recompute matches for the current input. Matching is a
    /// case-insensitive substring test and resets the active entry.
    pub fn update(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        self.active = None;
        self.visible = !query.is_empty() && !self.filtered.is_empty();
    }

    pub fn filtered(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&index| self.items[index].as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.active = Some(match self.active {
            None => 0,
            Some(index) => (index + 1).min(last),
        });
    }

    pub fn previous(&mut self) {
        if let Some(index) = self.active {
            self.active = Some(index.saturating_sub(1));
        }
    }

    /// Resolve what Enter submits: the highlighted suggestion when there is
    /// one, otherwise the typed text. The list is hidden either way.
    pub fn accept(&mut self, query: &str) -> String {
        let chosen = self
            .active
            .filter(|_| self.visible)
            .and_then(|position| self.filtered.get(position))
            .map(|&index| self.items[index].clone());
        self.hide();
        chosen.unwrap_or_else(|| query.to_string())
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.active = None;
    }
}

/// Draw the dropdown directly beneath `anchor`, clipped to `bounds`.
pub fn render_suggestions(
    frame: &mut Frame,
    anchor: Rect,
    bounds: Rect,
    suggestions: &Suggestions,
    theme: &Theme,
) {
    if !suggestions.is_visible() {
        return;
    }

    let top = anchor.bottom();
    let available = bounds.bottom().saturating_sub(top);
    let wanted = suggestions.len() as u16 + 2;
    let height = wanted.min(available);
    if height < 3 || anchor.width == 0 {
        return;
    }

    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height,
    };

    let items: Vec<ListItem> = suggestions
        .filtered()
        .map(|item| ListItem::new(Line::from(item.to_string()).right_aligned()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        )
        .highlight_style(theme.row_highlight_style());

    let mut state = ListState::default().with_selected(suggestions.active());
    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Suggestions {
        Suggestions::new(vec![
            "سورة البقرة".into(),
            "سورة الفاتحة".into(),
            "Mishary Alafasy".into(),
        ])
    }

    #[test]
    fn empty_input_hides_the_list() {
        let mut suggestions = sample();
        suggestions.update("");
        assert!(!suggestions.is_visible());
        assert_eq!(suggestions.len(), 3);
    }

    #[test]
    fn matching_ignores_case() {
        let mut suggestions = sample();
        suggestions.update("ALAFASY");
        assert!(suggestions.is_visible());
        assert_eq!(suggestions.filtered().collect::<Vec<_>>(), vec!["Mishary Alafasy"]);
    }

    #[test]
    fn no_match_keeps_the_list_hidden() {
        let mut suggestions = sample();
        suggestions.update("xyz");
        assert!(!suggestions.is_visible());
        assert!(suggestions.is_empty());
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut suggestions = sample();
        suggestions.update("سورة");
        suggestions.previous();
        assert_eq!(suggestions.active(), None);
        suggestions.next();
        suggestions.next();
        suggestions.next();
        assert_eq!(suggestions.active(), Some(1));
        suggestions.previous();
        suggestions.previous();
        assert_eq!(suggestions.active(), Some(0));
    }

    #[test]
    fn accept_prefers_the_active_entry() {
        let mut suggestions = sample();
        suggestions.update("سورة");
        suggestions.next();
        suggestions.next();
        assert_eq!(suggestions.accept("سورة"), "سورة الفاتحة");
        assert!(!suggestions.is_visible());
    }

    #[test]
    fn accept_without_selection_returns_the_typed_text() {
        let mut suggestions = sample();
        suggestions.update("سورة");
        assert_eq!(suggestions.accept("سورة"), "سورة");
    }

    #[test]
    fn typing_resets_the_active_entry() {
        let mut suggestions = sample();
        suggestions.update("سورة");
        suggestions.next();
        suggestions.next();
        suggestions.update("سورة الب");
        assert_eq!(suggestions.active(), None);
    }
}
