use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::title::{TitleEdge, render_border_title};
use crate::catalog::{Filter, FilterCategory, FilterSet, Vocabulary};
use crate::ui::config::UiLabels;
use crate::ui::style::Theme;

const SELECTED_MARK: &str = "✓ ";
const CHIP_CLOSE: &str = " ×";

/// Category picker plus the chips of the active filters.
///
/// Columns follow [`FilterCategory::ALL`] and are laid out right to left, so
/// the first category sits at the right edge.
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    open: bool,
    column: usize,
    rows: [usize; 3],
    selected: FilterSet,
    chip: Option<usize>,
}

impl FilterPanel {
    pub fn new(selected: FilterSet) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.selected
    }

    #[must_use]
    pub fn category(&self) -> FilterCategory {
        FilterCategory::ALL[self.column]
    }

    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.column, self.rows[self.column])
    }

    /// Visually left, which is the next category in reading order.
    pub fn move_left(&mut self) {
        self.column = (self.column + 1).min(FilterCategory::ALL.len() - 1);
    }

    pub fn move_right(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn move_up(&mut self) {
        self.rows[self.column] = self.rows[self.column].saturating_sub(1);
    }

    pub fn move_down(&mut self, vocabulary: &Vocabulary) {
        let len = vocabulary.values(self.category()).len();
        if len == 0 {
            return;
        }
        self.rows[self.column] = (self.rows[self.column] + 1).min(len - 1);
    }

    #[must_use]
    pub fn highlighted(&self, vocabulary: &Vocabulary) -> Option<Filter> {
        let category = self.category();
        vocabulary
            .values(category)
            .get(self.rows[self.column])
            .map(|value| Filter::new(category, value.clone()))
    }

    /// Add the highlighted value. Returns `true` when the set changed.
    pub fn select_highlighted(&mut self, vocabulary: &Vocabulary) -> bool {
        match self.highlighted(vocabulary) {
            Some(filter) => self.select(filter),
            None => false,
        }
    }

    pub fn select(&mut self, filter: Filter) -> bool {
        let added = self.selected.insert(filter);
        if added {
            log::debug!("filter chip added ({} active)", self.selected.len());
        }
        added
    }

    /// Chip under the removal cursor, if one is focused.
    #[must_use]
    pub fn focused_chip(&self) -> Option<usize> {
        self.chip
    }

    pub fn next_chip(&mut self) {
        let len = self.selected.len();
        if len == 0 {
            return;
        }
        self.chip = Some(self.chip.map_or(0, |chip| (chip + 1).min(len - 1)));
    }

    pub fn previous_chip(&mut self) {
        let len = self.selected.len();
        if len == 0 {
            return;
        }
        self.chip = Some(self.chip.map_or(len - 1, |chip| chip.saturating_sub(1)));
    }

    /// Remove the focused chip, or the last one when none is focused.
    pub fn remove_chip(&mut self) -> bool {
        match (self.chip, self.selected.len()) {
            (_, 0) => false,
            (Some(index), _) => self.remove(index),
            (None, len) => self.remove(len - 1),
        }
    }

    pub fn remove(&mut self, index: usize) -> bool {
        let Some(filter) = self.selected.remove(index) else {
            return false;
        };
        log::debug!(
            "filter chip {filter} removed ({} active)",
            self.selected.len()
        );
        self.chip = match self.selected.len() {
            0 => None,
            len => self.chip.map(|chip| chip.min(len - 1)),
        };
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        self.chip = None;
        if changed {
            log::debug!("filter chips cleared");
        }
        changed
    }
}

/// Height the chip row needs, zero when no filter is active.
#[must_use]
pub fn chips_height(panel: &FilterPanel) -> u16 {
    if panel.filters().is_empty() { 0 } else { 1 }
}

pub fn render_chips(
    frame: &mut Frame,
    area: Rect,
    panel: &FilterPanel,
    labels: &UiLabels,
    theme: &Theme,
) {
    if area.height == 0 || panel.filters().is_empty() {
        return;
    }

    let mut spans = Vec::new();
    for (index, filter) in panel.filters().iter().enumerate() {
        let text = format!(
            "{}: {}{}",
            labels.column(filter.category),
            filter.value,
            CHIP_CLOSE
        );
        let style = if panel.focused_chip() == Some(index) {
            theme.highlight_style()
        } else {
            theme.chip_style()
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(labels.clear_filters.clone(), theme.empty_style()));

    let paragraph = Paragraph::new(Line::from(spans).right_aligned()).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &FilterPanel,
    vocabulary: &Vocabulary,
    labels: &UiLabels,
    theme: &Theme,
    focused: bool,
) {
    if !panel.is_open() || area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_border_title(
        frame,
        area,
        Line::from(labels.filters.clone()).right_aligned(),
        TitleEdge::Top,
    );

    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(inner);
    for (index, category) in FilterCategory::ALL.into_iter().enumerate() {
        let column_area = columns[columns.len() - 1 - index];
        let items: Vec<ListItem> = vocabulary
            .values(category)
            .iter()
            .map(|value| {
                let chosen = panel.filters().contains(&Filter::new(category, value.clone()));
                let mark = if chosen { SELECTED_MARK } else { "" };
                ListItem::new(Line::from(format!("{mark}{value}")).right_aligned())
            })
            .collect();

        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(column_area);
        let header = Line::from(Span::styled(
            labels.column(category).to_string(),
            theme.header_style(),
        ))
        .right_aligned();
        frame.render_widget(Paragraph::new(header), header_area);

        let list = List::new(items).highlight_style(theme.row_highlight_style());
        let active = focused && panel.column == index;
        let mut state = ListState::default().with_selected(active.then_some(panel.rows[index]));
        frame.render_stateful_widget(list, list_area, &mut state);
    }
}
