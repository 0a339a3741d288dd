use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::SearchOutcome;
use super::state::Focus;

impl<'a> App<'a> {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some(self.cancelled()));
        }

        if self.show_logs {
            match key.code {
                KeyCode::F(12) | KeyCode::Esc => self.show_logs = false,
                _ => {
                    self.logs.handle_key(key);
                }
            }
            return Ok(None);
        }

        match key.code {
            KeyCode::F(12) => self.show_logs = true,
            KeyCode::F(2) => {
                self.filter_panel.toggle();
                let focus = if self.filter_panel.is_open() {
                    Focus::Filters
                } else {
                    Focus::SearchBar
                };
                self.set_focus(focus);
            }
            KeyCode::F(3) => {
                self.ai_panel.toggle();
                let focus = if self.ai_panel.is_expanded() {
                    Focus::Ai
                } else {
                    Focus::SearchBar
                };
                self.set_focus(focus);
            }
            KeyCode::F(4) => self.voice.toggle(),
            KeyCode::Tab => self.cycle_focus(true),
            KeyCode::BackTab => self.cycle_focus(false),
            _ => {
                return match self.focus {
                    Focus::SearchBar => self.handle_search_bar_key(key),
                    Focus::Filters => {
                        self.handle_filter_key(key);
                        Ok(None)
                    }
                    Focus::Ai => {
                        self.handle_ai_key(key);
                        Ok(None)
                    }
                    Focus::Results => self.handle_results_key(key),
                };
            }
        }
        Ok(None)
    }

    fn cancelled(&self) -> SearchOutcome {
        SearchOutcome::cancelled(self.search_input.text(), self.session.filters().clone())
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let current = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        self.set_focus(order[next]);
        self.ensure_selection();
    }

    fn handle_search_bar_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        match key.code {
            KeyCode::Esc => {
                if !self.suggestions.is_visible() {
                    return Ok(Some(self.cancelled()));
                }
                self.suggestions.hide();
            }
            KeyCode::Enter => {
                let query = self.suggestions.accept(self.search_input.text());
                self.submit_text(query);
            }
            KeyCode::Down if self.suggestions.is_visible() => self.suggestions.next(),
            KeyCode::Up if self.suggestions.is_visible() => self.suggestions.previous(),
            KeyCode::Down => {
                if self.session.result_count() > 0 {
                    self.set_focus(Focus::Results);
                    self.ensure_selection();
                }
            }
            KeyCode::Up => {}
            _ => {
                if self.search_input.input(key) {
                    self.suggestions.update(self.search_input.text());
                }
            }
        }
        Ok(None)
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let vocabulary = self.session.catalog().vocabulary();
        let shifted = key.modifiers.contains(KeyModifiers::SHIFT);
        let changed = match key.code {
            KeyCode::Left if shifted => {
                self.filter_panel.previous_chip();
                false
            }
            KeyCode::Right if shifted => {
                self.filter_panel.next_chip();
                false
            }
            KeyCode::Left => {
                self.filter_panel.move_left();
                false
            }
            KeyCode::Right => {
                self.filter_panel.move_right();
                false
            }
            KeyCode::Up => {
                self.filter_panel.move_up();
                false
            }
            KeyCode::Down => {
                self.filter_panel.move_down(vocabulary);
                false
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.filter_panel.select_highlighted(vocabulary),
            KeyCode::Backspace => self.filter_panel.remove_chip(),
            KeyCode::Delete => self.filter_panel.clear(),
            KeyCode::Esc => {
                self.filter_panel.close();
                self.set_focus(Focus::SearchBar);
                false
            }
            _ => false,
        };

        if changed {
            self.apply_filters();
        }
    }

    fn handle_ai_key(&mut self, key: KeyEvent) {
        let prompts = self.session.catalog().ai_prompts();
        match key.code {
            KeyCode::Enter => {
                if let Some(query) = self.ai_panel.submit(prompts) {
                    self.submit_ai(query);
                }
            }
            KeyCode::Down => self.ai_panel.next_prompt(prompts.len()),
            KeyCode::Up => self.ai_panel.previous_prompt(),
            KeyCode::Esc => {
                self.ai_panel.collapse();
                self.set_focus(Focus::SearchBar);
            }
            _ => {
                self.ai_panel.input_mut().input(key);
            }
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
        match key.code {
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            KeyCode::Enter => {
                let selection = self
                    .list_state
                    .selected()
                    .and_then(|position| self.session.result(position))
                    .cloned();
                if let Some(record) = selection {
                    return Ok(Some(SearchOutcome::accepted(
                        self.search_input.text(),
                        self.session.filters().clone(),
                        record,
                    )));
                }
            }
            KeyCode::Esc => self.set_focus(Focus::SearchBar),
            _ => {}
        }
        Ok(None)
    }

    fn move_selection_up(&mut self) {
        match self.list_state.selected() {
            Some(0) | None => self.set_focus(Focus::SearchBar),
            Some(selected) => self.list_state.select(Some(selected - 1)),
        }
    }

    fn move_selection_down(&mut self) {
        let len = self.session.result_count();
        match self.list_state.selected() {
            Some(selected) if selected + 1 < len => self.list_state.select(Some(selected + 1)),
            None if len > 0 => self.list_state.select(Some(0)),
            _ => {}
        }
    }
}
