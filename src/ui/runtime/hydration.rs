use crate::ui::App;

impl<'a> App<'a> {
    /// Apply the configured startup search, if any. Runs once.
    pub(in crate::ui) fn hydrate_initial_results(&mut self) {
        let Some(initial) = self.initial.take() else {
            return;
        };

        if !initial.filters.is_empty() {
            for filter in &initial.filters {
                self.filter_panel.select(filter.clone());
            }
            self.session.set_filters(initial.filters.clone());
        }

        if initial.query.is_empty() && initial.filters.is_empty() {
            return;
        }

        if initial.ai && !initial.query.is_empty() {
            self.submit_ai(initial.query);
        } else {
            self.submit_text(initial.query);
        }
    }
}
