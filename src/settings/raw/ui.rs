use serde::Deserialize;
use tartil::UiConfig;

use crate::cli::CliArgs;

/// `[ui]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) title: Option<String>,
    pub(super) theme: Option<String>,
    pub(super) placeholder: Option<String>,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(title) = cli.title.clone() {
            self.title = Some(title);
        }
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
    }

    pub(super) fn finalize(self) -> (UiConfig, Option<String>) {
        let mut ui = UiConfig::default();
        if let Some(title) = self.title {
            ui = ui.with_title(title);
        }
        if let Some(placeholder) = self.placeholder {
            ui = ui.with_placeholder(placeholder);
        }
        (ui, self.theme)
    }
}
