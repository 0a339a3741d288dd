use serde::Deserialize;
use tartil::voice::DEFAULT_LANGUAGE;

use super::super::resolved::VoiceSettings;
use crate::cli::CliArgs;

/// `[voice]` values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct VoiceSection {
    pub(super) command: Option<String>,
    pub(super) args: Option<Vec<String>>,
    pub(super) language: Option<String>,
}

impl VoiceSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(command) = cli.voice_command.clone() {
            self.command = Some(command);
        }
        if let Some(language) = cli.voice_lang.clone() {
            self.language = Some(language);
        }
    }

    pub(super) fn finalize(self) -> VoiceSettings {
        VoiceSettings {
            command: self.command.filter(|command| !command.trim().is_empty()),
            args: self.args.unwrap_or_default(),
            language: self
                .language
                .filter(|language| !language.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        }
    }
}
