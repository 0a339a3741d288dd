use std::process::{Command, Stdio};

use super::{SpeechRecognizer, VoiceError};

const LANGUAGE_PLACEHOLDER: &str = "{lang}";

/// Delegates recognition to an external program that prints the transcript
/// on stdout. `{lang}` in any argument is replaced with the language tag, and
/// the tag is also exported as `TARTIL_VOICE_LANG`.
#[derive(Debug, Clone)]
pub struct CommandRecognizer {
    program: String,
    args: Vec<String>,
}

impl CommandRecognizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    fn expanded_args(&self, language: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(LANGUAGE_PLACEHOLDER, language))
            .collect()
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn recognize(&self, language: &str) -> Result<String, VoiceError> {
        let output = Command::new(&self.program)
            .args(self.expanded_args(language))
            .env("TARTIL_VOICE_LANG", language)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| VoiceError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("`{}` exited with {}", self.program, output.status)
            } else {
                stderr
            };
            return Err(VoiceError::Failed(reason));
        }

        let transcript = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if transcript.is_empty() {
            return Err(VoiceError::NoSpeech);
        }
        Ok(transcript)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn language_placeholder_is_substituted() {
        let recognizer = CommandRecognizer::new("echo", vec!["--lang={lang}".into(), "x".into()]);
        assert_eq!(
            recognizer.expanded_args("ar-SA"),
            vec!["--lang=ar-SA".to_string(), "x".to_string()]
        );
    }

    #[test]
    fn stdout_becomes_the_transcript() {
        let recognizer = CommandRecognizer::new(
            "sh",
            vec!["-c".into(), "printf '  %s\\n' \"$TARTIL_VOICE_LANG\"".into()],
        );
        assert_eq!(recognizer.recognize("ar-SA").expect("transcript"), "ar-SA");
    }

    #[test]
    fn silent_success_is_no_speech() {
        let recognizer = CommandRecognizer::new("true", Vec::new());
        assert!(matches!(recognizer.recognize("ar-SA"), Err(VoiceError::NoSpeech)));
    }

    #[test]
    fn failing_command_reports_stderr() {
        let recognizer =
            CommandRecognizer::new("sh", vec!["-c".into(), "echo 'no microphone' >&2; exit 3".into()]);
        match recognizer.recognize("ar-SA") {
            Err(VoiceError::Failed(reason)) => assert_eq!(reason, "no microphone"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let recognizer = CommandRecognizer::new("tartil-definitely-missing-recognizer", Vec::new());
        assert!(matches!(
            recognizer.recognize("ar-SA"),
            Err(VoiceError::Spawn { .. })
        ));
    }
}
