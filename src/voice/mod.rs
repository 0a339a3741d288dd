//! Speech-to-text input helper.
//!
//! Recognition runs on a background thread behind the [`SpeechRecognizer`]
//! trait. Failures are logged and end the listening state; they never reach
//! the search session.

mod command;

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use thiserror::Error;

pub use command::CommandRecognizer;

/// Language tag handed to recognizers when none is configured.
pub const DEFAULT_LANGUAGE: &str = "ar-SA";

#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("speech recognition is not available")]
    Unsupported,
    #[error("failed to launch speech recognizer `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("speech recognizer failed: {0}")]
    Failed(String),
    #[error("no speech was recognized")]
    NoSpeech,
}

/// Turns one utterance into text.
pub trait SpeechRecognizer: Send + Sync {
    fn is_available(&self) -> bool {
        true
    }

    /// Listen for a single utterance in `language` and return its transcript.
    fn recognize(&self, language: &str) -> Result<String, VoiceError>;
}

/// Recognizer used when nothing is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unavailable;

impl SpeechRecognizer for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    fn recognize(&self, _language: &str) -> Result<String, VoiceError> {
        Err(VoiceError::Unsupported)
    }
}

/// Listening toggle around a [`SpeechRecognizer`].
pub struct VoiceInput {
    recognizer: Arc<dyn SpeechRecognizer>,
    language: String,
    pending: Option<Receiver<Result<String, VoiceError>>>,
    last_error: Option<String>,
}

impl VoiceInput {
    pub fn new(recognizer: Arc<dyn SpeechRecognizer>, language: impl Into<String>) -> Self {
        Self {
            recognizer,
            language: language.into(),
            pending: None,
            last_error: None,
        }
    }

    #[must_use]
    pub fn unavailable() -> Self {
        Self::new(Arc::new(Unavailable), DEFAULT_LANGUAGE)
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.recognizer.is_available()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Message of the most recent failure, cleared when listening restarts.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start listening, or stop and drop whatever the recognizer returns.
    pub fn toggle(&mut self) {
        if self.pending.take().is_some() {
            log::info!("voice input stopped");
            return;
        }

        if !self.recognizer.is_available() {
            self.fail(VoiceError::Unsupported);
            return;
        }

        self.last_error = None;
        let (tx, rx) = mpsc::channel();
        let recognizer = Arc::clone(&self.recognizer);
        let language = self.language.clone();
        thread::spawn(move || {
            let _ = tx.send(recognizer.recognize(&language));
        });
        self.pending = Some(rx);
        log::info!("voice input listening ({})", self.language);
    }

    /// Return a finished transcript, if any. Errors are logged and swallowed.
    pub fn poll(&mut self) -> Option<String> {
        let outcome = match self.pending.as_ref()?.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(VoiceError::Failed(
                "recognizer thread exited without a result".into(),
            )),
        };
        self.pending = None;

        match outcome {
            Ok(transcript) => {
                log::info!("voice transcript received: '{transcript}'");
                Some(transcript)
            }
            Err(err) => {
                self.fail(err);
                None
            }
        }
    }

    fn fail(&mut self, err: VoiceError) {
        log::error!("voice input error: {err}");
        self.last_error = Some(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    struct Scripted(Result<&'static str, &'static str>);

    impl SpeechRecognizer for Scripted {
        fn recognize(&self, language: &str) -> Result<String, VoiceError> {
            assert_eq!(language, "ar-SA");
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(reason) => Err(VoiceError::Failed(reason.to_string())),
            }
        }
    }

    fn poll_until_done(input: &mut VoiceInput) -> Option<String> {
        let deadline = Instant::now() + Duration::from_secs(2);
        while input.is_listening() && Instant::now() < deadline {
            if let Some(transcript) = input.poll() {
                return Some(transcript);
            }
            thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn unavailable_recognizer_never_listens() {
        let mut input = VoiceInput::unavailable();
        input.toggle();
        assert!(!input.is_listening());
        assert_eq!(input.last_error(), Some("speech recognition is not available"));
    }

    #[test]
    fn transcript_is_delivered_and_listening_ends() {
        let mut input = VoiceInput::new(Arc::new(Scripted(Ok("سورة البقرة"))), DEFAULT_LANGUAGE);
        input.toggle();
        assert!(input.is_listening());
        assert_eq!(poll_until_done(&mut input).as_deref(), Some("سورة البقرة"));
        assert!(!input.is_listening());
    }

    #[test]
    fn recognizer_failure_is_recorded_locally() {
        let mut input = VoiceInput::new(Arc::new(Scripted(Err("microphone busy"))), DEFAULT_LANGUAGE);
        input.toggle();
        assert_eq!(poll_until_done(&mut input), None);
        assert!(!input.is_listening());
        assert_eq!(
            input.last_error(),
            Some("speech recognizer failed: microphone busy")
        );
    }

    #[test]
    fn second_toggle_stops_listening() {
        let mut input = VoiceInput::new(Arc::new(Scripted(Ok("الفاتحة"))), DEFAULT_LANGUAGE);
        input.toggle();
        input.toggle();
        assert!(!input.is_listening());
        assert_eq!(input.poll(), None);
    }
}
