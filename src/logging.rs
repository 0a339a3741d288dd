//! Log plumbing for the terminal interface.
//!
//! Records go through the `log` facade into `tui-logger`, which buffers them
//! for the in-UI log panel instead of writing to the terminal the UI owns.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the tui-logger backend. Safe to call more than once.
pub fn initialize() {
    INIT.call_once(|| {
        if let Err(err) = tui_logger::init_logger(LevelFilter::Trace) {
            // Another logger already owns the facade (for example in tests).
            eprintln!("tartil: logger unavailable: {err:?}");
            return;
        }
        tui_logger::set_default_level(LevelFilter::Info);
    });
}

/// Apply the configured verbosity to every target.
pub fn set_level(level: LevelFilter) {
    initialize();
    tui_logger::set_default_level(level);
}

/// Parse a level name the way configuration files spell it.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn initialize_is_idempotent() {
        initialize();
        initialize();
        log::info!("logger initialized twice without panicking");
    }
}
