//! Interactive terminal UI for `tartil`.
//!
//! The [`builder`] module exposes the public-facing [`SearchUi`] builder. The
//! remaining submodules implement the event loop, rendering pipeline, state
//! management and the widgets that feed the shared search session.

mod actions;
mod builder;
pub mod components;
mod config;
mod outcome;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::SearchUi;
pub use config::{UiConfig, UiLabels};
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use state::{App, Focus, InitialSearch};
