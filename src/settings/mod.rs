//! Configuration loading and resolution.
//!
//! `load` merges defaults, config files, environment variables and CLI flags
//! through the `config` crate and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{ResolvedConfig, VoiceSettings};
