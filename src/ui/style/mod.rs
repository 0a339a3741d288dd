//! Visual styling utilities.
//!
//! Themes hold the color schemes applied to the terminal UI.

pub mod theme;

pub use theme::{Theme, by_name, default_theme, names};
