//! Core crate exports for searching the Quran recitation catalog.
//!
//! The [`search`] module holds the evaluator and the asynchronous session that
//! every input surface shares; [`ui`] is the terminal front-end built on top of
//! it. Embedders can drive a [`SearchSession`] directly without the TUI.

pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod search;
pub mod ui;
pub mod voice;

pub use catalog::{Catalog, Filter, FilterCategory, FilterSet, Record, RecordKind};
pub use search::{SearchEvaluator, SearchOptions, SearchSession, SearchStatus};
pub use ui::style::{Theme, default_theme};
pub use ui::{SearchOutcome, SearchUi, UiConfig, run};
