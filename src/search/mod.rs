mod commands;
mod evaluator;
mod runtime;
mod session;
mod worker;

pub use commands::{SearchOrigin, SearchRequest, SearchResult};
pub use evaluator::{SearchEvaluator, matches_any_filter, matches_filter, matches_query};
pub use runtime::ResultPolicy;
pub use session::{DEFAULT_LATENCY, SearchOptions, SearchSession, SearchStatus};
