use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::catalog::FilterSet;

/// Which input surface produced a search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrigin {
    /// The search bar, including accepted suggestions.
    Text,
    /// The free-text AI panel. Evaluated exactly like [`SearchOrigin::Text`].
    Ai,
    /// A speech-to-text transcript.
    Voice,
    /// A change to the active filter set.
    Filters,
}

impl fmt::Display for SearchOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchOrigin::Text => "text",
            SearchOrigin::Ai => "ai",
            SearchOrigin::Voice => "voice",
            SearchOrigin::Filters => "filters",
        })
    }
}

/// Snapshot of the inputs of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub filters: FilterSet,
    pub origin: SearchOrigin,
}

/// Commands understood by the background search worker.
#[derive(Debug)]
pub(crate) enum SearchCommand {
    /// Evaluate a request once `delay` has elapsed.
    Query {
        /// Identifier that lets the caller correlate completions with requests.
        id: u64,
        request: SearchRequest,
        delay: Duration,
    },
    /// Stop accepting new requests. Timers already scheduled still fire.
    Shutdown,
}

/// A completed evaluation delivered back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: u64,
    pub origin: SearchOrigin,
    /// Catalog positions of the matching records, in catalog order.
    pub indices: Vec<usize>,
}
