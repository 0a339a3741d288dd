//! The page-level search controller shared by the TUI and headless mode.
//!
//! [`SearchSession`] owns the current query, the active filters and the single
//! result slot. Every producer of queries (search bar, AI panel, voice
//! transcripts, filter changes) goes through it, so they all share one
//! evaluation path and one loading state.

use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::{Duration, Instant};

use serde::Serialize;

use super::commands::{SearchOrigin, SearchRequest, SearchResult};
use super::evaluator::SearchEvaluator;
use super::runtime::{ResultPolicy, SearchRuntime};
use super::worker;
use crate::catalog::{Catalog, FilterSet, Record};

/// Default artificial round-trip applied before results are delivered.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// Caller-visible state of the result slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "kebab-case")]
pub enum SearchStatus {
    /// Nothing searched yet, or reset by an empty query without filters.
    Idle,
    Searching,
    Results(usize),
    /// A search ran with a non-empty query and matched nothing.
    NoResults,
    /// A filter-only search ran and matched nothing.
    Empty,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub latency: Duration,
    pub policy: ResultPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            policy: ResultPolicy::default(),
        }
    }
}

pub struct SearchSession {
    catalog: Arc<Catalog>,
    query: String,
    filters: FilterSet,
    results: Vec<usize>,
    has_searched: bool,
    runtime: SearchRuntime,
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.runtime.shutdown();
    }
}

impl SearchSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, options: SearchOptions) -> Self {
        let evaluator = SearchEvaluator::new(Arc::clone(&catalog));
        let (tx, rx) = worker::spawn(evaluator);
        let runtime = SearchRuntime::new(tx, rx, options.policy, options.latency);
        Self {
            catalog,
            query: String::new(),
            filters: FilterSet::new(),
            results: Vec::new(),
            has_searched: false,
            runtime,
        }
    }

    /// Submit a query from the search bar or an accepted suggestion.
    pub fn submit_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.perform_search(SearchOrigin::Text);
    }

    /// Submit a free-text AI query. It is evaluated as a plain substring search.
    pub fn submit_ai_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        log::info!("AI search requested for '{}'", self.query);
        self.perform_search(SearchOrigin::Ai);
    }

    /// Submit a speech-to-text transcript as the new query.
    pub fn submit_transcript(&mut self, transcript: impl Into<String>) {
        self.query = transcript.into();
        self.perform_search(SearchOrigin::Voice);
    }

    /// Replace the active filters. The search only re-runs once a search has
    /// already been executed in this session.
    pub fn set_filters(&mut self, filters: FilterSet) {
        self.filters = filters;
        if self.has_searched {
            self.perform_search(SearchOrigin::Filters);
        }
    }

    fn perform_search(&mut self, origin: SearchOrigin) {
        if self.query.is_empty() && self.filters.is_empty() {
            self.results.clear();
            self.runtime.supersede();
            return;
        }

        self.has_searched = true;
        let request = SearchRequest {
            query: self.query.clone(),
            filters: self.filters.clone(),
            origin,
        };
        let id = self.runtime.issue_search(request);
        log::debug!(
            "issued {origin} search {id} for '{}' with {} filter(s)",
            self.query,
            self.filters.len()
        );
    }

    /// Apply every completion waiting on the result channel. Returns `true`
    /// when any completion was applied.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        loop {
            match self.runtime.try_recv() {
                Ok(result) => applied |= self.handle_search_result(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }
        applied
    }

    fn handle_search_result(&mut self, result: SearchResult) -> bool {
        if !self.runtime.accepts(result.id) {
            log::debug!("discarding stale search {}", result.id);
            return false;
        }

        log::debug!(
            "{} search {} resolved with {} match(es)",
            result.origin,
            result.id,
            result.indices.len()
        );
        self.results = result.indices;
        self.runtime.record_result_completion();
        true
    }

    /// Block until no search is in flight or `timeout` passes, pumping results
    /// along the way. Returns `true` when the session settled in time.
    pub fn wait_until_settled(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.pump();
            if !self.runtime.is_in_flight() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[must_use]
    pub fn status(&self) -> SearchStatus {
        if self.runtime.is_in_flight() {
            SearchStatus::Searching
        } else if !self.results.is_empty() {
            SearchStatus::Results(self.results.len())
        } else if !self.has_searched {
            SearchStatus::Idle
        } else if !self.query.is_empty() {
            SearchStatus::NoResults
        } else if !self.filters.is_empty() {
            SearchStatus::Empty
        } else {
            SearchStatus::Idle
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.runtime.is_in_flight()
    }

    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Records currently held in the result slot, in catalog order.
    pub fn results(&self) -> impl Iterator<Item = &Record> + '_ {
        self.results
            .iter()
            .filter_map(|&index| self.catalog.record(index))
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn result(&self, position: usize) -> Option<&Record> {
        self.results
            .get(position)
            .and_then(|&index| self.catalog.record(index))
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.runtime.latency()
    }

    /// Change the simulated latency applied to subsequently issued searches.
    pub fn set_latency(&mut self, latency: Duration) {
        self.runtime.set_latency(latency);
    }

    #[must_use]
    pub fn policy(&self) -> ResultPolicy {
        self.runtime.policy()
    }

    #[must_use]
    pub fn has_issued_query(&self) -> bool {
        self.runtime.has_issued_query()
    }
}
