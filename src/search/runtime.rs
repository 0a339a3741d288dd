use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use serde::Deserialize;

use super::commands::{SearchCommand, SearchRequest, SearchResult};

/// How completions are reconciled with the single result slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultPolicy {
    /// Every completion is applied as it arrives; the one applied last wins.
    #[default]
    LastResolved,
    /// Only the completion of the most recently issued request is applied.
    LatestIssued,
}

/// Channel endpoints plus the bookkeeping needed to correlate completions.
pub(crate) struct SearchRuntime {
    tx: Sender<SearchCommand>,
    rx: Receiver<SearchResult>,
    next_query_id: u64,
    current_query_id: Option<u64>,
    in_flight: bool,
    policy: ResultPolicy,
    latency: Duration,
}

impl SearchRuntime {
    pub(crate) fn new(
        tx: Sender<SearchCommand>,
        rx: Receiver<SearchResult>,
        policy: ResultPolicy,
        latency: Duration,
    ) -> Self {
        Self {
            tx,
            rx,
            next_query_id: 0,
            current_query_id: None,
            in_flight: false,
            policy,
            latency,
        }
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(SearchCommand::Shutdown);
    }

    pub(crate) fn set_latency(&mut self, latency: Duration) {
        self.latency = latency;
    }

    pub(crate) fn latency(&self) -> Duration {
        self.latency
    }

    pub(crate) fn policy(&self) -> ResultPolicy {
        self.policy
    }

    pub(crate) fn issue_search(&mut self, request: SearchRequest) -> u64 {
        self.next_query_id = self.next_query_id.saturating_add(1);
        let id = self.next_query_id;
        self.current_query_id = Some(id);
        self.in_flight = true;
        let command = SearchCommand::Query {
            id,
            request,
            delay: self.latency,
        };
        if self.tx.send(command).is_err() {
            log::error!("search worker is gone; request {id} was dropped");
            self.in_flight = false;
        }
        id
    }

    /// Whether a completion with `result_id` may overwrite the result slot.
    pub(crate) fn accepts(&self, result_id: u64) -> bool {
        match self.policy {
            ResultPolicy::LastResolved => true,
            ResultPolicy::LatestIssued => Some(result_id) == self.current_query_id,
        }
    }

    /// Invalidate outstanding requests without issuing a new one. Only the
    /// `LatestIssued` policy tracks staleness, so `LastResolved` is untouched.
    pub(crate) fn supersede(&mut self) {
        if self.policy != ResultPolicy::LatestIssued || self.current_query_id.is_none() {
            return;
        }
        self.next_query_id = self.next_query_id.saturating_add(1);
        self.current_query_id = Some(self.next_query_id);
        self.in_flight = false;
    }

    pub(crate) fn record_result_completion(&mut self) {
        self.in_flight = false;
    }

    pub(crate) fn has_issued_query(&self) -> bool {
        self.current_query_id.is_some()
    }

    pub(crate) fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub(crate) fn try_recv(&mut self) -> Result<SearchResult, TryRecvError> {
        self.rx.try_recv()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::catalog::FilterSet;
    use crate::search::SearchOrigin;

    fn runtime(policy: ResultPolicy) -> (SearchRuntime, Receiver<SearchCommand>) {
        let (tx, command_rx) = mpsc::channel();
        let (_result_tx, rx) = mpsc::channel();
        (SearchRuntime::new(tx, rx, policy, Duration::from_millis(800)), command_rx)
    }

    fn request() -> SearchRequest {
        SearchRequest {
            query: "البقرة".into(),
            filters: FilterSet::new(),
            origin: SearchOrigin::Text,
        }
    }

    #[test]
    fn issued_queries_carry_increasing_ids_and_latency() {
        let (mut runtime, commands) = runtime(ResultPolicy::LastResolved);
        assert!(!runtime.has_issued_query());
        assert_eq!(runtime.issue_search(request()), 1);
        assert_eq!(runtime.issue_search(request()), 2);
        assert!(runtime.is_in_flight());

        match commands.recv().expect("command") {
            SearchCommand::Query { id, delay, .. } => {
                assert_eq!(id, 1);
                assert_eq!(delay, Duration::from_millis(800));
            }
            SearchCommand::Shutdown => panic!("unexpected shutdown"),
        }
    }

    #[test]
    fn last_resolved_policy_accepts_stale_ids() {
        let (mut runtime, _commands) = runtime(ResultPolicy::LastResolved);
        runtime.issue_search(request());
        runtime.issue_search(request());
        assert!(runtime.accepts(1));
        assert!(runtime.accepts(2));
    }

    #[test]
    fn latest_issued_policy_rejects_stale_ids() {
        let (mut runtime, _commands) = runtime(ResultPolicy::LatestIssued);
        runtime.issue_search(request());
        runtime.issue_search(request());
        assert!(!runtime.accepts(1));
        assert!(runtime.accepts(2));
    }

    #[test]
    fn superseding_invalidates_the_latest_id() {
        let (mut runtime, _commands) = runtime(ResultPolicy::LatestIssued);
        runtime.issue_search(request());
        runtime.supersede();
        assert!(!runtime.accepts(1));
        assert!(!runtime.is_in_flight());
        assert_eq!(runtime.issue_search(request()), 3);
    }

    #[test]
    fn superseding_leaves_last_resolved_alone() {
        let (mut runtime, _commands) = runtime(ResultPolicy::LastResolved);
        runtime.issue_search(request());
        runtime.supersede();
        assert!(runtime.accepts(1));
        assert!(runtime.is_in_flight());
    }
}
