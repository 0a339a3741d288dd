use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use super::commands::{SearchCommand, SearchRequest, SearchResult};
use super::evaluator::SearchEvaluator;

/// Launches the background search worker thread and returns communication channels.
pub(crate) fn spawn(evaluator: SearchEvaluator) -> (Sender<SearchCommand>, Receiver<SearchResult>) {
    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    thread::spawn(move || worker_loop(&evaluator, command_rx, result_tx));

    (command_tx, result_rx)
}

fn worker_loop(
    evaluator: &SearchEvaluator,
    command_rx: Receiver<SearchCommand>,
    result_tx: Sender<SearchResult>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(evaluator, &result_tx, command) {
            break;
        }
    }
}

fn handle_command(
    evaluator: &SearchEvaluator,
    result_tx: &Sender<SearchResult>,
    command: SearchCommand,
) -> bool {
    match command {
        SearchCommand::Query { id, request, delay } => {
            schedule(evaluator.clone(), result_tx.clone(), id, request, delay);
            true
        }
        SearchCommand::Shutdown => false,
    }
}

/// Each request resolves on its own timer so that overlapping searches
/// complete independently of one another.
fn schedule(
    evaluator: SearchEvaluator,
    result_tx: Sender<SearchResult>,
    id: u64,
    request: SearchRequest,
    delay: Duration,
) {
    thread::spawn(move || {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        let indices = evaluator.matching_indices(&request.query, &request.filters);
        // The receiver is gone once the session shuts down.
        let _ = result_tx.send(SearchResult {
            id,
            origin: request.origin,
            indices,
        });
    });
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::{Catalog, FilterSet};
    use crate::search::SearchOrigin;

    fn request(query: &str) -> SearchRequest {
        SearchRequest {
            query: query.to_string(),
            filters: FilterSet::new(),
            origin: SearchOrigin::Text,
        }
    }

    #[test]
    fn shutdown_command_stops_worker() {
        let (tx, _rx) = spawn(SearchEvaluator::new(Arc::new(Catalog::builtin())));
        tx.send(SearchCommand::Shutdown).unwrap();
    }

    #[test]
    fn query_results_are_forwarded_after_delay() {
        let (command_tx, result_rx) = spawn(SearchEvaluator::new(Arc::new(Catalog::builtin())));
        command_tx
            .send(SearchCommand::Query {
                id: 7,
                request: request("البقرة"),
                delay: Duration::from_millis(20),
            })
            .expect("send query");

        let result = result_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("receive search result");

        assert_eq!(result.id, 7);
        assert_eq!(result.origin, SearchOrigin::Text);
        assert_eq!(result.indices, vec![0, 3, 4]);

        command_tx
            .send(SearchCommand::Shutdown)
            .expect("send shutdown");
    }

    #[test]
    fn overlapping_requests_resolve_in_completion_order() {
        let (command_tx, result_rx) = spawn(SearchEvaluator::new(Arc::new(Catalog::builtin())));
        command_tx
            .send(SearchCommand::Query {
                id: 1,
                request: request("الفاتحة"),
                delay: Duration::from_millis(300),
            })
            .expect("send slow query");
        command_tx
            .send(SearchCommand::Query {
                id: 2,
                request: request("مشاري"),
                delay: Duration::ZERO,
            })
            .expect("send fast query");

        let first = result_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("fast result");
        let second = result_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("slow result");
        assert_eq!(first.id, 2);
        assert_eq!(second.id, 1);
    }
}
