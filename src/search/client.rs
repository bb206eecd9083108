//! Background driver for the query backend
//!
//! The session core is synchronous; [`SearchWorker`] keeps the event loop
//! responsive by running lookups on a dedicated thread and answering with
//! sequence-tagged messages. Requests queued behind a slow lookup are
//! coalesced to the newest one, since the session would discard their
//! responses as stale anyway.

use super::session::QueryRequest;
use super::traits::{PlaceQuery, QueryError};
use crate::Place;
use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use std::sync::Arc;
use std::thread::JoinHandle;

/// A completed lookup, tagged with the sequence of the request
#[derive(Debug)]
pub struct QueryResponse {
    pub seq: u64,
    pub outcome: Result<Vec<Place>, QueryError>,
}

/// Runs an injected [`PlaceQuery`] on a worker thread
///
/// Dropping the worker closes the request channel and the thread exits on
/// its own; any response still in flight is simply never read.
pub struct SearchWorker {
    requests: Sender<QueryRequest>,
    responses: Receiver<QueryResponse>,
    handle: Option<JoinHandle<()>>,
}

impl SearchWorker {
    /// Spawn a worker over the given backend
    #[must_use]
    pub fn spawn(backend: Arc<dyn PlaceQuery + Send + Sync>) -> Self {
        let (request_tx, request_rx) = unbounded::<QueryRequest>();
        let (response_tx, response_rx) = unbounded::<QueryResponse>();

        let handle = std::thread::spawn(move || {
            while let Ok(mut request) = request_rx.recv() {
                // Latest request wins; drain anything queued behind it
                while let Ok(newer) = request_rx.try_recv() {
                    request = newer;
                }

                let outcome =
                    backend.search(request.kind, &request.text, request.order, request.limit);
                let response = QueryResponse {
                    seq: request.seq,
                    outcome,
                };
                if response_tx.send(response).is_err() {
                    break;
                }
            }
        });

        Self {
            requests: request_tx,
            responses: response_rx,
            handle: Some(handle),
        }
    }

    /// Queue a lookup
    ///
    /// A send after the worker died is ignored; the session's stale guard
    /// means the missing response is indistinguishable from a slow one,
    /// and the error phase is reached via the next completed lookup.
    pub fn submit(&self, request: QueryRequest) {
        let _ = self.requests.send(request);
    }

    /// Take one completed response, if any is waiting
    #[must_use]
    pub fn try_recv(&self) -> Option<QueryResponse> {
        match self.responses.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for SearchWorker {
    fn drop(&mut self) {
        // Closing the request channel stops the thread
        let (closed, _) = unbounded();
        self.requests = closed;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::session::{SearchSession, SearchSpec};
    use crate::search::traits::{FailingQuery, SortOrder, StaticQuery};
    use crate::testing::sample_places;
    use std::time::{Duration, Instant};

    fn request(seq: u64, text: &str) -> QueryRequest {
        QueryRequest {
            seq,
            text: text.to_string(),
            kind: None,
            order: SortOrder::NameAsc,
            limit: Some(5),
        }
    }

    fn recv_blocking(worker: &SearchWorker) -> QueryResponse {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            if let Some(response) = worker.try_recv() {
                return response;
            }
            assert!(Instant::now() < deadline, "worker response timed out");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_worker_answers_with_request_seq() {
        let worker = SearchWorker::spawn(Arc::new(StaticQuery::new(sample_places())));

        worker.submit(request(3, "tunis"));
        let response = recv_blocking(&worker);

        assert_eq!(response.seq, 3);
        let hits = response.outcome.unwrap();
        assert!(hits.iter().any(|p| p.name == "Tunis"));
    }

    #[test]
    fn test_worker_surfaces_backend_errors() {
        let worker = SearchWorker::spawn(Arc::new(FailingQuery::new("down")));

        worker.submit(request(1, "tunis"));
        let response = recv_blocking(&worker);

        assert_eq!(response.seq, 1);
        assert!(response.outcome.is_err());
    }

    #[test]
    fn test_session_drops_stale_worker_response() {
        let worker = SearchWorker::spawn(Arc::new(StaticQuery::new(sample_places())));
        let mut session = SearchSession::new(SearchSpec::general());
        let start = Instant::now();
        let step = Duration::from_millis(350);

        session.on_input("a", start);
        let first = session.poll(start + step).unwrap();
        session.on_input("ab", start + step);
        let second = session.poll(start + step * 2).unwrap();

        // Both lookups complete; only the newer one may land
        worker.submit(first);
        worker.submit(second.clone());

        // Coalescing may drop the first request entirely, so read until the
        // newer response arrives and record which ones actually landed
        let mut applied = Vec::new();
        loop {
            let response = recv_blocking(&worker);
            let seq = response.seq;
            if session.on_response(seq, response.outcome) {
                applied.push(seq);
            }
            if seq == second.seq {
                break;
            }
        }

        assert_eq!(applied, vec![second.seq]);
    }
}
