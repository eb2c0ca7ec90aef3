use crate::config::SearchConfig;
use crate::search::dataset::fallback_results;
use crate::search::error::SearchError;
use crate::search::models::{SearchOptions, SearchResult};
use crate::search::service::SearchService;
use crate::session::observer::{SearchObserver, TracingObserver};
use crate::session::{SearchSession, SessionStatus, SessionView};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::{AbortHandle, JoinHandle};

enum Outcome {
    Success(Vec<SearchResult>),
    Failure(SearchError),
}

/// Result of one search call, stamped with the generation that issued it.
struct Resolution {
    generation: u64,
    outcome: Outcome,
}

/// The backend call and the task that relays its outcome.
struct InFlight {
    call: AbortHandle,
    relay: JoinHandle<()>,
}

impl InFlight {
    fn abort(self) {
        self.call.abort();
        self.relay.abort();
    }
}

/// Owns the current search session.
///
/// Each accepted [`submit`](Self::submit) bumps the generation and spawns a
/// single backend call. Spawned tasks never touch the session; they send a
/// [`Resolution`] back and the owner applies it at a serialized point. A
/// resolution whose generation is no longer current is dropped. The backend
/// call runs in its own task, so a panicking service still resolves the
/// session with the fallback set.
pub struct SessionController {
    service: Arc<dyn SearchService>,
    observer: Arc<dyn SearchObserver>,
    options: SearchOptions,
    timeout: Duration,
    runtime: Handle,
    session: SearchSession,
    generation: u64,
    resolution_tx: UnboundedSender<Resolution>,
    resolution_rx: UnboundedReceiver<Resolution>,
    in_flight: Option<InFlight>,
}

impl SessionController {
    pub fn new(service: Arc<dyn SearchService>, config: &SearchConfig, runtime: Handle) -> Self {
        let (resolution_tx, resolution_rx) = mpsc::unbounded_channel();
        Self {
            service,
            observer: Arc::new(TracingObserver),
            options: config.search_options(),
            timeout: config.request_timeout,
            runtime,
            session: SearchSession::idle(),
            generation: 0,
            resolution_tx,
            resolution_rx,
            in_flight: None,
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn SearchObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Start a new session for `raw_query`, superseding any in-flight one.
    ///
    /// Blank input is ignored. Returns whether a session was started.
    pub fn submit(&mut self, raw_query: &str) -> bool {
        let query = raw_query.trim();
        if query.is_empty() {
            return false;
        }

        self.generation += 1;
        let generation = self.generation;
        self.session = SearchSession::searching(generation, query.to_string());
        self.observer.search_started(generation, query.chars().count());

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let service = Arc::clone(&self.service);
        let options = self.options;
        let timeout = self.timeout;
        let tx = self.resolution_tx.clone();
        let query = query.to_string();

        let call = self
            .runtime
            .spawn(async move { service.search(&query, &options).await });
        let call_abort = call.abort_handle();
        let on_timeout = call.abort_handle();

        let relay = self.runtime.spawn(async move {
            let outcome = match tokio::time::timeout(timeout, call).await {
                Ok(Ok(Ok(envelope))) => Outcome::Success(envelope.results),
                Ok(Ok(Err(error))) => Outcome::Failure(error),
                Ok(Err(join_error)) => {
                    Outcome::Failure(SearchError::TaskFailed(join_error.to_string()))
                }
                Err(_) => {
                    on_timeout.abort();
                    Outcome::Failure(SearchError::Timeout(timeout))
                }
            };
            // The controller may be gone by now.
            let _ = tx.send(Resolution {
                generation,
                outcome,
            });
        });

        self.in_flight = Some(InFlight {
            call: call_abort,
            relay,
        });

        true
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            status: self.session.status,
            query: &self.session.query,
            results: &self.session.results,
            is_fallback: self.session.is_fallback,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply every resolution that has already arrived. Never blocks.
    /// Returns whether the current session changed.
    pub fn poll_resolutions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(resolution) = self.resolution_rx.try_recv() {
            changed |= self.apply(resolution);
        }
        changed
    }

    /// Wait until the current session resolves. Returns immediately with
    /// `false` when nothing is in flight.
    pub async fn next_resolution(&mut self) -> bool {
        while self.session.status == SessionStatus::Searching {
            match self.resolution_rx.recv().await {
                Some(resolution) => {
                    if self.apply(resolution) {
                        return true;
                    }
                }
                None => return false,
            }
        }
        false
    }

    fn apply(&mut self, resolution: Resolution) -> bool {
        if resolution.generation != self.generation
            || self.session.status != SessionStatus::Searching
        {
            self.observer
                .resolution_discarded(resolution.generation, self.generation);
            return false;
        }

        match resolution.outcome {
            Outcome::Success(results) => {
                self.observer
                    .search_succeeded(resolution.generation, results.len());
                self.session.results = results;
                self.session.is_fallback = false;
            }
            Outcome::Failure(error) => {
                self.observer.search_degraded(resolution.generation, &error);
                self.session.results = fallback_results();
                self.session.is_fallback = true;
            }
        }
        self.session.status = SessionStatus::Resolved;
        self.in_flight = None;
        true
    }
}

impl Drop for SessionController {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.abort();
        }
    }
}
