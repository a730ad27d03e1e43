use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use readmore_logging::{readmore_debug, readmore_warn};

use crate::fetch::{BookSearcher, ReqwestSearcher, SearchSettings};
use crate::{EngineError, EngineEvent, FailureKind, FetchError, Volume};

enum EngineCommand {
    Search { query: String },
}

/// Owns the background search runtime; commands go in, events come out.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: SearchSettings) -> Result<Self, EngineError> {
        let searcher = ReqwestSearcher::new(settings)?;
        Self::with_searcher(Arc::new(searcher))
    }

    pub fn with_searcher(searcher: Arc<dyn BookSearcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let searcher = searcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(searcher.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn search(&self, query: impl Into<String>) {
        let query = query.into();
        readmore_debug!("search dispatched query={}", query);
        if self.cmd_tx.send(EngineCommand::Search { query }).is_err() {
            readmore_warn!("search worker is gone; request dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    searcher: &dyn BookSearcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search { query } => {
            let in_flight = InFlight::new(query.clone(), event_tx);
            let result = searcher.search(&query).await;
            in_flight.complete(result);
        }
    }
}

/// Reports a search's completion exactly once.
///
/// If the request future is dropped before `complete` (a panic inside the
/// searcher, or runtime shutdown) the guard reports `Cancelled` instead, so
/// the caller's loading state is always released.
struct InFlight {
    query: String,
    event_tx: mpsc::Sender<EngineEvent>,
    done: bool,
}

impl InFlight {
    fn new(query: String, event_tx: mpsc::Sender<EngineEvent>) -> Self {
        Self {
            query,
            event_tx,
            done: false,
        }
    }

    fn complete(mut self, result: Result<Vec<Volume>, FetchError>) {
        self.done = true;
        self.send(result);
    }

    fn send(&self, result: Result<Vec<Volume>, FetchError>) {
        let _ = self.event_tx.send(EngineEvent::SearchCompleted {
            query: self.query.clone(),
            result,
        });
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.done {
            self.send(Err(FetchError::new(
                FailureKind::Cancelled,
                "search ended before completing",
            )));
        }
    }
}
