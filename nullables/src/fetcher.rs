//! Nullable graph fetcher — canned documents instead of HTTP.

use async_trait::async_trait;
use grouptrust_groups::{FetchError, GraphFetcher};
use grouptrust_types::Graph;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

enum Canned {
    Document(Graph),
    Failure(String),
}

/// A test fetcher that serves pre-registered graphs and records every URL
/// it is asked for.
///
/// URLs without a registered response fail like a 404.
pub struct NullGraphFetcher {
    responses: Mutex<HashMap<String, Canned>>,
    delays: Mutex<HashMap<String, Duration>>,
    requested: Mutex<Vec<String>>,
}

impl NullGraphFetcher {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Serve `graph` for `url`.
    pub fn with_document(self, url: impl Into<String>, graph: Graph) -> Self {
        self.set_document(url, graph);
        self
    }

    /// Fail every fetch of `url`.
    pub fn with_failure(self, url: impl Into<String>, reason: impl Into<String>) -> Self {
        self.set_failure(url, reason);
        self
    }

    /// Wait before answering for `url`.
    pub fn with_delay(self, url: impl Into<String>, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(url.into(), delay);
        self
    }

    pub fn set_document(&self, url: impl Into<String>, graph: Graph) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Canned::Document(graph));
    }

    pub fn set_failure(&self, url: impl Into<String>, reason: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.into(), Canned::Failure(reason.into()));
    }

    /// Every URL requested so far, in request order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    /// Clear recorded requests, keeping the canned responses.
    pub fn reset(&self) {
        self.requested.lock().unwrap().clear();
    }
}

impl Default for NullGraphFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GraphFetcher for NullGraphFetcher {
    async fn fetch(&self, url: &str) -> Result<Graph, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        let delay = self.delays.lock().unwrap().get(url).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match self.responses.lock().unwrap().get(url) {
            Some(Canned::Document(graph)) => Ok(graph.clone()),
            Some(Canned::Failure(reason)) => Err(FetchError::Unreachable(reason.clone())),
            None => Err(FetchError::Status(404)),
        }
    }
}
