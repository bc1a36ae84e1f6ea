//! Graph fetching seam.

use async_trait::async_trait;
use grouptrust_types::Graph;

use crate::FetchError;

/// Dereferences a document URL into a graph.
///
/// Implementations own their timeouts; a timeout is reported like any other
/// failure.
#[async_trait]
pub trait GraphFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Graph, FetchError>;
}

#[async_trait]
impl<T: GraphFetcher + ?Sized> GraphFetcher for std::sync::Arc<T> {
    async fn fetch(&self, url: &str) -> Result<Graph, FetchError> {
        (**self).fetch(url).await
    }
}
