use std::pin::Pin;

use serde_json::Value;

use crate::SearchError;

/// The parameters of one search request.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchParams {
    /// The search engine to query.
    pub engine: String,
    /// The query text.
    pub query: String,
    /// The number of results to ask for.
    pub num: usize,
}

/// A search backend, which turns parameters into an unstructured result.
///
/// Backends must not retry on their own.
pub trait SearchBackend: Send + Sync + 'static {
    /// Performs the search.
    ///
    /// This method must return a future that is fully independent of `self`.
    fn search(
        &self,
        params: &SearchParams,
    ) -> impl Future<Output = Result<Value, SearchError>> + Send + 'static;
}

type BoxedSearchFuture =
    Pin<Box<dyn Future<Output = Result<Value, SearchError>> + Send>>;

pub(crate) trait BackendObject: Send + Sync + 'static {
    fn search(&self, params: &SearchParams) -> BoxedSearchFuture;
}

impl<B: SearchBackend> BackendObject for B {
    #[inline]
    fn search(&self, params: &SearchParams) -> BoxedSearchFuture {
        Box::pin(SearchBackend::search(self, params))
    }
}
