//! Web search for agents.
//!
//! [`SearchProvider`] is a thin pass-through to a search backend (SerpApi
//! by default) and returns the raw, unstructured result. [`distill`]
//! reduces such a result to one readable answer, and [`SearchTool`] wires
//! both into a tool whose observation is always a string.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod backend;
mod config;
mod distill;
mod error;
mod serpapi;
mod tool;

use std::env;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use scout_core::ConfigError;
use serde_json::Value;

use backend::BackendObject;
pub use backend::{SearchBackend, SearchParams};
pub use config::{SerpApiConfig, SerpApiConfigBuilder};
pub use distill::distill;
pub use error::{DistillError, SearchError, SearchToolError};
pub use serpapi::SerpApiBackend;
pub use tool::{SEARCH_TOOL_NAME, SearchTool};

/// Environment variable holding the SerpApi key.
pub const SEARCH_API_KEY_VAR: &str = "SERPAPI_API_KEY";

/// Number of results requested when the caller doesn't say otherwise.
pub const DEFAULT_NUM_RESULTS: usize = 5;

/// The engine every query is sent to.
pub const ENGINE: &str = "google";

/// A configured search provider.
///
/// The provider never holds a missing key: constructing one without a key
/// fails, so a tool that has a provider can always search.
#[derive(Clone)]
pub struct SearchProvider {
    backend: Arc<dyn BackendObject>,
}

impl SearchProvider {
    /// Creates a provider backed by SerpApi.
    ///
    /// Fails with [`ConfigError::MissingSearchKey`] when `api_key` is empty.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self, ConfigError> {
        let config = SerpApiConfigBuilder::with_api_key(api_key).build()?;
        Ok(Self::with_backend(SerpApiBackend::new(config)))
    }

    /// Creates a provider from [`SEARCH_API_KEY_VAR`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(env::var(SEARCH_API_KEY_VAR).unwrap_or_default())
    }

    /// Creates a provider on top of any backend.
    #[inline]
    pub fn with_backend<B: SearchBackend>(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Searches for `query` and returns the raw result.
    pub async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Value, SearchError> {
        let params = SearchParams {
            engine: ENGINE.to_owned(),
            query: query.to_owned(),
            num: num_results,
        };
        self.backend.search(&params).await
    }
}

impl Debug for SearchProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProvider").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::future::ready;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[derive(Default)]
    struct RecordingBackend {
        params: Arc<Mutex<Vec<SearchParams>>>,
    }

    impl SearchBackend for RecordingBackend {
        fn search(
            &self,
            params: &SearchParams,
        ) -> impl Future<Output = Result<Value, SearchError>> + Send + 'static
        {
            self.params.lock().unwrap().push(params.clone());
            ready(Ok(json!({ "search_metadata": { "status": "Success" } })))
        }
    }

    #[test]
    fn test_missing_key() {
        let err = SearchProvider::new("").unwrap_err();
        assert_eq!(err, ConfigError::MissingSearchKey);
    }

    #[tokio::test]
    async fn test_pass_through() {
        let backend = RecordingBackend::default();
        let params = Arc::clone(&backend.params);
        let provider = SearchProvider::with_backend(backend);

        let result = provider.search("rust 2024 edition", 7).await.unwrap();
        assert_eq!(result["search_metadata"]["status"], "Success");

        let params = params.lock().unwrap();
        assert_eq!(
            *params,
            vec![SearchParams {
                engine: "google".to_owned(),
                query: "rust 2024 edition".to_owned(),
                num: 7,
            }]
        );
    }
}
