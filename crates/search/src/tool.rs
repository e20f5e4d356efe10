use std::env;

use scout_core::Tool;

use crate::{
    DEFAULT_NUM_RESULTS, SEARCH_API_KEY_VAR, SearchProvider, SearchToolError,
    distill,
};

/// The name the search tool is registered under.
pub const SEARCH_TOOL_NAME: &str = "Search";

const DESCRIPTION: &str = "A web search engine. Use it to answer questions \
about current events, facts, and anything you cannot find in your own \
knowledge.";

/// A tool that searches the web and distills the result into one answer.
///
/// The tool always produces an observation. Missing configuration and
/// search failures are reported as text.
#[derive(Clone, Debug)]
pub struct SearchTool {
    provider: Option<SearchProvider>,
}

impl SearchTool {
    /// Creates a search tool backed by `provider`.
    #[inline]
    pub fn new(provider: SearchProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Creates a search tool that has no provider. Every search reports
    /// that the tool is not configured.
    #[inline]
    pub fn unconfigured() -> Self {
        Self { provider: None }
    }

    /// Creates a search tool from an optional SerpApi key.
    ///
    /// A missing or empty key doesn't fail: the tool is created
    /// unconfigured, and a warning is logged.
    pub fn from_api_key(api_key: Option<String>) -> Self {
        match api_key.map(SearchProvider::new) {
            Some(Ok(provider)) => Self::new(provider),
            Some(Err(_)) | None => {
                warn!(
                    "{SEARCH_API_KEY_VAR} is not configured, the search tool \
                     will be unavailable"
                );
                Self::unconfigured()
            }
        }
    }

    /// Creates a search tool from [`SEARCH_API_KEY_VAR`].
    #[inline]
    pub fn from_env() -> Self {
        Self::from_api_key(env::var(SEARCH_API_KEY_VAR).ok())
    }

    /// Returns whether the tool has a provider.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Searches for `query` and distills the result.
    pub async fn run(&self, query: &str) -> Result<String, SearchToolError> {
        let Some(provider) = &self.provider else {
            return Err(SearchToolError::NotConfigured);
        };
        let result = provider.search(query, DEFAULT_NUM_RESULTS).await?;
        Ok(distill(&result, query)?)
    }

    /// Searches for `query` and returns the observation, whatever happens.
    pub async fn observe(&self, query: &str) -> String {
        info!("searching the web: {query}");
        match self.run(query).await {
            Ok(answer) => answer,
            Err(SearchToolError::NotConfigured) => {
                format!("Error: {SEARCH_API_KEY_VAR} is not configured.")
            }
            Err(err) => {
                debug!("search failed: {err}");
                format!("Search failed: {err}")
            }
        }
    }
}

impl Tool for SearchTool {
    fn name(&self) -> &str {
        SEARCH_TOOL_NAME
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    #[allow(clippy::manual_async_fn)]
    fn execute(
        &self,
        input: String,
    ) -> impl Future<Output = String> + Send + 'static {
        let this = self.clone();
        async move { this.observe(&input).await }
    }
}
