use thiserror::Error;

/// A failure of the search backend.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The endpoint could not be turned into a request URL.
    #[error("invalid search endpoint: {0}")]
    Endpoint(String),
    /// The request could not be sent or the body could not be read.
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The backend replied with a non-success status.
    #[error("search backend returned {status}: {message}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The error message, as reported by the backend.
        message: String,
    },
    /// The body is not JSON.
    #[error("malformed search response: {0}")]
    Decode(String),
    /// The backend reported an error inside a successful reply.
    #[error("search backend error: {0}")]
    Backend(String),
}

/// A search result whose shape doesn't match what the distillation
/// expects.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{field}` should be {expected}")]
pub struct DistillError {
    /// Path of the offending field.
    pub field: String,
    /// What the field was expected to be.
    pub expected: &'static str,
}

impl DistillError {
    pub(crate) fn new<S: Into<String>>(field: S, expected: &'static str) -> Self {
        Self {
            field: field.into(),
            expected,
        }
    }
}

/// Everything that can keep the search tool from producing an answer.
#[derive(Debug, Error)]
pub enum SearchToolError {
    /// The tool was created without a provider.
    #[error("search is not configured")]
    NotConfigured,
    /// The backend failed.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The result couldn't be distilled.
    #[error(transparent)]
    Distill(#[from] DistillError),
}
