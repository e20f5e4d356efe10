//! A local fake model for testing purpose.

mod preset;

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use scout_model::{
    ErrorKind, ModelChoice, ModelFinishReason, ModelProvider,
    ModelProviderError, ModelRequest, ModelResponse,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Shared {
    requests: Vec<ModelRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to setup the script, which is how the
/// model should respond to each request. The `n`-th request receives the
/// `n`-th preset response. If there are no enough responses in the script,
/// an error will be returned.
///
/// Every request is recorded and can be inspected with
/// [`TestModelProvider::requests`]. Clones share the same record.
///
/// # Note
///
/// This type is not optimized for production use, there are heavy memory
/// copies involved. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Vec<PresetResponse>,
    delay: Option<Duration>,
    shared: Arc<Mutex<Shared>>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_response(&mut self, preset: PresetResponse) {
        self.script.push(preset);
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.shared
            .lock()
            .map(|shared| shared.requests.clone())
            .unwrap_or_default()
    }

    fn record(&self, req: &ModelRequest) -> usize {
        let Ok(mut shared) = self.shared.lock() else {
            return usize::MAX;
        };
        shared.requests.push(req.clone());
        shared.requests.len() - 1
    }
}

impl Debug for TestModelProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestModelProvider")
            .field("script", &self.script)
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let step_idx = self.record(req);
        let preset = self.script.get(step_idx).cloned();
        let delay = self.delay;

        async move {
            if let Some(delay) = delay {
                sleep(delay).await;
            }

            let Some(preset) = preset else {
                return Err(Error {
                    message: "no enough responses",
                    kind: ErrorKind::Other,
                });
            };

            if let Some(failure) = preset.failure {
                let (message, kind) = match failure {
                    PresetFailure::Unauthorized => {
                        ("invalid api key", ErrorKind::Unauthorized)
                    }
                    PresetFailure::RateLimitExceeded => {
                        ("quota exhausted", ErrorKind::RateLimitExceeded)
                    }
                    PresetFailure::Connection => {
                        ("connection refused", ErrorKind::Connection)
                    }
                };
                return Err(Error { message, kind });
            }

            Ok(ModelResponse {
                id: Some(format!("resp:{step_idx}")),
                choices: preset
                    .choices
                    .into_iter()
                    .map(|content| ModelChoice {
                        content,
                        finish_reason: Some(ModelFinishReason::Stop),
                    })
                    .collect(),
            })
        }
    }
}
