//! Tool registration and invocation.
//!
//! A tool is a named function from one string to another: the input
//! written by the agent, and the observation handed back to it. The
//! [`Registry`] is only a directory of such functions. Looking a tool up,
//! checking for absence and invoking it is the caller's job.

mod registry;

use std::fmt::{self, Debug, Formatter};
use std::pin::Pin;
use std::sync::Arc;

pub use registry::{Registry, ToolEntry};

/// A boxed observation future.
pub type BoxedObservation = Pin<Box<dyn Future<Output = String> + Send>>;

/// A typed tool that knows its own name and description.
///
/// Implementations of this trait should be stateless, and may not maintain
/// any internal state.
pub trait Tool: Send + Sync + 'static {
    /// Returns the name of the tool.
    fn name(&self) -> &str;

    /// Returns the description of the tool.
    fn description(&self) -> &str;

    /// Executes the tool with the given input and produces an observation.
    ///
    /// This method must return a future that is fully independent of `self`.
    /// Failures should be reported inside the observation text.
    fn execute(
        &self,
        input: String,
    ) -> impl Future<Output = String> + Send + 'static;
}

/// The capability every registered handler has: `(String) -> String`.
///
/// It is implemented for any `Fn(String) -> impl Future<Output = String>`
/// closure, so plain async closures can be registered directly.
pub trait ToolHandler: Send + Sync + 'static {
    /// Invokes the handler.
    fn invoke(&self, input: String) -> BoxedObservation;
}

impl<F, Fut> ToolHandler for F
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    #[inline]
    fn invoke(&self, input: String) -> BoxedObservation {
        Box::pin(self(input))
    }
}

pub(crate) struct AnyTool<T: Tool>(pub T);

impl<T: Tool> ToolHandler for AnyTool<T> {
    #[inline]
    fn invoke(&self, input: String) -> BoxedObservation {
        Box::pin(self.0.execute(input))
    }
}

/// A type-erased, cheaply clonable tool handler.
#[derive(Clone)]
pub struct Handler(Arc<dyn ToolHandler>);

impl Handler {
    /// Wraps a handler.
    #[inline]
    pub fn new<H: ToolHandler>(handler: H) -> Self {
        Self(Arc::new(handler))
    }

    /// Invokes the handler with a single string and returns the
    /// observation.
    #[inline]
    pub async fn call<S: Into<String>>(&self, input: S) -> String {
        self.0.invoke(input.into()).await
    }
}

impl Debug for Handler {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
