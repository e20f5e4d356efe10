use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::pin::Pin;
use std::sync::Arc;

use scout_model::{
    ChatOptions, ErrorKind, ModelMessage, ModelProvider, ModelProviderError,
    ModelRequest, ModelResponse,
};
use tracing::Instrument;

use crate::config::GatewayConfig;

type SendRequestResult = Result<ModelResponse, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn = Arc<dyn Fn(ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// The error returned by [`ModelGateway::chat`].
#[derive(Debug)]
pub enum ChatError {
    /// The transport failed. The provider's error is kept as-is.
    Transport(Box<dyn ModelProviderError>),
    /// The provider answered, but with no completion at all.
    EmptyResponse,
}

impl ChatError {
    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChatError::Transport(err) => err.kind(),
            ChatError::EmptyResponse => ErrorKind::InvalidResponse,
        }
    }

    /// Returns the provider's error, if the transport failed.
    #[inline]
    pub fn transport_error(&self) -> Option<&dyn ModelProviderError> {
        match self {
            ChatError::Transport(err) => Some(err.as_ref()),
            ChatError::EmptyResponse => None,
        }
    }
}

impl Display for ChatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Transport(err) => Display::fmt(err, f),
            ChatError::EmptyResponse => {
                write!(f, "the model returned no completion")
            }
        }
    }
}

impl StdError for ChatError {}

/// A uniform wrapper around a chat-completion model.
///
/// The gateway erases the type of the underlying provider, and fills in
/// the configured model identifier for every request. It doesn't retry,
/// and it doesn't catch anything: transport errors reach the caller
/// unmodified.
#[derive(Clone)]
pub struct ModelGateway {
    config: Arc<GatewayConfig>,
    handler_fn: HandlerFn,
}

impl ModelGateway {
    /// Creates a gateway that sends requests through `provider`.
    pub fn new<P: ModelProvider + 'static>(
        config: GatewayConfig,
        provider: P,
    ) -> Self {
        // We have to erase the type `P`, since `ModelGateway` doesn't have a
        // generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(move |req| {
            let fut = provider.send_request(&req);
            Box::pin(
                async move {
                    trace!("sending a request: {req:?}");
                    match fut.await {
                        Ok(resp) => Ok(resp),
                        Err(err) => {
                            error!("request failed: {err}");
                            Err(Box::new(err) as Box<dyn ModelProviderError>)
                        }
                    }
                }
                .instrument(trace_span!("model gateway req")),
            )
        });
        Self {
            config: Arc::new(config),
            handler_fn,
        }
    }

    /// Returns the resolved configuration.
    #[inline]
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Sends the conversation to the model and returns the text of the
    /// first completion.
    ///
    /// `options` are forwarded verbatim as request parameters.
    pub async fn chat<M>(
        &self,
        messages: M,
        options: ChatOptions,
    ) -> Result<String, ChatError>
    where
        M: Into<Vec<ModelMessage>>,
    {
        let req = ModelRequest {
            model: self.config.model_id().to_owned(),
            messages: messages.into(),
            options,
        };
        let resp = (self.handler_fn)(req).await.map_err(ChatError::Transport)?;
        let mut choices = resp.choices.into_iter();
        let Some(first) = choices.next() else {
            return Err(ChatError::EmptyResponse);
        };
        Ok(first.content)
    }

    /// The reasoning step of an agent loop. Behaves exactly like
    /// [`chat`](Self::chat).
    #[inline]
    pub async fn think<M>(
        &self,
        messages: M,
        options: ChatOptions,
    ) -> Result<String, ChatError>
    where
        M: Into<Vec<ModelMessage>>,
    {
        self.chat(messages, options).await
    }

    /// Invokes the gateway directly. Same as [`chat`](Self::chat).
    #[inline]
    pub async fn call<M>(
        &self,
        messages: M,
        options: ChatOptions,
    ) -> Result<String, ChatError>
    where
        M: Into<Vec<ModelMessage>>,
    {
        self.chat(messages, options).await
    }
}

impl Debug for ModelGateway {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
