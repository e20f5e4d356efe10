use scout_model::{
    ChatOptions, ModelChoice, ModelFinishReason, ModelMessage, ModelRequest,
    ModelResponse,
};
use serde::{Deserialize, Serialize};

// ------------------------------
// Types received from the server
// ------------------------------

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatCompletion {
    pub id: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub message: Option<ChoiceMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

// ------------------------
// Types sent to the server
// ------------------------

/// The request body. Options are flattened next to `model` and
/// `messages`, so callers can pass any parameter the server accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ModelMessage],
    #[serde(flatten)]
    options: &'a ChatOptions,
}

// -----------
// Conversions
// -----------

#[inline]
pub fn create_request(req: &ModelRequest) -> ChatCompletionRequest<'_> {
    ChatCompletionRequest {
        model: &req.model,
        messages: &req.messages,
        options: &req.options,
    }
}

pub fn create_response(completion: ChatCompletion) -> ModelResponse {
    ModelResponse {
        id: completion.id,
        choices: completion
            .choices
            .into_iter()
            .map(|choice| ModelChoice {
                content: choice
                    .message
                    .and_then(|msg| msg.content)
                    .unwrap_or_default(),
                finish_reason: choice
                    .finish_reason
                    .as_deref()
                    .and_then(ModelFinishReason::from_wire),
            })
            .collect(),
    }
}

/// Extracts a readable message from an error body, falling back to the
/// raw text.
pub fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(body) => body.error.message,
        Err(_) => body.trim().to_owned(),
    }
}
