use serde::{Deserialize, Serialize};

/// A completed response from the model provider.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelResponse {
    /// The provider-assigned identifier, if any.
    pub id: Option<String>,
    /// The alternative completions, in the order the provider returned them.
    pub choices: Vec<ModelChoice>,
}

impl ModelResponse {
    /// Creates a response that has a single choice with `content`.
    #[inline]
    pub fn with_text<S: Into<String>>(content: S) -> Self {
        Self {
            id: None,
            choices: vec![ModelChoice {
                content: content.into(),
                finish_reason: Some(ModelFinishReason::Stop),
            }],
        }
    }

    /// Returns the text of the first choice.
    #[inline]
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.content.as_str())
    }
}

/// One completion alternative.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ModelChoice {
    /// The generated text. Providers use an empty string when the model
    /// produced no content.
    pub content: String,
    /// Why the model stopped, if reported.
    pub finish_reason: Option<ModelFinishReason>,
}

/// The reason why a model response has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFinishReason {
    /// The model has finished generating text.
    Stop,
    /// The output hit the token limit.
    Length,
    /// The output was withheld by a content filter.
    ContentFilter,
    /// The model wants to call a tool.
    ToolCalls,
}

impl ModelFinishReason {
    /// Parses the OpenAI-style finish reason string.
    pub fn from_wire(reason: &str) -> Option<Self> {
        match reason {
            "stop" => Some(Self::Stop),
            "length" => Some(Self::Length),
            "content_filter" => Some(Self::ContentFilter),
            "tool_calls" | "function_call" => Some(Self::ToolCalls),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_text() {
        assert_eq!(ModelResponse::default().first_text(), None);

        let mut resp = ModelResponse::with_text("first");
        resp.choices.push(ModelChoice {
            content: "second".to_owned(),
            finish_reason: None,
        });
        assert_eq!(resp.first_text(), Some("first"));
    }

    #[test]
    fn test_finish_reason_from_wire() {
        assert_eq!(
            ModelFinishReason::from_wire("stop"),
            Some(ModelFinishReason::Stop)
        );
        assert_eq!(
            ModelFinishReason::from_wire("tool_calls"),
            Some(ModelFinishReason::ToolCalls)
        );
        assert_eq!(ModelFinishReason::from_wire("whatever"), None);
    }
}
