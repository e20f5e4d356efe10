use serde::{Deserialize, Serialize};

/// The kind of failure a preset response simulates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetFailure {
    /// The provider rejects the credentials.
    Unauthorized,
    /// The provider is rate limited.
    RateLimitExceeded,
    /// The provider cannot be reached.
    Connection,
}

/// The preset response for one request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetResponse {
    /// Completion alternatives returned for this request.
    pub choices: Vec<String>,
    /// If set, the request fails with this kind instead of returning the
    /// choices.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<PresetFailure>,
}

impl PresetResponse {
    /// Creates a `PresetResponse` with a single choice.
    #[inline]
    pub fn with_text<S: Into<String>>(text: S) -> Self {
        Self {
            choices: vec![text.into()],
            failure: None,
        }
    }

    /// Creates a `PresetResponse` with the specified choices.
    #[inline]
    pub fn with_choices<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Creates a `PresetResponse` that always fails.
    #[inline]
    pub fn failing(failure: PresetFailure) -> Self {
        Self {
            choices: vec![],
            failure: Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serialize_deserialize() {
        let response = PresetResponse::with_choices(["Paris", "Lyon"]);
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(serialized, json!({ "choices": ["Paris", "Lyon"] }));

        let deserialized: PresetResponse = serde_json::from_value(json!({
            "choices": [],
            "failure": "rate_limit_exceeded"
        }))
        .unwrap();
        assert_eq!(
            deserialized,
            PresetResponse::failing(PresetFailure::RateLimitExceeded)
        );
    }
}
