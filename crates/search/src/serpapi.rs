use std::sync::Arc;

use reqwest::{Client, Url, header};
use serde_json::Value;

use crate::{SearchBackend, SearchError, SearchParams, SerpApiConfig};

/// A [`SearchBackend`] that queries SerpApi.
#[derive(Clone, Debug)]
pub struct SerpApiBackend {
    client: Client,
    config: Arc<SerpApiConfig>,
}

impl SerpApiBackend {
    /// Creates a new `SerpApiBackend` with the given configuration.
    #[inline]
    pub fn new(config: SerpApiConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }

    fn request_url(&self, params: &SearchParams) -> Result<Url, SearchError> {
        let num = params.num.to_string();
        Url::parse_with_params(
            &self.config.base_url,
            [
                ("engine", params.engine.as_str()),
                ("q", params.query.as_str()),
                ("num", num.as_str()),
                ("api_key", self.config.api_key.as_str()),
            ],
        )
        .map_err(|err| SearchError::Endpoint(err.to_string()))
    }
}

impl SearchBackend for SerpApiBackend {
    fn search(
        &self,
        params: &SearchParams,
    ) -> impl Future<Output = Result<Value, SearchError>> + Send + 'static {
        // The URL carries the API key, so only the query is logged.
        debug!("searching {}: {}", params.engine, params.query);
        let url = self.request_url(params);
        let client = self.client.clone();

        async move {
            let resp = client
                .get(url?)
                .header(header::ACCEPT, "application/json")
                .send()
                .await?;
            let status = resp.status();
            let body = resp.text().await?;

            if !status.is_success() {
                return Err(SearchError::Status {
                    status: status.as_u16(),
                    message: error_message(&body),
                });
            }

            let value: Value = serde_json::from_str(&body)
                .map_err(|err| SearchError::Decode(err.to_string()))?;
            if let Some(message) = value.get("error").and_then(Value::as_str) {
                return Err(SearchError::Backend(message.to_owned()));
            }
            trace!("got a search result: {value}");
            Ok(value)
        }
    }
}

/// SerpApi reports errors as `{"error": "..."}`.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("error")?.as_str().map(str::to_owned))
        .unwrap_or_else(|| body.trim().to_owned())
}
