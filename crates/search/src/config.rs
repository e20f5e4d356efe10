use std::fmt::Debug;

use scout_core::ConfigError;

/// Builder for [`SerpApiConfig`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SerpApiConfigBuilder {
    api_key: String,
    base_url: Option<String>,
}

impl SerpApiConfigBuilder {
    /// Creates a builder with the given API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Sets a custom endpoint.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds the configuration. Fails if the API key is empty.
    pub fn build(self) -> Result<SerpApiConfig, ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::MissingSearchKey);
        }
        Ok(SerpApiConfig {
            api_key: self.api_key,
            base_url: self
                .base_url
                .unwrap_or_else(|| "https://serpapi.com/search.json".to_owned()),
        })
    }
}

impl Debug for SerpApiConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiConfigBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for the SerpApi backend.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SerpApiConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
}

impl SerpApiConfig {
    /// Returns the endpoint queries are sent to.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for SerpApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerpApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let config = SerpApiConfigBuilder::with_api_key("serp-secret")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://serpapi.com/search.json");
        assert!(!format!("{config:?}").contains("serp-secret"));

        let err = SerpApiConfigBuilder::with_api_key("").build().unwrap_err();
        assert_eq!(err, ConfigError::MissingSearchKey);
    }
}
