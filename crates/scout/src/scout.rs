use std::env;
use std::time::Duration;

use scout_core::config::GatewayConfigBuilder;
use scout_core::{ConfigError, GatewayConfig, ModelGateway, ToolRegistry};
use scout_openai_model::{OpenAIConfigBuilder, OpenAIProvider};
use scout_search::{SEARCH_API_KEY_VAR, SearchTool};

/// A builder for [`Scout`].
///
/// Every value left unset is looked up in the environment when the
/// gateway or the tools are built.
#[derive(Debug, Default)]
pub struct ScoutBuilder {
    gateway_config: GatewayConfigBuilder,
    search_api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ScoutBuilder {
    /// Creates a builder that relies on the environment for everything.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model identifier.
    #[inline]
    pub fn with_model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.gateway_config = self.gateway_config.with_model_id(model_id);
        self
    }

    /// Sets the model API key.
    #[inline]
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.gateway_config = self.gateway_config.with_api_key(api_key);
        self
    }

    /// Sets the model base URL.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.gateway_config = self.gateway_config.with_base_url(base_url);
        self
    }

    /// Sets the SerpApi key.
    #[inline]
    pub fn with_search_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.search_api_key = Some(api_key.into());
        self
    }

    /// Sets a timeout for each model request.
    #[inline]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves the gateway configuration and connects the
    /// OpenAI-compatible provider.
    pub fn build_gateway(&self) -> Result<ModelGateway, ConfigError> {
        let config = self.gateway_config.clone().resolve()?;
        Ok(self.connect(config))
    }

    /// Builds the registry of built-in tools.
    ///
    /// This never fails: a missing search key leaves the search tool
    /// registered but unconfigured.
    pub fn build_tools(&self) -> ToolRegistry {
        let search_api_key = self
            .search_api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| env::var(SEARCH_API_KEY_VAR).ok());

        let mut tools = ToolRegistry::new();
        tools.add_tool(SearchTool::from_api_key(search_api_key));
        debug!("{} built-in tools registered", tools.len());
        tools
    }

    /// Builds the gateway and the tools.
    pub fn build(self) -> Result<Scout, ConfigError> {
        let gateway = self.build_gateway()?;
        let tools = self.build_tools();
        Ok(Scout { gateway, tools })
    }

    fn connect(&self, config: GatewayConfig) -> ModelGateway {
        debug!(
            "connecting to {} with model {}",
            config.base_url(),
            config.model_id()
        );
        let mut provider_config =
            OpenAIConfigBuilder::with_api_key(config.api_key())
                .with_base_url(config.base_url());
        if let Some(timeout) = self.timeout {
            provider_config = provider_config.with_timeout(timeout);
        }
        let provider = OpenAIProvider::new(provider_config.build());
        ModelGateway::new(config, provider)
    }
}

/// A configured model gateway together with the built-in tools.
#[derive(Debug)]
pub struct Scout {
    gateway: ModelGateway,
    tools: ToolRegistry,
}

impl Scout {
    /// Returns the model gateway.
    #[inline]
    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    /// Returns the tool registry.
    #[inline]
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Returns the tool registry for registering more tools.
    #[inline]
    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    /// Splits into the gateway and the registry.
    #[inline]
    pub fn into_parts(self) -> (ModelGateway, ToolRegistry) {
        (self.gateway, self.tools)
    }
}
