//! Configuration resolution for the credentialed components.
//!
//! Every field is resolved independently, in this priority: the explicit
//! value passed by the caller, then the first non-empty environment
//! variable of an ordered list, then a hardcoded default. Empty strings
//! count as absent at every tier.

use std::env;
use std::fmt::{self, Debug, Formatter};

use thiserror::Error;

/// Environment variables consulted for the model identifier.
pub const MODEL_ID_VARS: &[&str] = &["SCOUT_MODEL_ID", "MODEL_ID"];

/// Environment variables consulted for the model API key.
pub const API_KEY_VARS: &[&str] = &["ARK_API_KEY", "OPENAI_API_KEY"];

/// Environment variables consulted for the model base URL.
pub const BASE_URL_VARS: &[&str] = &["OPENAI_BASE_URL"];

/// Model identifier used when neither the caller nor the environment
/// supplies one.
pub const DEFAULT_MODEL_ID: &str = "deepseek-r1-250528";

/// Base URL used when neither the caller nor the environment supplies one.
pub const DEFAULT_BASE_URL: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// A required credential or identifier is missing at construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one of the gateway fields resolved to an empty value.
    #[error(
        "model id, API key and base URL must all be provided, either \
         explicitly or through the environment"
    )]
    IncompleteGateway,
    /// The search provider was constructed without an API key.
    #[error("search API key is not set")]
    MissingSearchKey,
}

/// The last-resort values of the gateway fields. An empty string means
/// the field has no default.
#[derive(Clone, PartialEq, Eq)]
pub struct GatewayDefaults {
    /// Default model identifier.
    pub model_id: String,
    /// Default API key, normally empty.
    pub api_key: String,
    /// Default base URL.
    pub base_url: String,
}

impl Default for GatewayDefaults {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_owned(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl Debug for GatewayDefaults {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayDefaults")
            .field("model_id", &self.model_id)
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`GatewayConfig`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct GatewayConfigBuilder {
    model_id: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    defaults: GatewayDefaults,
}

impl GatewayConfigBuilder {
    /// Sets the model identifier explicitly.
    #[inline]
    pub fn with_model_id<S: Into<String>>(mut self, model_id: S) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Sets the API key explicitly.
    #[inline]
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the base URL explicitly.
    #[inline]
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Replaces the hardcoded defaults.
    #[inline]
    pub fn with_defaults(mut self, defaults: GatewayDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Resolves the configuration against the process environment.
    pub fn resolve(self) -> Result<GatewayConfig, ConfigError> {
        self.resolve_from(|name| env::var(name).ok())
    }

    /// Resolves the configuration against an arbitrary environment.
    ///
    /// All three fields are resolved before any of them is checked, and
    /// the error doesn't tell which one is missing.
    pub fn resolve_from<E>(self, lookup: E) -> Result<GatewayConfig, ConfigError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let Self {
            model_id,
            api_key,
            base_url,
            defaults,
        } = self;

        let (model_id, model_id_source) =
            resolve_field(model_id, MODEL_ID_VARS, defaults.model_id, &lookup);
        let (api_key, api_key_source) =
            resolve_field(api_key, API_KEY_VARS, defaults.api_key, &lookup);
        let (base_url, base_url_source) =
            resolve_field(base_url, BASE_URL_VARS, defaults.base_url, &lookup);
        debug!(
            "gateway config resolved: model_id from {model_id_source}, \
             api_key from {api_key_source}, base_url from {base_url_source}"
        );

        if model_id.is_empty() || api_key.is_empty() || base_url.is_empty() {
            return Err(ConfigError::IncompleteGateway);
        }

        Ok(GatewayConfig {
            model_id,
            api_key,
            base_url,
        })
    }
}

impl Debug for GatewayConfigBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfigBuilder")
            .field("model_id", &self.model_id)
            .field("api_key", &self.api_key.as_deref().map(redacted))
            .field("base_url", &self.base_url)
            .field("defaults", &self.defaults)
            .finish()
    }
}

/// The resolved, immutable configuration of the model gateway.
///
/// All fields are guaranteed to be non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GatewayConfig {
    model_id: String,
    api_key: String,
    base_url: String,
}

impl GatewayConfig {
    /// Creates a builder with no explicit values and the default fallbacks.
    #[inline]
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Returns the model identifier.
    #[inline]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Returns the API key.
    #[inline]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the base URL.
    #[inline]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Debug for GatewayConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("model_id", &self.model_id)
            .field("api_key", &redacted(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Where a resolved value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Explicit,
    Env(&'static str),
    Default,
    Missing,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Source::Explicit => write!(f, "argument"),
            Source::Env(name) => write!(f, "${name}"),
            Source::Default => write!(f, "default"),
            Source::Missing => write!(f, "nowhere"),
        }
    }
}

fn resolve_field<E>(
    explicit: Option<String>,
    vars: &[&'static str],
    default: String,
    lookup: &E,
) -> (String, Source)
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(value) = explicit.filter(|v| !v.is_empty()) {
        return (value, Source::Explicit);
    }
    for &name in vars {
        if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
            return (value, Source::Env(name));
        }
    }
    if !default.is_empty() {
        return (default, Source::Default);
    }
    (String::new(), Source::Missing)
}

#[inline]
fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<empty>" } else { "<redacted>" }
}
