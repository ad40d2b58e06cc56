//! Configuration types for the Octadesk API client.
//!
//! This module provides the configuration used to construct an
//! [`OctadeskClient`](crate::clients::OctadeskClient).
//!
//! # Overview
//!
//! - [`OctadeskConfig`]: Holds the base URL, credentials, response media type and API generation
//! - [`OctadeskConfigBuilder`]: A builder for constructing [`OctadeskConfig`] instances
//! - [`ApiKey`], [`AgentEmail`], [`BaseUrl`], [`Subdomain`]: Validated newtypes
//! - [`ApiGeneration`]: Which of the two Octadesk APIs to target
//!
//! # Example
//!
//! ```rust
//! use octadesk_api::{OctadeskConfig, ApiKey, AgentEmail, ApiGeneration, BaseUrl};
//!
//! let config = OctadeskConfig::builder()
//!     .base_url(BaseUrl::new("https://o123.api002.octadesk.services").unwrap())
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .agent_email(AgentEmail::new("agent@example.com").unwrap())
//!     .generation(ApiGeneration::Current)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.response_type(), "application/json");
//! ```

mod generation;
mod newtypes;

pub use generation::ApiGeneration;
pub use newtypes::{AgentEmail, ApiKey, BaseUrl, Subdomain};

use crate::error::ConfigError;

/// Default media type for the `Accept` (and, on the legacy API, `Content-Type`) header.
pub const DEFAULT_RESPONSE_TYPE: &str = "application/json";

/// Configuration for an Octadesk API client.
///
/// # Thread Safety
///
/// `OctadeskConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct OctadeskConfig {
    base_url: BaseUrl,
    api_key: Option<ApiKey>,
    agent_email: Option<AgentEmail>,
    response_type: String,
    generation: ApiGeneration,
}

impl OctadeskConfig {
    /// Creates a new builder for constructing an `OctadeskConfig`.
    #[must_use]
    pub fn builder() -> OctadeskConfigBuilder {
        OctadeskConfigBuilder::new()
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the agent email, if configured.
    #[must_use]
    pub const fn agent_email(&self) -> Option<&AgentEmail> {
        self.agent_email.as_ref()
    }

    /// Returns the response media type.
    #[must_use]
    pub fn response_type(&self) -> &str {
        &self.response_type
    }

    /// Returns the targeted API generation.
    #[must_use]
    pub const fn generation(&self) -> ApiGeneration {
        self.generation
    }
}

// Verify OctadeskConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OctadeskConfig>();
};

/// Builder for constructing [`OctadeskConfig`] instances.
///
/// # Defaults
///
/// - `response_type`: `application/json`
/// - `generation`: [`ApiGeneration::Legacy`]
/// - `api_key`, `agent_email`: `None`
///
/// The current generation authenticates with both `X-API-KEY` and
/// `octa-agent-email`, so [`build`](Self::build) requires `api_key` and
/// `agent_email` when targeting it. The legacy generation requires neither.
#[derive(Debug, Default)]
pub struct OctadeskConfigBuilder {
    base_url: Option<BaseUrl>,
    api_key: Option<ApiKey>,
    agent_email: Option<AgentEmail>,
    response_type: Option<String>,
    generation: Option<ApiGeneration>,
}

impl OctadeskConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the agent email.
    #[must_use]
    pub fn agent_email(mut self, email: AgentEmail) -> Self {
        self.agent_email = Some(email);
        self
    }

    /// Sets the response media type.
    #[must_use]
    pub fn response_type(mut self, media_type: impl Into<String>) -> Self {
        self.response_type = Some(media_type.into());
        self
    }

    /// Sets the API generation.
    #[must_use]
    pub const fn generation(mut self, generation: ApiGeneration) -> Self {
        self.generation = Some(generation);
        self
    }

    /// Builds the [`OctadeskConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set,
    /// or if `api_key`/`agent_email` are missing for the current generation.
    /// Returns [`ConfigError::InvalidResponseType`] if the response type
    /// cannot travel as a header value.
    pub fn build(self) -> Result<OctadeskConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let generation = self.generation.unwrap_or_default();

        if generation == ApiGeneration::Current {
            if self.api_key.is_none() {
                return Err(ConfigError::MissingRequiredField { field: "api_key" });
            }
            if self.agent_email.is_none() {
                return Err(ConfigError::MissingRequiredField {
                    field: "agent_email",
                });
            }
        }

        let response_type = self
            .response_type
            .unwrap_or_else(|| DEFAULT_RESPONSE_TYPE.to_string());
        if response_type.trim().is_empty()
            || reqwest::header::HeaderValue::from_str(&response_type).is_err()
        {
            return Err(ConfigError::InvalidResponseType {
                media_type: response_type,
            });
        }

        Ok(OctadeskConfig {
            base_url,
            api_key: self.api_key,
            agent_email: self.agent_email,
            response_type,
            generation,
        })
    }
}
