//! Error types for client configuration.
//!
//! This module contains the errors raised while building an
//! [`OctadeskConfig`](crate::OctadeskConfig) or one of its validated newtypes.
//! Errors raised while building or sending a request live in
//! [`clients`](crate::clients).
//!
//! # Example
//!
//! ```rust
//! use octadesk_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Every constructor in [`config`](crate::config) validates its input and
/// returns one of these variants instead of producing an unusable value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Octadesk API key or access token.")]
    EmptyApiKey,

    /// API key contains characters that cannot be sent in an HTTP header.
    #[error("Invalid API key. The key must not contain control characters such as a trailing newline.")]
    InvalidApiKey,

    /// Agent email is empty or malformed.
    #[error("Invalid agent email '{email}'. Expected an address such as 'agent@example.com'.")]
    InvalidAgentEmail {
        /// The rejected value.
        email: String,
    },

    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.octadesk.services').")]
    InvalidBaseUrl {
        /// The rejected value.
        url: String,
    },

    /// Subdomain is empty or contains characters other than letters, digits and '-'.
    #[error("Invalid subdomain '{subdomain}'. Only ASCII letters, digits and '-' are allowed.")]
    InvalidSubdomain {
        /// The rejected value.
        subdomain: String,
    },

    /// API generation tag is not recognised.
    #[error("Invalid API generation '{generation}'. Expected 'v0.0.1' (legacy) or 'v1.0.0' (current).")]
    InvalidApiGeneration {
        /// The rejected value.
        generation: String,
    },

    /// Response media type cannot be sent in an HTTP header.
    #[error("Invalid response type '{media_type}'. Expected a media type such as 'application/json'.")]
    InvalidResponseType {
        /// The rejected value.
        media_type: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be initialised.
    #[error("Failed to initialise the HTTP client: {reason}")]
    HttpClientInit {
        /// The transport's description of the failure.
        reason: String,
    },
}
