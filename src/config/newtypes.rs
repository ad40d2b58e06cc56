//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::fmt;

/// A validated Octadesk API key.
///
/// Used as the `X-API-KEY` header on the current generation and as the
/// `Authorization: Bearer` token on the legacy one (where it is usually an
/// access token obtained from the login handshake).
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `ApiKey(*****)`.
///
/// # Example
///
/// ```rust
/// use octadesk_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty, or
    /// [`ConfigError::InvalidApiKey`] if it cannot travel as a header value.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        // The legacy generation sends the key as `Bearer <key>`.
        if HeaderValue::from_str(&format!("Bearer {key}")).is_err() {
            return Err(ConfigError::InvalidApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated agent email, sent as `octa-agent-email` on the current generation.
///
/// # Example
///
/// ```rust
/// use octadesk_api::AgentEmail;
///
/// assert!(AgentEmail::new("agent@example.com").is_ok());
/// assert!(AgentEmail::new("not-an-email").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentEmail(String);

impl AgentEmail {
    /// Creates a new validated agent email.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAgentEmail`] if the value is empty or
    /// has no `@` separating a local part from a domain, or if it cannot
    /// travel as a header value.
    pub fn new(email: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into().trim().to_string();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty())
            && HeaderValue::from_str(&email).is_ok();
        if !valid {
            return Err(ConfigError::InvalidAgentEmail { email });
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for AgentEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API base URL.
///
/// Must be an absolute `http` or `https` URL. A trailing `/` is trimmed so
/// that endpoints (which always start with `/`) can be appended directly.
///
/// # Example
///
/// ```rust
/// use octadesk_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.octadesk.services/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.octadesk.services");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the value does not parse as
    /// an absolute URL or its scheme is not `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let parsed = reqwest::Url::parse(trimmed)
            .map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated Octadesk account subdomain (e.g. `acme` for `acme.octadesk.com`).
///
/// # Example
///
/// ```rust
/// use octadesk_api::Subdomain;
///
/// let subdomain = Subdomain::new("Acme-Support").unwrap();
/// assert_eq!(subdomain.as_ref(), "acme-support");
/// assert!(Subdomain::new("acme.octadesk.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subdomain(String);

impl Subdomain {
    /// Creates a new validated subdomain, normalised to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSubdomain`] if the value is empty or
    /// contains anything other than ASCII letters, digits and `-`.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain = subdomain.into().trim().to_lowercase();
        let valid = !subdomain.is_empty()
            && !subdomain.starts_with('-')
            && !subdomain.ends_with('-')
            && subdomain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }
        Ok(Self(subdomain))
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Verify newtypes are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiKey>();
    assert_send_sync::<AgentEmail>();
    assert_send_sync::<BaseUrl>();
    assert_send_sync::<Subdomain>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_rejects_empty_and_blank() {
        assert_eq!(ApiKey::new(""), Err(ConfigError::EmptyApiKey));
        assert_eq!(ApiKey::new("   "), Err(ConfigError::EmptyApiKey));
    }

    #[test]
    fn test_api_key_rejects_control_characters() {
        assert_eq!(ApiKey::new("token\n"), Err(ConfigError::InvalidApiKey));
        assert_eq!(ApiKey::new("to\rken"), Err(ConfigError::InvalidApiKey));
        assert!(ApiKey::new("tok-123.abc").is_ok());
    }

    #[test]
    fn test_api_key_debug_is_masked() {
        let key = ApiKey::new("super-secret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!(debug, "ApiKey(*****)");
    }

    #[test]
    fn test_agent_email_validation() {
        assert!(AgentEmail::new("agent@example.com").is_ok());
        assert!(matches!(
            AgentEmail::new("@example.com"),
            Err(ConfigError::InvalidAgentEmail { .. })
        ));
        assert!(matches!(
            AgentEmail::new("agent@"),
            Err(ConfigError::InvalidAgentEmail { .. })
        ));
        assert!(matches!(
            AgentEmail::new(""),
            Err(ConfigError::InvalidAgentEmail { .. })
        ));
        assert!(matches!(
            AgentEmail::new("agent@exam\u{7}ple.com"),
            Err(ConfigError::InvalidAgentEmail { .. })
        ));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("https://o1.api.octadesk.services/").unwrap();
        assert_eq!(url.as_ref(), "https://o1.api.octadesk.services");
    }

    #[test]
    fn test_base_url_keeps_path_prefix() {
        let url = BaseUrl::new("http://127.0.0.1:8080/api").unwrap();
        assert_eq!(url.as_ref(), "http://127.0.0.1:8080/api");
    }

    #[test]
    fn test_base_url_rejects_relative_and_other_schemes() {
        assert!(matches!(
            BaseUrl::new("api.octadesk.services"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            BaseUrl::new("ftp://api.octadesk.services"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_subdomain_normalises_and_validates() {
        assert_eq!(Subdomain::new(" MyDesk ").unwrap().as_ref(), "mydesk");
        assert!(Subdomain::new("my-desk2").is_ok());
        assert!(Subdomain::new("").is_err());
        assert!(Subdomain::new("-desk").is_err());
        assert!(Subdomain::new("my desk").is_err());
        assert!(Subdomain::new("desk.octadesk.com").is_err());
    }
}
