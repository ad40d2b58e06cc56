//! Login handshake.
//!
//! Legacy API calls authenticate with a short-lived access token. The token
//! is obtained by presenting an API token, the account subdomain and a
//! username to the login host, and is then used as the [`ApiKey`] of a
//! legacy [`OctadeskClient`].
//!
//! # Example
//!
//! ```rust,ignore
//! use octadesk_api::rest::resources::Login;
//! use octadesk_api::{AgentEmail, ApiKey, Subdomain};
//!
//! let login = Login::new(Subdomain::new("acme")?, AgentEmail::new("agent@acme.com")?)?;
//! let token = login.access_token(&ApiKey::new("api-token")?).await?;
//! assert!(login.validate_subdomain(&token).await?);
//! ```

use std::fmt;

use chrono::{DateTime, Duration, Utc};

use crate::clients::{ApiError, ApiResponse, FilterOperator, HttpMethod, OctadeskClient, Request};
use crate::config::{AgentEmail, ApiGeneration, ApiKey, BaseUrl, OctadeskConfig, Subdomain};
use crate::error::ConfigError;
use crate::rest::{require_path, EndpointPath, ResourceOperation};

/// Host of the login and account-level legacy endpoints.
pub const LOGIN_BASE_URL: &str = "https://api.octadesk.services";

/// How long an access token stays valid.
pub const TOKEN_LIFETIME_MINUTES: i64 = 3;

/// A short-lived legacy API access token.
///
/// # Security
///
/// The `Debug` implementation masks the token.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Wraps a token issued at `issued_at`.
    #[must_use]
    pub fn new(token: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            issued_at,
            expires_at: issued_at + Duration::minutes(TOKEN_LIFETIME_MINUTES),
        }
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Returns when the token was issued.
    #[must_use]
    pub const fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Returns when the token stops being accepted.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Returns `true` once the token lifetime has elapsed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Returns `true` if the token is expired at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Converts the token into an [`ApiKey`] for a legacy client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the token is blank.
    pub fn to_api_key(&self) -> Result<ApiKey, ConfigError> {
        ApiKey::new(self.token.clone())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("issued_at", &self.issued_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Client for the login handshake.
#[derive(Debug, Clone)]
pub struct Login {
    client: OctadeskClient,
    subdomain: Subdomain,
    username: AgentEmail,
}

impl Login {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Login";

    /// Endpoints per operation. Login only exists on the legacy host.
    pub const PATHS: &'static [EndpointPath] = &[
        EndpointPath::new(
            ResourceOperation::AccessToken,
            Some(ApiGeneration::Legacy),
            HttpMethod::Post,
            "/login/apiToken",
        ),
        EndpointPath::new(
            ResourceOperation::ValidateSubdomain,
            Some(ApiGeneration::Legacy),
            HttpMethod::Get,
            "/validate",
        ),
    ];

    /// Creates a login client for the account `subdomain`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be created.
    pub fn new(subdomain: Subdomain, username: AgentEmail) -> Result<Self, ConfigError> {
        Self::with_base_url(BaseUrl::new(LOGIN_BASE_URL)?, subdomain, username)
    }

    /// Creates a login client against another host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the HTTP client cannot be created.
    pub fn with_base_url(
        base_url: BaseUrl,
        subdomain: Subdomain,
        username: AgentEmail,
    ) -> Result<Self, ConfigError> {
        let config = OctadeskConfig::builder()
            .base_url(base_url)
            .agent_email(username.clone())
            .generation(ApiGeneration::Legacy)
            .build()?;

        Ok(Self {
            client: OctadeskClient::new(config)?,
            subdomain,
            username,
        })
    }

    /// Returns the account subdomain.
    #[must_use]
    pub const fn subdomain(&self) -> &Subdomain {
        &self.subdomain
    }

    fn path(&self, operation: ResourceOperation) -> Result<&'static EndpointPath, ApiError> {
        Ok(require_path(
            Self::NAME,
            Self::PATHS,
            operation,
            self.client.generation(),
        )?)
    }

    /// Exchanges `api_token` for an access token and returns the raw response.
    ///
    /// The credentials travel as `apiToken`, `subdomain` and `username`
    /// headers.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn access_token_response(&self, api_token: &ApiKey) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::AccessToken)?;
        let request = Request::builder(path.http_method, path.template)
            .header("apiToken", api_token.as_ref())
            .header("subdomain", self.subdomain.as_ref())
            .header("username", self.username.as_ref())
            .build()?;
        self.client.send(&request).await
    }

    /// Exchanges `api_token` for an [`AccessToken`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnexpectedResponse`] if the response has no
    /// `token`, or any error from the call.
    pub async fn access_token(&self, api_token: &ApiKey) -> Result<AccessToken, ApiError> {
        let response = self.access_token_response(api_token).await?;

        let token = response
            .body
            .get("token")
            .and_then(serde_json::Value::as_str)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::UnexpectedResponse {
                reason: "login response has no token".to_string(),
            })?;

        let token = AccessToken::new(token, Utc::now());
        tracing::debug!(
            subdomain = self.subdomain.as_ref(),
            expires_at = %token.expires_at(),
            "Obtained Octadesk access token"
        );
        Ok(token)
    }

    /// Checks that the subdomain accepts `access_token`.
    ///
    /// Returns `Ok(true)` only for a `200 OK` answer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] if the API answers with a non-2xx
    /// status, or any other error from the call.
    pub async fn validate_subdomain(&self, access_token: impl AsRef<str>) -> Result<bool, ApiError> {
        let path = self.path(ResourceOperation::ValidateSubdomain)?;
        let request = Request::builder(path.http_method, path.template)
            .header("Authorization", format!("Bearer {}", access_token.as_ref()))
            .filter("subdomain", FilterOperator::Eq, self.subdomain.as_ref())
            .build()?;
        let response = self.client.send(&request).await?;
        Ok(response.code == 200)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_access_token_expires_after_three_minutes() {
        let issued = Utc.with_ymd_and_hms(2024, 5, 7, 12, 0, 0).unwrap();
        let token = AccessToken::new("abc", issued);

        assert_eq!(token.issued_at(), issued);
        assert_eq!(
            token.expires_at(),
            Utc.with_ymd_and_hms(2024, 5, 7, 12, 3, 0).unwrap()
        );
        assert!(!token.is_expired_at(issued + Duration::seconds(179)));
        assert!(token.is_expired_at(issued + Duration::minutes(3)));
    }

    #[test]
    fn test_access_token_debug_is_masked() {
        let token = AccessToken::new("very-secret", Utc::now());
        let debug = format!("{token:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("*****"));
    }

    #[test]
    fn test_access_token_converts_to_api_key() {
        let token = AccessToken::new("tok", Utc::now());
        assert_eq!(token.to_api_key().unwrap().as_ref(), "tok");
        assert_eq!(token.as_ref(), "tok");
    }

    #[test]
    fn test_login_uses_legacy_generation() {
        let login = Login::new(
            Subdomain::new("acme").unwrap(),
            AgentEmail::new("agent@acme.com").unwrap(),
        )
        .unwrap();
        assert_eq!(login.client.generation(), ApiGeneration::Legacy);
        assert_eq!(login.client.config().base_url().as_ref(), LOGIN_BASE_URL);
        assert!(login.client.config().api_key().is_none());
        assert_eq!(login.subdomain().as_ref(), "acme");
    }
}
