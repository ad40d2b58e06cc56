//! Custom fields resource.
//!
//! Custom field definitions live on the legacy login host and are read with
//! an access token from [`Login`](super::Login).

use crate::clients::{ApiError, ApiResponse, HttpMethod, OctadeskClient, Request};
use crate::config::{AgentEmail, ApiGeneration, ApiKey, BaseUrl, OctadeskConfig, Subdomain};
use crate::error::ConfigError;
use crate::rest::{build_path, require_path, EndpointPath, ResourceOperation};

use super::login::LOGIN_BASE_URL;

/// Client for custom field definitions.
#[derive(Debug, Clone)]
pub struct CustomFields {
    client: OctadeskClient,
    subdomain: Subdomain,
}

impl CustomFields {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "CustomFields";

    /// Endpoints per operation.
    pub const PATHS: &'static [EndpointPath] = &[EndpointPath::new(
        ResourceOperation::FieldDetails,
        Some(ApiGeneration::Legacy),
        HttpMethod::Get,
        "/custom-fields/{id}",
    )];

    /// Creates a client authenticated with `access_token`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the token is blank, or
    /// [`ConfigError::HttpClientInit`] if the HTTP client cannot be created.
    pub fn new(
        access_token: impl AsRef<str>,
        subdomain: Subdomain,
        username: AgentEmail,
    ) -> Result<Self, ConfigError> {
        Self::with_base_url(
            BaseUrl::new(LOGIN_BASE_URL)?,
            access_token,
            subdomain,
            username,
        )
    }

    /// Creates a client against another host.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_base_url(
        base_url: BaseUrl,
        access_token: impl AsRef<str>,
        subdomain: Subdomain,
        username: AgentEmail,
    ) -> Result<Self, ConfigError> {
        let config = OctadeskConfig::builder()
            .base_url(base_url)
            .api_key(ApiKey::new(access_token.as_ref())?)
            .agent_email(username)
            .generation(ApiGeneration::Legacy)
            .build()?;

        Ok(Self {
            client: OctadeskClient::new(config)?,
            subdomain,
        })
    }

    /// Fetches the definition of the custom field `id`.
    ///
    /// The account is selected with the `AppSubDomain` header.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn field_details(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let path = require_path(
            Self::NAME,
            Self::PATHS,
            ResourceOperation::FieldDetails,
            self.client.generation(),
        )?;
        let request = Request::builder(path.http_method, build_path(path.template, &[("id", id)]))
            .header("AppSubDomain", self.subdomain.as_ref())
            .build()?;
        self.client.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_access_token_is_rejected() {
        let result = CustomFields::new(
            " ",
            Subdomain::new("acme").unwrap(),
            AgentEmail::new("agent@acme.com").unwrap(),
        );
        assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
    }

    #[test]
    fn test_access_token_becomes_the_api_key() {
        let fields = CustomFields::new(
            "tok-1",
            Subdomain::new("acme").unwrap(),
            AgentEmail::new("agent@acme.com").unwrap(),
        )
        .unwrap();
        let config = fields.client.config();
        assert_eq!(config.api_key().map(AsRef::as_ref), Some("tok-1"));
        assert_eq!(config.generation(), ApiGeneration::Legacy);
    }
}
