//! Authentication resource.

use crate::clients::{ApiError, ApiResponse, HttpMethod, OctadeskClient, Request};
use crate::rest::{require_path, EndpointPath, ResourceOperation};

/// Credential checks.
///
/// Obtained from [`OctadeskClient::authentication`].
#[derive(Debug, Clone, Copy)]
pub struct Authentication<'a> {
    client: &'a OctadeskClient,
}

impl<'a> Authentication<'a> {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Authentication";

    /// Endpoints per operation.
    pub const PATHS: &'static [EndpointPath] = &[EndpointPath::new(
        ResourceOperation::CheckApiKey,
        None,
        HttpMethod::Get,
        "/auth/check",
    )];

    pub(crate) const fn new(client: &'a OctadeskClient) -> Self {
        Self { client }
    }

    /// Checks that the configured API key is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Response`] if the key is rejected, or any other
    /// error from the call.
    pub async fn check_api_key(&self) -> Result<ApiResponse, ApiError> {
        let path = require_path(
            Self::NAME,
            Self::PATHS,
            ResourceOperation::CheckApiKey,
            self.client.generation(),
        )?;
        let request = Request::builder(path.http_method, path.template).build()?;
        self.client.send(&request).await
    }
}
