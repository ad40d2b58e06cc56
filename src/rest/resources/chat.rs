//! Chat resource.

use serde::Serialize;

use crate::clients::{ApiError, ApiResponse, HttpMethod, OctadeskClient, Request};
use crate::rest::{build_path, require_path, EndpointPath, ResourceOperation, SearchParams};

use super::to_body;

/// Operations on chat conversations.
///
/// Obtained from [`OctadeskClient::chat`].
#[derive(Debug, Clone, Copy)]
pub struct Chat<'a> {
    client: &'a OctadeskClient,
}

impl<'a> Chat<'a> {
    /// Resource name used in error messages.
    pub const NAME: &'static str = "Chat";

    /// Endpoints per operation. Chat paths are the same on both generations.
    pub const PATHS: &'static [EndpointPath] = &[
        EndpointPath::new(ResourceOperation::Search, None, HttpMethod::Get, "/chat"),
        EndpointPath::new(
            ResourceOperation::SendTemplate,
            None,
            HttpMethod::Post,
            "/chat/send-template",
        ),
        EndpointPath::new(ResourceOperation::GetById, None, HttpMethod::Get, "/chat/{id}"),
    ];

    pub(crate) const fn new(client: &'a OctadeskClient) -> Self {
        Self { client }
    }

    fn path(&self, operation: ResourceOperation) -> Result<&'static EndpointPath, ApiError> {
        Ok(require_path(
            Self::NAME,
            Self::PATHS,
            operation,
            self.client.generation(),
        )?)
    }

    /// Searches chat conversations.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the parameters are invalid or the call fails.
    pub async fn search(&self, params: &SearchParams) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::Search)?;
        let request = params
            .apply(Request::builder(path.http_method, path.template))
            .build()?;
        self.client.send(&request).await
    }

    /// Sends a template message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if `fields` cannot be turned into
    /// JSON, or any error from the call.
    pub async fn send_template<T>(&self, fields: &T) -> Result<ApiResponse, ApiError>
    where
        T: Serialize + ?Sized,
    {
        let path = self.path(ResourceOperation::SendTemplate)?;
        let request = Request::builder(path.http_method, path.template)
            .body(to_body(fields)?)
            .build()?;
        self.client.send(&request).await
    }

    /// Fetches the conversation `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the call fails.
    pub async fn get_by_id(&self, id: &str) -> Result<ApiResponse, ApiError> {
        let path = self.path(ResourceOperation::GetById)?;
        let request =
            Request::builder(path.http_method, build_path(path.template, &[("id", id)])).build()?;
        self.client.send(&request).await
    }
}
