//! Endpoint tables for resource clients.
//!
//! The two API generations expose most resources under different paths
//! (`/persons/{id}` on the legacy API, `/contacts/{id}` on the current one)
//! and a few operations exist on one generation only. Each resource declares
//! a table of [`EndpointPath`] entries, and [`resolve_path`] picks the entry
//! for an operation and generation.
//!
//! # Path Resolution
//!
//! An entry with `generation: None` applies to both generations. An entry
//! for a specific generation takes precedence over a generic one. When no
//! entry matches, the operation is unsupported on that generation.
//!
//! # Example
//!
//! ```rust
//! use octadesk_api::rest::{build_path, resolve_path, EndpointPath, ResourceOperation};
//! use octadesk_api::clients::HttpMethod;
//! use octadesk_api::ApiGeneration;
//!
//! const PATHS: &[EndpointPath] = &[
//!     EndpointPath::new(ResourceOperation::GetById, Some(ApiGeneration::Legacy), HttpMethod::Get, "/persons/{id}"),
//!     EndpointPath::new(ResourceOperation::GetById, Some(ApiGeneration::Current), HttpMethod::Get, "/contacts/{id}"),
//! ];
//!
//! let path = resolve_path(PATHS, ResourceOperation::GetById, ApiGeneration::Current).unwrap();
//! assert_eq!(build_path(path.template, &[("id", "c 1")]), "/contacts/c%201");
//! ```

use crate::clients::{HttpMethod, InvalidRequestError};
use crate::config::ApiGeneration;

/// Operations offered by the resource clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List or search a collection.
    Search,
    /// Create a resource.
    Create,
    /// Replace a resource.
    Update,
    /// Partially update a resource.
    Patch,
    /// Fetch one resource by id.
    GetById,
    /// Fetch contacts by email.
    GetByEmail,
    /// Fetch contacts by phone number.
    GetByPhoneNumber,
    /// List agents.
    Agents,
    /// Change a contact's avatar.
    UpdateAvatarUrl,
    /// Fetch one ticket by number.
    GetByNumber,
    /// List a ticket's interactions.
    Interactions,
    /// Send a chat template message.
    SendTemplate,
    /// Check that the API key is valid.
    CheckApiKey,
    /// Exchange an API token for an access token.
    AccessToken,
    /// Check that a subdomain is valid for an access token.
    ValidateSubdomain,
    /// Fetch the definition of a custom field.
    FieldDetails,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Create => "create",
            Self::Update => "update",
            Self::Patch => "patch",
            Self::GetById => "get_by_id",
            Self::GetByEmail => "get_by_email",
            Self::GetByPhoneNumber => "get_by_phone_number",
            Self::Agents => "agents",
            Self::UpdateAvatarUrl => "update_avatar_url",
            Self::GetByNumber => "get_by_number",
            Self::Interactions => "interactions",
            Self::SendTemplate => "send_template",
            Self::CheckApiKey => "check_api_key",
            Self::AccessToken => "access_token",
            Self::ValidateSubdomain => "validate_subdomain",
            Self::FieldDetails => "field_details",
        }
    }
}

/// Where and how one operation is sent.
///
/// Templates use `{name}` placeholders filled in by [`build_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointPath {
    /// The operation this entry serves.
    pub operation: ResourceOperation,
    /// The generation this entry is for, or `None` for both.
    pub generation: Option<ApiGeneration>,
    /// The HTTP verb.
    pub http_method: HttpMethod,
    /// The endpoint template, starting with `/`.
    pub template: &'static str,
}

impl EndpointPath {
    /// Creates a new `EndpointPath`.
    ///
    /// This is a `const fn` so tables can be declared as constants.
    #[must_use]
    pub const fn new(
        operation: ResourceOperation,
        generation: Option<ApiGeneration>,
        http_method: HttpMethod,
        template: &'static str,
    ) -> Self {
        Self {
            operation,
            generation,
            http_method,
            template,
        }
    }

    /// Returns `true` if this entry can serve `generation`.
    #[must_use]
    pub fn applies_to(&self, generation: ApiGeneration) -> bool {
        self.generation.map_or(true, |g| g == generation)
    }
}

/// Selects the entry for `operation` on `generation`.
///
/// Generation-specific entries win over generic ones. Returns `None` if the
/// operation has no entry for the generation.
#[must_use]
pub fn resolve_path(
    paths: &[EndpointPath],
    operation: ResourceOperation,
    generation: ApiGeneration,
) -> Option<&EndpointPath> {
    paths
        .iter()
        .filter(|p| p.operation == operation)
        .filter(|p| p.applies_to(generation))
        .max_by_key(|p| p.generation.is_some())
}

/// Like [`resolve_path`], but reports a missing entry as an error.
///
/// # Errors
///
/// Returns [`InvalidRequestError::UnsupportedOperation`] naming `resource`
/// when no entry matches.
pub fn require_path<'a>(
    resource: &'static str,
    paths: &'a [EndpointPath],
    operation: ResourceOperation,
    generation: ApiGeneration,
) -> Result<&'a EndpointPath, InvalidRequestError> {
    resolve_path(paths, operation, generation).ok_or(InvalidRequestError::UnsupportedOperation {
        resource,
        operation: operation.as_str(),
        generation,
    })
}

/// Builds an endpoint from a template by interpolating ids.
///
/// Each value is percent-encoded, so ids can never add path segments or a
/// query string.
///
/// ```rust
/// use octadesk_api::rest::build_path;
///
/// assert_eq!(build_path("/tickets/{number}/interactions", &[("number", "42")]), "/tickets/42/interactions");
/// assert_eq!(build_path("/persons/{id}", &[("id", "../admin?x=1")]), "/persons/..%2Fadmin%3Fx%3D1");
/// ```
#[must_use]
pub fn build_path(template: &str, ids: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOperation>();
    assert_send_sync::<EndpointPath>();
};
