//! Error types for building and sending Octadesk API requests.
//!
//! # Error Handling
//!
//! - [`InvalidRequestError`]: A request description failed validation (bad
//!   filter, bad sort, bad endpoint) or asks for an operation the selected
//!   API generation does not offer. Raised before any network access and
//!   never worth retrying.
//! - [`TypeCoercionError`]: `page` or `limit` could not be read as an integer.
//! - [`HttpResponseError`]: The API answered with a non-2xx status.
//! - [`ApiError`]: Unified error type returned by every public operation.
//!
//! # Example
//!
//! ```rust,ignore
//! use octadesk_api::ApiError;
//!
//! match client.contacts().get_by_id("b5c1...").await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(ApiError::InvalidRequest(e)) => println!("Fix the request: {e}"),
//!     Err(ApiError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(ApiError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::config::ApiGeneration;

/// Error returned when a request description is invalid for the API.
///
/// This is a configuration error: the request is rejected before anything is
/// sent, and sending it again unchanged will fail the same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The endpoint does not start with `/`.
    #[error("Invalid endpoint '{endpoint}'. Endpoints must start with '/'.")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
    },

    /// A filter is missing its property, operator or value.
    #[error("Invalid filter configuration at index {index}: missing '{field}'. Check https://developers.octadesk.com/reference/filters.")]
    InvalidFilter {
        /// Position of the filter in the request.
        index: usize,
        /// The missing field.
        field: &'static str,
    },

    /// A filter operator is not one of `eq`, `ne`, `gt`, `ge`, `lt`, `le`, `in`, `nin`.
    #[error("Invalid filter operator '{operator}' at index {index}. Check https://developers.octadesk.com/reference/filters.")]
    InvalidFilterOperator {
        /// Position of the filter in the request.
        index: usize,
        /// The rejected operator.
        operator: String,
    },

    /// Only one of sort property and direction was given.
    #[error("Invalid sort configuration: property and direction must be set together. Check https://developers.octadesk.com/reference/sort.")]
    InvalidSort,

    /// The sort direction is not `asc` or `desc`.
    #[error("Invalid sort direction '{direction}'. Check https://developers.octadesk.com/reference/sort.")]
    InvalidSortDirection {
        /// The rejected direction.
        direction: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header '{name}'. Header names must be HTTP tokens and values must not contain control characters.")]
    InvalidHeader {
        /// The header name as supplied.
        name: String,
    },

    /// The operation has no endpoint on the selected API generation.
    #[error("{resource}::{operation} is not supported by the {generation} API")]
    UnsupportedOperation {
        /// The resource the operation belongs to (e.g. "Contacts").
        resource: &'static str,
        /// The operation name (e.g. "patch").
        operation: &'static str,
        /// The generation that lacks it.
        generation: ApiGeneration,
    },
}

/// Error returned when `page` or `limit` cannot be read as a non-negative integer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Cannot use '{value}' as {field}: expected a non-negative integer")]
pub struct TypeCoercionError {
    /// The parameter name (`page` or `limit`).
    pub field: &'static str,
    /// The value that failed to parse.
    pub value: String,
}

/// Error returned when the API answers with a non-2xx status.
///
/// The raw body is kept in `message`; `body` holds its JSON form (or the raw
/// text as a JSON string when it is not JSON).
#[derive(Debug, Error)]
#[error("Octadesk API responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body as text.
    pub message: String,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Unified error type for Octadesk API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request description was rejected before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),

    /// `page` or `limit` was not an integer.
    #[error(transparent)]
    TypeCoercion(#[from] TypeCoercionError),

    /// Non-2xx response from the API.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A payload could not be converted to or from JSON.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A successful response lacked data the operation needs.
    #[error("Unexpected response from the Octadesk API: {reason}")]
    UnexpectedResponse {
        /// What was missing or malformed.
        reason: String,
    },
}

impl ApiError {
    /// Returns `true` for errors raised before any network access.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::TypeCoercion(_))
    }

    /// Returns the HTTP status code, if the error came from an API response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
