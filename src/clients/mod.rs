//! Request building, wire encoding and transport for the Octadesk API.
//!
//! This module is the core of the crate. It turns a generation-agnostic
//! description of a call into the exact wire format of either Octadesk API
//! generation, sends it, and normalizes the response metadata.
//!
//! # Overview
//!
//! - [`Request`] / [`RequestBuilder`]: An immutable, validated request description
//! - [`Filter`], [`FilterOperator`], [`Sort`], [`SortDirection`]: Query vocabulary
//! - [`FilterInput`], [`SortInput`]: Unvalidated forms of filters and sorts
//! - [`encode`], [`EncodedRequest`]: The legacy and current wire encoders
//! - [`property_for`]: The property alias table (`requester.id` / `idRequester`)
//! - [`OctadeskClient`]: The async transport
//! - [`ApiResponse`], [`ResponseMetadata`]: Responses and pagination metadata
//! - [`ApiError`]: The error returned by every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use octadesk_api::clients::{FilterOperator, HttpMethod, OctadeskClient, Request};
//!
//! let request = Request::builder(HttpMethod::Get, "/tickets")
//!     .filter("requester.id", FilterOperator::Eq, "c1f0...")
//!     .page(1)
//!     .limit(20)
//!     .build()?;
//!
//! // The same request works against either generation.
//! let response = client.send(&request).await?;
//! println!("{:?} tickets", response.total_items());
//! ```

mod aliases;
pub mod encoding;
mod errors;
mod http_client;
mod http_request;
mod http_response;
mod query;

pub use aliases::{property_for, remap_filter, PropertyAlias, PROPERTY_ALIASES};
pub use encoding::{encode, encode_current, encode_legacy, EncodedRequest, RequestBody};
pub use errors::{ApiError, HttpResponseError, InvalidRequestError, TypeCoercionError};
pub use http_client::OctadeskClient;
pub use http_request::{HttpMethod, Request, RequestBuilder};
pub use http_response::{ApiResponse, ResponseMetadata};
pub use query::{
    Filter, FilterInput, FilterOperator, FilterValue, Sort, SortDirection, SortInput,
};
