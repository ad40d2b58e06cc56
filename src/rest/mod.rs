//! Resource clients for the Octadesk API.
//!
//! This module layers one client per Octadesk resource on top of
//! [`OctadeskClient`](crate::clients::OctadeskClient). Resource clients only
//! choose an endpoint and verb and supply filters or payloads; encoding,
//! validation and transport all happen in [`clients`](crate::clients).
//!
//! # Overview
//!
//! - [`EndpointPath`] and [`ResourceOperation`]: Per-generation endpoint tables
//! - [`SearchParams`]: Filters, sort and pagination for search operations
//! - [`resources`]: The resource clients (contacts, tickets, chat, ...)
//!
//! # Example
//!
//! ```rust,ignore
//! use octadesk_api::rest::SearchParams;
//! use octadesk_api::clients::{FilterOperator, SortDirection};
//!
//! let params = SearchParams::new()
//!     .filter("requester.id", FilterOperator::Eq, contact_id)
//!     .sort("number", SortDirection::Desc);
//!
//! let response = client.tickets().search(&params).await?;
//! for ticket in response.body.as_array().into_iter().flatten() {
//!     println!("#{}", ticket["number"]);
//! }
//! ```

mod params;
mod path;

pub mod resources;

pub use params::{SearchParams, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use path::{build_path, require_path, resolve_path, EndpointPath, ResourceOperation};
