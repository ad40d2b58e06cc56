//! Octadesk resource clients.
//!
//! Each resource is a thin layer that picks an endpoint from its table and
//! hands a [`Request`](crate::clients::Request) to the shared
//! [`OctadeskClient`](crate::clients::OctadeskClient). A single
//! implementation serves both API generations; the differences live in the
//! `PATHS` table of each resource.
//!
//! # Available Resources
//!
//! | Resource | Obtained from | Operations |
//! |----------|---------------|------------|
//! | [`Contacts`] | `client.contacts()` | search, create, update, patch, get by id/email/phone, agents, avatar |
//! | [`Tickets`] | `client.tickets()` | search, create, update, get by number, interactions |
//! | [`Chat`] | `client.chat()` | search, send template, get by id |
//! | [`Authentication`] | `client.authentication()` | check API key |
//! | [`Login`] | [`Login::new`] | access token, validate subdomain |
//! | [`CustomFields`] | [`CustomFields::new`] | field details |
//!
//! Every operation returns the raw [`ApiResponse`](crate::clients::ApiResponse)
//! and propagates errors unchanged.

mod authentication;
mod chat;
mod contacts;
mod custom_fields;
mod login;
mod tickets;

pub use authentication::Authentication;
pub use chat::Chat;
pub use contacts::{
    Contacts, ParticipantPermission, PermissionType, PermissionView, PersonType, RoleType,
};
pub use custom_fields::CustomFields;
pub use login::{AccessToken, Login, LOGIN_BASE_URL, TOKEN_LIFETIME_MINUTES};
pub use tickets::{TicketSortBy, TicketStatus, Tickets};

use serde::Serialize;

use crate::clients::ApiError;

/// Turns a caller payload into a JSON body.
fn to_body<T: Serialize + ?Sized>(fields: &T) -> Result<serde_json::Value, ApiError> {
    Ok(serde_json::to_value(fields)?)
}
