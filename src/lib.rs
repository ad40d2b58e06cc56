//! # Octadesk API Rust Client
//!
//! An async Rust client for the Octadesk helpdesk REST API, speaking both the
//! legacy `v0.0.1` API and the current (unstable) `v1.0.0` API through one
//! set of types.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`OctadeskConfig`] and [`OctadeskConfigBuilder`]
//! - Validated newtypes for credentials and URLs
//! - Immutable, validated request descriptions ([`clients::Request`])
//! - Wire encoders for both API generations, including filter operator and
//!   property name translation
//! - Uniform pagination metadata over generation-specific response headers
//! - Resource clients for contacts, tickets, chat, authentication, login and
//!   custom fields
//!
//! ## Quick Start
//!
//! ```rust
//! use octadesk_api::{AgentEmail, ApiGeneration, ApiKey, BaseUrl, OctadeskConfig};
//!
//! let config = OctadeskConfig::builder()
//!     .base_url(BaseUrl::new("https://o123.api002.octadesk.services").unwrap())
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .agent_email(AgentEmail::new("agent@example.com").unwrap())
//!     .generation(ApiGeneration::Current)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Searching
//!
//! ```rust,ignore
//! use octadesk_api::{OctadeskClient, rest::SearchParams};
//! use octadesk_api::clients::{FilterOperator, SortDirection};
//!
//! let client = OctadeskClient::new(config)?;
//!
//! let params = SearchParams::new()
//!     .filter("email", FilterOperator::Eq, "customer@example.com")
//!     .sort("name", SortDirection::Asc);
//!
//! let response = client.contacts().search(&params).await?;
//! let metadata = response.metadata();
//! println!("{:?} contacts in {:?} pages", metadata.total_items, metadata.total_pages);
//! ```
//!
//! ## Legacy Login
//!
//! The legacy API authenticates with a short-lived access token:
//!
//! ```rust,ignore
//! use octadesk_api::rest::resources::Login;
//! use octadesk_api::{AgentEmail, ApiKey, BaseUrl, OctadeskClient, OctadeskConfig, Subdomain};
//!
//! let login = Login::new(Subdomain::new("acme")?, AgentEmail::new("agent@acme.com")?)?;
//! let token = login.access_token(&ApiKey::new("api-token")?).await?;
//!
//! let config = OctadeskConfig::builder()
//!     .base_url(BaseUrl::new("https://api.octadesk.services")?)
//!     .api_key(token.to_api_key()?)
//!     .build()?;
//! let client = OctadeskClient::new(config)?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and requests validate on construction
//! - **Stateless sending**: A client never carries state from one request to the next
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AgentEmail, ApiGeneration, ApiKey, BaseUrl, OctadeskConfig, OctadeskConfigBuilder, Subdomain,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    ApiError, ApiResponse, HttpMethod, HttpResponseError, InvalidRequestError, OctadeskClient,
    Request, RequestBuilder, ResponseMetadata, TypeCoercionError,
};
