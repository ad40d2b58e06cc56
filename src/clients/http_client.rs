//! HTTP client for Octadesk API communication.
//!
//! This module provides [`OctadeskClient`], which encodes a [`Request`] for
//! the configured API generation and performs exactly one HTTP exchange.

use std::collections::HashMap;

use crate::clients::encoding::{encode, RequestBody};
use crate::clients::errors::{ApiError, HttpResponseError, InvalidRequestError};
use crate::clients::http_request::Request;
use crate::clients::http_response::ApiResponse;
use crate::config::{ApiGeneration, OctadeskConfig};
use crate::error::ConfigError;
use crate::rest::resources::{Authentication, Chat, Contacts, Tickets};

/// HTTP client for making requests to the Octadesk API.
///
/// The client holds only immutable configuration and a connection pool, so
/// one instance can serve any number of concurrent calls. Each call to
/// [`send`](Self::send) is independent: nothing from one request leaks into
/// the next, and no response is retained.
///
/// The client does not retry, and it does not interpret status codes beyond
/// turning non-2xx responses into [`ApiError::Response`].
///
/// # Thread Safety
///
/// `OctadeskClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use octadesk_api::{ApiKey, BaseUrl, OctadeskClient, OctadeskConfig};
/// use octadesk_api::clients::{HttpMethod, Request};
///
/// let config = OctadeskConfig::builder()
///     .base_url(BaseUrl::new("https://o123.api002.octadesk.services")?)
///     .api_key(ApiKey::new("access-token")?)
///     .build()?;
/// let client = OctadeskClient::new(config)?;
///
/// let request = Request::builder(HttpMethod::Get, "/persons").page(1).build()?;
/// let response = client.send(&request).await?;
/// println!("{} contacts", response.total_items().unwrap_or_default());
/// ```
#[derive(Clone, Debug)]
pub struct OctadeskClient {
    client: reqwest::Client,
    config: OctadeskConfig,
}

// Verify OctadeskClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OctadeskClient>();
};

impl OctadeskClient {
    /// Creates a new client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClientInit`] if the underlying HTTP client
    /// cannot be created (e.g. TLS initialization failure).
    pub fn new(config: OctadeskConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| ConfigError::HttpClientInit {
                reason: e.to_string(),
            })?;

        if !config.generation().is_stable() {
            tracing::warn!(
                generation = %config.generation(),
                "The Octadesk {} API is unstable and may change without notice",
                config.generation()
            );
        }

        Ok(Self { client, config })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &OctadeskConfig {
        &self.config
    }

    /// Returns the API generation requests are encoded for.
    #[must_use]
    pub const fn generation(&self) -> ApiGeneration {
        self.config.generation()
    }

    /// Returns the contacts resource.
    #[must_use]
    pub const fn contacts(&self) -> Contacts<'_> {
        Contacts::new(self)
    }

    /// Returns the tickets resource.
    #[must_use]
    pub const fn tickets(&self) -> Tickets<'_> {
        Tickets::new(self)
    }

    /// Returns the chat resource.
    #[must_use]
    pub const fn chat(&self) -> Chat<'_> {
        Chat::new(self)
    }

    /// Returns the authentication resource.
    #[must_use]
    pub const fn authentication(&self) -> Authentication<'_> {
        Authentication::new(self)
    }

    /// Sends a request to the Octadesk API.
    ///
    /// The request is encoded for the configured generation, sent once, and
    /// the response returned as-is when its status is 2xx.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - [`ApiError::Network`] if the request could not be sent or the body read
    /// - [`ApiError::Response`] if the status is not 2xx
    /// - [`ApiError::InvalidRequest`] if the endpoint does not form a valid URL
    pub async fn send(&self, request: &Request) -> Result<ApiResponse, ApiError> {
        let generation = self.generation();
        let encoded = encode(request, &self.config);

        let mut url = reqwest::Url::parse(&format!("{}{}", self.config.base_url(), encoded.endpoint))
            .map_err(|_| InvalidRequestError::InvalidEndpoint {
                endpoint: encoded.endpoint.clone(),
            })?;
        if !encoded.query.is_empty() {
            url.set_query(Some(&encoded.query));
        }

        tracing::debug!(
            method = %encoded.method,
            endpoint = %encoded.endpoint,
            %generation,
            "Sending Octadesk API request"
        );

        let mut builder = self.client.request(encoded.method.into(), url);
        for (name, value) in &encoded.headers {
            builder = builder.header(name, value);
        }
        builder = match &encoded.body {
            Some(RequestBody::Json(json)) => builder.json(json),
            Some(RequestBody::Form(fields)) => builder.form(fields),
            None => builder,
        };

        let res = builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(&body_text);

        tracing::debug!(
            status = code,
            endpoint = %encoded.endpoint,
            "Received Octadesk API response"
        );

        let response = ApiResponse::new(code, headers, body, generation);
        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpResponseError {
            code,
            message: body_text,
            body: response.body,
        }
        .into())
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// JSON when possible, the raw text as a JSON string otherwise, `{}` when empty.
    fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }
}
