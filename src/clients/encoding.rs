//! Wire encoders for the two Octadesk API generations.
//!
//! [`encode`] turns a validated [`Request`] into an [`EncodedRequest`]: the
//! exact headers, query string and body to send. Encoding is a pure function
//! of the request and the client configuration; nothing here touches the
//! network.
//!
//! # Legacy (`v0.0.1`)
//!
//! - Headers: `Accept` and `Content-Type` set to the response type, plus
//!   `Authorization: Bearer <key>` when an API key is configured.
//! - Query: `page`, `take` (the limit), one `property=value` pair per filter
//!   with the operator folded into a value prefix, then `sortBy` and
//!   `sortDirection`. Keys and values are percent-encoded.
//!
//! # Current (`v1.0.0`)
//!
//! - Headers: `X-API-KEY`, `octa-agent-email` and `accept`.
//! - Query: `filters[i][property|operator|value]` per filter, then
//!   `sort[property]`, `sort[direction]`, `page` and `limit`, joined verbatim
//!   as `key=value` pairs.

use serde_json::Value;
use tracing::warn;

use crate::clients::aliases::remap_filter;
use crate::clients::http_request::{HttpMethod, Request};
use crate::config::{ApiGeneration, OctadeskConfig};

/// Payload attached to an encoded request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// Sent as `application/json`.
    Json(Value),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

/// A request in the wire format of one API generation.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedRequest {
    /// HTTP verb.
    pub method: HttpMethod,
    /// Endpoint path, appended to the base URL.
    pub endpoint: String,
    /// Headers to send, with generation defaults already merged in.
    pub headers: Vec<(String, String)>,
    /// Query string without the leading `?`. Empty when there is none.
    pub query: String,
    /// Body to send, if any.
    pub body: Option<RequestBody>,
}

impl EncodedRequest {
    /// Returns the value of a header, matching its name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Encodes `request` for the generation configured in `config`.
#[must_use]
pub fn encode(request: &Request, config: &OctadeskConfig) -> EncodedRequest {
    match config.generation() {
        ApiGeneration::Legacy => encode_legacy(request, config),
        ApiGeneration::Current => encode_current(request, config),
    }
}

/// Encodes `request` for the legacy API.
///
/// The legacy API has no operator vocabulary. Operators become a prefix on
/// the value: `gt`/`ge` become `>`, `lt`/`le` become `<` and `ne` becomes `!`,
/// while `eq`, `in` and `nin` are sent bare. Two filters on the same property
/// collapse into one query pair, the later value winning.
#[must_use]
pub fn encode_legacy(request: &Request, config: &OctadeskConfig) -> EncodedRequest {
    let mut headers = vec![
        ("Accept".to_string(), config.response_type().to_string()),
        ("Content-Type".to_string(), config.response_type().to_string()),
    ];
    merge_headers(&mut headers, request);
    if let Some(key) = config.api_key() {
        set_header(&mut headers, "Authorization", format!("Bearer {}", key.as_ref()));
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    if let Some(page) = request.page() {
        set_pair(&mut pairs, "page", page.to_string());
    }
    if let Some(limit) = request.limit() {
        set_pair(&mut pairs, "take", limit.to_string());
    }
    for filter in request.filters() {
        let filter = remap_filter(filter, ApiGeneration::Legacy);
        let value = format!("{}{}", filter.operator.legacy_prefix(), filter.value);
        set_pair(&mut pairs, &filter.property, value);
    }
    if let Some(sort) = request.sort() {
        set_pair(&mut pairs, "sortBy", sort.property.clone());
        set_pair(&mut pairs, "sortDirection", sort.direction.to_string());
    }

    let query = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    EncodedRequest {
        method: request.method(),
        endpoint: request.endpoint().to_string(),
        headers,
        query,
        body: body_of(request),
    }
}

/// Encodes `request` for the current API.
///
/// Operators reach the server verbatim. The query string is assembled
/// literally, so brackets and values are not percent-encoded here.
#[must_use]
pub fn encode_current(request: &Request, config: &OctadeskConfig) -> EncodedRequest {
    let mut headers = vec![
        (
            "X-API-KEY".to_string(),
            config.api_key().map(|key| key.as_ref().to_string()).unwrap_or_default(),
        ),
        (
            "octa-agent-email".to_string(),
            config
                .agent_email()
                .map(|email| email.as_ref().to_string())
                .unwrap_or_default(),
        ),
        ("accept".to_string(), config.response_type().to_string()),
    ];
    merge_headers(&mut headers, request);

    let mut pairs: Vec<String> = Vec::new();
    for (index, filter) in request.filters().iter().enumerate() {
        let filter = remap_filter(filter, ApiGeneration::Current);
        pairs.push(format!("filters[{index}][property]={}", filter.property));
        pairs.push(format!("filters[{index}][operator]={}", filter.operator));
        pairs.push(format!("filters[{index}][value]={}", filter.value));
    }
    if let Some(sort) = request.sort() {
        pairs.push(format!("sort[property]={}", sort.property));
        pairs.push(format!("sort[direction]={}", sort.direction));
    }
    if let Some(page) = request.page() {
        pairs.push(format!("page={page}"));
    }
    if let Some(limit) = request.limit() {
        pairs.push(format!("limit={limit}"));
    }

    EncodedRequest {
        method: request.method(),
        endpoint: request.endpoint().to_string(),
        headers,
        query: pairs.join("&"),
        body: body_of(request),
    }
}

/// Caller headers override generation defaults with the same name.
fn merge_headers(headers: &mut Vec<(String, String)>, request: &Request) {
    let mut custom: Vec<_> = request.headers().iter().collect();
    custom.sort();
    for (name, value) in custom {
        set_header(headers, name, value.clone());
    }
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
    headers.push((name.to_string(), value));
}

fn set_pair(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(existing, _)| existing == key) {
        Some(pair) => pair.1 = value,
        None => pairs.push((key.to_string(), value)),
    }
}

fn body_of(request: &Request) -> Option<RequestBody> {
    match (request.body(), request.form()) {
        (Some(json), form) => {
            if !form.is_empty() {
                warn!(
                    endpoint = request.endpoint(),
                    "Request has both a JSON body and form fields; sending the JSON body"
                );
            }
            Some(RequestBody::Json(json.clone()))
        }
        (None, []) => None,
        (None, form) => Some(RequestBody::Form(form.to_vec())),
    }
}
