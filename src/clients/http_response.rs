//! HTTP response types for the Octadesk API.
//!
//! [`ApiResponse`] is what every operation returns. It keeps the status code,
//! the headers and the parsed body, and remembers which API generation
//! produced it so the pagination headers (named differently by each
//! generation) can be read through one set of accessors.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::ApiError;
use crate::config::ApiGeneration;

/// A response from the Octadesk API.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    ///
    /// Non-JSON bodies are kept as a JSON string; empty bodies are `{}`.
    pub body: serde_json::Value,
    /// The API generation the request was encoded for.
    pub generation: ApiGeneration,
}

impl ApiResponse {
    /// Creates a new `ApiResponse`. Header names are lowercased.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
        generation: ApiGeneration,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }

        Self {
            code,
            headers: normalized,
            body,
            generation,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matching its name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the total number of items matched by a listing.
    ///
    /// Read from `X-Total-Items` on the current API and `total-count` on the
    /// legacy one. `None` if the header is absent or not a number.
    #[must_use]
    pub fn total_items(&self) -> Option<u64> {
        self.header(self.generation.total_items_header())
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the total number of pages of a listing.
    ///
    /// Read from `X-Total-Pages` on the current API and `total-pages` on the
    /// legacy one.
    #[must_use]
    pub fn total_pages(&self) -> Option<u64> {
        self.header(self.generation.total_pages_header())
            .and_then(|value| value.trim().parse().ok())
    }

    /// Returns the legacy `search-id` header.
    ///
    /// Always `None` for the current API, which has no search correlation id.
    #[must_use]
    pub fn search_id(&self) -> Option<&str> {
        self.generation
            .search_id_header()
            .and_then(|name| self.header(name))
    }

    /// Returns the pagination metadata of this response.
    #[must_use]
    pub fn metadata(&self) -> ResponseMetadata {
        ResponseMetadata::from(Some(self))
    }

    /// Deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Serialization`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.body.clone())?)
    }
}

/// Pagination and search metadata of a listing response.
///
/// Built from an optional response: with no response every field is `None`.
///
/// ```rust
/// use octadesk_api::clients::{ApiResponse, ResponseMetadata};
///
/// let metadata = ResponseMetadata::from(None::<&ApiResponse>);
/// assert_eq!(metadata, ResponseMetadata::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Total number of matching items.
    pub total_items: Option<u64>,
    /// Total number of pages.
    pub total_pages: Option<u64>,
    /// Legacy search correlation id.
    pub search_id: Option<String>,
}

impl From<Option<&ApiResponse>> for ResponseMetadata {
    fn from(response: Option<&ApiResponse>) -> Self {
        response.map_or_else(Self::default, |response| Self {
            total_items: response.total_items(),
            total_pages: response.total_pages(),
            search_id: response.search_id().map(str::to_string),
        })
    }
}

impl From<&ApiResponse> for ResponseMetadata {
    fn from(response: &ApiResponse) -> Self {
        Self::from(Some(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(name, value)| ((*name).to_string(), vec![(*value).to_string()]))
            .collect()
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            let response = ApiResponse::new(code, HashMap::new(), json!({}), ApiGeneration::Legacy);
            assert!(response.is_ok(), "Expected is_ok() to be true for code {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 422, 500, 503] {
            let response = ApiResponse::new(code, HashMap::new(), json!({}), ApiGeneration::Current);
            assert!(!response.is_ok());
        }
    }

    #[test]
    fn test_header_names_are_normalized() {
        let response = ApiResponse::new(
            200,
            headers(&[("X-Total-Items", "42")]),
            json!([]),
            ApiGeneration::Current,
        );
        assert!(response.headers.contains_key("x-total-items"));
        assert_eq!(response.header("X-TOTAL-ITEMS"), Some("42"));
    }

    #[test]
    fn test_current_metadata_headers() {
        let response = ApiResponse::new(
            200,
            headers(&[
                ("X-Total-Items", "42"),
                ("X-Total-Pages", "3"),
                ("search-id", "ignored"),
            ]),
            json!([]),
            ApiGeneration::Current,
        );

        assert_eq!(response.total_items(), Some(42));
        assert_eq!(response.total_pages(), Some(3));
        assert_eq!(response.search_id(), None);
    }

    #[test]
    fn test_legacy_metadata_headers() {
        let response = ApiResponse::new(
            200,
            headers(&[
                ("total-count", "120"),
                ("total-pages", "6"),
                ("search-id", "s-789"),
                ("X-Total-Items", "1"),
            ]),
            json!([]),
            ApiGeneration::Legacy,
        );

        assert_eq!(
            response.metadata(),
            ResponseMetadata {
                total_items: Some(120),
                total_pages: Some(6),
                search_id: Some("s-789".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_or_malformed_headers_are_none() {
        let response = ApiResponse::new(
            200,
            headers(&[("total-count", "many")]),
            json!([]),
            ApiGeneration::Legacy,
        );
        assert_eq!(response.total_items(), None);
        assert_eq!(response.total_pages(), None);
        assert_eq!(response.search_id(), None);
    }

    #[test]
    fn test_metadata_without_response_is_empty() {
        let metadata = ResponseMetadata::from(None::<&ApiResponse>);
        assert_eq!(metadata.total_items, None);
        assert_eq!(metadata.total_pages, None);
        assert_eq!(metadata.search_id, None);
    }

    #[test]
    fn test_json_decodes_body() {
        #[derive(Deserialize)]
        struct Contact {
            id: String,
            name: String,
        }

        let response = ApiResponse::new(
            200,
            HashMap::new(),
            json!({"id": "c-1", "name": "Ana"}),
            ApiGeneration::Legacy,
        );
        let contact: Contact = response.json().unwrap();
        assert_eq!(contact.id, "c-1");
        assert_eq!(contact.name, "Ana");

        let result: Result<Vec<Contact>, _> = response.json();
        assert!(matches!(result, Err(ApiError::Serialization(_))));
    }
}
