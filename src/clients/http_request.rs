//! Request descriptions for the Octadesk API.
//!
//! A [`Request`] is an immutable, generation-agnostic description of one API
//! call: verb, endpoint, filters, sort, pagination, headers and payload. It is
//! produced by [`RequestBuilder::build`], which is where all validation runs,
//! and is only ever read afterwards. Encoding for a specific API generation
//! happens in [`encoding`](crate::clients::encoding) and never alters the
//! request itself.

use std::collections::HashMap;
use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};
use serde_json::Value;

use crate::clients::errors::{ApiError, InvalidRequestError, TypeCoercionError};
use crate::clients::query::{
    Filter, FilterInput, FilterOperator, FilterValue, Sort, SortDirection, SortInput,
};

/// HTTP verbs used by the Octadesk API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
}

impl HttpMethod {
    /// Returns the verb as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Patch => Self::PATCH,
        }
    }
}

/// A validated description of one Octadesk API call.
///
/// Use [`Request::builder`] to construct one.
///
/// # Example
///
/// ```rust
/// use octadesk_api::clients::{FilterOperator, HttpMethod, Request, SortDirection};
///
/// let request = Request::builder(HttpMethod::Get, "/tickets")
///     .filter("status", FilterOperator::Ne, "closed")
///     .sort("number", SortDirection::Desc)
///     .page(2)
///     .limit("50")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.filters().len(), 1);
/// assert_eq!(request.limit(), Some(50));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: HttpMethod,
    endpoint: String,
    filters: Vec<Filter>,
    sort: Option<Sort>,
    page: Option<u32>,
    limit: Option<u32>,
    headers: HashMap<String, String>,
    body: Option<Value>,
    form: Vec<(String, String)>,
}

impl Request {
    /// Creates a new builder for a request to `endpoint`.
    ///
    /// The endpoint is appended to the configured base URL and must start
    /// with `/`; this is checked by [`RequestBuilder::build`].
    #[must_use]
    pub fn builder(method: HttpMethod, endpoint: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(method, endpoint)
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the filters in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Returns the sort, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    /// Returns the page number, if any.
    #[must_use]
    pub const fn page(&self) -> Option<u32> {
        self.page
    }

    /// Returns the page size, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the caller-supplied headers.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns the form fields in insertion order.
    #[must_use]
    pub fn form(&self) -> &[(String, String)] {
        &self.form
    }
}

/// Builder for [`Request`] values.
///
/// Setters never fail; everything is checked once in [`build`](Self::build).
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    endpoint: String,
    filters: Vec<FilterInput>,
    sort: Option<SortInput>,
    page: Option<String>,
    limit: Option<String>,
    headers: HashMap<String, String>,
    body: Option<Value>,
    form: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            filters: Vec::new(),
            sort: None,
            page: None,
            limit: None,
            headers: HashMap::new(),
            body: None,
            form: Vec::new(),
        }
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(
        mut self,
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.filters
            .push(Filter::new(property, operator, value).into());
        self
    }

    /// Adds a filter that has not been validated yet.
    #[must_use]
    pub fn filter_input(mut self, filter: FilterInput) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds several unvalidated filters, keeping their order.
    #[must_use]
    pub fn filters(mut self, filters: impl IntoIterator<Item = FilterInput>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Sets the sort.
    #[must_use]
    pub fn sort(mut self, property: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort::new(property, direction).into());
        self
    }

    /// Sets a sort that has not been validated yet.
    #[must_use]
    pub fn sort_input(mut self, sort: SortInput) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the page number.
    ///
    /// Accepts anything printable; the value must read as a non-negative
    /// integer when the request is built. `0` and empty values mean "no page".
    #[must_use]
    pub fn page(mut self, page: impl ToString) -> Self {
        self.page = Some(page.to_string());
        self
    }

    /// Sets the page size. Same rules as [`page`](Self::page).
    #[must_use]
    pub fn limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    /// Adds a header. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the JSON body.
    ///
    /// `null`, `{}` and `[]` count as no body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Adds a form field. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.form.iter_mut().find(|(existing, _)| *existing == name) {
            Some(field) => field.1 = value,
            None => self.form.push((name, value)),
        }
        self
    }

    /// Validates the description and builds the [`Request`].
    ///
    /// Checks run in this order: endpoint, headers, filters (first invalid
    /// index wins), sort, then `page` and `limit` coercion.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a bad endpoint, header, filter
    /// or sort, and [`ApiError::TypeCoercion`] if `page` or `limit` is not an
    /// integer.
    pub fn build(self) -> Result<Request, ApiError> {
        if !self.endpoint.starts_with('/') {
            return Err(InvalidRequestError::InvalidEndpoint {
                endpoint: self.endpoint,
            }
            .into());
        }

        if let Some(name) = first_invalid_header(&self.headers) {
            return Err(InvalidRequestError::InvalidHeader { name }.into());
        }

        let filters = self
            .filters
            .iter()
            .enumerate()
            .map(|(index, filter)| filter.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        let sort = match &self.sort {
            Some(sort) => sort.validate()?,
            None => None,
        };

        let page = coerce("page", self.page.as_deref())?;
        let limit = coerce("limit", self.limit.as_deref())?;

        Ok(Request {
            method: self.method,
            endpoint: self.endpoint,
            filters,
            sort,
            page,
            limit,
            headers: self.headers,
            body: self.body.filter(|body| !is_empty_body(body)),
            form: self.form,
        })
    }
}

/// Returns the first header, by name, that HTTP cannot carry.
fn first_invalid_header(headers: &HashMap<String, String>) -> Option<String> {
    let mut invalid: Vec<&String> = headers
        .iter()
        .filter(|(name, value)| {
            HeaderName::from_bytes(name.as_bytes()).is_err()
                || HeaderValue::from_str(value).is_err()
        })
        .map(|(name, _)| name)
        .collect();
    invalid.sort();
    invalid.first().map(|name| (*name).clone())
}

/// Reads a pagination value. Empty and zero values are treated as unset.
fn coerce(field: &'static str, value: Option<&str>) -> Result<Option<u32>, TypeCoercionError> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };

    let parsed = raw.parse::<u32>().map_err(|_| TypeCoercionError {
        field,
        value: raw.to_string(),
    })?;

    Ok((parsed != 0).then_some(parsed))
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
