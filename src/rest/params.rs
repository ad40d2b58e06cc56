//! Parameters shared by the search operations of every resource.

use serde::{Deserialize, Serialize};

use crate::clients::{
    FilterInput, FilterOperator, FilterValue, RequestBuilder, Sort, SortDirection, SortInput,
};

/// Default page requested by search operations.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size requested by search operations.
pub const DEFAULT_LIMIT: u32 = 20;

/// Filters, sort and pagination for a search.
///
/// Filters and sort are kept in their unvalidated form so that descriptions
/// read from JSON can be passed straight through; they are checked when the
/// request is built.
///
/// # Example
///
/// ```rust
/// use octadesk_api::rest::SearchParams;
/// use octadesk_api::clients::{FilterOperator, SortDirection};
///
/// let params = SearchParams::new()
///     .filter("status", FilterOperator::Ne, "closed")
///     .sort("number", SortDirection::Desc)
///     .limit(50);
///
/// assert_eq!(params.page, 1);
/// assert_eq!(params.filters.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Filters in the order they are sent.
    pub filters: Vec<FilterInput>,
    /// Sort order, if any.
    pub sort: Option<SortInput>,
    /// Page number, starting at 1.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchParams {
    /// Creates parameters with no filters, no sort, page 1 and limit 20.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a filter.
    #[must_use]
    pub fn filter(
        mut self,
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        self.filters.push(FilterInput {
            property: Some(property.into()),
            operator: Some(operator.as_str().to_string()),
            value: Some(value.into()),
        });
        self
    }

    /// Sets the sort.
    #[must_use]
    pub fn sort(mut self, property: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort::new(property, direction).into());
        self
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Copies these parameters onto a request builder.
    #[must_use]
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .filters(self.filters.iter().cloned())
            .page(self.page)
            .limit(self.limit);
        match &self.sort {
            Some(sort) => builder.sort_input(sort.clone()),
            None => builder,
        }
    }
}
