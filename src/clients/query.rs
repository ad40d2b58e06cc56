//! Filter and sort vocabulary shared by both API generations.
//!
//! Filters and sorts come in two shapes:
//!
//! - Typed values ([`Filter`], [`Sort`]) that are valid by construction.
//! - Loose inputs ([`FilterInput`], [`SortInput`]) with every field optional,
//!   for descriptions that arrive as data (JSON, query strings, user input).
//!   They are checked when the request is built, and any missing field or
//!   unknown operator/direction is reported as an
//!   [`InvalidRequestError`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clients::errors::InvalidRequestError;

/// Comparison operator of a filter.
///
/// The current API receives these verbatim. The legacy API only knows value
/// prefixes, see [`legacy_prefix`](Self::legacy_prefix).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOperator {
    /// Equal.
    Eq,
    /// Not equal.
    Ne,
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Ge,
    /// Less than.
    Lt,
    /// Less than or equal.
    Le,
    /// Contained in.
    In,
    /// Not contained in.
    Nin,
}

impl FilterOperator {
    /// All recognised operators.
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::Gt,
        Self::Ge,
        Self::Lt,
        Self::Le,
        Self::In,
        Self::Nin,
    ];

    /// Returns the wire name of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::In => "in",
            Self::Nin => "nin",
        }
    }

    /// Looks up an operator by its exact wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// Returns the value prefix the legacy API uses for this operator.
    ///
    /// The legacy API cannot tell `gt` from `ge` or `lt` from `le`, and has no
    /// way to express `in`/`nin`, which are sent as plain equality.
    #[must_use]
    pub const fn legacy_prefix(&self) -> &'static str {
        match self {
            Self::Gt | Self::Ge => ">",
            Self::Lt | Self::Le => "<",
            Self::Ne => "!",
            Self::Eq | Self::In | Self::Nin => "",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scalar value compared by a filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Text value.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Integer above `i64::MAX`, kept exact.
    Unsigned(u64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, sent as `true`/`false`.
    Boolean(bool),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Unsigned(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u64> for FilterValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// A validated filter condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// The property compared (e.g. `email`, `requester.id`).
    pub property: String,
    /// The comparison operator.
    pub operator: FilterOperator,
    /// The value compared against.
    pub value: FilterValue,
}

impl Filter {
    /// Creates a new filter.
    #[must_use]
    pub fn new(
        property: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            value: value.into(),
        }
    }

    /// Shorthand for an `eq` filter.
    #[must_use]
    pub fn equals(property: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::new(property, FilterOperator::Eq, value)
    }
}

/// A filter as received from outside the type system.
///
/// Every field is optional so that incomplete descriptions can be rejected
/// with a precise error rather than failing to deserialize.
///
/// # Example
///
/// ```rust
/// use octadesk_api::clients::{FilterInput, FilterOperator};
///
/// let input: FilterInput = serde_json::from_str(
///     r#"{"property": "status", "operator": "ne", "value": "closed"}"#,
/// ).unwrap();
/// let filter = input.validate(0).unwrap();
/// assert_eq!(filter.operator, FilterOperator::Ne);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterInput {
    /// The property compared.
    #[serde(default)]
    pub property: Option<String>,
    /// The operator's wire name.
    #[serde(default)]
    pub operator: Option<String>,
    /// The value compared against.
    #[serde(default)]
    pub value: Option<FilterValue>,
}

impl FilterInput {
    /// Checks the input and turns it into a [`Filter`].
    ///
    /// `index` is the filter's position in its request, reported in errors.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::InvalidFilter`] if a field is missing and
    /// [`InvalidRequestError::InvalidFilterOperator`] if the operator is unknown.
    pub fn validate(&self, index: usize) -> Result<Filter, InvalidRequestError> {
        let missing = |field| InvalidRequestError::InvalidFilter { index, field };

        let property = self.property.as_ref().ok_or_else(|| missing("property"))?;
        let operator = self.operator.as_ref().ok_or_else(|| missing("operator"))?;
        let value = self.value.as_ref().ok_or_else(|| missing("value"))?;

        let operator = FilterOperator::from_wire(operator).ok_or_else(|| {
            InvalidRequestError::InvalidFilterOperator {
                index,
                operator: operator.clone(),
            }
        })?;

        Ok(Filter {
            property: property.clone(),
            operator,
            value: value.clone(),
        })
    }
}

impl From<Filter> for FilterInput {
    fn from(filter: Filter) -> Self {
        Self {
            property: Some(filter.property),
            operator: Some(filter.operator.as_str().to_string()),
            value: Some(filter.value),
        }
    }
}

/// Direction of a sort.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    /// Returns the wire name of the direction.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Looks up a direction by its exact wire name.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated sort order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// The property sorted by.
    pub property: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Creates a new sort.
    #[must_use]
    pub fn new(property: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            property: property.into(),
            direction,
        }
    }
}

/// A sort as received from outside the type system.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortInput {
    /// The property sorted by.
    #[serde(default)]
    pub property: Option<String>,
    /// The direction's wire name.
    #[serde(default)]
    pub direction: Option<String>,
}

impl SortInput {
    /// Checks the input and turns it into a [`Sort`].
    ///
    /// An input with neither field set means "no sort" and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError::InvalidSort`] if only one field is set and
    /// [`InvalidRequestError::InvalidSortDirection`] for an unknown direction.
    pub fn validate(&self) -> Result<Option<Sort>, InvalidRequestError> {
        match (&self.property, &self.direction) {
            (None, None) => Ok(None),
            (Some(property), Some(direction)) => {
                let direction = SortDirection::from_wire(direction).ok_or_else(|| {
                    InvalidRequestError::InvalidSortDirection {
                        direction: direction.clone(),
                    }
                })?;
                Ok(Some(Sort::new(property.clone(), direction)))
            }
            _ => Err(InvalidRequestError::InvalidSort),
        }
    }
}

impl From<Sort> for SortInput {
    fn from(sort: Sort) -> Self {
        Self {
            property: Some(sort.property),
            direction: Some(sort.direction.as_str().to_string()),
        }
    }
}
