//! Filter property names that differ between API generations.
//!
//! Both generations can filter tickets by the person who opened them, but the
//! legacy API calls that property `idRequester` while the current API calls it
//! `requester.id`. Callers may use either spelling; the encoder rewrites each
//! filter property through [`property_for`] before it reaches the wire.

use std::borrow::Cow;

use crate::clients::query::Filter;
use crate::config::ApiGeneration;

/// One logical filter property with its name in each generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyAlias {
    /// Name understood by the legacy API.
    pub legacy: &'static str,
    /// Name understood by the current API.
    pub current: &'static str,
}

impl PropertyAlias {
    const fn name_for(&self, generation: ApiGeneration) -> &'static str {
        match generation {
            ApiGeneration::Legacy => self.legacy,
            ApiGeneration::Current => self.current,
        }
    }
}

/// Known property aliases.
pub const PROPERTY_ALIASES: &[PropertyAlias] = &[PropertyAlias {
    legacy: "idRequester",
    current: "requester.id",
}];

/// Returns the name `generation` uses for `property`.
///
/// Properties without an alias, and properties already spelled for the
/// target generation, are returned unchanged.
///
/// # Example
///
/// ```rust
/// use octadesk_api::clients::property_for;
/// use octadesk_api::ApiGeneration;
///
/// assert_eq!(property_for("requester.id", ApiGeneration::Legacy), "idRequester");
/// assert_eq!(property_for("idRequester", ApiGeneration::Current), "requester.id");
/// assert_eq!(property_for("email", ApiGeneration::Current), "email");
/// ```
#[must_use]
pub fn property_for(property: &str, generation: ApiGeneration) -> &str {
    PROPERTY_ALIASES
        .iter()
        .find(|alias| alias.legacy == property || alias.current == property)
        .map_or(property, |alias| alias.name_for(generation))
}

/// Returns `filter` with its property spelled for `generation`.
///
/// Borrows when no rewrite is needed.
#[must_use]
pub fn remap_filter(filter: &Filter, generation: ApiGeneration) -> Cow<'_, Filter> {
    let property = property_for(&filter.property, generation);
    if property == filter.property {
        return Cow::Borrowed(filter);
    }

    tracing::trace!(
        from = %filter.property,
        to = property,
        %generation,
        "Remapping filter property"
    );

    Cow::Owned(Filter {
        property: property.to_string(),
        operator: filter.operator,
        value: filter.value.clone(),
    })
}
