//! Filter criteria applied to a [`Catalog`](crate::Catalog).

use std::collections::BTreeSet;

/// An inclusive price bound in the same unit as
/// [`StationRecord::price_per_kwh`](crate::StationRecord::price_per_kwh).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl PriceRange {
    /// Creates a new inclusive price range.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub(crate) fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Predicates for [`Catalog::filter`](crate::Catalog::filter).
///
/// A station passes only if it matches **all** active criteria. Every field
/// left at its default imposes no constraint, so `FilterCriteria::default()`
/// is the identity filter.
///
/// # Examples
///
/// ```
/// use chargefind::{FilterCriteria, PriceRange};
///
/// let criteria = FilterCriteria {
///     city: Some("Kochi".to_string()),
///     min_rating: Some(4.0),
///     price_range: Some(PriceRange::new(10.0, 18.0)),
///     operational_only: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Exact-match town name. `None` matches every station, including those
    /// without a reported town.
    pub city: Option<String>,
    /// Minimum average rating (inclusive).
    pub min_rating: Option<f64>,
    /// Inclusive price-per-kWh bound.
    pub price_range: Option<PriceRange>,
    /// Connector types to match. A station passes when **any** of its
    /// connectors appears in this set; an empty set matches every station.
    pub required_connectors: BTreeSet<String>,
    /// When set, only stations reported as operational pass.
    pub operational_only: bool,
}

impl FilterCriteria {
    /// Returns `true` when no predicate is active, i.e. filtering with these
    /// criteria returns the catalog unchanged.
    pub fn is_unconstrained(&self) -> bool {
        self.city.is_none()
            && self.min_rating.is_none()
            && self.price_range.is_none()
            && self.required_connectors.is_empty()
            && !self.operational_only
    }
}
