//! Multi-predicate filtering over a [`Catalog`].

use crate::types::criteria::FilterCriteria;
use crate::types::station::{Catalog, StationRecord};

impl Catalog {
    /// Returns the subsequence of stations matching **all** active criteria,
    /// in catalog order.
    ///
    /// Criteria left at their defaults impose no constraint, so filtering an
    /// empty catalog or filtering with `FilterCriteria::default()` returns
    /// the catalog unchanged. An empty result is a valid outcome, not an
    /// error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargefind::{Catalog, FilterCriteria};
    ///
    /// let catalog = Catalog::default();
    /// let filtered = catalog.filter(&FilterCriteria {
    ///     min_rating: Some(4.5),
    ///     ..Default::default()
    /// });
    /// assert!(filtered.is_empty());
    /// ```
    pub fn filter(&self, criteria: &FilterCriteria) -> Catalog {
        self.iter()
            .filter(|record| matches(record, criteria))
            .cloned()
            .collect()
    }
}

fn matches(record: &StationRecord, criteria: &FilterCriteria) -> bool {
    if let Some(city) = &criteria.city {
        if record.town.as_deref() != Some(city.as_str()) {
            return false;
        }
    }
    if let Some(min_rating) = criteria.min_rating {
        if record.avg_rating < min_rating {
            return false;
        }
    }
    if let Some(range) = &criteria.price_range {
        if !range.contains(record.price_per_kwh) {
            return false;
        }
    }
    if criteria.operational_only && !record.is_operational {
        return false;
    }
    if !criteria.required_connectors.is_empty() {
        // ANY-match: one shared connector type is enough.
        let overlaps = record
            .connector_types
            .intersection(&criteria.required_connectors)
            .next()
            .is_some();
        if !overlaps {
            return false;
        }
    }
    true
}
