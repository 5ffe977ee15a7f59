//! Defines the normalized representation of a charging station and the
//! read-only catalog built from one provider fetch cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use chargefind::LatLon;
///
/// let kochi = LatLon(9.9312, 76.2673);
/// assert_eq!(kochi.0, 9.9312); // Latitude
/// assert_eq!(kochi.1, 76.2673); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon(pub f64, pub f64);

/// A single charging station after normalization.
///
/// Built once per fetch cycle from a raw Open Charge Map POI record and
/// treated as immutable afterwards. Records missing a title or either
/// coordinate never make it into a [`Catalog`], so `title` and `location`
/// are always present here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// The provider's numeric POI identifier.
    pub id: i64,
    /// Display name of the station.
    pub title: String,
    /// Geographical position of the station.
    pub location: LatLon,
    /// Locality the station belongs to, when the provider reports one.
    pub town: Option<String>,
    /// Simulated price per kWh in the range [10, 25], rounded to 2 decimals.
    ///
    /// The directory carries no pricing data, so this is **placeholder data**
    /// derived from a seeded generator, not a real tariff.
    pub price_per_kwh: f64,
    /// Simulated average user rating in the range [3.5, 5.0], rounded to
    /// 1 decimal. Placeholder data, same caveat as
    /// [`price_per_kwh`](StationRecord::price_per_kwh).
    pub avg_rating: f64,
    /// Whether the provider reports the station as currently usable.
    /// Missing or malformed status data maps to `false`.
    pub is_operational: bool,
    /// Distinct connector-type display names (e.g. "Type 2 (Socket Only)",
    /// "CCS (Type 2)"). Empty when the provider lists no connections.
    pub connector_types: BTreeSet<String>,
}

/// The normalized, read-only collection of stations for one fetch cycle.
///
/// Ordering is the provider's response order after invalid records have been
/// dropped, and every operation that derives a new catalog preserves it.
/// Built by [`Catalog::from_raw`] and queried with [`Catalog::filter`] and
/// [`Catalog::nearest`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    records: Vec<StationRecord>,
}

impl Catalog {
    pub(crate) fn new(records: Vec<StationRecord>) -> Self {
        Self { records }
    }

    /// Number of stations in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the catalog holds no stations.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The stations in provider response order.
    pub fn records(&self) -> &[StationRecord] {
        &self.records
    }

    /// Iterates over the stations in provider response order.
    pub fn iter(&self) -> std::slice::Iter<'_, StationRecord> {
        self.records.iter()
    }

    /// Sorted list of distinct towns present in the catalog, skipping
    /// records without one. Handy for populating a city picker.
    pub fn towns(&self) -> Vec<&str> {
        let unique: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.town.as_deref())
            .collect();
        unique.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a StationRecord;
    type IntoIter = std::slice::Iter<'a, StationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<StationRecord> for Catalog {
    fn from_iter<T: IntoIterator<Item = StationRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
