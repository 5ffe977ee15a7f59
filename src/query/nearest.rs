//! Nearest-station resolution over a [`Catalog`].
//!
//! A catalog holds at most a few hundred stations, so this is a plain linear
//! haversine scan re-run per query. Rebuilding a spatial index at this scale
//! costs more than it saves; keep the scan unless the catalog assumption
//! changes.

use crate::types::station::{Catalog, LatLon, StationRecord};
use haversine::{distance, Location, Units};
use ordered_float::OrderedFloat;

/// Great-circle distance between two points in kilometers.
///
/// The single distance formula used everywhere in this crate; mixing formulas
/// would break comparability between results.
pub fn distance_km(from: LatLon, to: LatLon) -> f64 {
    distance(
        Location {
            latitude: from.0,
            longitude: from.1,
        },
        Location {
            latitude: to.0,
            longitude: to.1,
        },
        Units::Kilometers,
    )
}

impl Catalog {
    /// Finds the station closest to `location`.
    ///
    /// Returns the station with strictly minimal haversine distance and that
    /// distance in kilometers. Ties go to the record appearing first in the
    /// catalog. An empty catalog yields the sentinel
    /// `(None, f64::INFINITY)`, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargefind::{Catalog, LatLon};
    ///
    /// let catalog = Catalog::default();
    /// let (station, distance_km) = catalog.nearest(LatLon(10.0, 76.0));
    /// assert!(station.is_none());
    /// assert!(distance_km.is_infinite());
    /// ```
    pub fn nearest(&self, location: LatLon) -> (Option<&StationRecord>, f64) {
        let best = self
            .iter()
            .map(|record| (record, distance_km(location, record.location)))
            // min_by_key keeps the first of equally-minimal elements, which
            // gives the deterministic catalog-order tie-break.
            .min_by_key(|(_, dist)| OrderedFloat(*dist));

        match best {
            Some((record, dist)) => (Some(record), dist),
            None => (None, f64::INFINITY),
        }
    }
}
