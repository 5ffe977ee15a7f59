//! Turns a raw provider payload into a normalized [`Catalog`].
//!
//! The normalizer is a pure transformation: no I/O, no shared state. A record
//! is dropped when its title or either coordinate is missing; every other
//! field decodes with a defined fallback (see the field docs on
//! [`StationRecord`]).

use crate::catalog::error::NormalizeError;
use crate::catalog::raw::RawPoi;
use crate::catalog::simulate::SimulatedFields;
use crate::types::station::{Catalog, LatLon, StationRecord};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

impl Catalog {
    /// Normalizes a raw Open Charge Map payload into a [`Catalog`].
    ///
    /// `raw` must be a JSON array of POI records; anything else fails with
    /// [`NormalizeError::InvalidInputFormat`]. Individually malformed records
    /// are skipped, never fatal. `seed` drives the simulated pricing/rating
    /// fields; reuse the same seed to get a bit-identical catalog for the
    /// same input.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargefind::{Catalog, DEFAULT_SIMULATION_SEED};
    /// use serde_json::json;
    ///
    /// let raw = json!([{
    ///     "ID": 1881,
    ///     "AddressInfo": {
    ///         "Title": "Lulu Mall Parking",
    ///         "Town": "Kochi",
    ///         "Latitude": 10.0271,
    ///         "Longitude": 76.3082
    ///     },
    ///     "StatusType": { "IsOperational": true }
    /// }]);
    /// let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
    /// assert_eq!(catalog.len(), 1);
    /// assert!(catalog.records()[0].is_operational);
    /// ```
    pub fn from_raw(raw: &Value, seed: u64) -> Result<Self, NormalizeError> {
        let items = raw
            .as_array()
            .ok_or(NormalizeError::InvalidInputFormat {
                got: json_type_name(raw),
            })?;

        let mut simulated = SimulatedFields::new(seed);
        let mut records = Vec::with_capacity(items.len());
        let mut dropped = 0usize;

        for item in items {
            let Ok(poi) = RawPoi::deserialize(item) else {
                dropped += 1;
                continue;
            };
            // Null propagation: a record without title or coordinates is
            // excluded entirely, never patched with defaults.
            let Some(address) = poi.address_info else {
                dropped += 1;
                continue;
            };
            let (Some(latitude), Some(longitude), Some(title)) =
                (address.latitude, address.longitude, address.title)
            else {
                dropped += 1;
                continue;
            };

            records.push(StationRecord {
                id: poi.id,
                title,
                location: LatLon(latitude, longitude),
                town: address.town,
                price_per_kwh: simulated.next_price(),
                avg_rating: simulated.next_rating(),
                is_operational: extract_is_operational(poi.status_type.as_ref()),
                connector_types: extract_connector_types(poi.connections.as_ref()),
            });
        }

        if dropped > 0 {
            debug!(
                "normalized {} stations, dropped {} incomplete records",
                records.len(),
                dropped
            );
        }
        Ok(Catalog::new(records))
    }
}

/// `StatusType.IsOperational`, `false` on any missing or malformed shape.
fn extract_is_operational(status: Option<&Value>) -> bool {
    status
        .and_then(|s| s.get("IsOperational"))
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Distinct `Connections[*].ConnectionType.Title` values; empty set when
/// `Connections` is missing or not a list.
fn extract_connector_types(connections: Option<&Value>) -> BTreeSet<String> {
    let Some(entries) = connections.and_then(Value::as_array) else {
        return BTreeSet::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            entry
                .get("ConnectionType")
                .and_then(|ct| ct.get("Title"))
                .and_then(Value::as_str)
        })
        .map(str::to_owned)
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::error::NormalizeError;
    use crate::catalog::simulate::DEFAULT_SIMULATION_SEED;
    use crate::types::station::Catalog;
    use serde_json::{json, Value};

    fn poi(id: i64, title: &str, lat: f64, lon: f64) -> Value {
        json!({
            "ID": id,
            "AddressInfo": {
                "Title": title,
                "Town": "Kochi",
                "Latitude": lat,
                "Longitude": lon
            },
            "StatusType": { "IsOperational": true },
            "Connections": [
                { "ConnectionType": { "Title": "Type 2 (Socket Only)" } }
            ]
        })
    }

    #[test]
    fn keeps_complete_records_in_order() {
        let raw = json!([
            poi(1, "First", 10.0, 76.0),
            poi(2, "Second", 10.1, 76.1),
            poi(3, "Third", 10.2, 76.2),
        ]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[test]
    fn drops_records_missing_title_or_coordinates() {
        let raw = json!([
            poi(1, "Complete", 10.0, 76.0),
            { "ID": 2, "AddressInfo": { "Town": "Kochi", "Latitude": 10.0, "Longitude": 76.0 } },
            { "ID": 3, "AddressInfo": { "Title": "No latitude", "Longitude": 76.0 } },
            { "ID": 4, "AddressInfo": { "Title": "No longitude", "Latitude": 10.0 } },
            { "ID": 5 },
        ]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].title, "Complete");
    }

    #[test]
    fn malformed_record_is_skipped_not_fatal() {
        let raw = json!([
            "not an object",
            poi(1, "Kept", 10.0, 76.0),
            42,
        ]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn non_array_payload_is_invalid_input() {
        let err = Catalog::from_raw(&json!({"data": []}), DEFAULT_SIMULATION_SEED).unwrap_err();
        assert!(matches!(
            err,
            NormalizeError::InvalidInputFormat { got: "object" }
        ));
    }

    #[test]
    fn simulated_fields_stay_in_documented_ranges() {
        let pois: Vec<Value> = (0..200i64)
            .map(|i| poi(i, &format!("Station {i}"), 10.0 + i as f64 * 0.01, 76.0))
            .collect();
        let catalog = Catalog::from_raw(&json!(pois), DEFAULT_SIMULATION_SEED).unwrap();
        assert_eq!(catalog.len(), 200);
        for record in &catalog {
            assert!((10.0..=25.0).contains(&record.price_per_kwh));
            assert!((3.5..=5.0).contains(&record.avg_rating));
        }
    }

    #[test]
    fn same_seed_same_input_is_reproducible() {
        let raw = json!([poi(1, "A", 10.0, 76.0), poi(2, "B", 10.1, 76.1)]);
        let first = Catalog::from_raw(&raw, 42).unwrap();
        let second = Catalog::from_raw(&raw, 42).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_or_malformed_status_means_not_operational() {
        let raw = json!([
            { "ID": 1, "AddressInfo": { "Title": "No status", "Latitude": 10.0, "Longitude": 76.0 } },
            {
                "ID": 2,
                "AddressInfo": { "Title": "String status", "Latitude": 10.1, "Longitude": 76.1 },
                "StatusType": "operational"
            },
            {
                "ID": 3,
                "AddressInfo": { "Title": "Explicitly down", "Latitude": 10.2, "Longitude": 76.2 },
                "StatusType": { "IsOperational": false }
            },
        ]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.iter().all(|r| !r.is_operational));
    }

    #[test]
    fn connector_titles_are_deduplicated() {
        let raw = json!([{
            "ID": 1,
            "AddressInfo": { "Title": "Multi", "Latitude": 10.0, "Longitude": 76.0 },
            "Connections": [
                { "ConnectionType": { "Title": "CCS (Type 2)" } },
                { "ConnectionType": { "Title": "CCS (Type 2)" } },
                { "ConnectionType": { "Title": "CHAdeMO" } },
                { "ConnectionType": {} },
                {}
            ]
        }]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        let connectors = &catalog.records()[0].connector_types;
        assert_eq!(connectors.len(), 2);
        assert!(connectors.contains("CCS (Type 2)"));
        assert!(connectors.contains("CHAdeMO"));
    }

    #[test]
    fn non_list_connections_yield_empty_set() {
        let raw = json!([{
            "ID": 1,
            "AddressInfo": { "Title": "Odd shape", "Latitude": 10.0, "Longitude": 76.0 },
            "Connections": "Type 2"
        }]);
        let catalog = Catalog::from_raw(&raw, DEFAULT_SIMULATION_SEED).unwrap();
        assert!(catalog.records()[0].connector_types.is_empty());
    }

    #[test]
    fn empty_payload_yields_empty_catalog() {
        let catalog = Catalog::from_raw(&json!([]), DEFAULT_SIMULATION_SEED).unwrap();
        assert!(catalog.is_empty());
    }
}
