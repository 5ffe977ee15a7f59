//! This module provides the main entry point for querying the charging
//! station directory. It fetches and caches station catalogs per country and
//! resolves the nearest station to a user-supplied location, optionally after
//! filtering.

use crate::catalog::simulate::DEFAULT_SIMULATION_SEED;
use crate::error::ChargeFindError;
use crate::provider::cache::{CatalogCache, DEFAULT_TTL_SECS};
use crate::provider::client::{FetchParams, ProviderClient};
use crate::types::criteria::FilterCriteria;
use crate::types::station::{Catalog, LatLon, StationRecord};
use bon::bon;
use chrono::Duration;

const DEFAULT_MAX_RESULTS: u32 = 500;

/// The main client for the charging station directory.
///
/// Handles fetching raw station data from Open Charge Map, normalizing it
/// into a [`Catalog`], and caching the result per (country, max results)
/// pair for one hour by default. The query operations themselves
/// ([`Catalog::filter`], [`Catalog::nearest`]) are pure and can also be used
/// directly on any catalog without a client.
///
/// # Examples
///
/// ```rust,no_run
/// # use chargefind::{ChargeFind, ChargeFindError, LatLon};
/// # async fn run() -> Result<(), ChargeFindError> {
/// let client = ChargeFind::builder().build();
/// let catalog = client.stations().country_code("IN").call().await?;
/// let (station, distance_km) = client
///     .nearest_station()
///     .country_code("IN")
///     .location(LatLon(9.9312, 76.2673))
///     .call()
///     .await?;
/// println!("{} is {:.1} km away", station.title, distance_km);
/// # Ok(())
/// # }
/// ```
pub struct ChargeFind {
    provider: ProviderClient,
    cache: CatalogCache,
    simulation_seed: u64,
}

impl Default for ChargeFind {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[bon]
impl ChargeFind {
    /// Creates a new client.
    ///
    /// All knobs are optional:
    ///
    /// * `.api_key(String)`: Open Charge Map API key, sent as the `key`
    ///   query parameter when set.
    /// * `.cache_ttl_secs(i64)`: catalog cache lifetime. Defaults to 3600.
    /// * `.simulation_seed(u64)`: seed for the simulated pricing/rating
    ///   fields. Defaults to [`DEFAULT_SIMULATION_SEED`].
    #[builder]
    pub fn new(
        api_key: Option<String>,
        cache_ttl_secs: Option<i64>,
        simulation_seed: Option<u64>,
    ) -> Self {
        let ttl = Duration::seconds(cache_ttl_secs.unwrap_or(DEFAULT_TTL_SECS));
        Self {
            provider: ProviderClient::new(api_key),
            cache: CatalogCache::new(ttl),
            simulation_seed: simulation_seed.unwrap_or(DEFAULT_SIMULATION_SEED),
        }
    }

    /// Fetches the normalized station catalog for a country.
    ///
    /// Serves from the in-memory cache when a fresh entry exists for the
    /// same (country, max results) pair; otherwise fetches from the
    /// provider, normalizes, and caches the result.
    ///
    /// # Arguments
    ///
    /// * `.country_code(&str)`: **Required.** ISO country code, e.g. "IN".
    /// * `.max_results(u32)`: Optional. Record cap passed to the provider.
    ///   Defaults to 500.
    ///
    /// # Errors
    ///
    /// Returns [`ChargeFindError::FetchCatalog`] variants on network or HTTP
    /// failures and [`ChargeFindError::Normalize`] when the provider payload
    /// is not an array of records.
    #[builder]
    pub async fn stations(
        &self,
        country_code: &str,
        max_results: Option<u32>,
    ) -> Result<Catalog, ChargeFindError> {
        let params = FetchParams {
            country_code: country_code.to_string(),
            max_results: max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        };
        self.catalog_for(params).await
    }

    /// Finds the station nearest to `location`, optionally after filtering.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The user location to measure
    ///   from; supplied per query, never tracked by the client.
    /// * `.country_code(&str)`: **Required.** Country whose catalog to search.
    /// * `.max_results(u32)`: Optional. Same as on
    ///   [`stations`](ChargeFind::stations).
    /// * `.criteria(FilterCriteria)`: Optional. Applied before the nearest
    ///   scan, so the result is the closest *matching* station.
    ///
    /// # Errors
    ///
    /// In addition to the fetch/normalize errors of
    /// [`stations`](ChargeFind::stations), returns
    /// [`ChargeFindError::NoStationFound`] when the (filtered) catalog is
    /// empty.
    #[builder]
    pub async fn nearest_station(
        &self,
        location: LatLon,
        country_code: &str,
        max_results: Option<u32>,
        criteria: Option<FilterCriteria>,
    ) -> Result<(StationRecord, f64), ChargeFindError> {
        let params = FetchParams {
            country_code: country_code.to_string(),
            max_results: max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        };
        let catalog = self.catalog_for(params).await?;
        resolve_nearest(&catalog, location, criteria.as_ref(), country_code)
    }

    async fn catalog_for(&self, params: FetchParams) -> Result<Catalog, ChargeFindError> {
        if let Some(cached) = self.cache.get(&params).await {
            return Ok(cached);
        }
        let raw = self.provider.fetch_raw(&params).await?;
        let catalog = Catalog::from_raw(&raw, self.simulation_seed)?;
        self.cache.insert(params, catalog.clone()).await;
        Ok(catalog)
    }
}

/// Maps the core's `(None, +inf)` sentinel to a client-level error.
fn resolve_nearest(
    catalog: &Catalog,
    location: LatLon,
    criteria: Option<&FilterCriteria>,
    country_code: &str,
) -> Result<(StationRecord, f64), ChargeFindError> {
    let filtered;
    let searched = match criteria {
        Some(criteria) if !criteria.is_unconstrained() => {
            filtered = catalog.filter(criteria);
            &filtered
        }
        _ => catalog,
    };
    match searched.nearest(location) {
        (Some(record), distance_km) => Ok((record.clone(), distance_km)),
        (None, _) => Err(ChargeFindError::NoStationFound {
            country_code: country_code.to_string(),
            lat: location.0,
            lon: location.1,
        }),
    }
}
