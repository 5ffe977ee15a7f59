//! Time-boxed in-memory cache of normalized catalogs.
//!
//! Keyed by the fetch parameters so different (country, max results)
//! combinations never collide. The catalog core stays cache-agnostic; only
//! the client layer owns one of these.

use crate::provider::client::FetchParams;
use crate::types::station::Catalog;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Reference TTL of the original tool: one hour.
pub(crate) const DEFAULT_TTL_SECS: i64 = 3600;

struct CacheEntry {
    catalog: Catalog,
    fetched_at: DateTime<Utc>,
}

pub(crate) struct CatalogCache {
    ttl: Duration,
    entries: Mutex<HashMap<FetchParams, CacheEntry>>,
}

impl CatalogCache {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached catalog for `params` when one exists and is still
    /// fresh. Stale entries are evicted on lookup.
    pub(crate) async fn get(&self, params: &FetchParams) -> Option<Catalog> {
        let mut entries = self.entries.lock().await;
        match entries.get(params) {
            Some(entry) if Utc::now() - entry.fetched_at <= self.ttl => {
                debug!(
                    "catalog cache hit for {} ({} stations)",
                    params.country_code,
                    entry.catalog.len()
                );
                Some(entry.catalog.clone())
            }
            Some(_) => {
                debug!("catalog cache entry for {} expired", params.country_code);
                entries.remove(params);
                None
            }
            None => None,
        }
    }

    pub(crate) async fn insert(&self, params: FetchParams, catalog: Catalog) {
        self.insert_at(params, catalog, Utc::now()).await;
    }

    async fn insert_at(&self, params: FetchParams, catalog: Catalog, fetched_at: DateTime<Utc>) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            params,
            CacheEntry {
                catalog,
                fetched_at,
            },
        );
    }
}
