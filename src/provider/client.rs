//! HTTP client for the Open Charge Map POI endpoint.
//!
//! Fetching stays separate from normalization: this module only moves the
//! raw JSON payload across the wire, so the catalog core never does I/O.

use crate::provider::error::FetchCatalogError;
use log::{debug, info};
use reqwest::Client;
use serde_json::Value;

const API_URL: &str = "https://api.openchargemap.io/v3/poi";

/// Parameters of one provider fetch. Also serves as the catalog cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchParams {
    /// ISO 3166-1 alpha-2 country code, e.g. "IN" or "NL".
    pub country_code: String,
    /// Maximum number of POI records the provider should return.
    pub max_results: u32,
}

#[derive(Debug, Clone)]
pub(crate) struct ProviderClient {
    http: Client,
    api_key: Option<String>,
}

impl ProviderClient {
    pub(crate) fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_key,
        }
    }

    /// Fetches the raw POI payload for `params`. The result is untyped JSON;
    /// normalization is the caller's next step.
    pub(crate) async fn fetch_raw(&self, params: &FetchParams) -> Result<Value, FetchCatalogError> {
        let mut query: Vec<(&str, String)> = vec![
            ("output", "json".to_string()),
            ("countrycode", params.country_code.clone()),
            ("maxresults", params.max_results.to_string()),
            ("compact", "true".to_string()),
            ("verbose", "false".to_string()),
        ];
        if let Some(key) = &self.api_key {
            query.push(("key", key.clone()));
        }

        debug!(
            "fetching up to {} stations for country {}",
            params.max_results, params.country_code
        );
        let response = self
            .http
            .get(API_URL)
            .query(&query)
            .send()
            .await
            .map_err(|e| FetchCatalogError::NetworkRequest(API_URL.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                if let Some(status) = e.status() {
                    return Err(FetchCatalogError::HttpStatus {
                        url: API_URL.to_string(),
                        status,
                        source: e,
                    });
                } else {
                    return Err(FetchCatalogError::NetworkRequest(API_URL.to_string(), e));
                }
            }
        };

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchCatalogError::NetworkRequest(API_URL.to_string(), e))?;
        let payload = serde_json::from_slice::<Value>(&bytes)?;
        info!(
            "downloaded {} bytes of station data for {}",
            bytes.len(),
            params.country_code
        );
        Ok(payload)
    }
}
