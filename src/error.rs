use crate::catalog::error::NormalizeError;
use crate::provider::error::FetchCatalogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChargeFindError {
    #[error(transparent)]
    FetchCatalog(#[from] FetchCatalogError),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error("No station found in country {country_code} near ({lat}, {lon})")]
    NoStationFound {
        country_code: String,
        lat: f64,
        lon: f64,
    },
}
