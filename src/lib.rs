mod catalog;
mod chargefind;
mod error;
mod provider;
mod query;
mod types;

pub use chargefind::*;
pub use error::ChargeFindError;

pub use types::criteria::{FilterCriteria, PriceRange};
pub use types::station::{Catalog, LatLon, StationRecord};

pub use catalog::error::NormalizeError;
pub use catalog::simulate::DEFAULT_SIMULATION_SEED;
pub use provider::client::FetchParams;
pub use provider::error::FetchCatalogError;
pub use query::nearest::distance_km;
