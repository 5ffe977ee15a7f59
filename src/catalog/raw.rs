//! Serde view of the raw Open Charge Map POI schema.
//!
//! Only the fields the normalizer consumes are modeled. `StatusType` and
//! `Connections` are kept as loose [`Value`]s because the provider is not
//! strict about their shape; they get decoded defensively in
//! [`normalize`](super::normalize) with per-field fallbacks instead of
//! failing the whole record.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawPoi {
    #[serde(rename = "ID", default)]
    pub id: i64,
    pub address_info: Option<RawAddressInfo>,
    pub status_type: Option<Value>,
    pub connections: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RawAddressInfo {
    pub title: Option<String>,
    pub town: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
