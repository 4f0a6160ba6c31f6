use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

/// Fields of an exported result table, in column order.
pub const RESULT_RECORD_FIELDS: [&str; 6] =
    ["name", "address", "latitude", "longitude", "status", "provider"];

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct GeocodeRequest {
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct ResultRecord {
    pub name      : String,
    pub address   : String,
    pub latitude  : Option<f64>,
    pub longitude : Option<f64>,
    pub status    : String,
    pub provider  : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Services {
    pub default_service: String,
    pub services: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    pub error: String,
}
