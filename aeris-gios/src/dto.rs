//! Wire DTOs for the GIOS pjp-api v1 REST endpoints.
//!
//! The API keys its JSON with Polish display strings; renames keep the Rust
//! side readable. Coordinates arrive as strings and measurement timestamps
//! use the local `"%Y-%m-%d %H:%M:%S"` format.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct StationList {
    #[serde(rename = "Lista stacji pomiarowych", default)]
    pub stations: Vec<GiosStation>,
}

#[derive(Debug, Deserialize)]
pub struct GiosStation {
    #[serde(rename = "Identyfikator stacji")]
    pub id: i64,
    #[serde(rename = "Nazwa stacji")]
    pub name: String,
    #[serde(rename = "WGS84 φ N")]
    pub lat: Option<String>,
    #[serde(rename = "WGS84 λ E")]
    pub lon: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SensorList {
    #[serde(rename = "Lista stanowisk pomiarowych dla podanej stacji", default)]
    pub sensors: Vec<GiosSensor>,
}

#[derive(Debug, Deserialize)]
pub struct GiosSensor {
    #[serde(rename = "Identyfikator stanowiska")]
    pub id: i64,
    #[serde(rename = "Wskaźnik")]
    pub indicator: Option<String>,
    #[serde(rename = "Wskaźnik - kod")]
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DataList {
    #[serde(rename = "Lista danych pomiarowych", default)]
    pub readings: Vec<GiosReading>,
}

#[derive(Debug, Deserialize)]
pub struct GiosReading {
    #[serde(rename = "Data")]
    pub timestamp: Option<String>,
    #[serde(rename = "Wartość")]
    pub value: Option<f64>,
}
