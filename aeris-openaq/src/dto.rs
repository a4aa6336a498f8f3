//! Wire DTOs for the OpenAQ v3 API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: Option<String>,
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Deserialize)]
pub struct Coordinates {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct Sensor {
    pub id: i64,
    pub name: Option<String>,
    pub parameter: Option<SensorParameter>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorParameter {
    pub name: Option<String>,
    pub units: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MeasurementRow {
    pub value: Option<f64>,
    pub period: Option<Period>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    pub datetime_from: Option<DatetimeRef>,
}

#[derive(Debug, Deserialize)]
pub struct DatetimeRef {
    pub utc: Option<String>,
}
