//! Wire DTOs for the Open-Meteo air-quality API.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AirQualityResponse {
    pub hourly: Option<Hourly>,
}

/// Hourly arrays: one shared time axis plus one value array per requested
/// variable. Value slots are `null` where the model has no data.
#[derive(Debug, Deserialize)]
pub struct Hourly {
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub pm10: Vec<Option<f64>>,
    #[serde(rename = "pm2_5", default)]
    pub pm2_5: Vec<Option<f64>>,
    #[serde(rename = "carbon_monoxide", default)]
    pub carbon_monoxide: Vec<Option<f64>>,
    #[serde(rename = "nitrogen_dioxide", default)]
    pub nitrogen_dioxide: Vec<Option<f64>>,
    #[serde(rename = "sulphur_dioxide", default)]
    pub sulphur_dioxide: Vec<Option<f64>>,
    #[serde(default)]
    pub ozone: Vec<Option<f64>>,
}

impl Hourly {
    pub fn values_for(&self, variable: &str) -> Option<&[Option<f64>]> {
        match variable {
            "pm10" => Some(&self.pm10),
            "pm2_5" => Some(&self.pm2_5),
            "carbon_monoxide" => Some(&self.carbon_monoxide),
            "nitrogen_dioxide" => Some(&self.nitrogen_dioxide),
            "sulphur_dioxide" => Some(&self.sulphur_dioxide),
            "ozone" => Some(&self.ozone),
            _ => None,
        }
    }
}
