//! aeris-openmeteo
//!
//! Source connector for the Open-Meteo air-quality API. Open-Meteo serves a
//! reanalysis grid rather than physical stations, so the connector is
//! configured with a static list of grid points (by default one per regional
//! capital) and synthesizes one station per point with a fixed parameter
//! set. Measurements come from the hourly arrays: the shared time axis
//! zipped with the requested variable's values, `null` slots dropped.
#![warn(missing_docs)]

mod dto;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::debug;

use aeris_core::fetch::{HttpTransport, ResilientFetcher, Transport};
use aeris_core::measurements::filter_window;
use aeris_core::source::AirQualitySource;
use aeris_types::{
    AerisError, FetchConfig, Measurement, MeasurementQuery, Parameter, SourceKey, Station,
};

const BASE_URL: &str = "https://air-quality-api.open-meteo.com";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// The fixed variable set requested from the API: (API variable,
/// display name, unit). The API variable doubles as the parameter raw id.
const VARIABLES: &[(&str, &str, &str)] = &[
    ("pm10", "PM10", "µg/m³"),
    ("pm2_5", "PM2.5", "µg/m³"),
    ("carbon_monoxide", "Carbon monoxide CO", "µg/m³"),
    ("nitrogen_dioxide", "Nitrogen dioxide NO2", "µg/m³"),
    ("sulphur_dioxide", "Sulphur dioxide SO2", "µg/m³"),
    ("ozone", "Ozone O3", "µg/m³"),
];

/// A named grid point the connector exposes as a station.
#[derive(Debug, Clone)]
pub struct GridPoint {
    /// Stable identifier used as the station id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// Default grid: one point per voivodeship capital.
#[must_use]
pub fn default_grid() -> Vec<GridPoint> {
    vec![
        GridPoint { id: "om-wroclaw", name: "Wrocław", latitude: 51.108, longitude: 17.033 },
        GridPoint { id: "om-bydgoszcz", name: "Bydgoszcz", latitude: 53.123, longitude: 18.008 },
        GridPoint { id: "om-lublin", name: "Lublin", latitude: 51.246, longitude: 22.568 },
        GridPoint { id: "om-gorzow", name: "Gorzów Wielkopolski", latitude: 52.731, longitude: 15.241 },
        GridPoint { id: "om-lodz", name: "Łódź", latitude: 51.759, longitude: 19.456 },
        GridPoint { id: "om-krakow", name: "Kraków", latitude: 50.064, longitude: 19.945 },
        GridPoint { id: "om-warszawa", name: "Warszawa", latitude: 52.23, longitude: 21.011 },
        GridPoint { id: "om-opole", name: "Opole", latitude: 50.675, longitude: 17.921 },
        GridPoint { id: "om-rzeszow", name: "Rzeszów", latitude: 50.041, longitude: 21.999 },
        GridPoint { id: "om-bialystok", name: "Białystok", latitude: 53.132, longitude: 23.159 },
        GridPoint { id: "om-gdansk", name: "Gdańsk", latitude: 54.352, longitude: 18.646 },
        GridPoint { id: "om-katowice", name: "Katowice", latitude: 50.264, longitude: 19.023 },
        GridPoint { id: "om-kielce", name: "Kielce", latitude: 50.866, longitude: 20.628 },
        GridPoint { id: "om-olsztyn", name: "Olsztyn", latitude: 53.778, longitude: 20.48 },
        GridPoint { id: "om-poznan", name: "Poznań", latitude: 52.406, longitude: 16.925 },
        GridPoint { id: "om-szczecin", name: "Szczecin", latitude: 53.428, longitude: 14.553 },
    ]
}

/// Open-Meteo source connector.
pub struct OpenMeteoSource {
    fetcher: ResilientFetcher,
    base_url: String,
    grid: Vec<GridPoint>,
}

impl OpenMeteoSource {
    /// Static source key for orchestrator registration.
    pub const KEY: SourceKey = SourceKey::new("aeris-openmeteo");

    /// Build against the public API with the default capital-city grid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(
            Arc::new(HttpTransport::new()),
            FetchConfig::default(),
            default_grid(),
        )
    }

    /// Build over an injected transport and grid; used by tests.
    #[must_use]
    pub fn with_transport(
        transport: Arc<dyn Transport>,
        cfg: FetchConfig,
        grid: Vec<GridPoint>,
    ) -> Self {
        Self {
            fetcher: ResilientFetcher::new(transport, cfg),
            base_url: BASE_URL.to_string(),
            grid,
        }
    }

    /// Override the API base URL (wire-level tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn point(&self, station_id: &str) -> Option<&GridPoint> {
        self.grid.iter().find(|p| p.id == station_id)
    }

    fn fixed_parameters() -> Vec<Parameter> {
        VARIABLES
            .iter()
            .map(|(raw_id, display, unit)| Parameter {
                raw_id: (*raw_id).to_string(),
                name: Some((*raw_id).to_string()),
                unit: Some((*unit).to_string()),
                description: Some((*display).to_string()),
                source: Self::KEY,
            })
            .collect()
    }
}

impl Default for OpenMeteoSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirQualitySource for OpenMeteoSource {
    fn key(&self) -> SourceKey {
        Self::KEY
    }

    async fn stations(&self) -> Result<Vec<Station>, AerisError> {
        Ok(self
            .grid
            .iter()
            .map(|p| Station {
                id: p.id.to_string(),
                name: p.name.to_string(),
                latitude: p.latitude,
                longitude: p.longitude,
                source: Self::KEY,
                parameters: Self::fixed_parameters(),
            })
            .collect())
    }

    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError> {
        if self.point(station_id).is_none() {
            return Ok(vec![]);
        }
        Ok(Self::fixed_parameters())
    }

    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError> {
        let Some(point) = self.point(station_id) else {
            return Ok(vec![]);
        };
        if VARIABLES.iter().all(|(v, _, _)| *v != parameter_id) {
            return Ok(vec![]);
        }

        let url = format!(
            "{}/v1/air-quality?latitude={}&longitude={}&hourly={parameter_id}",
            self.base_url, point.latitude, point.longitude
        );
        let response: dto::AirQualityResponse = self.fetcher.fetch_json(&url).await?;

        let Some(hourly) = response.hourly else {
            return Ok(vec![]);
        };
        let Some(values) = hourly.values_for(parameter_id) else {
            return Ok(vec![]);
        };
        debug!(station_id, parameter_id, slots = values.len(), "fetched hourly series");

        let mapped: Vec<Measurement> = hourly
            .time
            .iter()
            .zip(values.iter())
            .filter_map(|(ts, value)| {
                let value = (*value)?;
                let timestamp = NaiveDateTime::parse_from_str(ts, TIME_FORMAT)
                    .ok()?
                    .and_utc();
                Some(Measurement {
                    station_id: station_id.to_string(),
                    parameter_id: parameter_id.to_string(),
                    value,
                    timestamp,
                })
            })
            .collect();

        Ok(filter_window(mapped, Utc::now(), query))
    }
}
