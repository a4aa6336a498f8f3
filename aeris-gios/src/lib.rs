//! aeris-gios
//!
//! Source connector for the GIOS pjp-api (api.gios.gov.pl). Exposes
//! stations, sensors as parameters, and measurements with the two-tier
//! live-then-archival endpoint fallback the API requires for manual
//! stations.
#![warn(missing_docs)]

mod dto;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::{debug, warn};

use aeris_core::fetch::{HttpTransport, ResilientFetcher, Transport};
use aeris_core::measurements::filter_window;
use aeris_core::source::AirQualitySource;
use aeris_types::{
    AerisError, FetchConfig, Measurement, MeasurementQuery, Parameter, SourceKey, Station,
};

const BASE_URL: &str = "https://api.gios.gov.pl/pjp-api/v1/rest";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// GIOS source connector.
pub struct GiosSource {
    fetcher: ResilientFetcher,
    base_url: String,
}

impl GiosSource {
    /// Static source key for orchestrator registration.
    pub const KEY: SourceKey = SourceKey::new("aeris-gios");

    /// Build against the public GIOS API with default fetch settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(Arc::new(HttpTransport::new()), FetchConfig::default())
    }

    /// Build over an injected transport; used by tests and by callers who
    /// tune the rate gate.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, cfg: FetchConfig) -> Self {
        Self {
            fetcher: ResilientFetcher::new(transport, cfg),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (wire-level tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }

    fn map_readings(
        readings: Vec<dto::GiosReading>,
        station_id: &str,
        parameter_id: &str,
    ) -> Vec<Measurement> {
        readings
            .into_iter()
            .filter_map(|r| {
                let value = r.value?;
                let timestamp = Self::parse_timestamp(r.timestamp.as_deref()?)?;
                Some(Measurement {
                    station_id: station_id.to_string(),
                    parameter_id: parameter_id.to_string(),
                    value,
                    timestamp,
                })
            })
            .collect()
    }

    /// Live data first; an empty but well-formed payload means the station
    /// reports through the archival endpoint (manual stations), so the same
    /// logical request is retried there. Only this connector knows that
    /// domain rule, which is why the fallback is not in the fetcher.
    async fn fetch_readings(&self, parameter_id: &str) -> Result<Vec<dto::GiosReading>, AerisError> {
        let live_url = format!("{}/data/getData/{parameter_id}", self.base_url);
        match self.fetcher.fetch_json::<dto::DataList>(&live_url).await {
            Ok(data) if !data.readings.is_empty() => return Ok(data.readings),
            Ok(_) => debug!(parameter_id, "no live data, trying archive"),
            Err(e) => warn!(parameter_id, error = %e, "live endpoint failed, trying archive"),
        }

        let archive_url = format!(
            "{}/archivalData/getDataBySensor/{parameter_id}?dayNumber=1",
            self.base_url
        );
        let data = self.fetcher.fetch_json::<dto::DataList>(&archive_url).await?;
        Ok(data.readings)
    }
}

impl Default for GiosSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AirQualitySource for GiosSource {
    fn key(&self) -> SourceKey {
        Self::KEY
    }

    async fn stations(&self) -> Result<Vec<Station>, AerisError> {
        let url = format!("{}/station/findAll", self.base_url);
        let list: dto::StationList = self.fetcher.fetch_json(&url).await?;
        debug!(count = list.stations.len(), "fetched GIOS stations");

        Ok(list
            .stations
            .into_iter()
            .filter_map(|s| {
                let latitude = s.lat.as_deref()?.trim().parse::<f64>().ok()?;
                let longitude = s.lon.as_deref()?.trim().parse::<f64>().ok()?;
                Some(Station {
                    id: s.id.to_string(),
                    name: s.name,
                    latitude,
                    longitude,
                    source: Self::KEY,
                    parameters: vec![],
                })
            })
            .collect())
    }

    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError> {
        let url = format!("{}/station/sensors/{station_id}", self.base_url);
        let list: dto::SensorList = self.fetcher.fetch_json(&url).await?;
        debug!(station_id, count = list.sensors.len(), "fetched GIOS sensors");

        Ok(list
            .sensors
            .into_iter()
            .map(|s| Parameter {
                raw_id: s.id.to_string(),
                name: s.indicator,
                unit: None,
                // The indicator code ("PM10", "NO2", ...) is the most
                // reliable normalization input GIOS offers.
                description: s.code,
                source: Self::KEY,
            })
            .collect())
    }

    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError> {
        let readings = self.fetch_readings(parameter_id).await?;
        let mapped = Self::map_readings(readings, station_id, parameter_id);
        Ok(filter_window(mapped, Utc::now(), query))
    }
}
