//! aeris-openaq
//!
//! Source connector for the OpenAQ v3 API (api.openaq.org). Stations come
//! from the country-scoped locations listing with their sensors embedded;
//! measurements are fetched per sensor. The API requires an `X-API-Key`
//! header on every request.
#![warn(missing_docs)]

mod dto;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use aeris_core::fetch::{HttpTransport, ResilientFetcher, Transport};
use aeris_core::measurements::filter_window;
use aeris_core::source::AirQualitySource;
use aeris_types::{
    AerisError, FetchConfig, Measurement, MeasurementQuery, Parameter, SourceKey, Station,
};

const BASE_URL: &str = "https://api.openaq.org/v3";
const COUNTRY: &str = "PL";
const PAGE_LIMIT: u32 = 1000;

/// OpenAQ v3 source connector.
pub struct OpenAqSource {
    fetcher: ResilientFetcher,
    base_url: String,
}

impl OpenAqSource {
    /// Static source key for orchestrator registration.
    pub const KEY: SourceKey = SourceKey::new("aeris-openaq");

    /// Build against the public OpenAQ API. The key is attached to every
    /// request via a default header.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the key is empty or not a valid header
    /// value, or when the HTTP client cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self, AerisError> {
        if api_key.is_empty() {
            return Err(AerisError::InvalidArg("OpenAQ API key is required".into()));
        }
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(api_key)
            .map_err(|e| AerisError::InvalidArg(format!("invalid API key: {e}")))?;
        headers.insert("X-API-Key", value);
        let transport = HttpTransport::with_default_headers(headers)?;
        Ok(Self::with_transport(Arc::new(transport), FetchConfig::default()))
    }

    /// Build over an injected transport; used by tests.
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

    fn map_sensor(sensor: dto::Sensor) -> Parameter {
        let parameter = sensor.parameter;
        let (name, unit, display_name) = match parameter {
            Some(p) => (p.name, p.units, p.display_name),
            None => (None, None, None),
        };
        Parameter {
            raw_id: sensor.id.to_string(),
            name: name.or(sensor.name),
            unit,
            description: display_name,
            source: Self::KEY,
        }
    }

    async fn location(&self, station_id: &str) -> Result<Option<dto::Location>, AerisError> {
        let url = format!("{}/locations/{station_id}", self.base_url);
        let envelope: dto::Envelope<dto::Location> = self.fetcher.fetch_json(&url).await?;
        Ok(envelope.results.into_iter().next())
    }
}

#[async_trait]
impl AirQualitySource for OpenAqSource {
    fn key(&self) -> SourceKey {
        Self::KEY
    }

    async fn stations(&self) -> Result<Vec<Station>, AerisError> {
        let url = format!(
            "{}/locations?iso={COUNTRY}&limit={PAGE_LIMIT}",
            self.base_url
        );
        let envelope: dto::Envelope<dto::Location> = self.fetcher.fetch_json(&url).await?;
        debug!(count = envelope.results.len(), "fetched OpenAQ locations");

        Ok(envelope
            .results
            .into_iter()
            .filter_map(|loc| {
                let coords = loc.coordinates?;
                let latitude = coords.latitude?;
                let longitude = coords.longitude?;
                Some(Station {
                    id: loc.id.to_string(),
                    name: loc.name.unwrap_or_default(),
                    latitude,
                    longitude,
                    source: Self::KEY,
                    parameters: loc.sensors.into_iter().map(Self::map_sensor).collect(),
                })
            })
            .collect())
    }

    async fn parameters(&self, station_id: &str) -> Result<Vec<Parameter>, AerisError> {
        let Some(location) = self.location(station_id).await? else {
            return Ok(vec![]);
        };
        Ok(location.sensors.into_iter().map(Self::map_sensor).collect())
    }

    async fn measurements(
        &self,
        station_id: &str,
        parameter_id: &str,
        query: &MeasurementQuery,
    ) -> Result<Vec<Measurement>, AerisError> {
        let url = format!(
            "{}/sensors/{parameter_id}/measurements?limit={}",
            self.base_url, query.limit
        );
        let envelope: dto::Envelope<dto::MeasurementRow> = self.fetcher.fetch_json(&url).await?;

        let mapped: Vec<Measurement> = envelope
            .results
            .into_iter()
            .filter_map(|row| {
                let value = row.value?;
                let utc = row.period?.datetime_from?.utc?;
                let timestamp = DateTime::parse_from_rfc3339(&utc).ok()?.with_timezone(&Utc);
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
