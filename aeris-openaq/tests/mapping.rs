use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use aeris_core::fetch::Transport;
use aeris_core::source::AirQualitySource;
use aeris_openaq::OpenAqSource;
use aeris_types::{AerisError, FetchConfig, MeasurementQuery};

struct OneShot(String);

#[async_trait]
impl Transport for OneShot {
    async fn get(&self, _url: &str) -> Result<String, AerisError> {
        Ok(self.0.clone())
    }
}

fn source_with(body: &str) -> OpenAqSource {
    let cfg = FetchConfig {
        min_interval: std::time::Duration::from_millis(1),
        max_retries: 1,
        retry_delay: std::time::Duration::from_millis(1),
    };
    OpenAqSource::with_transport(Arc::new(OneShot(body.to_string())), cfg)
}

#[tokio::test]
async fn locations_map_to_stations_with_embedded_sensors() {
    let body = r#"{
        "results": [
            {
                "id": 3056,
                "name": "Warszawa-Komunikacyjna",
                "coordinates": {"latitude": 52.219, "longitude": 21.004},
                "sensors": [
                    {"id": 9001, "name": "pm25 sensor",
                     "parameter": {"name": "pm25", "units": "µg/m³", "displayName": "PM2.5"}},
                    {"id": 9002, "name": "no2 sensor",
                     "parameter": {"name": "no2", "units": "µg/m³", "displayName": "NO₂"}}
                ]
            },
            {
                "id": 3057,
                "name": "No coordinates",
                "coordinates": null,
                "sensors": []
            }
        ]
    }"#;

    let stations = source_with(body).stations().await.unwrap();
    assert_eq!(stations.len(), 1);
    let station = &stations[0];
    assert_eq!(station.id, "3056");
    assert_eq!(station.source, OpenAqSource::KEY);
    assert_eq!(station.parameters.len(), 2);
    assert_eq!(station.parameters[0].raw_id, "9001");
    assert_eq!(station.parameters[0].name.as_deref(), Some("pm25"));
    assert_eq!(station.parameters[0].unit.as_deref(), Some("µg/m³"));
    assert_eq!(station.parameters[0].description.as_deref(), Some("PM2.5"));
}

#[tokio::test]
async fn measurements_read_value_and_period_start() {
    let recent = (Utc::now() - Duration::hours(2)).to_rfc3339();
    let stale = (Utc::now() - Duration::days(45)).to_rfc3339();
    let body = format!(
        r#"{{
        "results": [
            {{"value": 18.2, "period": {{"datetimeFrom": {{"utc": "{recent}"}}}}}},
            {{"value": null, "period": {{"datetimeFrom": {{"utc": "{recent}"}}}}}},
            {{"value": 7.0, "period": null}},
            {{"value": 3.3, "period": {{"datetimeFrom": {{"utc": "{stale}"}}}}}}
        ]
    }}"#
    );

    let out = source_with(&body)
        .measurements("3056", "9001", &MeasurementQuery::default())
        .await
        .unwrap();
    // Null value and missing period are dropped during mapping; the stale
    // sample falls outside the 30-day window.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, 18.2);
    assert_eq!(out[0].parameter_id, "9001");
}

#[tokio::test]
async fn empty_api_key_is_rejected() {
    assert!(matches!(
        OpenAqSource::new(""),
        Err(AerisError::InvalidArg(_))
    ));
}
