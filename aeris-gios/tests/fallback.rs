use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use aeris_core::fetch::Transport;
use aeris_core::source::AirQualitySource;
use aeris_gios::GiosSource;
use aeris_types::{AerisError, FetchConfig, MeasurementQuery};

/// Routes fetches by URL substring; logs every requested URL.
struct RoutedTransport {
    routes: Vec<(&'static str, Result<String, &'static str>)>,
    log: Mutex<Vec<String>>,
}

impl RoutedTransport {
    fn new(routes: Vec<(&'static str, Result<String, &'static str>)>) -> Arc<Self> {
        Arc::new(Self {
            routes,
            log: Mutex::new(vec![]),
        })
    }

    async fn requested(&self) -> Vec<String> {
        self.log.lock().await.clone()
    }
}

#[async_trait]
impl Transport for RoutedTransport {
    async fn get(&self, url: &str) -> Result<String, AerisError> {
        self.log.lock().await.push(url.to_string());
        for (needle, outcome) in &self.routes {
            if url.contains(needle) {
                return outcome
                    .clone()
                    .map_err(|msg| AerisError::transport(url, msg));
            }
        }
        Err(AerisError::transport(url, "unrouted"))
    }
}

fn fast_cfg() -> FetchConfig {
    FetchConfig {
        min_interval: std::time::Duration::from_millis(1),
        max_retries: 1,
        retry_delay: std::time::Duration::from_millis(1),
    }
}

fn readings_body(values: &[f64]) -> String {
    let now = Utc::now();
    let entries: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let ts = (now - Duration::hours(i as i64 + 1)).format("%Y-%m-%d %H:%M:%S");
            format!("{{\"Data\": \"{ts}\", \"Wartość\": {v}}}")
        })
        .collect();
    format!("{{\"Lista danych pomiarowych\": [{}]}}", entries.join(","))
}

#[tokio::test]
async fn empty_live_payload_falls_back_to_archive() {
    let transport = RoutedTransport::new(vec![
        ("/data/getData/", Ok("{\"Lista danych pomiarowych\": []}".into())),
        ("/archivalData/getDataBySensor/", Ok(readings_body(&[12.0, 14.0, 9.0]))),
    ]);
    let source = GiosSource::with_transport(transport.clone(), fast_cfg());

    let out = source
        .measurements("101", "642", &MeasurementQuery::default())
        .await
        .unwrap();
    assert_eq!(out.len(), 3);

    let urls = transport.requested().await;
    assert!(urls[0].contains("/data/getData/642"));
    assert!(urls[1].contains("/archivalData/getDataBySensor/642"));
    assert!(urls[1].contains("dayNumber=1"));
}

#[tokio::test]
async fn live_data_skips_the_archive_entirely() {
    let transport = RoutedTransport::new(vec![
        ("/data/getData/", Ok(readings_body(&[5.0]))),
        ("/archivalData/", Ok(readings_body(&[99.0]))),
    ]);
    let source = GiosSource::with_transport(transport.clone(), fast_cfg());

    let out = source
        .measurements("101", "642", &MeasurementQuery::default())
        .await
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, 5.0);

    let urls = transport.requested().await;
    assert_eq!(urls.len(), 1);
}

#[tokio::test]
async fn live_transport_failure_still_tries_archive() {
    let transport = RoutedTransport::new(vec![
        ("/data/getData/", Err("503 service unavailable")),
        ("/archivalData/", Ok(readings_body(&[7.5]))),
    ]);
    let source = GiosSource::with_transport(transport, fast_cfg());

    let out = source
        .measurements("101", "642", &MeasurementQuery::default())
        .await
        .unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, 7.5);
}

#[tokio::test]
async fn both_tiers_failing_propagates_the_error() {
    let transport = RoutedTransport::new(vec![
        ("/data/getData/", Err("down")),
        ("/archivalData/", Err("down")),
    ]);
    let source = GiosSource::with_transport(transport, fast_cfg());

    let err = source
        .measurements("101", "642", &MeasurementQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AerisError::UpstreamUnavailable { .. }));
}
