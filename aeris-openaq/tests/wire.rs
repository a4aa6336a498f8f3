use std::sync::Arc;

use httpmock::prelude::*;

use aeris_core::fetch::HttpTransport;
use aeris_core::source::AirQualitySource;
use aeris_openaq::OpenAqSource;
use aeris_types::FetchConfig;

#[tokio::test]
async fn stations_happy_path_over_http() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/locations")
                .query_param("iso", "PL")
                .query_param("limit", "1000");
            then.status(200).json_body(serde_json::json!({
                "results": [{
                    "id": 42,
                    "name": "Kraków, Aleja Krasińskiego",
                    "coordinates": {"latitude": 50.058, "longitude": 19.926},
                    "sensors": [{
                        "id": 7,
                        "name": "pm10",
                        "parameter": {"name": "pm10", "units": "µg/m³", "displayName": "PM10"}
                    }]
                }]
            }));
        })
        .await;

    let cfg = FetchConfig {
        min_interval: std::time::Duration::from_millis(1),
        max_retries: 1,
        retry_delay: std::time::Duration::from_millis(1),
    };
    let source = OpenAqSource::with_transport(Arc::new(HttpTransport::new()), cfg)
        .with_base_url(server.base_url());

    let stations = source.stations().await.unwrap();
    mock.assert_async().await;
    assert_eq!(stations.len(), 1);
    assert_eq!(stations[0].name, "Kraków, Aleja Krasińskiego");
    assert_eq!(stations[0].parameters.len(), 1);
}
