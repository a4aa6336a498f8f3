//! Deterministic fixture data for the static mock source.

use chrono::{Duration, Utc};

use aeris_types::{Measurement, Parameter, SourceKey, Station};

pub const KEY: SourceKey = SourceKey::new("aeris-mock");

fn parameter(raw_id: &str, name: &str, description: &str) -> Parameter {
    Parameter {
        raw_id: raw_id.to_string(),
        name: Some(name.to_string()),
        unit: Some("µg/m³".to_string()),
        description: Some(description.to_string()),
        source: KEY,
    }
}

pub fn stations() -> Vec<Station> {
    vec![
        Station {
            id: "mock-krakow".to_string(),
            name: "Kraków, Mock Street".to_string(),
            latitude: 50.06,
            longitude: 19.94,
            source: KEY,
            parameters: parameters("mock-krakow"),
        },
        Station {
            id: "mock-gdansk".to_string(),
            name: "Gdańsk, Mock Quay".to_string(),
            latitude: 54.35,
            longitude: 18.65,
            source: KEY,
            parameters: parameters("mock-gdansk"),
        },
    ]
}

pub fn parameters(station_id: &str) -> Vec<Parameter> {
    match station_id {
        "mock-krakow" => vec![
            parameter("mk-pm10", "pm10", "PM10"),
            parameter("mk-pm25", "pm25", "PM2.5"),
        ],
        "mock-gdansk" => vec![parameter("mg-no2", "no2", "NO2")],
        _ => vec![],
    }
}

pub fn measurements(station_id: &str, parameter_id: &str) -> Vec<Measurement> {
    let series: &[f64] = match parameter_id {
        "mk-pm10" => &[41.0, 38.5, 44.2],
        "mk-pm25" => &[22.1, 19.8],
        "mg-no2" => &[15.0],
        _ => &[],
    };
    let now = Utc::now();
    series
        .iter()
        .enumerate()
        .map(|(i, value)| Measurement {
            station_id: station_id.to_string(),
            parameter_id: parameter_id.to_string(),
            value: *value,
            timestamp: now - Duration::hours(i as i64 + 1),
        })
        .collect()
}
