#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};

use aeris_types::{Measurement, Parameter, SourceKey, Station};

/// Opt-in log output for debugging test runs (`RUST_LOG=debug cargo test`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A point inside the malopolskie box used by most tests.
pub const KRAKOW: (f64, f64) = (50.06, 19.94);

pub fn station(key: SourceKey, id: &str, lat: f64, lon: f64) -> Station {
    Station {
        id: id.to_string(),
        name: id.to_string(),
        latitude: lat,
        longitude: lon,
        source: key,
        parameters: vec![],
    }
}

pub fn parameter(key: SourceKey, raw_id: &str, name: &str, description: &str) -> Parameter {
    Parameter {
        raw_id: raw_id.to_string(),
        name: Some(name.to_string()),
        unit: Some("µg/m³".to_string()),
        description: Some(description.to_string()),
        source: key,
    }
}

pub fn sample(station_id: &str, parameter_id: &str, value: f64, age_hours: i64) -> Measurement {
    Measurement {
        station_id: station_id.to_string(),
        parameter_id: parameter_id.to_string(),
        value,
        timestamp: Utc::now() - Duration::hours(age_hours),
    }
}

pub fn sample_at(
    station_id: &str,
    parameter_id: &str,
    value: f64,
    timestamp: DateTime<Utc>,
) -> Measurement {
    Measurement {
        station_id: station_id.to_string(),
        parameter_id: parameter_id.to_string(),
        value,
        timestamp,
    }
}
