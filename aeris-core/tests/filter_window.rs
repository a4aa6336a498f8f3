use aeris_core::measurements::filter_window;
use aeris_types::{Measurement, MeasurementQuery};
use chrono::{Duration, TimeZone, Utc};

fn sample(value: f64, minutes_ago: i64, now: chrono::DateTime<Utc>) -> Measurement {
    Measurement {
        station_id: "s1".into(),
        parameter_id: "p1".into(),
        value,
        timestamp: now - Duration::minutes(minutes_ago),
    }
}

#[test]
fn drops_non_finite_values() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let input = vec![
        sample(1.0, 10, now),
        sample(f64::NAN, 20, now),
        sample(f64::INFINITY, 30, now),
        sample(f64::NEG_INFINITY, 40, now),
        sample(2.0, 50, now),
    ];
    let out = filter_window(input, now, &MeasurementQuery::default());
    assert_eq!(out.iter().map(|m| m.value).collect::<Vec<_>>(), vec![1.0, 2.0]);
}

#[test]
fn drops_samples_older_than_the_window() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let query = MeasurementQuery { limit: 100, max_age_days: 30 };
    let input = vec![
        sample(1.0, 60 * 24 * 29, now), // 29 days old, kept
        sample(2.0, 60 * 24 * 31, now), // 31 days old, dropped
    ];
    let out = filter_window(input, now, &query);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, 1.0);
}

#[test]
fn sample_aged_exactly_the_window_survives() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let query = MeasurementQuery { limit: 100, max_age_days: 30 };
    let input = vec![
        sample(1.0, 60 * 24 * 30, now), // exactly 30 days old, kept
        sample(2.0, 60 * 24 * 30 + 1, now), // one minute older, dropped
    ];
    let out = filter_window(input, now, &query);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].value, 1.0);
}

#[test]
fn caps_keeping_the_most_recent_regardless_of_input_order() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let query = MeasurementQuery { limit: 2, max_age_days: 30 };
    // Deliberately unsorted input.
    let input = vec![sample(3.0, 30, now), sample(1.0, 10, now), sample(2.0, 20, now)];
    let out = filter_window(input, now, &query);
    assert_eq!(out.iter().map(|m| m.value).collect::<Vec<_>>(), vec![1.0, 2.0]);
    assert!(out[0].timestamp > out[1].timestamp);
}
