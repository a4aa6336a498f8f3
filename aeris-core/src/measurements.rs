//! The measurement filter pipeline shared by all connectors.

use chrono::{DateTime, Duration, Utc};

use aeris_types::{Measurement, MeasurementQuery};

/// Apply the uniform filtering rules to a raw measurement batch.
///
/// Drops non-finite values and samples older than the age cutoff (a sample
/// aged exactly `max_age_days` survives), sorts by timestamp descending so
/// capping is deterministic even when the provider returns unsorted data,
/// then truncates to the query limit.
///
/// Entries with missing timestamps or values never reach this function;
/// connectors drop them while mapping wire DTOs.
#[must_use]
pub fn filter_window(
    mut measurements: Vec<Measurement>,
    now: DateTime<Utc>,
    query: &MeasurementQuery,
) -> Vec<Measurement> {
    let cutoff = now - Duration::days(query.max_age_days);
    measurements.retain(|m| m.value.is_finite() && m.timestamp >= cutoff);
    measurements.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    measurements.truncate(query.limit);
    measurements
}
