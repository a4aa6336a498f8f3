//! Domain value objects exchanged between sources and the aggregation engine.
//!
//! Stations, parameters, and measurements are immutable once constructed;
//! the aggregated types are derived fresh on every aggregation call.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::SourceKey;

/// One administrative region represented by a latitude/longitude bounding box.
///
/// Boxes may overlap; classification returns the first match in declaration
/// order, so the static table's ordering is the only precedence rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    /// Region name, also the identifier accepted by the orchestrator.
    pub name: &'static str,
    /// Southern edge, inclusive.
    pub min_lat: f64,
    /// Northern edge, inclusive.
    pub max_lat: f64,
    /// Western edge, inclusive.
    pub min_lon: f64,
    /// Eastern edge, inclusive.
    pub max_lon: f64,
}

impl Region {
    /// Inclusive box-containment test. Assumes coordinates were validated.
    #[must_use]
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// A monitoring station as reported by one upstream provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    /// Provider-scoped station identifier.
    pub id: String,
    /// Human-readable station name.
    pub name: String,
    /// Station latitude in degrees.
    pub latitude: f64,
    /// Station longitude in degrees.
    pub longitude: f64,
    /// Source that reported this station.
    pub source: SourceKey,
    /// Parameters measured at this station, when the provider embeds them
    /// in the station listing. May be empty; the orchestrator fetches
    /// parameters separately either way.
    pub parameters: Vec<Parameter>,
}

/// A measurable parameter (pollutant) at a station, in provider-native terms.
///
/// The canonical key is never stored here; it is derived at grouping time by
/// the normalizer from the descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Provider-scoped parameter/sensor identifier.
    pub raw_id: String,
    /// Provider-native parameter name, e.g. "pm25" or "dwutlenek azotu".
    pub name: Option<String>,
    /// Measurement unit, e.g. "µg/m³".
    pub unit: Option<String>,
    /// Longer description or display name, when the provider has one.
    pub description: Option<String>,
    /// Source that reported this parameter.
    pub source: SourceKey,
}

impl Parameter {
    /// The text fed to the parameter normalizer: description when present,
    /// else name, else the raw identifier. Mirrors the per-provider choice
    /// the aggregation historically made (GIOS descriptions, OpenAQ names).
    #[must_use]
    pub fn normalization_input(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.name.as_deref())
            .unwrap_or(&self.raw_id)
    }
}

/// A single measurement sample. Values are finite by the time they leave a
/// source connector; the shared filter pipeline rejects NaN and infinities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    /// Station the sample belongs to (provider-scoped id).
    pub station_id: String,
    /// Parameter/sensor the sample belongs to (provider-scoped id).
    pub parameter_id: String,
    /// Measured value.
    pub value: f64,
    /// Sample timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Statistics for one canonical parameter, merged across all sources and
/// stations that contributed samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedParameter {
    /// Canonical parameter key, e.g. "PM10".
    pub key: String,
    /// First non-empty name encountered in source-registration order.
    pub name: String,
    /// First non-empty unit encountered in source-registration order.
    pub unit: String,
    /// First non-empty description encountered in source-registration order.
    pub description: String,
    /// Distinct sources that contributed at least one sample.
    pub sources: BTreeSet<SourceKey>,
    /// Mean over the union of all contributing values.
    pub average: f64,
    /// Minimum over the union of all contributing values.
    pub min: f64,
    /// Maximum over the union of all contributing values.
    pub max: f64,
    /// Number of contributing samples.
    pub count: usize,
    /// Value of the most recent sample; ties keep the first-seen sample.
    pub latest_value: f64,
    /// Timestamp of the most recent sample.
    pub latest_timestamp: DateTime<Utc>,
}

/// Terminal output of one aggregation run.
///
/// Parameters appear in the order their canonical keys were first
/// encountered; callers wanting sorted output sort explicitly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    /// The region that was aggregated.
    pub region: Region,
    /// Non-empty canonical parameter groups.
    pub parameters: Vec<AggregatedParameter>,
}
