//! Canonical parameter key derivation.
//!
//! Providers disagree on how they spell a pollutant ("pm25", "PM2.5 µg/m³",
//! "pył zawieszony PM2.5"); grouping happens under a canonical key derived
//! by an ordered, case-insensitive substring table. The table is a
//! best-effort heuristic, not a lossless taxonomy: e.g. a raw name
//! containing "ECO2" collides with the `CO` rule. That behavior is relied on
//! downstream; changing the table is a deliberate, reviewed change, not a
//! cleanup.

/// Substring rules in priority order; first match wins.
const RULES: &[(&[&str], &str)] = &[
    (&["PM10"], "PM10"),
    (&["PM2.5", "PM25"], "PM2.5"),
    (&["SO2"], "SO2"),
    (&["NO2"], "NO2"),
    (&["CO"], "CO"),
    (&["O3", "OZONE"], "O3"),
];

/// Key used when the provider supplied no usable parameter text.
pub const UNKNOWN_KEY: &str = "UNKNOWN";

/// Derive the canonical parameter key for a raw provider-native name.
///
/// `None` or blank input maps to [`UNKNOWN_KEY`]. Otherwise the input is
/// upper-cased and trimmed, then matched against the rule table; when no
/// rule matches, the upper-cased trimmed input itself becomes an ad-hoc
/// canonical key.
#[must_use]
pub fn canonical_key(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return UNKNOWN_KEY.to_string();
    };
    let normalized = raw.trim().to_uppercase();
    if normalized.is_empty() {
        return UNKNOWN_KEY.to_string();
    }
    for (needles, key) in RULES {
        if needles.iter().any(|n| normalized.contains(n)) {
            return (*key).to_string();
        }
    }
    normalized
}
