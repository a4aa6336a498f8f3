//! Static region table and coordinate classification.
//!
//! Regions are the sixteen Polish voivodeships, each approximated by a
//! latitude/longitude bounding box. Boxes overlap at the seams; declaration
//! order is the only precedence rule, so `classify` returns the first match
//! and nothing else.

use aeris_types::{AerisError, Region};

/// The fixed region table. Declaration order is classification precedence.
pub const REGIONS: &[Region] = &[
    Region { name: "dolnoslaskie", min_lat: 50.0, max_lat: 51.8, min_lon: 15.0, max_lon: 17.8 },
    Region { name: "kujawsko-pomorskie", min_lat: 52.0, max_lat: 53.8, min_lon: 17.0, max_lon: 19.8 },
    Region { name: "lubelskie", min_lat: 50.2, max_lat: 51.6, min_lon: 21.8, max_lon: 24.1 },
    Region { name: "lubuskie", min_lat: 51.2, max_lat: 52.9, min_lon: 14.1, max_lon: 16.2 },
    Region { name: "lodzkie", min_lat: 51.0, max_lat: 52.5, min_lon: 18.2, max_lon: 20.6 },
    Region { name: "malopolskie", min_lat: 49.1, max_lat: 50.8, min_lon: 18.8, max_lon: 21.3 },
    Region { name: "mazowieckie", min_lat: 51.4, max_lat: 53.4, min_lon: 19.1, max_lon: 22.9 },
    Region { name: "opolskie", min_lat: 50.0, max_lat: 51.1, min_lon: 17.0, max_lon: 18.9 },
    Region { name: "podkarpackie", min_lat: 49.0, max_lat: 50.9, min_lon: 21.0, max_lon: 23.0 },
    Region { name: "podlaskie", min_lat: 52.5, max_lat: 54.4, min_lon: 22.1, max_lon: 24.2 },
    Region { name: "pomorskie", min_lat: 53.4, max_lat: 54.8, min_lon: 16.8, max_lon: 19.3 },
    Region { name: "slaskie", min_lat: 49.8, max_lat: 50.8, min_lon: 18.4, max_lon: 19.8 },
    Region { name: "swietokrzyskie", min_lat: 50.1, max_lat: 51.1, min_lon: 19.7, max_lon: 21.5 },
    Region { name: "warminsko-mazurskie", min_lat: 53.2, max_lat: 54.4, min_lon: 19.3, max_lon: 22.6 },
    Region { name: "wielkopolskie", min_lat: 51.2, max_lat: 53.1, min_lon: 15.6, max_lon: 18.9 },
    Region { name: "zachodniopomorskie", min_lat: 52.7, max_lat: 54.9, min_lon: 14.1, max_lon: 16.8 },
];

/// Look up a region by name, case-insensitively.
#[must_use]
pub fn find(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Reject coordinates outside the valid geographic range. No clamping.
///
/// # Errors
/// Returns `InvalidCoordinate` when lat is outside [-90, 90] or lon is
/// outside [-180, 180] (NaN fails both comparisons and is rejected too).
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), AerisError> {
    if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        Err(AerisError::InvalidCoordinate { lat, lon })
    }
}

/// Classify a point into the first region whose box contains it.
///
/// Returns `Ok(None)` when no box matches; that is a normal not-found
/// result, not an error.
///
/// # Errors
/// Returns `InvalidCoordinate` for out-of-range input.
pub fn classify(lat: f64, lon: f64) -> Result<Option<&'static Region>, AerisError> {
    validate_coordinates(lat, lon)?;
    Ok(REGIONS.iter().find(|r| r.contains(lat, lon)))
}

/// Box-containment predicate for station filters.
///
/// # Errors
/// Returns `InvalidCoordinate` for out-of-range input.
pub fn is_in_region(lat: f64, lon: f64, region: &Region) -> Result<bool, AerisError> {
    validate_coordinates(lat, lon)?;
    Ok(region.contains(lat, lon))
}
