use aeris_core::normalize::{UNKNOWN_KEY, canonical_key};

#[test]
fn missing_and_blank_input_map_to_unknown() {
    assert_eq!(canonical_key(None), UNKNOWN_KEY);
    assert_eq!(canonical_key(Some("")), UNKNOWN_KEY);
    assert_eq!(canonical_key(Some("   ")), UNKNOWN_KEY);
}

#[test]
fn spelling_variants_collapse_case_insensitively() {
    assert_eq!(canonical_key(Some("pm2.5 (ug/m3)")), "PM2.5");
    assert_eq!(canonical_key(Some("PM25_RAW")), "PM2.5");
    assert_eq!(canonical_key(Some("pyl zawieszony PM10")), "PM10");
    assert_eq!(canonical_key(Some("ozone")), "O3");
    assert_eq!(canonical_key(Some("o3")), "O3");
    assert_eq!(canonical_key(Some(" no2 ")), "NO2");
    assert_eq!(canonical_key(Some("sulphur dioxide SO2")), "SO2");
}

#[test]
fn pm10_outranks_later_rules() {
    // "PM10" contains no other needle, but ordering matters for inputs
    // that would match several rules; PM10 is checked first.
    assert_eq!(canonical_key(Some("PM10/CO combined")), "PM10");
}

#[test]
fn unmatched_input_becomes_its_own_key() {
    assert_eq!(canonical_key(Some("benzene")), "BENZENE");
    assert_eq!(canonical_key(Some("  nh3 ")), "NH3");
}

#[test]
fn eco2_collides_with_co_by_design() {
    // Known heuristic limitation carried over on purpose: the substring
    // rule for CO also matches ECO2.
    assert_eq!(canonical_key(Some("ECO2")), "CO");
}
