use aeris_core::region::{REGIONS, classify, find, is_in_region, validate_coordinates};
use aeris_types::AerisError;

#[test]
fn point_inside_exactly_one_box_classifies_to_it() {
    // Bialystok: only podlaskie's box contains it.
    let region = classify(53.13, 23.16).unwrap().expect("should classify");
    assert_eq!(region.name, "podlaskie");
    for other in REGIONS.iter().filter(|r| r.name != "podlaskie") {
        assert!(!other.contains(53.13, 23.16));
    }
}

#[test]
fn point_outside_every_box_is_not_found() {
    // Middle of the Baltic Sea.
    assert!(classify(56.0, 19.0).unwrap().is_none());
}

#[test]
fn overlap_resolves_to_first_declared_region() {
    // (50.5, 17.5) sits inside both dolnoslaskie and opolskie boxes;
    // dolnoslaskie is declared first.
    let dol = find("dolnoslaskie").unwrap();
    let opo = find("opolskie").unwrap();
    assert!(dol.contains(50.5, 17.5));
    assert!(opo.contains(50.5, 17.5));
    assert_eq!(classify(50.5, 17.5).unwrap().unwrap().name, "dolnoslaskie");
}

#[test]
fn box_edges_are_inclusive() {
    let slaskie = find("slaskie").unwrap();
    assert!(is_in_region(49.8, 18.4, slaskie).unwrap());
    assert!(is_in_region(50.8, 19.8, slaskie).unwrap());
    assert!(!is_in_region(50.800001, 19.8, slaskie).unwrap());
}

#[test]
fn out_of_range_coordinates_are_a_caller_error() {
    for (lat, lon) in [(91.0, 0.0), (-90.5, 0.0), (0.0, 180.5), (0.0, -181.0), (f64::NAN, 0.0)] {
        let err = classify(lat, lon).unwrap_err();
        assert!(matches!(err, AerisError::InvalidCoordinate { .. }));
        assert!(err.is_client_error());
    }
    assert!(validate_coordinates(90.0, 180.0).is_ok());
    assert!(validate_coordinates(-90.0, -180.0).is_ok());
}

#[test]
fn find_is_case_insensitive() {
    assert!(find("MAZOWIECKIE").is_some());
    assert!(find("Mazowieckie").is_some());
    assert!(find("nowhere").is_none());
}
