use std::collections::HashSet;

use cesium_mcp_lib::gazetteer::{self, normalize_name};

#[test]
fn every_entry_resolves_to_its_own_coordinates() {
    for location in gazetteer::list_all() {
        let resolved = gazetteer::resolve(&normalize_name(location.name))
            .unwrap_or_else(|| panic!("{} should resolve", location.name));
        assert_eq!(resolved, location.coordinates(), "{}", location.name);
    }
}

#[test]
fn names_are_unique_and_stored_normalized() {
    let mut seen = HashSet::new();
    for location in gazetteer::list_all() {
        assert!(seen.insert(location.name), "duplicate {}", location.name);
        assert_eq!(normalize_name(location.name), location.name);
    }
}

#[test]
fn resolve_ignores_case_and_surrounding_whitespace() {
    let expected = gazetteer::resolve("paris").expect("paris is known");
    assert_eq!(gazetteer::resolve("  Paris "), Some(expected));
    assert_eq!(gazetteer::resolve("PARIS"), Some(expected));
    assert_eq!(gazetteer::resolve("\tparis\t"), Some(expected));
}

#[test]
fn resolve_unknown_place_is_none() {
    assert_eq!(gazetteer::resolve("not-a-real-place-xyz"), None);
}

#[test]
fn resolve_seattle_coordinates() {
    let seattle = gazetteer::resolve("seattle").unwrap();
    assert!((seattle.longitude - -122.3321).abs() < 1e-9);
    assert!((seattle.latitude - 47.6062).abs() < 1e-9);
}

#[test]
fn australian_cities_are_in_the_eastern_hemisphere() {
    for name in ["sydney", "melbourne", "brisbane", "perth", "adelaide"] {
        let at = gazetteer::resolve(name).unwrap();
        assert!(at.longitude > 0.0, "{} longitude", name);
        assert!(at.latitude < 0.0, "{} latitude", name);
    }
    assert_eq!(gazetteer::resolve("adelaide").unwrap().longitude, 138.6007);
}

#[test]
fn coordinates_are_within_globe_bounds() {
    for location in gazetteer::list_all() {
        assert!(
            (-180.0..=180.0).contains(&location.longitude),
            "{} longitude",
            location.name
        );
        assert!(
            (-90.0..=90.0).contains(&location.latitude),
            "{} latitude",
            location.name
        );
    }
}

#[test]
fn search_is_prefix_only_in_table_order() {
    let results = gazetteer::search("san", 100);
    assert!(!results.is_empty());
    assert!(results.iter().all(|l| l.name.starts_with("san")));

    let positions: Vec<usize> = results
        .iter()
        .map(|r| {
            gazetteer::list_all()
                .iter()
                .position(|l| l.name == r.name)
                .unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(results[0].name, "san antonio");
}

#[test]
fn search_respects_limit() {
    assert_eq!(gazetteer::search("san", 2).len(), 2);
    assert!(gazetteer::search("san", 0).is_empty());
}

#[test]
fn search_normalizes_prefix() {
    let upper = gazetteer::search("  SAN ", 100);
    let lower = gazetteer::search("san", 100);
    assert_eq!(upper, lower);
}

#[test]
fn empty_prefix_returns_first_entries() {
    let first = gazetteer::search("", 5);
    let expected: Vec<_> = gazetteer::list_all().iter().take(5).collect();
    assert_eq!(first, expected);
    assert_eq!(gazetteer::search("", usize::MAX).len(), gazetteer::count());
}

#[test]
fn curation_order_puts_cities_before_airports() {
    let all = gazetteer::list_all();
    let position = |name: &str| all.iter().position(|l| l.name == name).unwrap();
    assert!(position("new york") < position("eiffel tower"));
    assert!(position("eiffel tower") < position("cern"));
    assert!(position("cern") < position("jfk"));
}

#[test]
fn suggestions_offer_close_names() {
    let suggestions = gazetteer::suggest("Beantwn", 3);
    assert!(suggestions.contains(&"beantown"));
    assert!(suggestions.len() <= 3);
}
