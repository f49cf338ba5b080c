//! Static gazetteer mapping place names to coordinates.
//!
//! The table is a compile-time constant holding canonical names alongside
//! colloquial aliases ("the big apple", "beantown") and airport codes. It is
//! never mutated, so every accessor hands out `'static` references without
//! synchronization.
//!
//! Lookups normalize the query first: surrounding ASCII spaces and tabs are
//! trimmed and ASCII letters lowercased. No locale-aware case folding takes
//! place. Matching is a linear scan in table order and the first exact match
//! wins.

mod locations;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use locations::LOCATIONS;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.85;

/// A named place on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Lowercase lookup key.
    pub name: &'static str,
    /// Degrees east of Greenwich.
    pub longitude: f64,
    /// Degrees north of the equator.
    pub latitude: f64,
}

impl Location {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}

/// Longitude/latitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub longitude: f64,
    pub latitude: f64,
}

/// Trim surrounding ASCII spaces/tabs and lowercase ASCII letters.
pub fn normalize_name(input: &str) -> String {
    input
        .trim_matches(|c| c == ' ' || c == '\t')
        .to_ascii_lowercase()
}

/// Find the record whose name equals the normalized query.
pub fn find(name: &str) -> Option<&'static Location> {
    let normalized = normalize_name(name);
    let found = LOCATIONS
        .iter()
        .find(|location| location.name == normalized);
    debug!(query = name, found = found.is_some(), "gazetteer lookup");
    found
}

/// Resolve a place name to its coordinates.
pub fn resolve(name: &str) -> Option<Coordinates> {
    find(name).map(Location::coordinates)
}

/// Entries whose name starts with the normalized prefix, in table order,
/// capped at `limit`. An empty prefix matches every entry.
pub fn search(prefix: &str, limit: usize) -> Vec<&'static Location> {
    let normalized = normalize_name(prefix);
    LOCATIONS
        .iter()
        .filter(|location| location.name.starts_with(normalized.as_str()))
        .take(limit)
        .collect()
}

/// The full table in curation order.
pub fn list_all() -> &'static [Location] {
    LOCATIONS
}

/// Number of entries in the table.
pub fn count() -> usize {
    LOCATIONS.len()
}

/// Names similar to an unresolved query, best match first.
///
/// Used to enrich "not found" messages. Queries that normalize to an empty
/// string have no suggestions.
pub fn suggest(name: &str, limit: usize) -> Vec<&'static str> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &'static str)> = LOCATIONS
        .iter()
        .map(|location| {
            (
                strsim::jaro_winkler(&normalized, location.name),
                location.name,
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    // Stable sort keeps table order among equal scores.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().take(limit).map(|(_, name)| name).collect()
}

/// Serialize locations as a JSON array of `{name, longitude, latitude}`.
pub fn to_json<'a, I>(locations: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Location>,
{
    let locations: Vec<&Location> = locations.into_iter().collect();
    serde_json::to_string(&locations).map_err(|e| Error::serialize("location list", e))
}

/// Serialize only the names of the given locations as a JSON array.
pub fn names_json<'a, I>(locations: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Location>,
{
    let names: Vec<&str> = locations.into_iter().map(|location| location.name).collect();
    serde_json::to_string(&names).map_err(|e| Error::serialize("location names", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Paris \t"), "paris");
        assert_eq!(normalize_name("NEW York"), "new york");
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("\n paris"), "\n paris");
        assert_eq!(normalize_name("ZÜRICH"), "zÜrich");
    }

    #[test]
    fn test_resolve_known_aliases_share_coordinates() {
        let canonical = resolve("new york").unwrap();
        assert_eq!(resolve("the big apple"), Some(canonical));
        assert_eq!(resolve("NYC"), Some(canonical));
    }

    #[test]
    fn test_resolve_empty_matches_nothing() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("   "), None);
    }

    #[test]
    fn test_find_returns_table_record() {
        let location = find(" CERN ").unwrap();
        assert_eq!(location.name, "cern");
        assert_eq!(location.longitude, 6.0554);
    }

    #[test]
    fn test_count_matches_list() {
        assert_eq!(count(), list_all().len());
        assert!(count() > 400);
    }

    #[test]
    fn test_suggest_near_miss() {
        let suggestions = suggest("seatle", 3);
        assert!(!suggestions.is_empty());
        assert_eq!(suggestions[0], "seattle");
    }

    #[test]
    fn test_suggest_empty_and_far_queries() {
        assert!(suggest("", 3).is_empty());
        assert!(suggest("qqqqqqqqqqqqxz", 3).is_empty());
    }

    #[test]
    fn test_to_json_shape() {
        let json = to_json(search("cern", 1)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "cern");
        assert_eq!(value[0]["longitude"], 6.0554);
        assert_eq!(value[0]["latitude"], 46.233);
    }

    #[test]
    fn test_names_json() {
        let json = names_json(search("lhc", 5)).unwrap();
        assert_eq!(json, r#"["lhc"]"#);
    }
}
