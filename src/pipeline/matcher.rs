//! Free-text query matching for the candidate-set stage.
//!
//! Matching is a case-insensitive substring test per supplied field. Absent
//! or empty fields impose no constraint: an empty search box narrows
//! nothing. The matcher never reorders records; ordering belongs to the
//! sort stage. It is purely textual, with no synonym, fuzzy or airport-code
//! resolution.

use super::Predicate;
use crate::store::{Flight, Hotel, TravelPackage};

/// Case-insensitive substring test, failing open on an absent or empty
/// needle.
pub fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(n) if n.is_empty() => true,
        Some(n) => haystack.to_lowercase().contains(&n.to_lowercase()),
    }
}

/// Normalize a query field: trimmed, empty treated as absent.
fn normalize(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Origin/destination query for the flights pipeline.
#[derive(Debug, Clone, Default)]
pub struct FlightQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl FlightQuery {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: normalize(from),
            to: normalize(to),
        }
    }
}

impl Predicate<Flight> for FlightQuery {
    fn matches(&self, record: &Flight) -> bool {
        contains_ci(&record.from, self.from.as_deref()) && contains_ci(&record.to, self.to.as_deref())
    }
}

/// Location query for the hotels pipeline.
#[derive(Debug, Clone, Default)]
pub struct HotelQuery {
    pub location: Option<String>,
}

impl HotelQuery {
    pub fn new(location: &str) -> Self {
        Self {
            location: normalize(location),
        }
    }
}

impl Predicate<Hotel> for HotelQuery {
    fn matches(&self, record: &Hotel) -> bool {
        contains_ci(&record.location, self.location.as_deref())
    }
}

/// Destination query for the packages pipeline.
#[derive(Debug, Clone, Default)]
pub struct PackageQuery {
    pub destination: Option<String>,
}

impl PackageQuery {
    pub fn new(destination: &str) -> Self {
        Self {
            destination: normalize(destination),
        }
    }
}

impl Predicate<TravelPackage> for PackageQuery {
    fn matches(&self, record: &TravelPackage) -> bool {
        contains_ci(&record.destination, self.destination.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_contains_ci_case_insensitive() {
        assert!(contains_ci("New York (JFK)", Some("new york")));
        assert!(contains_ci("New York (JFK)", Some("JFK")));
        assert!(!contains_ci("New York (JFK)", Some("London")));
    }

    #[test]
    fn test_contains_ci_fails_open() {
        assert!(contains_ci("anything", None));
        assert!(contains_ci("anything", Some("")));
    }

    #[test]
    fn test_flight_query_both_fields() {
        let q = FlightQuery::new("london", "paris");
        assert!(q.matches(&test_utils::flight("f1", "London (LHR)", "Paris (CDG)", 180.0, 80, 0)));
        assert!(!q.matches(&test_utils::flight("f2", "London (LHR)", "Rome (FCO)", 220.0, 140, 0)));
    }

    #[test]
    fn test_flight_query_blank_fields_match_everything() {
        let q = FlightQuery::new("", "   ");
        assert!(q.matches(&test_utils::flight("f1", "Anywhere", "Elsewhere", 100.0, 60, 0)));
        assert_eq!(q.from, None);
        assert_eq!(q.to, None);
    }

    #[test]
    fn test_flight_query_trims_whitespace() {
        let q = FlightQuery::new("  tokyo  ", "");
        assert!(q.matches(&test_utils::flight("f1", "Tokyo (HND)", "Osaka", 90.0, 60, 0)));
    }

    #[test]
    fn test_hotel_query_location() {
        let q = HotelQuery::new("bali");
        assert!(q.matches(&test_utils::hotel("h1", "Ocean View", "Bali, Indonesia", 220.0, 4.7)));
        assert!(!q.matches(&test_utils::hotel("h2", "City Stay", "Paris, France", 350.0, 4.8)));
    }

    #[test]
    fn test_package_query_destination() {
        let q = PackageQuery::new("PARIS");
        assert!(q.matches(&test_utils::package("p1", "Getaway", "Paris, France", 5, 1200.0, 98)));
        assert!(!q.matches(&test_utils::package("p2", "Retreat", "Bali, Indonesia", 6, 1800.0, 94)));
    }
}
