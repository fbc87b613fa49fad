//! Built-in travel catalog and its lookup primitives.
//!
//! The catalog is fixed at startup: either the built-in demo dataset or a
//! YAML file supplied through the config (see [`crate::config`]). Lookups
//! clone or borrow; nothing here mutates the collections.

use super::{
    Destination, Flight, Hotel, Reservation, ReservationKind, ReservationStatus, StayLength,
    TravelPackage,
};
use crate::pipeline::matcher::contains_ci;
use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Season used for destination suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }
}

/// Map a 1-based calendar month to a season (northern hemisphere).
pub fn season_for_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Autumn,
        _ => Season::Winter,
    }
}

/// Season for the current wall-clock month.
pub fn current_season() -> Season {
    season_for_month(Utc::now().month())
}

/// The full record store: every collection the pipelines and the admin
/// dashboard read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub flights: Vec<Flight>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
    #[serde(default)]
    pub packages: Vec<TravelPackage>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub destinations: Vec<Destination>,
}

impl Catalog {
    /// Narrow flights by origin and destination substrings.
    ///
    /// Empty or absent fields impose no constraint: an empty origin box must
    /// not exclude every flight. Matching is case-insensitive and purely
    /// textual ("New York" will not match a record indexed only as "JFK").
    /// Input order is preserved; ordering belongs to the sort stage.
    pub fn search_flights(&self, from: Option<&str>, to: Option<&str>) -> Vec<Flight> {
        self.flights
            .iter()
            .filter(|f| contains_ci(&f.from, from) && contains_ci(&f.to, to))
            .cloned()
            .collect()
    }

    /// Narrow hotels by location substring, case-insensitive, fail open.
    pub fn search_hotels(&self, location: Option<&str>) -> Vec<Hotel> {
        self.hotels
            .iter()
            .filter(|h| contains_ci(&h.location, location))
            .cloned()
            .collect()
    }

    /// Narrow packages by destination substring, case-insensitive, fail open.
    pub fn search_packages(&self, destination: Option<&str>) -> Vec<TravelPackage> {
        self.packages
            .iter()
            .filter(|p| contains_ci(&p.destination, destination))
            .cloned()
            .collect()
    }

    pub fn flight_by_id(&self, id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id == id)
    }

    pub fn hotel_by_id(&self, id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == id)
    }

    pub fn package_by_id(&self, id: &str) -> Option<&TravelPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn reservation_by_id(&self, id: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    /// Packages ranked by popularity score, highest first.
    pub fn packages_by_popularity(&self) -> Vec<TravelPackage> {
        let mut ranked = self.packages.clone();
        ranked.sort_by(|a, b| b.popularity.cmp(&a.popularity));
        ranked
    }

    /// Destinations ranked by trend score, highest first.
    pub fn destinations_by_popularity(&self) -> Vec<Destination> {
        let mut ranked = self.destinations.clone();
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }

    /// Destination suggestions for a season, drawn from the destination list.
    pub fn seasonal_destinations(&self, season: Season) -> Vec<Destination> {
        let names: &[&str] = match season {
            Season::Spring => &["Paris", "Amsterdam", "Tokyo"],
            Season::Summer => &["Santorini", "Bali", "Barcelona"],
            Season::Autumn => &["New York", "Rome", "Seoul"],
            Season::Winter => &["Dubai", "Sydney", "Singapore"],
        };
        self.destinations
            .iter()
            .filter(|d| names.contains(&d.name.as_str()))
            .cloned()
            .collect()
    }

    /// The built-in demo dataset.
    pub fn builtin() -> Self {
        let now = Utc::now();
        Catalog {
            flights: vec![
                flight("f1", "New York (JFK)", "London (LHR)", utc(2023, 8, 15, 8, 0), utc(2023, 8, 15, 20, 0), "British Airways", 650.0, 450, 0),
                flight("f2", "Los Angeles (LAX)", "Tokyo (HND)", utc(2023, 8, 18, 10, 0), utc(2023, 8, 19, 14, 30), "Japan Airlines", 1200.0, 750, 0),
                flight("f3", "London (LHR)", "Paris (CDG)", utc(2023, 8, 20, 7, 0), utc(2023, 8, 20, 9, 20), "Air France", 180.0, 80, 0),
                flight("f4", "Singapore (SIN)", "Sydney (SYD)", utc(2023, 8, 22, 23, 0), utc(2023, 8, 23, 10, 0), "Singapore Airlines", 750.0, 480, 0),
                flight("f5", "Dubai (DXB)", "New York (JFK)", utc(2023, 8, 25, 1, 30), utc(2023, 8, 25, 14, 0), "Emirates", 980.0, 870, 0),
                flight("f6", "Paris (CDG)", "Rome (FCO)", utc(2023, 8, 28, 10, 0), utc(2023, 8, 28, 12, 20), "Alitalia", 220.0, 140, 0),
                flight("f7", "Berlin (BER)", "Amsterdam (AMS)", utc(2023, 8, 30, 9, 0), utc(2023, 8, 30, 10, 30), "KLM", 150.0, 90, 0),
                flight("f8", "Mumbai (BOM)", "Dubai (DXB)", utc(2023, 9, 2, 14, 0), utc(2023, 9, 2, 16, 0), "Emirates", 320.0, 180, 0),
            ],
            hotels: vec![
                hotel("h1", "The Grand Palace Hotel", "Paris, France", 350.0, 4.8,
                    "Luxurious 5-star hotel in the heart of Paris with stunning views of the Eiffel Tower.",
                    &["Free Wi-Fi", "Pool", "Spa", "Fitness Center", "Restaurant", "Bar", "Room Service", "Concierge"]),
                hotel("h2", "Sakura Ryokan", "Tokyo, Japan", 280.0, 4.6,
                    "Traditional Japanese ryokan offering authentic cultural experience in Tokyo.",
                    &["Free Wi-Fi", "Hot Springs", "Traditional Japanese Breakfast", "Tatami Rooms", "Garden View"]),
                hotel("h3", "Ocean View Resort", "Bali, Indonesia", 220.0, 4.7,
                    "Beachfront resort with private villas and stunning sunset views.",
                    &["Free Wi-Fi", "Private Pool", "Spa", "Beach Access", "Restaurant", "Bar", "Water Sports"]),
                hotel("h4", "Manhattan Skyline Hotel", "New York, USA", 420.0, 4.5,
                    "Modern hotel in the heart of Manhattan with skyline views and luxury amenities.",
                    &["Free Wi-Fi", "Fitness Center", "Restaurant", "Bar", "Business Center", "Concierge"]),
                hotel("h5", "Desert Oasis Resort", "Dubai, UAE", 580.0, 4.9,
                    "Luxury desert resort offering unique experiences and world-class service.",
                    &["Free Wi-Fi", "Private Pool", "Spa", "Desert Safari", "Restaurant", "Bar", "24/7 Room Service"]),
                hotel("h6", "Santorini Blue Villas", "Santorini, Greece", 450.0, 4.8,
                    "Cliffside villas with private terraces and stunning caldera views.",
                    &["Free Wi-Fi", "Private Pool", "Breakfast", "Sunset Views", "Air Conditioning", "Concierge"]),
            ],
            packages: vec![
                package("p1", "Romantic Paris Getaway", "Paris, France", 5, 4, 1200.0,
                    "Experience the city of love with this romantic package including Eiffel Tower visit, Seine river cruise, and luxury accommodations.",
                    &["Round-trip flights", "4-star hotel stay", "Daily breakfast", "Seine river cruise", "Guided Louvre Museum tour", "Eiffel Tower visit"],
                    &["Seine River Cruise", "Louvre Museum Visit", "Eiffel Tower Visit", "Wine Tasting"], 98),
                package("p2", "Tokyo Cultural Immersion", "Tokyo, Japan", 7, 6, 2200.0,
                    "Immerse yourself in Japanese culture with this comprehensive Tokyo experience including traditional tea ceremonies and modern attractions.",
                    &["Round-trip flights", "Traditional ryokan stay", "Daily breakfast", "Tokyo city tour", "Mt. Fuji excursion", "Tea ceremony experience"],
                    &["Tea Ceremony", "Mt. Fuji Excursion", "Tsukiji Fish Market Visit", "Sumo Wrestling Experience"], 95),
                package("p3", "Bali Paradise Retreat", "Bali, Indonesia", 6, 5, 1800.0,
                    "Relax and rejuvenate in the paradise island of Bali with beach stays, spa treatments, and cultural experiences.",
                    &["Round-trip flights", "Beachfront villa", "Daily breakfast", "Spa treatments", "Ubud tour", "Temple visits"],
                    &["Spa Treatments", "Ubud Tour", "Temple Visits", "Cooking Class", "Surfing Lesson"], 94),
                package("p4", "New York City Explorer", "New York, USA", 5, 4, 1650.0,
                    "Experience the Big Apple with this comprehensive package including Broadway shows, iconic landmarks, and luxury accommodations.",
                    &["Round-trip flights", "4-star Manhattan hotel", "Daily breakfast", "Broadway show tickets", "NYC city pass", "Statue of Liberty tour"],
                    &["Broadway Show", "Statue of Liberty Tour", "Empire State Building Visit", "Central Park Bike Tour"], 93),
                package("p5", "Dubai Luxury Experience", "Dubai, UAE", 6, 5, 2800.0,
                    "Indulge in luxury with this exclusive Dubai package featuring desert safaris, Burj Khalifa visits, and 5-star accommodations.",
                    &["Round-trip flights", "5-star hotel stay", "Daily breakfast", "Desert safari", "Burj Khalifa observation deck", "Dubai Mall shopping experience"],
                    &["Desert Safari", "Burj Khalifa Visit", "Dubai Mall Shopping", "Yacht Cruise", "Aquaventure Waterpark"], 92),
            ],
            reservations: vec![
                Reservation {
                    id: "r1".into(),
                    kind: ReservationKind::Flight,
                    item_id: "f1".into(),
                    item_name: "New York (JFK) to London (LHR)".into(),
                    start_date: now + Duration::days(30),
                    end_date: now + Duration::days(37),
                    price: 650.0,
                    status: ReservationStatus::Confirmed,
                    guests: None,
                    created_at: now - Duration::days(5),
                },
                Reservation {
                    id: "r2".into(),
                    kind: ReservationKind::Hotel,
                    item_id: "h3".into(),
                    item_name: "Ocean View Resort".into(),
                    start_date: now + Duration::days(20),
                    end_date: now + Duration::days(25),
                    // 5 nights at the per-night rate
                    price: 220.0 * 5.0,
                    status: ReservationStatus::Confirmed,
                    guests: Some(2),
                    created_at: now - Duration::days(10),
                },
                Reservation {
                    id: "r3".into(),
                    kind: ReservationKind::Package,
                    item_id: "p2".into(),
                    item_name: "Tokyo Cultural Immersion".into(),
                    start_date: now + Duration::days(45),
                    end_date: now + Duration::days(52),
                    price: 2200.0,
                    status: ReservationStatus::Pending,
                    guests: Some(2),
                    created_at: now - Duration::days(2),
                },
                Reservation {
                    id: "r4".into(),
                    kind: ReservationKind::Flight,
                    item_id: "f5".into(),
                    item_name: "Dubai (DXB) to New York (JFK)".into(),
                    start_date: now + Duration::days(15),
                    end_date: now + Duration::days(22),
                    price: 980.0,
                    status: ReservationStatus::Cancelled,
                    guests: None,
                    created_at: now - Duration::days(8),
                },
            ],
            destinations: vec![
                destination("Paris", "France", 98),
                destination("Santorini", "Greece", 96),
                destination("Tokyo", "Japan", 95),
                destination("Bali", "Indonesia", 94),
                destination("New York", "USA", 93),
                destination("Dubai", "UAE", 92),
            ],
        }
    }
}

/// Construct a UTC timestamp from literal date parts.
fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("literal catalog timestamp is valid")
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    from: &str,
    to: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    airline: &str,
    price: f64,
    duration_minutes: u32,
    stops: u32,
) -> Flight {
    Flight {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        departure,
        arrival,
        airline: airline.into(),
        price,
        duration_minutes,
        stops,
    }
}

fn hotel(
    id: &str,
    name: &str,
    location: &str,
    price: f64,
    rating: f64,
    description: &str,
    amenities: &[&str],
) -> Hotel {
    Hotel {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        price,
        rating,
        description: description.into(),
        amenities: amenities.iter().map(|s| s.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn package(
    id: &str,
    name: &str,
    destination: &str,
    days: u32,
    nights: u32,
    price: f64,
    description: &str,
    inclusions: &[&str],
    activities: &[&str],
    popularity: u32,
) -> TravelPackage {
    TravelPackage {
        id: id.into(),
        name: name.into(),
        destination: destination.into(),
        duration: StayLength { days, nights },
        price,
        description: description.into(),
        inclusions: inclusions.iter().map(|s| s.to_string()).collect(),
        activities: activities.iter().map(|s| s.to_string()).collect(),
        flight_included: true,
        hotel_included: true,
        popularity,
    }
}

fn destination(name: &str, country: &str, score: u32) -> Destination {
    Destination {
        name: name.into(),
        country: country.into(),
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_flights_no_constraint_returns_all() {
        let catalog = Catalog::builtin();
        let results = catalog.search_flights(None, None);
        assert_eq!(results.len(), catalog.flights.len());
    }

    #[test]
    fn test_search_flights_empty_string_is_no_constraint() {
        let catalog = Catalog::builtin();
        let results = catalog.search_flights(Some(""), Some(""));
        assert_eq!(results.len(), catalog.flights.len());
    }

    #[test]
    fn test_search_flights_by_origin_case_insensitive() {
        let catalog = Catalog::builtin();
        let results = catalog.search_flights(Some("new york"), None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "f1");
    }

    #[test]
    fn test_search_flights_both_fields_and_compose() {
        let catalog = Catalog::builtin();
        let results = catalog.search_flights(Some("london"), Some("paris"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "f3");
    }

    #[test]
    fn test_search_is_textual_not_semantic() {
        let catalog = Catalog::builtin();
        // "JFK" and "New York" are different tokens; only the literal
        // substring matches.
        let by_code = catalog.search_flights(Some("JFK"), None);
        assert_eq!(by_code.len(), 1);
        let no_match = catalog.search_flights(Some("Gotham"), None);
        assert!(no_match.is_empty());
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let catalog = Catalog::builtin();
        let results = catalog.search_flights(None, Some("dubai"));
        let ids: Vec<&str> = results.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["f8"]);
        let emirates_to_anywhere = catalog.search_flights(Some(""), None);
        assert_eq!(emirates_to_anywhere[0].id, "f1");
    }

    #[test]
    fn test_search_hotels_by_location() {
        let catalog = Catalog::builtin();
        let results = catalog.search_hotels(Some("paris"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "h1");
    }

    #[test]
    fn test_search_packages_by_destination() {
        let catalog = Catalog::builtin();
        let results = catalog.search_packages(Some("tokyo"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "p2");
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.flight_by_id("f3").unwrap().airline, "Air France");
        assert_eq!(catalog.hotel_by_id("h5").unwrap().rating, 4.9);
        assert_eq!(catalog.package_by_id("p4").unwrap().popularity, 93);
        assert!(catalog.flight_by_id("f99").is_none());
        assert!(catalog.reservation_by_id("r2").is_some());
    }

    #[test]
    fn test_packages_by_popularity_descending() {
        let catalog = Catalog::builtin();
        let ranked = catalog.packages_by_popularity();
        let scores: Vec<u32> = ranked.iter().map(|p| p.popularity).collect();
        let mut sorted = scores.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[test]
    fn test_destinations_by_popularity_descending() {
        let catalog = Catalog::builtin();
        let ranked = catalog.destinations_by_popularity();
        assert_eq!(ranked[0].name, "Paris");
        assert_eq!(ranked.last().unwrap().name, "Dubai");
    }

    #[test]
    fn test_season_for_month() {
        assert_eq!(season_for_month(3), Season::Spring);
        assert_eq!(season_for_month(5), Season::Spring);
        assert_eq!(season_for_month(6), Season::Summer);
        assert_eq!(season_for_month(8), Season::Summer);
        assert_eq!(season_for_month(9), Season::Autumn);
        assert_eq!(season_for_month(11), Season::Autumn);
        assert_eq!(season_for_month(12), Season::Winter);
        assert_eq!(season_for_month(1), Season::Winter);
        assert_eq!(season_for_month(2), Season::Winter);
    }

    #[test]
    fn test_seasonal_destinations_winter() {
        let catalog = Catalog::builtin();
        let winter = catalog.seasonal_destinations(Season::Winter);
        let names: Vec<&str> = winter.iter().map(|d| d.name.as_str()).collect();
        // Only destinations present in the catalog survive the filter.
        assert_eq!(names, vec!["Dubai"]);
    }

    #[test]
    fn test_seasonal_destinations_spring() {
        let catalog = Catalog::builtin();
        let spring = catalog.seasonal_destinations(Season::Spring);
        let names: Vec<&str> = spring.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Paris", "Tokyo"]);
    }

    #[test]
    fn test_builtin_reservation_prices_match_seed_items() {
        let catalog = Catalog::builtin();
        let r2 = catalog.reservation_by_id("r2").unwrap();
        let h3 = catalog.hotel_by_id("h3").unwrap();
        assert_eq!(r2.price, h3.price * 5.0);
    }

    #[test]
    fn test_catalog_yaml_roundtrip() {
        let yaml = r#"
flights:
  - id: x1
    from: "Lisbon (LIS)"
    to: "Madrid (MAD)"
    departure: "2024-03-01T09:00:00Z"
    arrival: "2024-03-01T10:20:00Z"
    airline: "TAP"
    price: 95.0
    duration_minutes: 80
    stops: 0
"#;
        let catalog: Catalog = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(catalog.flights.len(), 1);
        assert_eq!(catalog.flights[0].duration_label(), "1h 20m");
        assert!(catalog.hotels.is_empty());
    }
}
