//! User-adjustable filter predicates for the filter stage.
//!
//! All predicates within a domain compose with logical AND. Every option at
//! its default narrows nothing, so an all-defaults configuration is the
//! identity on the candidate set.

use super::Predicate;
use crate::store::{Flight, Hotel, TravelPackage};

/// Inclusive price range. The default spans everything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The unconstrained range.
    pub fn full() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Trip-length bucket for packages, computed from the structured day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationBucket {
    #[default]
    All,
    /// 5 days or fewer.
    Short,
    /// 6 to 10 days.
    Medium,
    /// More than 10 days.
    Long,
}

impl DurationBucket {
    pub const ALL_BUCKETS: [DurationBucket; 4] = [
        DurationBucket::All,
        DurationBucket::Short,
        DurationBucket::Medium,
        DurationBucket::Long,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::All => "all",
            DurationBucket::Short => "short",
            DurationBucket::Medium => "medium",
            DurationBucket::Long => "long",
        }
    }

    /// Parse a bucket name; unknown names impose no constraint.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(DurationBucket::All),
            "short" => Some(DurationBucket::Short),
            "medium" => Some(DurationBucket::Medium),
            "long" => Some(DurationBucket::Long),
            _ => None,
        }
    }

    pub fn admits(&self, days: u32) -> bool {
        match self {
            DurationBucket::All => true,
            DurationBucket::Short => days <= 5,
            DurationBucket::Medium => days > 5 && days <= 10,
            DurationBucket::Long => days > 10,
        }
    }
}

/// Filter configuration for the flights pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightFilters {
    pub price: PriceRange,
    /// When true, excludes any flight with at least one stop.
    pub direct_only: bool,
}

impl Predicate<Flight> for FlightFilters {
    fn matches(&self, record: &Flight) -> bool {
        if self.direct_only && record.stops > 0 {
            return false;
        }
        self.price.contains(record.price)
    }
}

/// Filter configuration for the hotels pipeline. Price is per night.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelFilters {
    pub price: PriceRange,
    /// Minimum guest rating; 0.0 admits everything.
    pub min_rating: f64,
}

impl Predicate<Hotel> for HotelFilters {
    fn matches(&self, record: &Hotel) -> bool {
        self.price.contains(record.price) && record.rating >= self.min_rating
    }
}

/// Filter configuration for the packages pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageFilters {
    pub price: PriceRange,
    pub duration: DurationBucket,
}

impl Predicate<TravelPackage> for PackageFilters {
    fn matches(&self, record: &TravelPackage) -> bool {
        self.price.contains(record.price) && self.duration.admits(record.duration.days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{MatchAll, Pipeline};
    use crate::store::Flight;
    use crate::test_utils;

    fn flights_with_prices(prices: &[f64]) -> Vec<Flight> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| test_utils::flight(&format!("f{}", i), "A", "B", p, 120, 0))
            .collect()
    }

    #[test]
    fn test_default_flight_filters_are_identity() {
        let flights = flights_with_prices(&[650.0, 1200.0, 180.0]);
        let filters = FlightFilters::default();
        let kept: Vec<&Flight> = flights.iter().filter(|f| filters.matches(f)).collect();
        assert_eq!(kept.len(), flights.len());
    }

    #[test]
    fn test_default_hotel_filters_are_identity() {
        let hotels = vec![
            test_utils::hotel("h1", "A", "X", 220.0, 4.7),
            test_utils::hotel("h2", "B", "Y", 580.0, 0.0),
        ];
        let filters = HotelFilters::default();
        assert!(hotels.iter().all(|h| filters.matches(h)));
    }

    #[test]
    fn test_default_package_filters_are_identity() {
        let packages = vec![
            test_utils::package("p1", "A", "X", 5, 1200.0, 98),
            test_utils::package("p2", "B", "Y", 14, 2800.0, 92),
        ];
        let filters = PackageFilters::default();
        assert!(packages.iter().all(|p| filters.matches(p)));
    }

    #[test]
    fn test_price_range_inclusive_bounds() {
        let range = PriceRange::new(150.0, 650.0);
        assert!(range.contains(150.0));
        assert!(range.contains(650.0));
        assert!(!range.contains(149.99));
        assert!(!range.contains(650.01));
    }

    #[test]
    fn test_price_range_filter_concrete_set() {
        // [0, 200] over {650, 1200, 180, 750, 980, 220, 150, 320} keeps
        // exactly {180, 150}; ascending price sort yields [150, 180].
        let flights =
            flights_with_prices(&[650.0, 1200.0, 180.0, 750.0, 980.0, 220.0, 150.0, 320.0]);
        let pipeline = Pipeline::new(
            Box::new(MatchAll),
            Box::new(FlightFilters {
                price: PriceRange::new(0.0, 200.0),
                direct_only: false,
            }),
            Some(crate::pipeline::sort::FlightSort::Price.comparator()),
        );
        let results = pipeline.run(&flights);
        let prices: Vec<f64> = results.iter().map(|f| f.price).collect();
        assert_eq!(prices, vec![150.0, 180.0]);
    }

    #[test]
    fn test_direct_only_excludes_stops() {
        let filters = FlightFilters {
            price: PriceRange::full(),
            direct_only: true,
        };
        assert!(filters.matches(&test_utils::flight("f1", "A", "B", 100.0, 60, 0)));
        assert!(!filters.matches(&test_utils::flight("f2", "A", "B", 100.0, 60, 1)));
        assert!(!filters.matches(&test_utils::flight("f3", "A", "B", 100.0, 60, 2)));
    }

    #[test]
    fn test_direct_only_off_admits_stops() {
        let filters = FlightFilters::default();
        assert!(filters.matches(&test_utils::flight("f1", "A", "B", 100.0, 60, 2)));
    }

    #[test]
    fn test_min_rating_threshold_inclusive() {
        let filters = HotelFilters {
            price: PriceRange::full(),
            min_rating: 4.7,
        };
        assert!(filters.matches(&test_utils::hotel("h1", "A", "X", 220.0, 4.7)));
        assert!(filters.matches(&test_utils::hotel("h2", "B", "X", 220.0, 4.9)));
        assert!(!filters.matches(&test_utils::hotel("h3", "C", "X", 220.0, 4.6)));
    }

    #[test]
    fn test_duration_bucket_boundaries() {
        assert!(DurationBucket::Short.admits(5));
        assert!(!DurationBucket::Short.admits(6));
        assert!(DurationBucket::Medium.admits(6));
        assert!(DurationBucket::Medium.admits(10));
        assert!(!DurationBucket::Medium.admits(5));
        assert!(!DurationBucket::Medium.admits(11));
        assert!(DurationBucket::Long.admits(11));
        assert!(!DurationBucket::Long.admits(10));
        assert!(DurationBucket::All.admits(1));
        assert!(DurationBucket::All.admits(30));
    }

    #[test]
    fn test_duration_bucket_parse() {
        assert_eq!(DurationBucket::parse("short"), Some(DurationBucket::Short));
        assert_eq!(DurationBucket::parse("all"), Some(DurationBucket::All));
        assert_eq!(DurationBucket::parse("fortnight"), None);
    }

    #[test]
    fn test_package_filters_compose_with_and() {
        let filters = PackageFilters {
            price: PriceRange::new(0.0, 2000.0),
            duration: DurationBucket::Medium,
        };
        // In range and medium length.
        assert!(filters.matches(&test_utils::package("p1", "A", "X", 7, 1800.0, 90)));
        // Right length, too expensive.
        assert!(!filters.matches(&test_utils::package("p2", "B", "X", 7, 2200.0, 90)));
        // Right price, too short.
        assert!(!filters.matches(&test_utils::package("p3", "C", "X", 5, 1200.0, 90)));
    }
}
