//! Record store for the travel catalog.
//!
//! Holds the immutable collections the search pipelines read from: flights,
//! hotels, travel packages and the seed reservation list, plus destination
//! metadata used for recommendations. Catalog lookups are pure and never
//! mutate the collections; the admin dashboard works on its own copy (see
//! [`crate::admin`]).

pub mod catalog;

pub use catalog::Catalog;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag for a reservation, matching the catalog collection it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationKind {
    Flight,
    Hotel,
    Package,
}

impl ReservationKind {
    /// All kinds in display order (used for filter cycling and dashboards).
    pub const ALL: [ReservationKind; 3] = [
        ReservationKind::Flight,
        ReservationKind::Hotel,
        ReservationKind::Package,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReservationKind::Flight => "flight",
            ReservationKind::Hotel => "hotel",
            ReservationKind::Package => "package",
        }
    }
}

impl fmt::Display for ReservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reservation status. Any status may transition to any other; the admin
/// dashboard is an override tool, not a workflow engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Confirmed,
        ReservationStatus::Pending,
        ReservationStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Pending => "pending",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scheduled flight.
///
/// Duration is stored as total minutes; the `"7h 30m"` display label is
/// derived via [`Flight::duration_label`]. Storing the structured value keeps
/// duration sorting numeric instead of comparing formatted labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub id: String,
    pub from: String,
    pub to: String,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    pub airline: String,
    /// Base fare for an adult passenger. Age-banded fares are derived in
    /// [`crate::pipeline::pricing`].
    pub price: f64,
    pub duration_minutes: u32,
    pub stops: u32,
}

impl Flight {
    /// Human-readable duration, e.g. `"7h 30m"` or `"3h"`.
    pub fn duration_label(&self) -> String {
        let hours = self.duration_minutes / 60;
        let minutes = self.duration_minutes % 60;
        if minutes == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, minutes)
        }
    }

    /// Route label used as a reservation display name.
    pub fn route_label(&self) -> String {
        format!("{} to {}", self.from, self.to)
    }
}

/// A hotel with a per-night price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Price per night.
    pub price: f64,
    /// Guest rating in `[0.0, 5.0]`.
    pub rating: f64,
    pub description: String,
    pub amenities: Vec<String>,
}

/// Length of a package stay, stored structured.
///
/// The catalog keeps days and nights as numbers and derives the
/// `"5 days, 4 nights"` label for display, so duration-bucket filtering
/// never parses a formatted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayLength {
    pub days: u32,
    pub nights: u32,
}

impl fmt::Display for StayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} days, {} nights", self.days, self.nights)
    }
}

/// An all-inclusive travel package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: String,
    pub name: String,
    pub destination: String,
    pub duration: StayLength,
    pub price: f64,
    pub description: String,
    pub inclusions: Vec<String>,
    pub activities: Vec<String>,
    pub flight_included: bool,
    pub hotel_included: bool,
    /// Ranking key only; no upper bound is enforced.
    pub popularity: u32,
}

/// A booked item. Price is snapshotted at creation time and never recomputed
/// when the status changes or the originating item changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub kind: ReservationKind,
    pub item_id: String,
    pub item_name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub price: f64,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// A destination entry used for recommendations on the explore surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub country: String,
    /// Trend score; higher is more popular.
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn test_duration_label_with_minutes() {
        let flight = test_utils::flight("f1", "A", "B", 650.0, 450, 0);
        assert_eq!(flight.duration_label(), "7h 30m");
    }

    #[test]
    fn test_duration_label_whole_hours() {
        let flight = test_utils::flight("f1", "A", "B", 320.0, 180, 0);
        assert_eq!(flight.duration_label(), "3h");
    }

    #[test]
    fn test_stay_length_label() {
        let stay = StayLength { days: 5, nights: 4 };
        assert_eq!(stay.to_string(), "5 days, 4 nights");
    }

    #[test]
    fn test_status_serde_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, r#""confirmed""#);
        let back: ReservationStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(back, ReservationStatus::Cancelled);
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&ReservationKind::Package).unwrap();
        assert_eq!(json, r#""package""#);
    }
}
