//! Shared record builders for unit tests.

use crate::store::{
    Flight, Hotel, Reservation, ReservationKind, ReservationStatus, StayLength, TravelPackage,
};
use chrono::{DateTime, TimeZone, Utc};

/// UTC timestamp from literal parts, for deterministic test data.
pub fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub fn flight(
    id: &str,
    from: &str,
    to: &str,
    price: f64,
    duration_minutes: u32,
    stops: u32,
) -> Flight {
    Flight {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        departure: ts(2024, 6, 1),
        arrival: ts(2024, 6, 1),
        airline: "Test Air".into(),
        price,
        duration_minutes,
        stops,
    }
}

pub fn hotel(id: &str, name: &str, location: &str, price: f64, rating: f64) -> Hotel {
    Hotel {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        price,
        rating,
        description: String::new(),
        amenities: vec![],
    }
}

pub fn package(
    id: &str,
    name: &str,
    destination: &str,
    days: u32,
    price: f64,
    popularity: u32,
) -> TravelPackage {
    TravelPackage {
        id: id.into(),
        name: name.into(),
        destination: destination.into(),
        duration: StayLength {
            days,
            nights: days.saturating_sub(1),
        },
        price,
        description: String::new(),
        inclusions: vec![],
        activities: vec![],
        flight_included: true,
        hotel_included: true,
        popularity,
    }
}

pub fn reservation(
    id: &str,
    kind: ReservationKind,
    item_name: &str,
    price: f64,
    status: ReservationStatus,
    created_at: DateTime<Utc>,
) -> Reservation {
    Reservation {
        id: id.into(),
        kind,
        item_id: format!("item-{}", id),
        item_name: item_name.into(),
        start_date: created_at,
        end_date: created_at,
        price,
        status,
        guests: None,
        created_at,
    }
}
