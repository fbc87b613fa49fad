//! Sort keys for the sort stage.
//!
//! Each domain has a fixed enumeration of keys. Comparators are handed to
//! [`super::Pipeline`], whose `sort_by` is stable: equal keys keep their
//! candidate-set order, so near-duplicate prices tie-break
//! deterministically. Flight duration compares the stored minute count, not
//! the formatted label (the label comparison the storefront UI originally
//! shipped ordered "10h" before "2h"; see DESIGN.md).
//!
//! `parse` returns `None` for unrecognized key names; callers treat that as
//! "no reordering".

use crate::store::{Flight, Hotel, TravelPackage};
use std::cmp::Ordering;

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Sort keys for flight results. All ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlightSort {
    #[default]
    Price,
    Duration,
    Departure,
    Arrival,
}

impl FlightSort {
    pub const ALL: [FlightSort; 4] = [
        FlightSort::Price,
        FlightSort::Duration,
        FlightSort::Departure,
        FlightSort::Arrival,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FlightSort::Price => "price",
            FlightSort::Duration => "duration",
            FlightSort::Departure => "departure",
            FlightSort::Arrival => "arrival",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(FlightSort::Price),
            "duration" => Some(FlightSort::Duration),
            "departure" => Some(FlightSort::Departure),
            "arrival" => Some(FlightSort::Arrival),
            _ => None,
        }
    }

    pub fn comparator(&self) -> Comparator<Flight> {
        match self {
            FlightSort::Price => Box::new(|a, b| a.price.total_cmp(&b.price)),
            FlightSort::Duration => {
                Box::new(|a, b| a.duration_minutes.cmp(&b.duration_minutes))
            }
            FlightSort::Departure => Box::new(|a, b| a.departure.cmp(&b.departure)),
            FlightSort::Arrival => Box::new(|a, b| a.arrival.cmp(&b.arrival)),
        }
    }
}

/// Sort keys for hotel results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelSort {
    #[default]
    Price,
    PriceDesc,
    /// Highest rated first.
    Rating,
}

impl HotelSort {
    pub const ALL: [HotelSort; 3] = [HotelSort::Price, HotelSort::PriceDesc, HotelSort::Rating];

    pub fn label(&self) -> &'static str {
        match self {
            HotelSort::Price => "price",
            HotelSort::PriceDesc => "price-desc",
            HotelSort::Rating => "rating",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(HotelSort::Price),
            "price-desc" => Some(HotelSort::PriceDesc),
            "rating" => Some(HotelSort::Rating),
            _ => None,
        }
    }

    pub fn comparator(&self) -> Comparator<Hotel> {
        match self {
            HotelSort::Price => Box::new(|a, b| a.price.total_cmp(&b.price)),
            HotelSort::PriceDesc => Box::new(|a, b| b.price.total_cmp(&a.price)),
            HotelSort::Rating => Box::new(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}

/// Sort keys for package results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageSort {
    Price,
    PriceDesc,
    /// Highest popularity score first.
    #[default]
    Popularity,
}

impl PackageSort {
    pub const ALL: [PackageSort; 3] = [
        PackageSort::Price,
        PackageSort::PriceDesc,
        PackageSort::Popularity,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PackageSort::Price => "price",
            PackageSort::PriceDesc => "price-desc",
            PackageSort::Popularity => "popularity",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(PackageSort::Price),
            "price-desc" => Some(PackageSort::PriceDesc),
            "popularity" => Some(PackageSort::Popularity),
            _ => None,
        }
    }

    pub fn comparator(&self) -> Comparator<TravelPackage> {
        match self {
            PackageSort::Price => Box::new(|a, b| a.price.total_cmp(&b.price)),
            PackageSort::PriceDesc => Box::new(|a, b| b.price.total_cmp(&a.price)),
            PackageSort::Popularity => Box::new(|a, b| b.popularity.cmp(&a.popularity)),
        }
    }
}
