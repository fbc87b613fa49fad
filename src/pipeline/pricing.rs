//! Age-banded fare derivation for flights.
//!
//! A pure transform from base price and passenger age to the charged fare.
//! No rounding happens here; display formatting is a presentation concern.

use std::fmt;

/// Fare band for a passenger age. Bands are half-open and non-overlapping:
/// exactly 2 is a child, exactly 12 an adult, exactly 65 a senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FareBand {
    /// Under 2 years: 10% of the adult fare.
    Infant,
    /// 2 to 11 years: 75% of the adult fare.
    Child,
    /// 65 and over: 90% of the adult fare.
    Senior,
    /// Full fare.
    Adult,
}

impl FareBand {
    pub fn for_age(age: u32) -> Self {
        if age < 2 {
            FareBand::Infant
        } else if age < 12 {
            FareBand::Child
        } else if age >= 65 {
            FareBand::Senior
        } else {
            FareBand::Adult
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            FareBand::Infant => 0.10,
            FareBand::Child => 0.75,
            FareBand::Senior => 0.90,
            FareBand::Adult => 1.0,
        }
    }

    /// Short description for the fare hint in the filter panel.
    pub fn hint(&self) -> &'static str {
        match self {
            FareBand::Infant => "Infant: 10% of adult fare",
            FareBand::Child => "Child: 75% of adult fare",
            FareBand::Senior => "Senior: 90% of adult fare",
            FareBand::Adult => "Adult: full fare",
        }
    }
}

impl fmt::Display for FareBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FareBand::Infant => "infant",
            FareBand::Child => "child",
            FareBand::Senior => "senior",
            FareBand::Adult => "adult",
        };
        f.write_str(name)
    }
}

/// Fare for a passenger of the given age, unrounded.
pub fn fare_for_age(base_price: f64, age: u32) -> f64 {
    base_price * FareBand::for_age(age).multiplier()
}
