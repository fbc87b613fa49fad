//! Headless search: run one pipeline and print the results.

use crate::cli::{Domain, SearchArgs};
use crate::config;
use crate::pipeline::filters::{
    DurationBucket, FlightFilters, HotelFilters, PackageFilters, PriceRange,
};
use crate::pipeline::matcher::{FlightQuery, HotelQuery, PackageQuery};
use crate::pipeline::pricing;
use crate::pipeline::sort::{FlightSort, HotelSort, PackageSort};
use crate::pipeline::{Pipeline, Predicate};
use crate::store::{Catalog, Flight, Hotel, TravelPackage};
use colored::Colorize;
use regex::Regex;

/// Regex filter over display names, applied after the pipeline.
struct NamePattern(Regex);

impl Predicate<Flight> for NamePattern {
    fn matches(&self, record: &Flight) -> bool {
        self.0.is_match(&record.from)
            || self.0.is_match(&record.to)
            || self.0.is_match(&record.airline)
    }
}

impl Predicate<Hotel> for NamePattern {
    fn matches(&self, record: &Hotel) -> bool {
        self.0.is_match(&record.name)
    }
}

impl Predicate<TravelPackage> for NamePattern {
    fn matches(&self, record: &TravelPackage) -> bool {
        self.0.is_match(&record.name)
    }
}

pub fn run(args: &SearchArgs) -> Result<(), i32> {
    let discovery = config::discover();
    let cfg = config::load(&discovery).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;
    let catalog = config::load_catalog(&cfg).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    let pattern = match &args.pattern {
        Some(raw) => Some(NamePattern(Regex::new(raw).map_err(|e| {
            eprintln!("error: invalid pattern '{}': {}", raw, e);
            1
        })?)),
        None => None,
    };

    let price = PriceRange::new(
        args.min_price.unwrap_or(0.0),
        args.max_price.unwrap_or(f64::INFINITY),
    );

    match args.domain {
        Domain::Flights => {
            let query = FlightQuery {
                from: args.from.clone(),
                to: args.to.clone(),
            };
            let filters = FlightFilters {
                price,
                direct_only: args.direct_only,
            };
            // Unknown sort keys fall back to catalog order.
            let comparator = args
                .sort
                .as_deref()
                .and_then(FlightSort::parse)
                .map(|key| key.comparator());
            let pipeline = Pipeline::new(Box::new(query), Box::new(filters), comparator);
            let mut results = pipeline.run(&catalog.flights);
            if let Some(pattern) = &pattern {
                results.retain(|f| pattern.matches(f));
            }
            print_flights(&results, args)
        }
        Domain::Hotels => {
            let query = HotelQuery {
                location: args.location.clone(),
            };
            let filters = HotelFilters {
                price,
                min_rating: args.min_rating.unwrap_or(0.0),
            };
            let comparator = args
                .sort
                .as_deref()
                .and_then(HotelSort::parse)
                .map(|key| key.comparator());
            let pipeline = Pipeline::new(Box::new(query), Box::new(filters), comparator);
            let mut results = pipeline.run(&catalog.hotels);
            if let Some(pattern) = &pattern {
                results.retain(|h| pattern.matches(h));
            }
            print_hotels(&results, args)
        }
        Domain::Packages => {
            let query = PackageQuery {
                destination: args.to.clone(),
            };
            let filters = PackageFilters {
                price,
                duration: args
                    .duration
                    .as_deref()
                    .and_then(DurationBucket::parse)
                    .unwrap_or_default(),
            };
            let comparator = args
                .sort
                .as_deref()
                .and_then(PackageSort::parse)
                .map(|key| key.comparator());
            let pipeline = Pipeline::new(Box::new(query), Box::new(filters), comparator);
            let mut results = pipeline.run(&catalog.packages);
            if let Some(pattern) = &pattern {
                results.retain(|p| pattern.matches(p));
            }
            print_packages(&results, args)
        }
    }
}

fn to_json<T: serde::Serialize>(records: &[T]) -> Result<(), i32> {
    let rendered = serde_json::to_string_pretty(records).map_err(|e| {
        eprintln!("error: {}", e);
        1
    })?;
    println!("{}", rendered);
    Ok(())
}

fn print_flights(results: &[Flight], args: &SearchArgs) -> Result<(), i32> {
    if args.json {
        return to_json(results);
    }
    println!("{}", format!("{} flights found", results.len()).dimmed());
    for flight in results {
        let fare = pricing::fare_for_age(flight.price, args.age.unwrap_or(30));
        println!(
            "{:>8}  {}  {}  {}  {}",
            format!("${:.0}", fare).green().bold(),
            format!("{} -> {}", flight.from, flight.to).cyan(),
            flight.airline,
            flight.duration_label().dimmed(),
            if flight.stops == 0 {
                "direct".to_string()
            } else {
                format!("{} stops", flight.stops)
            }
            .dimmed(),
        );
    }
    Ok(())
}

fn print_hotels(results: &[Hotel], args: &SearchArgs) -> Result<(), i32> {
    if args.json {
        return to_json(results);
    }
    println!("{}", format!("{} hotels found", results.len()).dimmed());
    for hotel in results {
        println!(
            "{:>8}  {}  {}  {}",
            format!("${:.0}", hotel.price).green().bold(),
            hotel.name.cyan(),
            hotel.location,
            format!("{:.1}/5", hotel.rating).yellow(),
        );
    }
    Ok(())
}

fn print_packages(results: &[TravelPackage], args: &SearchArgs) -> Result<(), i32> {
    if args.json {
        return to_json(results);
    }
    println!("{}", format!("{} packages found", results.len()).dimmed());
    for package in results {
        println!(
            "{:>8}  {}  {}  {}  {}",
            format!("${:.0}", package.price).green().bold(),
            package.name.cyan(),
            package.destination,
            package.duration.to_string().dimmed(),
            format!("popularity {}", package.popularity).dimmed(),
        );
    }
    Ok(())
}
