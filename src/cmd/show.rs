//! Show one catalog record by id.

use crate::cli::{Domain, ShowArgs};
use crate::config;
use colored::Colorize;

pub fn run(args: &ShowArgs) -> Result<(), i32> {
    let discovery = config::discover();
    let cfg = config::load(&discovery).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;
    let catalog = config::load_catalog(&cfg).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    match args.domain {
        Domain::Flights => match catalog.flight_by_id(&args.id) {
            Some(flight) => {
                println!(
                    "{}  {}",
                    flight.id.dimmed(),
                    format!("{} -> {}", flight.from, flight.to).cyan().bold()
                );
                println!("  airline:   {}", flight.airline);
                println!("  departure: {}", flight.departure.format("%Y-%m-%d %H:%M UTC"));
                println!("  arrival:   {}", flight.arrival.format("%Y-%m-%d %H:%M UTC"));
                println!("  duration:  {}", flight.duration_label());
                println!(
                    "  stops:     {}",
                    if flight.stops == 0 {
                        "direct".to_string()
                    } else {
                        flight.stops.to_string()
                    }
                );
                println!("  price:     {}", format!("${:.0}", flight.price).green());
                Ok(())
            }
            None => not_found("flight", &args.id),
        },
        Domain::Hotels => match catalog.hotel_by_id(&args.id) {
            Some(hotel) => {
                println!("{}  {}", hotel.id.dimmed(), hotel.name.cyan().bold());
                println!("  location:  {}", hotel.location);
                println!("  rating:    {:.1}/5", hotel.rating);
                println!("  per night: {}", format!("${:.0}", hotel.price).green());
                println!("  {}", hotel.description.dimmed());
                println!("  amenities: {}", hotel.amenities.join(", "));
                Ok(())
            }
            None => not_found("hotel", &args.id),
        },
        Domain::Packages => match catalog.package_by_id(&args.id) {
            Some(package) => {
                println!("{}  {}", package.id.dimmed(), package.name.cyan().bold());
                println!("  destination: {}", package.destination);
                println!("  duration:    {}", package.duration);
                println!("  price:       {}", format!("${:.0}", package.price).green());
                println!("  popularity:  {}", package.popularity);
                println!("  {}", package.description.dimmed());
                println!("  inclusions:  {}", package.inclusions.join(", "));
                println!("  activities:  {}", package.activities.join(", "));
                Ok(())
            }
            None => not_found("package", &args.id),
        },
    }
}

fn not_found(kind: &str, id: &str) -> Result<(), i32> {
    eprintln!("error: no {} with id '{}'", kind, id);
    Err(1)
}
