//! Destination recommendations: trending and in-season picks.

use crate::cli::ExploreArgs;
use crate::config;
use crate::store::catalog::current_season;
use colored::Colorize;
use serde::Serialize;

#[derive(Serialize)]
struct ExploreOutput {
    season: &'static str,
    popular: Vec<crate::store::Destination>,
    seasonal: Vec<crate::store::Destination>,
}

pub fn run(args: &ExploreArgs) -> Result<(), i32> {
    let discovery = config::discover();
    let cfg = config::load(&discovery).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;
    let catalog = config::load_catalog(&cfg).map_err(|e| {
        eprintln!("{}", e);
        1
    })?;

    let season = current_season();
    let popular = catalog.destinations_by_popularity();
    let seasonal = catalog.seasonal_destinations(season);

    if args.json {
        let output = ExploreOutput {
            season: season.label(),
            popular,
            seasonal,
        };
        let rendered = serde_json::to_string_pretty(&output).map_err(|e| {
            eprintln!("error: {}", e);
            1
        })?;
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", "Trending destinations".bold());
    for destination in &popular {
        println!(
            "  {:>3}  {}  {}",
            destination.score.to_string().green(),
            destination.name.cyan(),
            destination.country.dimmed(),
        );
    }

    println!();
    println!("{}", format!("In season now ({})", season.label()).bold());
    if seasonal.is_empty() {
        println!("  {}", "no seasonal picks in the catalog".dimmed());
    }
    for destination in &seasonal {
        println!(
            "  {:>3}  {}  {}",
            destination.score.to_string().green(),
            destination.name.cyan(),
            destination.country.dimmed(),
        );
    }

    Ok(())
}
