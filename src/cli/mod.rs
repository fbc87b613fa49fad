//! CLI subcommand infrastructure for tripdeck.
//!
//! Provides subcommand definitions for headless searches, destination
//! recommendations and config management. Without a subcommand the binary
//! launches the TUI.

use clap::{Args, Subcommand, ValueEnum};

/// Available subcommands for tripdeck.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a search pipeline and print the results
    Search(SearchArgs),

    /// Show one catalog record by id
    Show(ShowArgs),

    /// Show popular and in-season destinations
    Explore(ExploreArgs),

    /// Config file commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Which catalog a headless search runs against.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Flights,
    Hotels,
    Packages,
}

/// Arguments for the search subcommand.
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// What to search
    #[arg(value_enum)]
    pub domain: Domain,

    /// Origin substring (flights)
    #[arg(long)]
    pub from: Option<String>,

    /// Destination substring (flights, packages)
    #[arg(long)]
    pub to: Option<String>,

    /// Location substring (hotels)
    #[arg(long)]
    pub location: Option<String>,

    /// Minimum price (inclusive)
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price (inclusive)
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Direct flights only
    #[arg(long)]
    pub direct_only: bool,

    /// Minimum hotel rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Package duration bucket: all, short, medium or long
    #[arg(long)]
    pub duration: Option<String>,

    /// Sort key (unknown keys keep catalog order)
    #[arg(long)]
    pub sort: Option<String>,

    /// Passenger age for fare display (flights)
    #[arg(long)]
    pub age: Option<u32>,

    /// Regex matched against names (route, airline, hotel or package name)
    #[arg(long)]
    pub pattern: Option<String>,

    /// Output JSON instead of a human-readable listing
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the show subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Which catalog the id belongs to
    #[arg(value_enum)]
    pub domain: Domain,

    /// Record id, e.g. f1, h3 or p2
    pub id: String,
}

/// Arguments for the explore subcommand.
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// Output JSON instead of a human-readable listing
    #[arg(long)]
    pub json: bool,
}

/// Config subcommand actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the config file
    Validate,
    /// Show effective configuration
    Show,
}
