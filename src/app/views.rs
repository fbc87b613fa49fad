//! Per-section view state.
//!
//! Each results section owns its query fields, filter configuration, sort
//! key, current results and the plumbing for one in-flight background
//! search. The admin section owns the reservation working copy instead.

use crate::admin::{AdminBoard, ReservationFilter};
use crate::pipeline::filters::{FlightFilters, HotelFilters, PackageFilters};
use crate::pipeline::sort::{FlightSort, HotelSort, PackageSort};
use crate::search::{RequestTracker, SearchOutcome};
use crate::store::{Catalog, Flight, Hotel, TravelPackage};
use std::sync::mpsc::Receiver;

/// Whether a section is waiting on a background search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// Flights results view.
#[derive(Default)]
pub struct FlightsView {
    pub origin: String,
    pub destination: String,
    pub filters: FlightFilters,
    pub sort: FlightSort,
    /// Passenger age for the fare display, clamped to `[1, 99]`.
    pub age: u32,
    pub results: Vec<Flight>,
    pub load: LoadState,
    pub selected: usize,
    pub tracker: RequestTracker,
    pub receiver: Option<Receiver<SearchOutcome>>,
}

/// Hotels results view.
#[derive(Default)]
pub struct HotelsView {
    pub location: String,
    pub filters: HotelFilters,
    pub sort: HotelSort,
    pub results: Vec<Hotel>,
    pub load: LoadState,
    pub selected: usize,
    pub tracker: RequestTracker,
    pub receiver: Option<Receiver<SearchOutcome>>,
}

/// Packages results view.
#[derive(Default)]
pub struct PackagesView {
    pub destination: String,
    pub filters: PackageFilters,
    pub sort: PackageSort,
    pub results: Vec<TravelPackage>,
    pub load: LoadState,
    pub selected: usize,
    pub tracker: RequestTracker,
    pub receiver: Option<Receiver<SearchOutcome>>,
}

/// Admin dashboard view over the reservation working copy.
pub struct AdminView {
    pub board: AdminBoard,
    pub filter: ReservationFilter,
    pub selected: usize,
}

impl AdminView {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            board: AdminBoard::new(&catalog.reservations),
            filter: ReservationFilter::default(),
            selected: 0,
        }
    }

    /// Id of the reservation currently selected in the filtered table.
    pub fn selected_id(&self) -> Option<String> {
        self.board
            .filtered(&self.filter)
            .get(self.selected)
            .map(|r| r.id.clone())
    }
}
