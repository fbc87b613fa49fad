//! Main application state and event application.
//!
//! Input handlers translate keys into [`AppEvent`]s; `apply_event` is the
//! single place state changes happen. Searches run in the background via
//! [`crate::search::SearchEngine`]; their outcomes come back through the
//! same event path, guarded by per-view request trackers so a stale
//! outcome never overwrites a newer one.

pub mod views;

pub use views::{AdminView, FlightsView, HotelsView, LoadState, PackagesView};

use crate::auth::Session;
use crate::event::{AppEvent, QueryField, Section};
use crate::pipeline::filters::{DurationBucket, PriceRange};
use crate::pipeline::matcher::{FlightQuery, HotelQuery, PackageQuery};
use crate::pipeline::sort::{FlightSort, HotelSort, PackageSort};
use crate::pipeline::Pipeline;
use crate::search::{ResultSet, SearchEngine};
use crate::store::{Catalog, ReservationKind, ReservationStatus};
use crate::theme::Theme;
use std::sync::mpsc::TryRecvError;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How long a status message stays visible.
pub const STATUS_MESSAGE_SECS: u64 = 3;

/// Default passenger age (full fare).
const DEFAULT_AGE: u32 = 30;

/// Step for the hotel rating floor adjustments.
const RATING_STEP: f64 = 0.5;

/// Input mode for user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EnteringQuery(QueryField),
    /// Editing the price range as `MIN-MAX`.
    EnteringPrice,
    LoginUsername,
    LoginPassword,
}

/// Query seeds taken from the command line (the storefront's deep links).
#[derive(Debug, Clone, Default)]
pub struct QuerySeeds {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub location: Option<String>,
}

/// Main application state.
pub struct App {
    pub catalog: Arc<Catalog>,
    pub session: Session,
    pub theme: Theme,
    /// Artificial search latency; cosmetic, defaults to zero.
    pub latency: Duration,

    pub section: Section,
    pub flights: FlightsView,
    pub hotels: HotelsView,
    pub packages: PackagesView,
    pub admin: AdminView,

    pub input_mode: InputMode,
    pub input_buffer: String,
    /// Cursor position within the input buffer (byte offset).
    pub input_cursor: usize,
    /// Username captured by the first login step.
    pending_login_user: Option<String>,

    /// Temporary status message shown in the status bar.
    pub status_message: Option<(String, Instant)>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, theme: Theme, latency: Duration, session: Session) -> Self {
        let admin = AdminView::new(&catalog);
        let mut app = Self {
            catalog,
            session,
            theme,
            latency,
            section: Section::Flights,
            flights: FlightsView {
                age: DEFAULT_AGE,
                ..FlightsView::default()
            },
            hotels: HotelsView::default(),
            packages: PackagesView::default(),
            admin,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            input_cursor: 0,
            pending_login_user: None,
            status_message: None,
            show_help: false,
            should_quit: false,
        };
        app.trigger_all_searches();
        app
    }

    /// Apply deep-link query seeds and re-run the seeded pipelines.
    pub fn seed_queries(&mut self, seeds: QuerySeeds) {
        if let Some(origin) = seeds.origin {
            self.flights.origin = origin;
        }
        if let Some(destination) = seeds.destination {
            self.flights.destination = destination.clone();
            self.packages.destination = destination;
        }
        if let Some(location) = seeds.location {
            self.hotels.location = location;
        }
        self.trigger_all_searches();
    }

    // --- Input helpers ---

    pub fn is_entering_input(&self) -> bool {
        self.input_mode != InputMode::Normal
    }

    fn start_input(&mut self, mode: InputMode, initial: &str) {
        self.input_mode = mode;
        self.input_buffer = initial.to_string();
        self.input_cursor = self.input_buffer.len();
    }

    fn insert_char(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    fn backspace(&mut self) {
        if self.input_cursor == 0 {
            return;
        }
        let prev = prev_char_boundary(&self.input_buffer, self.input_cursor);
        self.input_buffer.drain(prev..self.input_cursor);
        self.input_cursor = prev;
    }

    fn cursor_left(&mut self) {
        self.input_cursor = prev_char_boundary(&self.input_buffer, self.input_cursor);
    }

    fn cursor_right(&mut self) {
        self.input_cursor = next_char_boundary(&self.input_buffer, self.input_cursor);
    }

    fn end_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.input_cursor = 0;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    // --- Search plumbing ---

    /// Spawn a background pipeline run for one results section.
    pub fn trigger_search(&mut self, section: Section) {
        let latency = self.latency;
        match section {
            Section::Flights => {
                let seq = self.flights.tracker.next_seq();
                let records = self.catalog.flights.clone();
                let query = FlightQuery::new(&self.flights.origin, &self.flights.destination);
                let filters = self.flights.filters.clone();
                let comparator = self.flights.sort.comparator();
                self.flights.load = LoadState::Loading;
                self.flights.receiver = Some(SearchEngine::run(seq, latency, move || {
                    let pipeline =
                        Pipeline::new(Box::new(query), Box::new(filters), Some(comparator));
                    ResultSet::Flights(pipeline.run(&records))
                }));
            }
            Section::Hotels => {
                let seq = self.hotels.tracker.next_seq();
                let records = self.catalog.hotels.clone();
                let query = HotelQuery::new(&self.hotels.location);
                let filters = self.hotels.filters.clone();
                let comparator = self.hotels.sort.comparator();
                self.hotels.load = LoadState::Loading;
                self.hotels.receiver = Some(SearchEngine::run(seq, latency, move || {
                    let pipeline =
                        Pipeline::new(Box::new(query), Box::new(filters), Some(comparator));
                    ResultSet::Hotels(pipeline.run(&records))
                }));
            }
            Section::Packages => {
                let seq = self.packages.tracker.next_seq();
                let records = self.catalog.packages.clone();
                let query = PackageQuery::new(&self.packages.destination);
                let filters = self.packages.filters.clone();
                let comparator = self.packages.sort.comparator();
                self.packages.load = LoadState::Loading;
                self.packages.receiver = Some(SearchEngine::run(seq, latency, move || {
                    let pipeline =
                        Pipeline::new(Box::new(query), Box::new(filters), Some(comparator));
                    ResultSet::Packages(pipeline.run(&records))
                }));
            }
            // Admin filtering is synchronous over the working copy.
            Section::Admin => {}
        }
    }

    fn trigger_all_searches(&mut self) {
        self.trigger_search(Section::Flights);
        self.trigger_search(Section::Hotels);
        self.trigger_search(Section::Packages);
    }

    /// Drain any completed background searches into events.
    pub fn poll_search_outcomes(&mut self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        for view_receiver in [
            &mut self.flights.receiver,
            &mut self.hotels.receiver,
            &mut self.packages.receiver,
        ] {
            if let Some(rx) = view_receiver.take() {
                match rx.try_recv() {
                    Ok(outcome) => {
                        events.extend(crate::handlers::search::handle_search_outcome(outcome));
                    }
                    Err(TryRecvError::Empty) => *view_receiver = Some(rx),
                    // A dead worker already surfaced its panic as an Error
                    // outcome, or never will; drop the receiver either way.
                    Err(TryRecvError::Disconnected) => {}
                }
            }
        }
        events
    }

    /// Number of rows in the active section's list.
    pub fn visible_count(&self) -> usize {
        match self.section {
            Section::Flights => self.flights.results.len(),
            Section::Hotels => self.hotels.results.len(),
            Section::Packages => self.packages.results.len(),
            Section::Admin => self.admin.board.filtered(&self.admin.filter).len(),
        }
    }

    fn selected_mut(&mut self) -> &mut usize {
        match self.section {
            Section::Flights => &mut self.flights.selected,
            Section::Hotels => &mut self.hotels.selected,
            Section::Packages => &mut self.packages.selected,
            Section::Admin => &mut self.admin.selected,
        }
    }

    pub fn selected(&self) -> usize {
        match self.section {
            Section::Flights => self.flights.selected,
            Section::Hotels => self.hotels.selected,
            Section::Packages => self.packages.selected,
            Section::Admin => self.admin.selected,
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.visible_count();
        let selected = self.selected_mut();
        if count == 0 {
            *selected = 0;
        } else if *selected >= count {
            *selected = count - 1;
        }
    }

    // --- Event application ---

    pub fn apply_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::ShowHelp => self.show_help = true,
            AppEvent::HideHelp => self.show_help = false,

            AppEvent::SelectNext => {
                let count = self.visible_count();
                let selected = self.selected_mut();
                if count > 0 && *selected + 1 < count {
                    *selected += 1;
                }
            }
            AppEvent::SelectPrev => {
                let selected = self.selected_mut();
                *selected = selected.saturating_sub(1);
            }
            AppEvent::JumpToStart => *self.selected_mut() = 0,
            AppEvent::JumpToEnd => {
                let count = self.visible_count();
                *self.selected_mut() = count.saturating_sub(1);
            }

            AppEvent::NextSection => self.switch_section(1),
            AppEvent::PrevSection => self.switch_section(-1),
            AppEvent::SelectSection(section) => self.enter_section(section),

            AppEvent::StartQueryInput(field) => {
                let initial = match field {
                    QueryField::Origin => self.flights.origin.clone(),
                    QueryField::FlightDestination => self.flights.destination.clone(),
                    QueryField::Location => self.hotels.location.clone(),
                    QueryField::PackageDestination => self.packages.destination.clone(),
                    QueryField::AdminTerm => self.admin.filter.term.clone(),
                };
                self.start_input(InputMode::EnteringQuery(field), &initial);
            }
            AppEvent::StartPriceInput => self.start_input(InputMode::EnteringPrice, ""),
            AppEvent::InputChar(c) => self.insert_char(c),
            AppEvent::InputBackspace => self.backspace(),
            AppEvent::CursorLeft => self.cursor_left(),
            AppEvent::CursorRight => self.cursor_right(),
            AppEvent::CursorHome => self.input_cursor = 0,
            AppEvent::CursorEnd => self.input_cursor = self.input_buffer.len(),
            AppEvent::InputCancel => {
                self.pending_login_user = None;
                self.end_input();
            }
            AppEvent::InputSubmit => self.submit_input(),

            AppEvent::CycleSort => self.cycle_sort(),
            AppEvent::ToggleDirectOnly => {
                if self.section == Section::Flights {
                    self.flights.filters.direct_only = !self.flights.filters.direct_only;
                    self.trigger_search(Section::Flights);
                }
            }
            AppEvent::RaiseRatingFloor => self.adjust_rating_floor(RATING_STEP),
            AppEvent::LowerRatingFloor => self.adjust_rating_floor(-RATING_STEP),
            AppEvent::CycleDurationBucket => {
                if self.section == Section::Packages {
                    let buckets = DurationBucket::ALL_BUCKETS;
                    let idx = buckets
                        .iter()
                        .position(|b| *b == self.packages.filters.duration)
                        .unwrap_or(0);
                    self.packages.filters.duration = buckets[(idx + 1) % buckets.len()];
                    self.trigger_search(Section::Packages);
                }
            }
            AppEvent::AgeUp => {
                if self.flights.age < 99 {
                    self.flights.age += 1;
                }
            }
            AppEvent::AgeDown => {
                if self.flights.age > 1 {
                    self.flights.age -= 1;
                }
            }

            AppEvent::StartSearch => self.trigger_search(self.section),
            AppEvent::SearchComplete { seq, results } => self.apply_results(seq, results),
            AppEvent::SearchFailed { seq, message } => self.apply_failure(seq, message),

            AppEvent::BookSelected => self.book_selected(),

            AppEvent::StartLogin => {
                self.pending_login_user = None;
                self.start_input(InputMode::LoginUsername, "");
            }
            AppEvent::Logout => {
                self.session.logout();
                self.set_status("Logged out successfully");
                if self.section == Section::Admin {
                    self.section = Section::Flights;
                }
            }

            AppEvent::AdminSetStatus(status) => self.admin_set_status(status),
            AppEvent::AdminDelete => self.admin_delete(),
            AppEvent::CycleStatusFilter => {
                self.admin.filter.status = cycle_option(self.admin.filter.status, &ReservationStatus::ALL);
                self.clamp_selection();
            }
            AppEvent::CycleKindFilter => {
                self.admin.filter.kind = cycle_option(self.admin.filter.kind, &ReservationKind::ALL);
                self.clamp_selection();
            }
        }
    }

    fn switch_section(&mut self, delta: i32) {
        let sections = Section::ALL;
        let idx = sections.iter().position(|s| *s == self.section).unwrap_or(0) as i32;
        let next = (idx + delta).rem_euclid(sections.len() as i32) as usize;
        self.enter_section(sections[next]);
    }

    fn enter_section(&mut self, section: Section) {
        self.section = section;
        if section == Section::Admin && !self.session.is_logged_in() {
            self.set_status("You need to be logged in to access the admin area");
            self.pending_login_user = None;
            self.start_input(InputMode::LoginUsername, "");
        }
    }

    fn cycle_sort(&mut self) {
        match self.section {
            Section::Flights => {
                self.flights.sort = cycle(self.flights.sort, &FlightSort::ALL);
                self.trigger_search(Section::Flights);
            }
            Section::Hotels => {
                self.hotels.sort = cycle(self.hotels.sort, &HotelSort::ALL);
                self.trigger_search(Section::Hotels);
            }
            Section::Packages => {
                self.packages.sort = cycle(self.packages.sort, &PackageSort::ALL);
                self.trigger_search(Section::Packages);
            }
            Section::Admin => {}
        }
    }

    fn adjust_rating_floor(&mut self, delta: f64) {
        if self.section == Section::Hotels {
            let floor = (self.hotels.filters.min_rating + delta).clamp(0.0, 5.0);
            self.hotels.filters.min_rating = floor;
            self.trigger_search(Section::Hotels);
        }
    }

    fn submit_input(&mut self) {
        match self.input_mode {
            InputMode::EnteringQuery(field) => {
                let value = self.input_buffer.clone();
                self.end_input();
                match field {
                    QueryField::Origin => {
                        self.flights.origin = value;
                        self.trigger_search(Section::Flights);
                    }
                    QueryField::FlightDestination => {
                        self.flights.destination = value;
                        self.trigger_search(Section::Flights);
                    }
                    QueryField::Location => {
                        self.hotels.location = value;
                        self.trigger_search(Section::Hotels);
                    }
                    QueryField::PackageDestination => {
                        self.packages.destination = value;
                        self.trigger_search(Section::Packages);
                    }
                    QueryField::AdminTerm => {
                        self.admin.filter.term = value;
                        self.clamp_selection();
                    }
                }
            }
            InputMode::EnteringPrice => {
                let value = self.input_buffer.clone();
                self.end_input();
                match parse_price_range(&value) {
                    Some(range) => self.set_price_range(range),
                    None => self.set_status(format!("Invalid price range: '{}'", value)),
                }
            }
            InputMode::LoginUsername => {
                self.pending_login_user = Some(self.input_buffer.clone());
                self.start_input(InputMode::LoginPassword, "");
            }
            InputMode::LoginPassword => {
                let username = self.pending_login_user.take().unwrap_or_default();
                let password = self.input_buffer.clone();
                self.end_input();
                if self.session.login(&username, &password) {
                    self.set_status("Login successful");
                } else {
                    self.set_status("Invalid credentials");
                    if self.section == Section::Admin {
                        self.section = Section::Flights;
                    }
                }
            }
            InputMode::Normal => {}
        }
    }

    fn set_price_range(&mut self, range: PriceRange) {
        match self.section {
            Section::Flights => {
                self.flights.filters.price = range;
                self.trigger_search(Section::Flights);
            }
            Section::Hotels => {
                self.hotels.filters.price = range;
                self.trigger_search(Section::Hotels);
            }
            Section::Packages => {
                self.packages.filters.price = range;
                self.trigger_search(Section::Packages);
            }
            Section::Admin => {}
        }
    }

    fn apply_results(&mut self, seq: u64, results: ResultSet) {
        match results {
            ResultSet::Flights(flights) => {
                if self.flights.tracker.should_apply(seq) {
                    self.flights.results = flights;
                    self.flights.load = LoadState::Ready;
                }
            }
            ResultSet::Hotels(hotels) => {
                if self.hotels.tracker.should_apply(seq) {
                    self.hotels.results = hotels;
                    self.hotels.load = LoadState::Ready;
                }
            }
            ResultSet::Packages(packages) => {
                if self.packages.tracker.should_apply(seq) {
                    self.packages.results = packages;
                    self.packages.load = LoadState::Ready;
                }
            }
        }
        self.clamp_selection();
    }

    fn apply_failure(&mut self, _seq: u64, message: String) {
        self.set_status(format!("Search failed: {}", message));
        for view_load in [
            &mut self.flights.load,
            &mut self.hotels.load,
            &mut self.packages.load,
        ] {
            if *view_load == LoadState::Loading {
                *view_load = LoadState::Ready;
            }
        }
    }

    fn book_selected(&mut self) {
        let message = match self.section {
            Section::Flights => self
                .flights
                .results
                .get(self.flights.selected)
                .map(|f| format!("Flight added to your cart: {}", f.route_label())),
            Section::Hotels => self
                .hotels
                .results
                .get(self.hotels.selected)
                .map(|h| format!("Hotel added to your cart: {} in {}", h.name, h.location)),
            Section::Packages => self
                .packages
                .results
                .get(self.packages.selected)
                .map(|p| format!("Package added to your cart: {} ({})", p.name, p.destination)),
            Section::Admin => None,
        };
        if let Some(message) = message {
            self.set_status(message);
        }
    }

    fn admin_set_status(&mut self, status: ReservationStatus) {
        if let Some(id) = self.admin.selected_id() {
            self.admin.board.set_status(&id, status);
            self.set_status(format!("Reservation status updated to {}", status));
            self.clamp_selection();
        }
    }

    fn admin_delete(&mut self) {
        if let Some(id) = self.admin.selected_id() {
            self.admin.board.delete(&id);
            self.set_status("Reservation deleted successfully");
            self.clamp_selection();
        }
    }
}

/// Cycle to the next value in a fixed enumeration.
fn cycle<T: Copy + PartialEq>(current: T, all: &[T]) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    all[(idx + 1) % all.len()]
}

/// Cycle None -> first -> ... -> last -> None.
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => {
            let idx = all.iter().position(|v| *v == value).unwrap_or(0);
            if idx + 1 < all.len() {
                Some(all[idx + 1])
            } else {
                None
            }
        }
    }
}

/// Parse a `MIN-MAX` price range. Either side may be blank for an open
/// bound; the whole string blank means the full range.
fn parse_price_range(input: &str) -> Option<PriceRange> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(PriceRange::full());
    }
    let (min_str, max_str) = trimmed.split_once('-')?;
    let min = if min_str.trim().is_empty() {
        0.0
    } else {
        min_str.trim().parse::<f64>().ok()?
    };
    let max = if max_str.trim().is_empty() {
        f64::INFINITY
    } else {
        max_str.trim().parse::<f64>().ok()?
    };
    if min < 0.0 || max < min {
        return None;
    }
    Some(PriceRange::new(min, max))
}

fn prev_char_boundary(s: &str, index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    let mut i = index - 1;
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn next_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    let mut i = index + 1;
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}
