//! Events that can occur in the application.
//!
//! Handlers return these events instead of mutating app state directly.

use crate::search::ResultSet;
use crate::store::ReservationStatus;

/// Section tabs, one per results pipeline plus the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Flights,
    Hotels,
    Packages,
    Admin,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Flights,
        Section::Hotels,
        Section::Packages,
        Section::Admin,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Flights => "Flights",
            Section::Hotels => "Hotels",
            Section::Packages => "Packages",
            Section::Admin => "Admin",
        }
    }
}

/// Which free-text query field an input edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    /// Flight origin.
    Origin,
    /// Flight destination.
    FlightDestination,
    /// Hotel location.
    Location,
    /// Package destination.
    PackageDestination,
    /// Admin reservation search term.
    AdminTerm,
}

/// Events produced by input handling and background search completion.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    // Selection / navigation
    SelectNext,
    SelectPrev,
    JumpToStart,
    JumpToEnd,
    NextSection,
    PrevSection,
    SelectSection(Section),

    // Text input
    StartQueryInput(QueryField),
    StartPriceInput,
    InputChar(char),
    InputBackspace,
    InputSubmit,
    InputCancel,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // Filter / sort adjustments
    CycleSort,
    ToggleDirectOnly,
    RaiseRatingFloor,
    LowerRatingFloor,
    CycleDurationBucket,
    AgeUp,
    AgeDown,

    // Pipeline runs
    StartSearch,
    SearchComplete { seq: u64, results: ResultSet },
    SearchFailed { seq: u64, message: String },

    // Booking (advisory only)
    BookSelected,

    // Admin session
    StartLogin,
    Logout,

    // Admin mutations
    AdminSetStatus(ReservationStatus),
    AdminDelete,
    CycleStatusFilter,
    CycleKindFilter,

    // Help overlay
    ShowHelp,
    HideHelp,

    // System
    Quit,
}
