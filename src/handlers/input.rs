//! Handle keyboard input and return corresponding events.
//!
//! Does not mutate app state directly - returns events to be processed.

use crate::app::{App, InputMode};
use crate::event::{AppEvent, QueryField, Section};
use crate::store::ReservationStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_input_event(key: KeyEvent, app: &App) -> Vec<AppEvent> {
    // If help is showing, most keys just hide help (except quit)
    if app.show_help {
        return handle_help_mode(key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(key, app),
        _ => handle_text_input_mode(key),
    }
}

/// Handle keyboard input when help overlay is showing
fn handle_help_mode(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char('q') => vec![AppEvent::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![AppEvent::Quit]
        }
        // Any other key hides help
        _ => vec![AppEvent::HideHelp],
    }
}

/// Handle keyboard input while editing a text field (query, price range or
/// login credentials).
fn handle_text_input_mode(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char(c) => vec![AppEvent::InputChar(c)],
        KeyCode::Backspace => vec![AppEvent::InputBackspace],
        KeyCode::Enter => vec![AppEvent::InputSubmit],
        KeyCode::Esc => vec![AppEvent::InputCancel],
        KeyCode::Left => vec![AppEvent::CursorLeft],
        KeyCode::Right => vec![AppEvent::CursorRight],
        KeyCode::Home => vec![AppEvent::CursorHome],
        KeyCode::End => vec![AppEvent::CursorEnd],
        _ => vec![],
    }
}

/// Handle keyboard input in normal navigation mode
fn handle_normal_mode(key: KeyEvent, app: &App) -> Vec<AppEvent> {
    // Global keys first
    match key.code {
        KeyCode::Char('q') => return vec![AppEvent::Quit],
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return vec![AppEvent::Quit]
        }
        KeyCode::Char('?') => return vec![AppEvent::ShowHelp],
        KeyCode::Down | KeyCode::Char('j') => return vec![AppEvent::SelectNext],
        KeyCode::Up | KeyCode::Char('k') => return vec![AppEvent::SelectPrev],
        KeyCode::Char('g') => return vec![AppEvent::JumpToStart],
        KeyCode::Char('G') => return vec![AppEvent::JumpToEnd],
        KeyCode::Tab => return vec![AppEvent::NextSection],
        KeyCode::BackTab => return vec![AppEvent::PrevSection],
        KeyCode::Char('1') => return vec![AppEvent::SelectSection(Section::Flights)],
        KeyCode::Char('2') => return vec![AppEvent::SelectSection(Section::Hotels)],
        KeyCode::Char('3') => return vec![AppEvent::SelectSection(Section::Packages)],
        KeyCode::Char('4') => return vec![AppEvent::SelectSection(Section::Admin)],
        _ => {}
    }

    match app.section {
        Section::Flights => handle_flights_keys(key),
        Section::Hotels => handle_hotels_keys(key),
        Section::Packages => handle_packages_keys(key),
        Section::Admin => handle_admin_keys(key),
    }
}

fn handle_flights_keys(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char('/') | KeyCode::Char('o') => {
            vec![AppEvent::StartQueryInput(QueryField::Origin)]
        }
        KeyCode::Char('t') => vec![AppEvent::StartQueryInput(QueryField::FlightDestination)],
        KeyCode::Char('p') => vec![AppEvent::StartPriceInput],
        KeyCode::Char('s') => vec![AppEvent::CycleSort],
        KeyCode::Char('x') => vec![AppEvent::ToggleDirectOnly],
        KeyCode::Char('+') | KeyCode::Char('=') => vec![AppEvent::AgeUp],
        KeyCode::Char('-') => vec![AppEvent::AgeDown],
        KeyCode::Char('b') | KeyCode::Enter => vec![AppEvent::BookSelected],
        KeyCode::Char('r') => vec![AppEvent::StartSearch],
        _ => vec![],
    }
}

fn handle_hotels_keys(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char('/') => vec![AppEvent::StartQueryInput(QueryField::Location)],
        KeyCode::Char('p') => vec![AppEvent::StartPriceInput],
        KeyCode::Char('s') => vec![AppEvent::CycleSort],
        KeyCode::Char(']') => vec![AppEvent::RaiseRatingFloor],
        KeyCode::Char('[') => vec![AppEvent::LowerRatingFloor],
        KeyCode::Char('b') | KeyCode::Enter => vec![AppEvent::BookSelected],
        KeyCode::Char('r') => vec![AppEvent::StartSearch],
        _ => vec![],
    }
}

fn handle_packages_keys(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char('/') => vec![AppEvent::StartQueryInput(QueryField::PackageDestination)],
        KeyCode::Char('p') => vec![AppEvent::StartPriceInput],
        KeyCode::Char('s') => vec![AppEvent::CycleSort],
        KeyCode::Char('u') => vec![AppEvent::CycleDurationBucket],
        KeyCode::Char('b') | KeyCode::Enter => vec![AppEvent::BookSelected],
        KeyCode::Char('r') => vec![AppEvent::StartSearch],
        _ => vec![],
    }
}

fn handle_admin_keys(key: KeyEvent) -> Vec<AppEvent> {
    match key.code {
        KeyCode::Char('/') => vec![AppEvent::StartQueryInput(QueryField::AdminTerm)],
        KeyCode::Char('f') => vec![AppEvent::CycleStatusFilter],
        KeyCode::Char('t') => vec![AppEvent::CycleKindFilter],
        KeyCode::Char('c') => vec![AppEvent::AdminSetStatus(ReservationStatus::Confirmed)],
        KeyCode::Char('w') => vec![AppEvent::AdminSetStatus(ReservationStatus::Pending)],
        KeyCode::Char('x') => vec![AppEvent::AdminSetStatus(ReservationStatus::Cancelled)],
        KeyCode::Char('d') => vec![AppEvent::AdminDelete],
        KeyCode::Char('L') => vec![AppEvent::Logout],
        _ => vec![],
    }
}
