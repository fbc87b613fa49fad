//! Result lists for the flights, hotels and packages sections.

use crate::app::{App, LoadState};
use crate::event::Section;
use crate::pipeline::pricing;
use crate::store::{Flight, Hotel, TravelPackage};
use crate::theme::UiColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub(super) fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let ui = app.theme.ui.clone();
    let (loading, count) = match app.section {
        Section::Flights => (app.flights.load == LoadState::Loading, app.flights.results.len()),
        Section::Hotels => (app.hotels.load == LoadState::Loading, app.hotels.results.len()),
        Section::Packages => (
            app.packages.load == LoadState::Loading,
            app.packages.results.len(),
        ),
        Section::Admin => return,
    };

    let title = if loading {
        format!(" {}: searching... ", app.section.title())
    } else {
        format!(" {} | {} found ", app.section.title(), count)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(title);

    if loading {
        f.render_widget(block, area);
        return;
    }

    let items: Vec<ListItem> = match app.section {
        Section::Flights => {
            let age = app.flights.age;
            app.flights
                .results
                .iter()
                .enumerate()
                .map(|(i, flight)| flight_item(flight, age, i == app.flights.selected, &ui))
                .collect()
        }
        Section::Hotels => app
            .hotels
            .results
            .iter()
            .enumerate()
            .map(|(i, hotel)| hotel_item(hotel, i == app.hotels.selected, &ui))
            .collect(),
        Section::Packages => app
            .packages
            .results
            .iter()
            .enumerate()
            .map(|(i, package)| package_item(package, i == app.packages.selected, &ui))
            .collect(),
        Section::Admin => vec![],
    };

    if items.is_empty() {
        let empty = List::new(vec![
            ListItem::new(""),
            ListItem::new(Line::from(Span::styled(
                "  No results found. Try adjusting your search or filters.",
                Style::default().fg(ui.muted),
            ))),
        ])
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    f.render_widget(List::new(items).block(block), area);
}

fn selected_style(selected: bool, ui: &UiColors) -> Style {
    if selected {
        Style::default().bg(ui.selection_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn flight_item<'a>(flight: &Flight, age: u32, selected: bool, ui: &UiColors) -> ListItem<'a> {
    let fare = pricing::fare_for_age(flight.price, age);
    let stops = if flight.stops == 0 {
        "Direct".to_string()
    } else {
        format!("{} stop{}", flight.stops, if flight.stops > 1 { "s" } else { "" })
    };

    let mut spans = vec![
        Span::styled(
            format!(" ${:<7.0}", fare),
            Style::default().fg(ui.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} -> {} ", flight.from, flight.to),
            Style::default().fg(ui.fg),
        ),
        Span::styled(
            format!("| {} | {} | {} ", flight.airline, flight.duration_label(), stops),
            Style::default().fg(ui.muted),
        ),
        Span::styled(
            format!("| dep {} ", flight.departure.format("%H:%M %d %b")),
            Style::default().fg(ui.muted),
        ),
    ];
    // Show the struck-through base fare when an age band discounts it.
    if fare != flight.price {
        spans.push(Span::styled(
            format!("(base ${:.0})", flight.price),
            Style::default()
                .fg(ui.muted)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    ListItem::new(Line::from(spans)).style(selected_style(selected, ui))
}

fn hotel_item<'a>(hotel: &Hotel, selected: bool, ui: &UiColors) -> ListItem<'a> {
    let spans = vec![
        Span::styled(
            format!(" ${:<7.0}", hotel.price),
            Style::default().fg(ui.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", hotel.name), Style::default().fg(ui.fg)),
        Span::styled(
            format!("| {} ", hotel.location),
            Style::default().fg(ui.muted),
        ),
        Span::styled(
            format!("| {:.1}{} ", hotel.rating, star_bar(hotel.rating)),
            Style::default().fg(ui.warning),
        ),
        Span::styled(
            format!("| {} amenities", hotel.amenities.len()),
            Style::default().fg(ui.muted),
        ),
    ];
    ListItem::new(Line::from(spans)).style(selected_style(selected, ui))
}

fn package_item<'a>(package: &TravelPackage, selected: bool, ui: &UiColors) -> ListItem<'a> {
    let included = match (package.flight_included, package.hotel_included) {
        (true, true) => "flight+hotel",
        (true, false) => "flight",
        (false, true) => "hotel",
        (false, false) => "activities only",
    };
    let spans = vec![
        Span::styled(
            format!(" ${:<7.0}", package.price),
            Style::default().fg(ui.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", package.name), Style::default().fg(ui.fg)),
        Span::styled(
            format!(
                "| {} | {} | {} ",
                package.destination, package.duration, included
            ),
            Style::default().fg(ui.muted),
        ),
        Span::styled(
            format!("| popularity {}", package.popularity),
            Style::default().fg(ui.accent),
        ),
    ];
    ListItem::new(Line::from(spans)).style(selected_style(selected, ui))
}

/// Compact star rendering for a 0-5 rating.
fn star_bar(rating: f64) -> String {
    let full = rating.floor() as usize;
    let empty = 5usize.saturating_sub(full);
    format!(" {}{}", "\u{2605}".repeat(full), "\u{2606}".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_bar_counts() {
        assert_eq!(star_bar(4.8), " ★★★★☆");
        assert_eq!(star_bar(5.0), " ★★★★★");
        assert_eq!(star_bar(0.0), " ☆☆☆☆☆");
    }
}
