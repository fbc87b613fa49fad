//! Admin dashboard: stat tiles, per-kind breakdown and the reservations
//! table over the working copy.

use crate::app::App;
use crate::store::{Reservation, ReservationStatus};
use crate::theme::UiColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// How many rows the recent-reservations panel shows.
const RECENT_ROWS: usize = 5;

pub(super) fn render_dashboard(f: &mut Frame, area: Rect, app: &mut App) {
    if !app.session.is_logged_in() {
        let ui = &app.theme.ui;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui.highlight))
            .title(" Admin ");
        let message = Paragraph::new(Line::from(Span::styled(
            " Log in to view the dashboard.",
            Style::default().fg(ui.muted),
        )))
        .block(block);
        f.render_widget(message, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // stat tiles
            Constraint::Length(5),                     // kind breakdown
            Constraint::Min(4),                        // reservations table
            Constraint::Length(RECENT_ROWS as u16 + 2), // recent
        ])
        .split(area);

    render_stat_tiles(f, chunks[0], app);
    render_kind_breakdown(f, chunks[1], app);
    render_reservation_table(f, chunks[2], app);
    render_recent(f, chunks[3], app);
}

fn render_stat_tiles(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let stats = app.admin.board.stats();

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
            Constraint::Ratio(1, 5),
        ])
        .split(area);

    let tile = |f: &mut Frame, area: Rect, title: &str, value: String, color| {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ui.muted))
            .title(format!(" {} ", title));
        let text = Paragraph::new(Line::from(Span::styled(
            format!(" {}", value),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(block);
        f.render_widget(text, area);
    };

    tile(f, tiles[0], "Total", stats.total.to_string(), ui.primary);
    tile(f, tiles[1], "Confirmed", stats.confirmed.to_string(), ui.success);
    tile(f, tiles[2], "Pending", stats.pending.to_string(), ui.warning);
    tile(f, tiles[3], "Cancelled", stats.cancelled.to_string(), ui.error);
    tile(
        f,
        tiles[4],
        "Revenue",
        format!("${:.0}", stats.total_revenue),
        ui.accent,
    );
}

fn render_kind_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let counts = app.admin.board.kind_counts();
    let max = counts.flights.max(counts.hotels).max(counts.packages).max(1);
    let width = area.width.saturating_sub(22) as usize;

    let row = |name: &str, count: usize| {
        let bar_max = width.min(24);
        let filled = (count * bar_max) / max;
        let bar: String = "\u{2588}".repeat(filled.max(usize::from(count > 0)));
        Line::from(vec![
            Span::styled(format!(" {:<10}", name), Style::default().fg(ui.fg)),
            Span::styled(format!("{:>4} ", count), Style::default().fg(ui.primary)),
            Span::styled(bar, Style::default().fg(ui.highlight)),
        ])
    };

    let items = vec![
        ListItem::new(row("flights", counts.flights)),
        ListItem::new(row("hotels", counts.hotels)),
        ListItem::new(row("packages", counts.packages)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(" Reservations by type ");
    f.render_widget(List::new(items).block(block), area);
}

fn render_reservation_table(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let filtered = app.admin.board.filtered(&app.admin.filter);
    let title = format!(" Reservations | {} shown ", filtered.len());

    let header = Line::from(Span::styled(
        format!(
            " {:<4} {:<8} {:<34} {:>9}  {:<10} {}",
            "Id", "Type", "Item", "Price", "Status", "Created"
        ),
        Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
    ));
    let mut items: Vec<ListItem> = vec![ListItem::new(header)];

    if filtered.is_empty() {
        items.push(ListItem::new(Line::from(Span::styled(
            " No reservations found. Try adjusting your filters.",
            Style::default().fg(ui.muted),
        ))));
    }

    let visible_rows = area.height.saturating_sub(3) as usize;
    let scroll = app.admin.selected.saturating_sub(visible_rows.saturating_sub(1));

    for (idx, reservation) in filtered.iter().enumerate().skip(scroll).take(visible_rows) {
        let mut item = ListItem::new(reservation_row(reservation, ui));
        if idx == app.admin.selected {
            item = item.style(
                Style::default()
                    .bg(ui.selection_bg)
                    .add_modifier(Modifier::BOLD),
            );
        }
        items.push(item);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(title);
    f.render_widget(List::new(items).block(block), area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let recent = app.admin.board.recent(RECENT_ROWS);

    let items: Vec<ListItem> = recent
        .iter()
        .map(|r| ListItem::new(reservation_row(r, ui)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(" Recent bookings ");
    f.render_widget(List::new(items).block(block), area);
}

fn reservation_row<'a>(reservation: &Reservation, ui: &UiColors) -> Line<'a> {
    let status_color = match reservation.status {
        ReservationStatus::Confirmed => ui.success,
        ReservationStatus::Pending => ui.warning,
        ReservationStatus::Cancelled => ui.error,
    };
    let item_name = truncated(&reservation.item_name, 34);
    Line::from(vec![
        Span::styled(
            format!(" {:<4} ", reservation.id),
            Style::default().fg(ui.muted),
        ),
        Span::styled(
            format!("{:<8} ", reservation.kind.label()),
            Style::default().fg(ui.fg),
        ),
        Span::styled(format!("{:<34} ", item_name), Style::default().fg(ui.fg)),
        Span::styled(
            format!("{:>9.0}  ", reservation.price),
            Style::default().fg(ui.primary),
        ),
        Span::styled(
            format!("{:<10} ", reservation.status.label()),
            Style::default().fg(status_color),
        ),
        Span::styled(
            reservation.created_at.format("%Y-%m-%d").to_string(),
            Style::default().fg(ui.muted),
        ),
    ])
}

fn truncated(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}\u{2026}", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncated_short_string_unchanged() {
        assert_eq!(truncated("Ocean View", 34), "Ocean View");
    }

    #[test]
    fn test_truncated_long_string_gets_ellipsis() {
        let long = "A very long reservation item name that overflows";
        let out = truncated(long, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('\u{2026}'));
    }
}
