//! Filter side panel for the active section.

use crate::app::App;
use crate::event::Section;
use crate::pipeline::pricing::FareBand;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub(super) fn render_side_panel(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    let mut lines: Vec<Line> = Vec::new();
    let label = |text: String| {
        Line::from(Span::styled(
            text,
            Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
        ))
    };
    let value = |text: String| Line::from(Span::styled(text, Style::default().fg(ui.fg)));
    let hint = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(ui.muted)))
    };

    match app.section {
        Section::Flights => {
            let view = &app.flights;
            lines.push(label(" From".into()));
            lines.push(value(format!("  {}", display_or_any(&view.origin))));
            lines.push(label(" To".into()));
            lines.push(value(format!("  {}", display_or_any(&view.destination))));
            lines.push(Line::default());
            lines.push(label(" Sort".into()));
            lines.push(value(format!("  {}", view.sort.label())));
            lines.push(label(" Price range".into()));
            lines.push(value(format!("  {}", range_label(view.filters.price))));
            lines.push(label(" Direct only".into()));
            lines.push(value(format!(
                "  {}",
                if view.filters.direct_only { "yes" } else { "no" }
            )));
            lines.push(Line::default());
            lines.push(label(" Passenger age".into()));
            lines.push(value(format!("  {}", view.age)));
            lines.push(hint("  fares vary by age band"));
            lines.push(value(format!("  {}", FareBand::for_age(view.age).hint())));
            lines.push(Line::default());
            lines.push(hint(" o/t query  p price  s sort"));
            lines.push(hint(" x direct  +/- age  b book"));
        }
        Section::Hotels => {
            let view = &app.hotels;
            lines.push(label(" Location".into()));
            lines.push(value(format!("  {}", display_or_any(&view.location))));
            lines.push(Line::default());
            lines.push(label(" Sort".into()));
            lines.push(value(format!("  {}", view.sort.label())));
            lines.push(label(" Price range (per night)".into()));
            lines.push(value(format!("  {}", range_label(view.filters.price))));
            lines.push(label(" Minimum rating".into()));
            lines.push(value(format!("  {:.1}", view.filters.min_rating)));
            lines.push(Line::default());
            lines.push(hint(" / query  p price  s sort"));
            lines.push(hint(" [/] rating floor  b book"));
        }
        Section::Packages => {
            let view = &app.packages;
            lines.push(label(" Destination".into()));
            lines.push(value(format!("  {}", display_or_any(&view.destination))));
            lines.push(Line::default());
            lines.push(label(" Sort".into()));
            lines.push(value(format!("  {}", view.sort.label())));
            lines.push(label(" Price range".into()));
            lines.push(value(format!("  {}", range_label(view.filters.price))));
            lines.push(label(" Duration".into()));
            lines.push(value(format!("  {}", view.filters.duration.label())));
            lines.push(Line::default());
            lines.push(hint(" / query  p price  s sort"));
            lines.push(hint(" u duration  b book"));
        }
        Section::Admin => {
            let filter = &app.admin.filter;
            lines.push(label(" Search".into()));
            lines.push(value(format!("  {}", display_or_any(&filter.term))));
            lines.push(label(" Status".into()));
            lines.push(value(format!(
                "  {}",
                filter.status.map_or("all", |s| s.label())
            )));
            lines.push(label(" Type".into()));
            lines.push(value(format!(
                "  {}",
                filter.kind.map_or("all", |k| k.label())
            )));
            lines.push(Line::default());
            lines.push(hint(" / search  f status  t type"));
            lines.push(hint(" c confirm  w pend  x cancel"));
            lines.push(hint(" d delete  L logout"));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(" Filters ");
    let items: Vec<ListItem> = lines.into_iter().map(ListItem::new).collect();
    f.render_widget(List::new(items).block(block), area);
}

fn display_or_any(field: &str) -> String {
    if field.trim().is_empty() {
        "(any)".to_string()
    } else {
        field.to_string()
    }
}

fn range_label(range: crate::pipeline::filters::PriceRange) -> String {
    if range.max.is_infinite() {
        if range.min == 0.0 {
            "any".to_string()
        } else {
            format!("${:.0}+", range.min)
        }
    } else {
        format!("${:.0} - ${:.0}", range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::filters::PriceRange;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(PriceRange::full()), "any");
        assert_eq!(range_label(PriceRange::new(100.0, 500.0)), "$100 - $500");
        assert_eq!(range_label(PriceRange::new(100.0, f64::INFINITY)), "$100+");
    }

    #[test]
    fn test_display_or_any() {
        assert_eq!(display_or_any(""), "(any)");
        assert_eq!(display_or_any("  "), "(any)");
        assert_eq!(display_or_any("paris"), "paris");
    }
}
