//! TUI rendering.
//!
//! Layout: a tab bar on top, a filter side panel next to the results list
//! (or the admin dashboard), a status bar, and an input prompt line while
//! editing. The help overlay draws on top of everything.

mod dashboard;
mod help;
mod results_view;
mod side_panel;
mod status_bar;

use crate::app::App;
use crate::event::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the filter side panel.
const SIDE_PANEL_WIDTH: u16 = 34;

pub fn render(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tab bar
            Constraint::Min(1),    // content
            Constraint::Length(3), // status bar
            Constraint::Length(if app.is_entering_input() { 3 } else { 0 }),
        ])
        .split(f.area());

    render_tab_bar(f, outer[0], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Min(1)])
        .split(outer[1]);

    side_panel::render_side_panel(f, content[0], app);

    match app.section {
        Section::Admin => dashboard::render_dashboard(f, content[1], app),
        _ => results_view::render_results(f, content[1], app),
    }

    status_bar::render_status_bar(f, outer[2], app);

    if app.is_entering_input() {
        status_bar::render_input_prompt(f, outer[3], app);
    }

    if app.show_help {
        help::render_help_overlay(f, f.area(), app);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;
    let mut spans: Vec<Span> = vec![Span::styled(
        " tripdeck ",
        Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
    )];

    for (i, section) in Section::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, section.title());
        let style = if *section == app.section {
            Style::default()
                .fg(ui.primary)
                .bg(ui.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ui.muted)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
