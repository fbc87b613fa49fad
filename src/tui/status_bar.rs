//! Status bar and input prompt rendering.

use crate::app::{App, InputMode, STATUS_MESSAGE_SECS};
use crate::event::QueryField;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub(super) fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    let fresh_message = app
        .status_message
        .as_ref()
        .filter(|(_, t)| t.elapsed().as_secs() < STATUS_MESSAGE_SECS);

    let line = if let Some((message, _)) = fresh_message {
        Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(ui.success).add_modifier(Modifier::BOLD),
        ))
    } else {
        let position = if app.visible_count() == 0 {
            "-".to_string()
        } else {
            format!("{}/{}", app.selected() + 1, app.visible_count())
        };
        let session = if app.session.is_logged_in() {
            " | admin"
        } else {
            ""
        };
        Line::from(Span::styled(
            format!(
                " {} | Row {}{} | ? help | q quit",
                app.section.title(),
                position,
                session
            ),
            Style::default().fg(ui.fg),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.muted));
    f.render_widget(Paragraph::new(line).block(block), area);
}

pub(super) fn render_input_prompt(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    let title = match app.input_mode {
        InputMode::EnteringQuery(QueryField::Origin) => " From (city or airport) ",
        InputMode::EnteringQuery(QueryField::FlightDestination) => " To (city or airport) ",
        InputMode::EnteringQuery(QueryField::Location) => " Location ",
        InputMode::EnteringQuery(QueryField::PackageDestination) => " Destination ",
        InputMode::EnteringQuery(QueryField::AdminTerm) => " Search reservations ",
        InputMode::EnteringPrice => " Price range (MIN-MAX) ",
        InputMode::LoginUsername => " Username ",
        InputMode::LoginPassword => " Password ",
        InputMode::Normal => return,
    };

    // Credentials are masked; everything else echoes.
    let display = if app.input_mode == InputMode::LoginPassword {
        "\u{2022}".repeat(app.input_buffer.chars().count())
    } else {
        app.input_buffer.clone()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.accent))
        .title(title);
    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ui.accent)),
        Span::styled(display, Style::default().fg(ui.primary)),
    ]))
    .block(block);
    f.render_widget(prompt, area);

    // Place the terminal cursor after the typed prefix.
    let prefix = &app.input_buffer[..app.input_cursor];
    let cursor_x = area.x + 3 + prefix.width() as u16;
    f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
}
