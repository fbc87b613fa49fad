//! Help overlay.

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_TEXT: &[(&str, &str)] = &[
    ("1-4 / Tab", "switch section"),
    ("j/k or arrows", "move selection"),
    ("g / G", "jump to first / last row"),
    ("/", "edit the section's search field"),
    ("o / t", "flight origin / destination"),
    ("p", "price range (MIN-MAX)"),
    ("s", "cycle sort key"),
    ("x", "direct flights only"),
    ("+/-", "passenger age"),
    ("[ / ]", "hotel rating floor"),
    ("u", "package duration bucket"),
    ("b / Enter", "add selection to cart"),
    ("f / t (admin)", "status / type filter"),
    ("c w x (admin)", "confirm / pend / cancel"),
    ("d (admin)", "delete reservation"),
    ("L (admin)", "log out"),
    ("q / Ctrl-C", "quit"),
];

pub(super) fn render_help_overlay(f: &mut Frame, area: Rect, app: &App) {
    let ui = &app.theme.ui;

    let width = 52.min(area.width);
    let height = (HELP_TEXT.len() as u16 + 4).min(area.height);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines: Vec<Line> = vec![Line::default()];
    for (keys, description) in HELP_TEXT {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<14}", keys),
                Style::default().fg(ui.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(ui.fg)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ui.highlight))
        .title(" Help (any key to close) ");

    f.render_widget(Clear, overlay);
    f.render_widget(Paragraph::new(lines).block(block), overlay);
}
