//! Board pane rendering.
//!
//! Pit placement comes from the same [`Viewport`] geometry the hit tester
//! uses, so a pit is always drawn where a click on it will land.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use toguz_core::{BoardState, GameController, PIT_COUNT, Side, Viewport};

/// Renders the two pit rows and the kazan column into `area`.
pub fn render_board(f: &mut Frame, area: Rect, state: &BoardState, game: &GameController) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let viewport = Viewport::new(f64::from(area.width), f64::from(area.height));
    let legal: Vec<usize> = game.legal_moves().iter().map(|m| m.pit()).collect();

    for pit in 0..PIT_COUNT {
        let Some((x, y)) = viewport.pit_center(pit) else {
            continue;
        };
        let Some(cell) = to_cell(area, x, y) else {
            continue;
        };
        let count = state.pit(pit).unwrap_or(0);
        let style = pit_style(count, legal.contains(&pit));
        render_label(f, area, cell, &format!("({count})"), style);
    }

    render_kazans(f, area, &viewport, state);
}

// Maps a point in board coordinates (origin bottom-left, y up) to the
// terminal cell it falls in.
fn to_cell(area: Rect, x: f64, y: f64) -> Option<(u16, u16)> {
    let col = x.floor();
    let row = f64::from(area.height) - 1.0 - y.floor();
    if col < 0.0 || row < 0.0 || col >= f64::from(area.width) || row >= f64::from(area.height) {
        return None;
    }
    Some((area.x + col as u16, area.y + row as u16))
}

fn pit_style(count: u32, legal: bool) -> Style {
    if legal {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if count == 0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    }
}

// Draws `text` centered on `cell`, clipped to the pane.
fn render_label(f: &mut Frame, area: Rect, cell: (u16, u16), text: &str, style: Style) {
    let width = text.len() as u16;
    let x = cell.0.saturating_sub(width / 2).max(area.x);
    let x = x.min(area.right().saturating_sub(width).max(area.x));
    let label = Rect {
        x,
        y: cell.1,
        width: width.min(area.width),
        height: 1,
    };
    f.render_widget(
        Paragraph::new(text.to_string())
            .style(style)
            .alignment(Alignment::Center),
        label,
    );
}

fn render_kazans(f: &mut Frame, area: Rect, viewport: &Viewport, state: &BoardState) {
    let ((left, bottom), (right, top)) = viewport.store_rect();
    let mid_x = (left + right) / 2.0;
    let upper_y = (top + bottom) / 2.0 + (top - bottom) / 4.0;
    let lower_y = (top + bottom) / 2.0 - (top - bottom) / 4.0;

    let style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    // Opponent's kazan above, mover's own row below, matching the board.
    if let Some(cell) = to_cell(area, mid_x, upper_y) {
        render_label(f, area, cell, &format!("[{}]", state.store(Side::Top)), style);
    }
    if let Some(cell) = to_cell(area, mid_x, lower_y) {
        render_label(
            f,
            area,
            cell,
            &format!("[{}]", state.store(Side::Bottom)),
            style,
        );
    }
}
