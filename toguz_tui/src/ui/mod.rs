//! Frame composition: board pane, move table, status bar.

mod board;
mod history;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};

/// Draws one frame and records the pane layout on the app for click
/// routing.
pub fn draw(f: &mut Frame, app: &mut App) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(f.area());

    // Board pane takes ~70% of the width, move table the rest.
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(vertical[0]);

    let board_block = Block::default().title("Toguz Kumalak").borders(Borders::ALL);
    let board_inner = board_block.inner(panes[0]);
    f.render_widget(board_block, panes[0]);
    board::render_board(f, board_inner, app.displayed(), app.game());

    history::render_history(f, panes[1], app.game().history());

    let status = Paragraph::new(app.status())
        .block(Block::default().title("Status").borders(Borders::ALL));
    f.render_widget(status, vertical[1]);

    app.set_layout(board_inner, panes[1]);
}
