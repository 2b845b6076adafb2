//! Move-history table pane.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table},
};
use toguz_core::MoveHistory;

/// Renders the `(#, Move)` table. Clicking a row rewinds to that ply.
pub fn render_history(f: &mut Frame, area: Rect, history: &MoveHistory) {
    let rows = history
        .as_table()
        .map(|(ply, notation)| Row::new(vec![ply.to_string(), notation.to_string()]));

    let table = Table::new(rows, [Constraint::Length(4), Constraint::Min(8)])
        .header(
            Row::new(vec!["#", "Move"])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .column_spacing(1)
        .style(Style::default().fg(Color::White))
        .block(Block::default().title("Moves").borders(Borders::ALL));

    f.render_widget(table, area);
}
