//! Application state and event handling.

use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use toguz_core::{
    Advance, BoardState, EngineTicket, FirstLegal, GameController, GameError, MoveId, MovePolicy,
    Phase, Renderer, ScoopRules, Viewport,
};
use tracing::{debug, warn};

/// Events flowing back into the single-threaded UI loop.
#[derive(Debug)]
pub enum AppEvent {
    /// The controller requested a redraw of this state.
    Redraw(BoardState),
    /// A spawned engine computation finished.
    EngineMove {
        /// Snapshot the computation worked from.
        ticket: EngineTicket,
        /// The chosen move.
        mv: MoveId,
    },
}

/// Renderer that reports redraw requests into the event queue.
struct ChannelRenderer {
    events: mpsc::UnboundedSender<AppEvent>,
}

impl Renderer for ChannelRenderer {
    fn redraw(&mut self, state: &BoardState) {
        // A closed channel means the UI is shutting down; nothing to do.
        let _ = self.events.send(AppEvent::Redraw(state.clone()));
    }
}

/// How long the engine task pretends to think before answering.
const ENGINE_DELAY: Duration = Duration::from_millis(400);

/// Main application state.
pub struct App {
    game: GameController,
    policy: Arc<dyn MovePolicy + Send + Sync>,
    events: mpsc::UnboundedSender<AppEvent>,
    displayed: BoardState,
    status: String,
    board_inner: Rect,
    table_area: Rect,
}

impl App {
    /// Creates the application with a uniform `seeds`-per-pit start.
    pub fn new(seeds: u32, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        let initial = BoardState::with_seeds(seeds);
        let policy: Arc<dyn MovePolicy + Send + Sync> = Arc::new(FirstLegal);
        let game = GameController::new(
            Box::new(ScoopRules),
            Arc::clone(&policy),
            Box::new(ChannelRenderer {
                events: events.clone(),
            }),
            initial.clone(),
        );
        Self {
            game,
            policy,
            events,
            displayed: initial,
            status: "Your move. Click a pit on the bottom row.".to_string(),
            board_inner: Rect::default(),
            table_area: Rect::default(),
        }
    }

    /// The game session.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// The last state the controller asked to have drawn.
    pub fn displayed(&self) -> &BoardState {
        &self.displayed
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Records where this frame drew the two panes, for click routing.
    pub fn set_layout(&mut self, board_inner: Rect, table_area: Rect) {
        self.board_inner = board_inner;
        self.table_area = table_area;
    }

    /// Handles an event from the queue.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Redraw(state) => self.displayed = state,
            AppEvent::EngineMove { ticket, mv } => self.finish_engine_move(ticket, mv),
        }
    }

    /// Handles a left click at terminal cell `(column, row)`.
    pub fn click(&mut self, column: u16, row: u16) {
        if self.board_inner.contains((column, row).into()) {
            self.click_board(column, row);
        } else if self.table_area.contains((column, row).into()) {
            self.click_table(row);
        }
    }

    /// Restarts the game from the initial position.
    pub fn reset(&mut self) {
        self.game.reset();
        self.status = "New game. Click a pit on the bottom row.".to_string();
    }

    fn click_board(&mut self, column: u16, row: u16) {
        let area = self.board_inner;
        let viewport = Viewport::new(f64::from(area.width), f64::from(area.height));
        // Terminal rows grow downward; board geometry grows upward.
        let x = f64::from(column - area.x) + 0.5;
        let y = f64::from(area.height) - (f64::from(row - area.y) + 0.5);
        debug!(x, y, "board click");

        match self.game.click(viewport, x, y) {
            Ok(Advance::Applied { ply }) => {
                self.status = format!("You played {}.", self.notation_at(ply));
                self.after_transition();
            }
            Ok(Advance::Ignored) => {}
            Err(err) => self.report(err),
        }
    }

    fn click_table(&mut self, row: u16) {
        // Rows start below the block border and the header line.
        let Some(index) = row.checked_sub(self.table_area.y + 2) else {
            return;
        };
        let ply = index as usize + 1;
        if ply > self.game.history().len() {
            return;
        }
        match self.game.rewind_to(ply) {
            Ok(()) => {
                self.status = format!("Rewound to ply {ply}. Your move.");
            }
            // Out-of-range targets are a no-op by contract.
            Err(err) => debug!(%err, "rewind ignored"),
        }
    }

    fn finish_engine_move(&mut self, ticket: EngineTicket, mv: MoveId) {
        match self.game.complete_engine_move(&ticket, mv) {
            Ok(Advance::Applied { ply }) => {
                self.status = format!("AI played {}.", self.notation_at(ply));
                self.after_transition();
            }
            Ok(Advance::Ignored) => debug!(%mv, "stale engine move discarded"),
            Err(err) => {
                warn!(%err, "engine produced an illegal move");
                self.report(err);
            }
        }
    }

    // Spawn the automated reply if one is now owed, and surface the end
    // of the game.
    fn after_transition(&mut self) {
        match self.game.phase() {
            Phase::AwaitingEngine => {
                if let Some(ticket) = self.game.begin_engine_move() {
                    self.status.push_str(" AI is thinking...");
                    let policy = Arc::clone(&self.policy);
                    let events = self.events.clone();
                    tokio::spawn(async move {
                        tokio::time::sleep(ENGINE_DELAY).await;
                        if let Some(mv) = policy.choose(ticket.state(), ticket.legal_moves()) {
                            let _ = events.send(AppEvent::EngineMove { ticket, mv });
                        }
                    });
                }
            }
            Phase::Terminal => {
                let [bottom, top] = self.game.state().stores();
                self.status = format!(
                    "Game over! Kazans {bottom}:{top}. Press 'r' to restart or 'q' to quit."
                );
            }
            Phase::AwaitingHuman => {
                self.status.push_str(" Your move.");
            }
        }
    }

    fn report(&mut self, err: GameError) {
        self.status = match err {
            GameError::TerminalState => {
                "The game is over. Press 'r' to restart or 'q' to quit.".to_string()
            }
            other => format!("Invalid move: {other}. Try again."),
        };
    }

    fn notation_at(&self, ply: usize) -> String {
        self.game
            .history()
            .records()
            .get(ply - 1)
            .map(|r| r.notation().to_string())
            .unwrap_or_default()
    }
}
