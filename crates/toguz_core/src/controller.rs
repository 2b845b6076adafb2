//! Turn-alternation controller.
//!
//! Orchestrates the human and the automated opponent over a shared
//! [`MoveHistory`], delegating legality to the [`RulesEngine`] and
//! requesting a redraw after every completed transition. All mutable
//! state lives here: the current position reference, the ledger, the
//! phase, and the cancellation epoch.

use crate::board::{BoardState, MoveId};
use crate::error::GameError;
use crate::geometry::Viewport;
use crate::history::{Actor, MoveHistory};
use crate::rules::{MovePolicy, RulesEngine};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Where the turn-alternation machine currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Phase {
    /// Waiting for the human to pick a pit.
    AwaitingHuman,
    /// Waiting for the automated opponent's reply.
    AwaitingEngine,
    /// No side has a legal move; only a reset leaves this phase.
    Terminal,
}

/// Display collaborator. Called after every completed transition and
/// must tolerate arbitrarily frequent calls.
pub trait Renderer {
    /// Present `state` to the user.
    fn redraw(&mut self, state: &BoardState);
}

/// Snapshot handed to an engine-move computation.
///
/// The ticket pins the position and legal moves the computation should
/// work from, plus the epoch it was issued under. If the controller
/// rewinds before the computation resolves, the epoch moves on and the
/// completion is discarded instead of being applied to a stale position.
#[derive(Debug, Clone)]
pub struct EngineTicket {
    epoch: u64,
    state: BoardState,
    legal: Vec<MoveId>,
}

impl EngineTicket {
    /// The position the engine should move in.
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Legal moves in that position, ascending.
    pub fn legal_moves(&self) -> &[MoveId] {
        &self.legal
    }
}

/// Outcome of feeding a move into the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The move was applied and recorded at this ply.
    Applied {
        /// Ply number of the new history entry.
        ply: usize,
    },
    /// The input was valid but no longer relevant (wrong phase, or a
    /// stale engine ticket) and was discarded without touching state.
    Ignored,
}

/// Interactive game session: current position, ledger, rules, phase.
pub struct GameController {
    engine: Box<dyn RulesEngine>,
    policy: Arc<dyn MovePolicy + Send + Sync>,
    renderer: Box<dyn Renderer>,
    current: BoardState,
    history: MoveHistory,
    phase: Phase,
    epoch: u64,
}

impl GameController {
    /// New session starting from `initial`.
    pub fn new(
        engine: Box<dyn RulesEngine>,
        policy: Arc<dyn MovePolicy + Send + Sync>,
        renderer: Box<dyn Renderer>,
        initial: BoardState,
    ) -> Self {
        let phase = if engine.is_terminal(&initial) {
            Phase::Terminal
        } else {
            Phase::AwaitingHuman
        };
        Self {
            engine,
            policy,
            renderer,
            current: initial.clone(),
            history: MoveHistory::new(initial),
            phase,
            epoch: 0,
        }
    }

    /// The current position.
    pub fn state(&self) -> &BoardState {
        &self.current
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The move ledger.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Legal moves in the current position.
    pub fn legal_moves(&self) -> Vec<MoveId> {
        self.engine.legal_moves(&self.current)
    }

    // ─────────────────────────────────────────────────────────────
    //  Human moves
    // ─────────────────────────────────────────────────────────────

    /// Routes a pointer click through the hit tester and, if it lands on
    /// a pit, submits that pit as the human's move. Misses are ignored.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::apply_human_move`].
    pub fn click(&mut self, viewport: Viewport, x: f64, y: f64) -> Result<Advance, GameError> {
        match viewport.hit(x, y).and_then(MoveId::new) {
            Some(mv) => self.apply_human_move(mv),
            None => Ok(Advance::Ignored),
        }
    }

    /// Applies a human move in `AwaitingHuman` phase.
    ///
    /// On success the move is validated by the rules engine, recorded
    /// with a human tag, and a redraw is requested; the phase advances to
    /// `AwaitingEngine` if the opponent has a reply, `Terminal` otherwise.
    ///
    /// # Errors
    ///
    /// [`GameError::TerminalState`] if the game is over, and
    /// [`GameError::IllegalMove`] if the engine rejects the pit. Neither
    /// changes any state. A click that races the engine's reply
    /// (`AwaitingEngine`) is discarded as [`Advance::Ignored`].
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn apply_human_move(&mut self, mv: MoveId) -> Result<Advance, GameError> {
        match self.phase {
            Phase::Terminal => Err(GameError::TerminalState),
            Phase::AwaitingEngine => {
                debug!(%mv, "human move while engine reply pending; ignored");
                Ok(Advance::Ignored)
            }
            Phase::AwaitingHuman => self.advance(Actor::Human, mv),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Automated replies
    // ─────────────────────────────────────────────────────────────

    /// Opens an engine-move computation against the current position.
    /// Returns `None` outside `AwaitingEngine` phase.
    pub fn begin_engine_move(&self) -> Option<EngineTicket> {
        (self.phase == Phase::AwaitingEngine).then(|| EngineTicket {
            epoch: self.epoch,
            state: self.current.clone(),
            legal: self.engine.legal_moves(&self.current),
        })
    }

    /// Resolves an engine-move computation.
    ///
    /// The move is applied only if the ticket is still current: same
    /// epoch, still `AwaitingEngine`. A completion arriving after a
    /// rewind or reset resolves as [`Advance::Ignored`], never touching
    /// the fresher position.
    ///
    /// # Errors
    ///
    /// [`GameError::IllegalMove`] if the chosen move fails validation
    /// against the live position (an engine defect); state is unchanged.
    #[instrument(skip(self, ticket), fields(ticket_epoch = ticket.epoch, epoch = self.epoch))]
    pub fn complete_engine_move(
        &mut self,
        ticket: &EngineTicket,
        mv: MoveId,
    ) -> Result<Advance, GameError> {
        if ticket.epoch != self.epoch || self.phase != Phase::AwaitingEngine {
            info!(%mv, "discarding stale engine move");
            return Ok(Advance::Ignored);
        }
        self.advance(Actor::Engine, mv)
    }

    /// Synchronous engine reply: opens a ticket, consults the policy,
    /// and resolves immediately. For hosts that do not offload the
    /// engine onto a task of its own.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::complete_engine_move`].
    pub fn apply_engine_move(&mut self) -> Result<Advance, GameError> {
        let Some(ticket) = self.begin_engine_move() else {
            return Ok(Advance::Ignored);
        };
        match self.policy.choose(ticket.state(), ticket.legal_moves()) {
            Some(mv) => self.complete_engine_move(&ticket, mv),
            None => {
                warn!("move policy declined to choose; reply dropped");
                Ok(Advance::Ignored)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  History navigation
    // ─────────────────────────────────────────────────────────────

    /// Rewinds the session to the position after ply `ply` (the initial
    /// position for ply 0), discarding every later entry.
    ///
    /// Rewinding always hands the turn back to the human and bumps the
    /// cancellation epoch, so any engine reply still in flight resolves
    /// as stale.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfRange`] if `ply` exceeds the history length;
    /// nothing changes in that case.
    #[instrument(skip(self))]
    pub fn rewind_to(&mut self, ply: usize) -> Result<(), GameError> {
        self.history.truncate_to(ply)?;
        self.current = self.history.last_state().clone();
        self.epoch += 1;
        self.phase = if self.engine.is_terminal(&self.current) {
            Phase::Terminal
        } else {
            Phase::AwaitingHuman
        };
        info!(ply, phase = %self.phase, "rewound");
        self.renderer.redraw(&self.current);
        Ok(())
    }

    /// Starts the game over from the ledger's initial position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.rewind_to(0).expect("ply 0 is always in range");
    }

    // Shared transition: validate, record, redraw, advance the phase.
    fn advance(&mut self, actor: Actor, mv: MoveId) -> Result<Advance, GameError> {
        let next = self.engine.apply_move(&self.current, mv)?;
        let notation = actor.notation(mv);
        debug!(%notation, "move applied");

        self.current = next.clone();
        self.history.append(notation, next);
        let ply = self.history.len();

        self.phase = if self.engine.is_terminal(&self.current) {
            info!(ply, "no legal replies; game over");
            Phase::Terminal
        } else {
            match actor {
                Actor::Human => Phase::AwaitingEngine,
                Actor::Engine => Phase::AwaitingHuman,
            }
        };
        self.renderer.redraw(&self.current);
        Ok(Advance::Applied { ply })
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .field("plies", &self.history.len())
            .finish_non_exhaustive()
    }
}
