//! Toguz Kumalak interactive game core.
//!
//! The state and history machinery behind an interactive board-game front
//! end, with the rules themselves kept behind a pluggable contract:
//!
//! - **Board**: immutable [`BoardState`] snapshots; every move produces a
//!   fresh value and old snapshots stay valid for rewinding.
//! - **Rules**: the [`RulesEngine`] contract a real engine implements,
//!   plus the bundled [`ScoopRules`] placeholder and the pluggable
//!   [`MovePolicy`] used for automated replies.
//! - **History**: the [`MoveHistory`] ledger with rewind-and-truncate
//!   semantics.
//! - **Geometry**: the [`Viewport`] hit tester mapping pointer
//!   coordinates to pits.
//! - **Controller**: the [`GameController`] turn-alternation machine
//!   tying it all together, with epoch-based cancellation of in-flight
//!   engine replies.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toguz_core::{
//!     Advance, BoardState, FirstLegal, GameController, MoveId, Renderer, ScoopRules,
//! };
//!
//! struct NullRenderer;
//! impl Renderer for NullRenderer {
//!     fn redraw(&mut self, _state: &BoardState) {}
//! }
//!
//! let mut game = GameController::new(
//!     Box::new(ScoopRules),
//!     Arc::new(FirstLegal),
//!     Box::new(NullRenderer),
//!     BoardState::new(),
//! );
//!
//! let mv = MoveId::new(2).expect("pit 2 is on the board");
//! assert_eq!(game.apply_human_move(mv)?, Advance::Applied { ply: 1 });
//! game.apply_engine_move()?;
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), toguz_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod geometry;
mod history;
pub mod invariants;
mod rules;

pub use board::{BoardState, MoveId, Side, DEFAULT_SEEDS, PITS_PER_SIDE, PIT_COUNT};
pub use controller::{Advance, EngineTicket, GameController, Phase, Renderer};
pub use error::{GameError, IllegalMove, OutOfRange};
pub use geometry::Viewport;
pub use history::{Actor, MoveHistory, MoveRecord};
pub use rules::{FirstLegal, MovePolicy, RulesEngine, ScoopRules};
