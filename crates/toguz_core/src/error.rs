//! Error taxonomy for the game core.
//!
//! All three conditions are expected and recoverable: the controller
//! rejects the offending input, leaves state and history untouched, and
//! surfaces the error as status text rather than a fault.

use crate::board::MoveId;
use derive_more::{Display, Error, From};

/// A move identifier the rules engine does not accept in the current
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("pit {mv} is not a legal move in this position")]
pub struct IllegalMove {
    /// The rejected move.
    #[error(not(source))]
    pub mv: MoveId,
}

/// A rewind or truncate target outside the valid ply range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("ply {ply} is outside the history range 0..={len}")]
pub struct OutOfRange {
    /// The requested ply.
    pub ply: usize,
    /// Current history length.
    pub len: usize,
}

/// Any recoverable failure of a controller operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The submitted move is not legal.
    IllegalMove(IllegalMove),
    /// The rewind target does not exist.
    OutOfRange(OutOfRange),
    /// A move was attempted after the game ended.
    #[display("the game is over; no further moves are accepted")]
    TerminalState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_pit() {
        let err = IllegalMove {
            mv: MoveId::new(4).unwrap(),
        };
        assert_eq!(err.to_string(), "pit 5 is not a legal move in this position");
    }

    #[test]
    fn converts_into_game_error() {
        let err: GameError = OutOfRange { ply: 7, len: 3 }.into();
        assert!(matches!(err, GameError::OutOfRange(_)));
    }
}
