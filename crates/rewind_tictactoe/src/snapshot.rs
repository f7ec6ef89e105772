//! Immutable board snapshots.

use super::outcome::Outcome;
use super::position::Position;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One complete board state at a point in history.
///
/// Snapshots are never mutated. A move derives a new snapshot with
/// [`Snapshot::successor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    board: Board,
    last_move: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Builds a snapshot from an arbitrary board, e.g. for analysis.
    pub fn from_parts(board: Board, last_move: Option<Position>) -> Self {
        Self { board, last_move }
    }

    /// Derives the snapshot produced by `player` marking `pos`.
    ///
    /// Does not check legality; callers go through
    /// [`is_legal_move`](crate::is_legal_move) first.
    pub fn successor(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with_mark(pos, player),
            last_move: Some(pos),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The move that produced this snapshot (`None` for the initial board).
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Evaluates this snapshot.
    pub fn outcome(&self) -> Outcome {
        super::rules::evaluate(self)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}
