//! Branching move history with time travel.
//!
//! The history is an ordered list of immutable snapshots plus one pointer.
//! Jumping moves the pointer only. A move made from an earlier pointer cuts
//! the list after the pointer before appending, so the abandoned future is
//! gone for good.

use super::contracts::{Contract, MoveContract};
use super::error::{GameError, GameErrorKind};
use super::outcome::Outcome;
use super::position::Position;
use super::rules::evaluate;
use super::snapshot::Snapshot;
use super::types::Player;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Zero-based board coordinates of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    /// Row, 0-2.
    pub row: usize,
    /// Column, 0-2.
    pub col: usize,
}

impl Coordinates {
    /// Row and column counted from 1, for display.
    pub fn one_based(self) -> (usize, usize) {
        (self.row + 1, self.col + 1)
    }
}

impl From<Position> for Coordinates {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row(),
            col: pos.col(),
        }
    }
}

/// One entry of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveDescriptor {
    /// Index of the snapshot in the history (0 is game start).
    pub move_number: usize,
    /// Cell changed by this move; `None` for game start.
    pub coordinates: Option<Coordinates>,
}

impl MoveDescriptor {
    /// True for the entry describing the empty starting board.
    pub fn is_game_start(&self) -> bool {
        self.coordinates.is_none()
    }
}

/// The ordered snapshots of one game session plus the current pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    pointer: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            pointer: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snapshots: Vec<Snapshot>, pointer: usize) -> Self {
        Self { snapshots, pointer }
    }

    /// Starts a new game, discarding every snapshot.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn reset(&mut self) {
        info!("Starting new game");
        *self = Self::new();
    }

    /// Number of snapshots, including the initial board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the current snapshot.
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// All snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The snapshot selected by the pointer.
    pub fn current_snapshot(&self) -> &Snapshot {
        &self.snapshots[self.pointer]
    }

    /// Evaluates the current snapshot.
    pub fn current_outcome(&self) -> Outcome {
        evaluate(self.current_snapshot())
    }

    /// Player to move at the current pointer (X on even pointers).
    pub fn next_player(&self) -> Player {
        Player::for_move_count(self.pointer)
    }

    /// Places the next player's mark at `cell_index`.
    ///
    /// Occupied cells and moves after the game is decided are ignored: the
    /// history is unchanged and the current outcome is returned. Otherwise
    /// every snapshot after the pointer is discarded, the new snapshot is
    /// appended and the pointer moves onto it.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::CellOutOfRange`] if `cell_index` is not 0-8.
    #[instrument(skip(self), fields(pointer = self.pointer, len = self.snapshots.len()))]
    pub fn submit_move(&mut self, cell_index: usize) -> Result<Outcome, GameError> {
        let pos = Position::try_from(cell_index)
            .inspect_err(|e| warn!(error = %e, "Rejecting cell selection"))?;

        if let Err(reason) = MoveContract::pre(self, &pos) {
            debug!(%reason, "Ignoring cell selection");
            return Ok(self.current_outcome());
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let next = self.current_snapshot().successor(pos, player);
        let discarded = self.snapshots.len() - (self.pointer + 1);
        self.snapshots.truncate(self.pointer + 1);
        self.snapshots.push(next);
        self.pointer = self.snapshots.len() - 1;

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "Move postcondition failed: {:?}", checked);
        }

        let outcome = evaluate(&next);
        debug!(
            position = %pos,
            %player,
            discarded,
            pointer = self.pointer,
            %outcome,
            "Move accepted"
        );
        Ok(outcome)
    }

    /// Moves the pointer to `index` without touching any snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameErrorKind::HistoryOutOfRange`] if `index` is past the
    /// last snapshot.
    #[instrument(skip(self), fields(pointer = self.pointer, len = self.snapshots.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<Outcome, GameError> {
        if index >= self.snapshots.len() {
            let err = GameError::new(GameErrorKind::HistoryOutOfRange {
                index,
                len: self.snapshots.len(),
            });
            warn!(error = %err, "Rejecting history jump");
            return Err(err);
        }

        self.pointer = index;
        let outcome = self.current_outcome();
        debug!(pointer = index, %outcome, "Jumped");
        Ok(outcome)
    }

    /// Describes every snapshot in chronological order.
    ///
    /// The iterator borrows the history; call again to restart it.
    pub fn describe_moves(&self) -> impl ExactSizeIterator<Item = MoveDescriptor> + Clone + '_ {
        self.snapshots
            .iter()
            .enumerate()
            .map(|(move_number, snapshot)| MoveDescriptor {
                move_number,
                coordinates: snapshot.last_move().map(Coordinates::from),
            })
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
