//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} submit_move {Q}. A failed precondition is an ignored move, not an
//! error. A failed postcondition means the history itself is corrupt.

use super::history::History;
use super::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use super::outcome::Outcome;
use super::position::Position;
use super::rules::evaluate;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Why a precondition did not hold.
    type Rejection;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Reason a cell selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot is already won or drawn.
    #[display("Game is already over ({})", _0)]
    GameDecided(Outcome),
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game at the current snapshot is undecided.
pub struct GameUndecided;

impl GameUndecided {
    /// Checks the current snapshot has no winner and is not full.
    #[instrument(skip(history))]
    pub fn check(history: &History) -> Result<(), IgnoredMove> {
        match evaluate(history.current_snapshot()) {
            Outcome::InProgress => Ok(()),
            decided => Err(IgnoredMove::GameDecided(decided)),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square is empty on the current snapshot.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &History) -> Result<(), IgnoredMove> {
        if history.current_snapshot().board().is_empty(pos) {
            Ok(())
        } else {
            Err(IgnoredMove::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: the game is undecided and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(history))]
    pub fn check(pos: Position, history: &History) -> Result<(), IgnoredMove> {
        GameUndecided::check(history)?;
        SquareIsEmpty::check(pos, history)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for cell selections.
///
/// Preconditions:
/// - Game is undecided
/// - Square is empty
///
/// Postconditions:
/// - All [`HistoryInvariants`] hold
/// - History was cut after the old pointer and grew by one
/// - Pointer sits on the new last snapshot
pub struct MoveContract;

impl Contract<History, Position> for MoveContract {
    type Rejection = IgnoredMove;

    fn pre(history: &History, pos: &Position) -> Result<(), IgnoredMove> {
        LegalMove::check(*pos, history)
    }

    fn post(before: &History, after: &History) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if after.len() != before.pointer() + 2 {
            violations.push(InvariantViolation::new(
                "History is truncated after the old pointer before appending",
            ));
        }

        if after.pointer() + 1 != after.len() {
            violations.push(InvariantViolation::new(
                "Pointer moves to the newly appended snapshot",
            ));
        }

        let kept = before.pointer() + 1;
        if after.snapshots().get(..kept) != before.snapshots().get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the old pointer are unchanged",
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}
