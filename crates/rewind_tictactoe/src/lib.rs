//! Rewind Tic-Tac-Toe - rules and time-travel history
//!
//! Pure game logic for 3x3 tic-tac-toe with a branching, replayable move
//! history. No I/O: a presentation layer submits intents and renders the
//! snapshots and outcomes it gets back.
//!
//! # Architecture
//!
//! - **Rules**: stateless evaluation of a single [`Snapshot`]
//!   ([`evaluate`], [`is_legal_move`])
//! - **History**: the ordered snapshots plus a pointer ([`History`])
//! - **Invariants**: properties every accepted move preserves
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{History, Outcome, Player};
//!
//! # fn example() -> Result<(), rewind_tictactoe::GameError> {
//! let mut history = History::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     history.submit_move(cell)?;
//! }
//! assert_eq!(history.current_outcome().winner(), Some(Player::X));
//!
//! // Travel back and branch.
//! history.jump_to(2)?;
//! assert_eq!(history.submit_move(8)?, Outcome::InProgress);
//! assert_eq!(history.len(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod error;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod snapshot;
mod types;

pub use contracts::{Contract, GameUndecided, IgnoredMove, LegalMove, MoveContract, SquareIsEmpty};
pub use error::{GameError, GameErrorKind};
pub use history::{Coordinates, History, MoveDescriptor};
pub use invariants::{
    AlternatingMarkInvariant, HistoryInvariants, Invariant, InvariantSet, InvariantViolation,
    OccupancyMatchesMoveCountInvariant, PointerInBoundsInvariant, SingleCellStepInvariant,
};
pub use outcome::{Outcome, WINNING_LINES, WinningLine};
pub use position::Position;
pub use rules::{check_winner, evaluate, is_full, is_legal_move};
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
