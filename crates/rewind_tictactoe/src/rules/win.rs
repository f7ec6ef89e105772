//! Win detection logic for tic-tac-toe.

use super::super::outcome::{WINNING_LINES, WinningLine};
use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`WINNING_LINES`] order and the first completed
/// line is returned along with its owner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}
