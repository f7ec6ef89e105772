//! Snapshot evaluation and move legality.

use super::super::outcome::Outcome;
use super::super::position::Position;
use super::super::snapshot::Snapshot;
use super::{check_winner, is_full};
use tracing::instrument;

/// Evaluates a snapshot.
///
/// Deterministic and side-effect free: a completed line wins, otherwise a
/// full board is a draw, otherwise the game is in progress.
#[instrument(skip(snapshot))]
pub fn evaluate(snapshot: &Snapshot) -> Outcome {
    let board = snapshot.board();
    if let Some((player, line)) = check_winner(board) {
        return Outcome::Won { player, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

/// Whether a mark may be placed at `cell_index` on `snapshot`.
///
/// True iff the index is 0-8, the cell is empty and the game is
/// still in progress.
#[instrument(skip(snapshot))]
pub fn is_legal_move(snapshot: &Snapshot, cell_index: usize) -> bool {
    let Some(pos) = Position::from_index(cell_index) else {
        return false;
    };

    snapshot.board().is_empty(pos) && evaluate(snapshot) == Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Square};

    fn board_from(marks: &str) -> Board {
        let mut squares = [Square::Empty; 9];
        for (i, c) in marks.chars().enumerate() {
            squares[i] = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        Board::from_squares(squares)
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Snapshot::initial()), Outcome::InProgress);
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let snapshot = Snapshot::from_parts(board_from("XOXOXXOXO"), Some(Position::BottomRight));
        assert_eq!(evaluate(&snapshot), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_a_win_not_a_draw() {
        // X X X / O O X / X O O
        let snapshot = Snapshot::from_parts(board_from("XXXOOXXOO"), Some(Position::TopRight));
        assert_eq!(
            evaluate(&snapshot),
            Outcome::Won {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let snapshot = Snapshot::from_parts(board_from("XO.OX...."), Some(Position::Center));
        let first = evaluate(&snapshot);
        assert_eq!(evaluate(&snapshot), first);
        assert_eq!(evaluate(&snapshot), first);
        assert_eq!(snapshot, Snapshot::from_parts(board_from("XO.OX...."), Some(Position::Center)));
    }

    #[test]
    fn test_legal_move_requires_empty_cell() {
        let snapshot = Snapshot::initial().successor(Position::Center, Player::X);
        assert!(!is_legal_move(&snapshot, 4));
        assert!(is_legal_move(&snapshot, 0));
    }

    #[test]
    fn test_legal_move_rejects_out_of_range() {
        assert!(!is_legal_move(&Snapshot::initial(), 9));
        assert!(!is_legal_move(&Snapshot::initial(), usize::MAX));
    }

    #[test]
    fn test_no_legal_move_after_win() {
        let snapshot = Snapshot::from_parts(board_from("XXXOO...."), Some(Position::TopRight));
        assert!((0..9).all(|i| !is_legal_move(&snapshot, i)));
    }
}
