//! Alternating mark invariant: X, O, X, O, ...

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: snapshot n was produced by X when n is odd, O when n is even.
///
/// Turn order is never stored; it follows from the snapshot index.
pub struct AlternatingMarkInvariant;

impl Invariant<History> for AlternatingMarkInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(n, snapshot)| {
                snapshot.last_move().is_some_and(|pos| {
                    snapshot.board().get(pos) == Square::Occupied(Player::for_move_count(n - 1))
                })
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Snapshot};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingMarkInvariant::holds(&History::new()));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Snapshot::initial().successor(Position::TopLeft, Player::X);
        let second = first.successor(Position::Center, Player::X);
        let history = History::from_parts(vec![Snapshot::initial(), first, second], 2);
        assert!(!AlternatingMarkInvariant::holds(&history));
    }
}
