//! Occupancy invariant: move count equals number of occupied squares.

use super::super::History;
use super::Invariant;

/// Invariant: snapshot n has exactly n occupied squares.
///
/// With this in place, "nine moves played" and "board full" are the
/// same test.
pub struct OccupancyMatchesMoveCountInvariant;

impl Invariant<History> for OccupancyMatchesMoveCountInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .iter()
            .enumerate()
            .all(|(n, snapshot)| snapshot.board().occupied_count() == n)
    }

    fn description() -> &'static str {
        "Move count matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_game_holds() {
        let mut history = History::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            history.submit_move(cell).expect("in range");
        }
        assert_eq!(history.len(), 10);
        assert!(OccupancyMatchesMoveCountInvariant::holds(&history));
    }
}
