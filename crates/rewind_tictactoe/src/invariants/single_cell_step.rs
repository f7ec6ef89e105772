//! Single-cell step invariant: each snapshot adds exactly one mark.

use super::super::{History, Snapshot, Square};
use super::Invariant;

/// Invariant: snapshot n differs from snapshot n-1 in exactly one cell.
///
/// That cell is the one recorded as snapshot n's move, and it was empty
/// in snapshot n-1. Snapshot 0 is the empty initial board.
pub struct SingleCellStepInvariant;

impl Invariant<History> for SingleCellStepInvariant {
    fn holds(history: &History) -> bool {
        let snapshots = history.snapshots();
        if snapshots.first() != Some(&Snapshot::initial()) {
            return false;
        }

        snapshots.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.last_move() else {
                return false;
            };
            if !before.board().is_empty(pos) || after.board().get(pos) == Square::Empty {
                return false;
            }

            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .filter(|(a, b)| a != b)
                .count();
            changed == 1
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark at its recorded move"
    }
}
