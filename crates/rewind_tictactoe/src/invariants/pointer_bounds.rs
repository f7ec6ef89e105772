//! Pointer bounds invariant.

use super::super::History;
use super::Invariant;

/// Invariant: the current pointer indexes an existing snapshot.
pub struct PointerInBoundsInvariant;

impl Invariant<History> for PointerInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.pointer() < history.snapshots().len()
    }

    fn description() -> &'static str {
        "Current pointer is within the history"
    }
}
