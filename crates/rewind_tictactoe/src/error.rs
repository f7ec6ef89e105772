//! Error types for rejected intents.

use derive_more::{Display, Error};

/// What was wrong with a rejected intent.
///
/// Both kinds are caller mistakes that leave the history untouched.
/// Moves onto occupied cells or after the game is decided are not
/// errors and never produce one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Cell index outside 0..=8.
    #[display("cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(usize),

    /// History index past the last snapshot.
    #[display("history index {} is out of range (history has {} entries)", index, len)]
    HistoryOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of snapshots in the history.
        len: usize,
    },
}

/// Invalid-input error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Game error: {} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_location() {
        let err = GameError::new(GameErrorKind::HistoryOutOfRange { index: 4, len: 2 });
        let text = err.to_string();
        assert!(text.contains("history index 4 is out of range"));
        assert!(text.contains("error.rs"));
    }
}
