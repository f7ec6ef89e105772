//! Text rendering of board, status and move list.

use rewind_tictactoe::{History, MoveDescriptor, Outcome, Position, Snapshot, Square};
use tracing::instrument;

/// Presentation order of the move list.
///
/// The history always yields moves oldest-first; reversal happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Order from the `ascending` config flag.
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Sort descending",
            SortOrder::Descending => "Sort ascending",
        }
    }
}

/// Status line for the current snapshot.
pub fn status_text(history: &History) -> String {
    match history.current_outcome() {
        Outcome::Won { player, .. } => format!("Winner: {}", player),
        Outcome::Draw => "Draw".to_string(),
        Outcome::InProgress => format!("Next player: {}", history.next_player()),
    }
}

/// Draws the board, bracketing the cells of a winning line.
///
/// Empty cells show the number to type to select them.
#[instrument(skip(snapshot))]
pub fn render_board(snapshot: &Snapshot) -> String {
    let highlight = snapshot.outcome().winning_line();
    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| {
                    let symbol = match snapshot.board().get(pos) {
                        Square::Empty => (pos.to_index() + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if highlight.is_some_and(|line| line.contains(&pos)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

/// Describes one move list entry as the player sees it.
pub fn describe_entry(entry: &MoveDescriptor, pointer: usize, one_based: bool) -> String {
    if entry.move_number == pointer {
        return format!("You are at move #{}", entry.move_number);
    }

    match entry.coordinates {
        None => "Go to game start".to_string(),
        Some(coords) => {
            let (row, col) = if one_based {
                coords.one_based()
            } else {
                (coords.row, coords.col)
            };
            format!("Go to move #{} ({}, {})", entry.move_number, row, col)
        }
    }
}

/// The move list in the requested order.
#[instrument(skip(history))]
pub fn move_list(history: &History, order: SortOrder, one_based: bool) -> Vec<String> {
    let pointer = history.pointer();
    let mut lines: Vec<String> = history
        .describe_moves()
        .map(|entry| describe_entry(&entry, pointer, one_based))
        .collect();
    if order == SortOrder::Descending {
        lines.reverse();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(cells: &[usize]) -> History {
        let mut history = History::new();
        for &cell in cells {
            history.submit_move(cell).expect("cell in range");
        }
        history
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(&History::new()), "Next player: X");
        assert_eq!(status_text(&play(&[4])), "Next player: O");
        assert_eq!(status_text(&play(&[0, 4, 1, 5, 2])), "Winner: X");
        assert_eq!(status_text(&play(&[0, 1, 2, 4, 3, 5, 7, 6, 8])), "Draw");
    }

    #[test]
    fn test_render_board_highlights_winning_line() {
        let history = play(&[0, 4, 1, 5, 2]);
        assert_eq!(
            render_board(history.current_snapshot()),
            "[X]|[X]|[X]\n---+---+---\n 4 | O | O \n---+---+---\n 7 | 8 | 9 "
        );
    }

    #[test]
    fn test_move_list_ascending() {
        let mut history = play(&[4, 0]);
        history.jump_to(1).expect("in range");
        assert_eq!(
            move_list(&history, SortOrder::Ascending, true),
            vec!["Go to game start", "You are at move #1", "Go to move #2 (1, 1)"]
        );
    }

    #[test]
    fn test_move_list_descending_reverses_only_presentation() {
        let history = play(&[4, 0]);
        let ascending = move_list(&history, SortOrder::Ascending, false);
        let mut descending = move_list(&history, SortOrder::Descending, false);
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(ascending[1], "Go to move #1 (1, 1)");

        // The core view stays chronological whatever the display order.
        let numbers: Vec<_> = history.describe_moves().map(|m| m.move_number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn test_sort_order_toggle() {
        assert_eq!(SortOrder::from_ascending(true).toggled(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle_label(), "Sort ascending");
    }
}
