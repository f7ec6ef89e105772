//! Text commands translated into game intents.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of player input, parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select a cell (0-based index; range checked by the history).
    Select(usize),
    /// Jump to a history index.
    Jump(usize),
    /// Flip the move list between ascending and descending.
    ToggleOrder,
    /// Print the move list.
    ShowMoves,
    /// Redraw board and status.
    Show,
    /// Start over with an empty board.
    NewGame,
    /// Print the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command '{}' (type 'help' for commands)", input)]
pub struct ParseIntentError {
    /// The offending input, trimmed.
    pub input: String,
}

impl ParseIntentError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Cells are typed 1-9 as shown on the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let lower = input.to_lowercase();
        let mut words = lower.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Intent::Show);
        };

        let intent = match (command, words.next(), words.next()) {
            (cmd, None, None) if cmd.chars().all(|c| c.is_ascii_digit()) => {
                let cell: usize = cmd.parse().map_err(|_| ParseIntentError::new(input))?;
                let index = cell.checked_sub(1).ok_or_else(|| ParseIntentError::new(input))?;
                Intent::Select(index)
            }
            ("jump" | "j", Some(arg), None) => {
                Intent::Jump(arg.parse().map_err(|_| ParseIntentError::new(input))?)
            }
            ("sort" | "s", None, None) => Intent::ToggleOrder,
            ("moves" | "m", None, None) => Intent::ShowMoves,
            ("board" | "b", None, None) => Intent::Show,
            ("new", None, None) => Intent::NewGame,
            ("help" | "h" | "?", None, None) => Intent::Help,
            ("quit" | "q" | "exit", None, None) => Intent::Quit,
            _ => return Err(ParseIntentError::new(input)),
        };
        Ok(intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!("1".parse(), Ok(Intent::Select(0)));
        assert_eq!(" 9 ".parse(), Ok(Intent::Select(8)));
        // Range is the history's call, not the parser's.
        assert_eq!("10".parse(), Ok(Intent::Select(9)));
    }

    #[test]
    fn test_zero_is_not_a_cell() {
        assert!("0".parse::<Intent>().is_err());
    }

    #[test]
    fn test_jump() {
        assert_eq!("jump 3".parse(), Ok(Intent::Jump(3)));
        assert_eq!("J 0".parse(), Ok(Intent::Jump(0)));
        assert!("jump".parse::<Intent>().is_err());
        assert!("jump x".parse::<Intent>().is_err());
        assert!("jump 1 2".parse::<Intent>().is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!("sort".parse(), Ok(Intent::ToggleOrder));
        assert_eq!("moves".parse(), Ok(Intent::ShowMoves));
        assert_eq!("".parse(), Ok(Intent::Show));
        assert_eq!("NEW".parse(), Ok(Intent::NewGame));
        assert_eq!("?".parse(), Ok(Intent::Help));
        assert_eq!("q".parse(), Ok(Intent::Quit));
    }

    #[test]
    fn test_unknown_command_reports_input() {
        let err = "castle kingside".parse::<Intent>().unwrap_err();
        assert_eq!(err.input, "castle kingside");
    }
}
