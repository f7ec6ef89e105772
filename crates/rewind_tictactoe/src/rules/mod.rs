//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board or snapshot. Rules hold no state
//! of their own, so the history can call them as often as it likes.

pub mod draw;
pub mod evaluate;
pub mod win;

pub use draw::is_full;
pub use evaluate::{evaluate, is_legal_move};
pub use win::check_winner;
