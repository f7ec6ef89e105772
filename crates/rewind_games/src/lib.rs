//! Rewind Games - terminal front end for time-travel tic-tac-toe
//!
//! Translates typed commands into intents on a
//! [`rewind_tictactoe::History`] and renders what comes back.
//!
//! # Architecture
//!
//! - **Intent**: parsing of one input line
//! - **Render**: board, status text and move list
//! - **Session**: lock-guarded game sessions
//! - **Play**: interactive loop and one-shot replay

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod intent;
mod play;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, RewindConfig};
pub use intent::{Intent, ParseIntentError};
pub use play::{replay, run_interactive};
pub use render::{SortOrder, describe_entry, move_list, render_board, status_text};
pub use session::{GameSession, SessionError, SessionId, SessionManager};
