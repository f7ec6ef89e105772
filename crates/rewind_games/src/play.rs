//! Interactive and scripted game drivers.

use crate::config::RewindConfig;
use crate::intent::Intent;
use crate::render::{SortOrder, move_list, render_board, status_text};
use crate::session::{SessionId, SessionManager};
use anyhow::{Context, Result};
use rewind_tictactoe::History;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9       place a mark on that cell
  jump N    go back (or forward) to move N
  moves     show the move list
  sort      toggle move list order
  board     show the board
  new       start a new game
  help      show this help
  quit      leave";

/// Writes board, status and (optionally) the move list.
fn write_view(
    out: &mut impl Write,
    history: &History,
    order: SortOrder,
    one_based: bool,
    with_moves: bool,
) -> Result<()> {
    writeln!(out, "{}", render_board(history.current_snapshot()))?;
    writeln!(out, "{}", status_text(history))?;
    if with_moves {
        write_moves(out, history, order, one_based)?;
    }
    Ok(())
}

fn write_moves(
    out: &mut impl Write,
    history: &History,
    order: SortOrder,
    one_based: bool,
) -> Result<()> {
    for line in move_list(history, order, one_based) {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

/// Runs the line-oriented game loop until `quit` or end of input.
///
/// Each line is one intent, applied to `session_id` under the session lock.
#[instrument(skip(input, out, manager, config))]
pub fn run_interactive(
    input: impl BufRead,
    mut out: impl Write,
    manager: &SessionManager,
    session_id: &SessionId,
    config: &RewindConfig,
) -> Result<()> {
    let one_based = *config.one_based();
    let mut order = SortOrder::from_ascending(*config.ascending());

    let history = manager.with_session(session_id, |s| s.history.clone())?;
    writeln!(out, "{}", HELP)?;
    write_view(&mut out, &history, order, one_based, false)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let intent = match line.parse::<Intent>() {
            Ok(intent) => intent,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        debug!(?intent, "Handling intent");

        let history = match intent {
            Intent::Quit => break,
            Intent::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Intent::ToggleOrder => {
                order = order.toggled();
                let history = manager.with_session(session_id, |s| s.history.clone())?;
                write_moves(&mut out, &history, order, one_based)?;
                continue;
            }
            Intent::ShowMoves => {
                let history = manager.with_session(session_id, |s| s.history.clone())?;
                write_moves(&mut out, &history, order, one_based)?;
                continue;
            }
            Intent::Show => manager.with_session(session_id, |s| s.history.clone())?,
            Intent::NewGame => manager.with_session(session_id, |s| {
                s.history.reset();
                s.history.clone()
            })?,
            Intent::Select(cell) => {
                let applied = manager.with_session(session_id, |s| {
                    s.history.submit_move(cell).map(|_| s.history.clone())
                })?;
                match applied {
                    Ok(history) => history,
                    Err(e) => {
                        writeln!(out, "{}", e.kind)?;
                        continue;
                    }
                }
            }
            Intent::Jump(index) => {
                let applied = manager.with_session(session_id, |s| {
                    s.history.jump_to(index).map(|_| s.history.clone())
                })?;
                match applied {
                    Ok(history) => history,
                    Err(e) => {
                        writeln!(out, "{}", e.kind)?;
                        continue;
                    }
                }
            }
        };

        write_view(&mut out, &history, order, one_based, false)?;
    }

    info!(session_id = %session_id, "Leaving game");
    Ok(())
}

/// Applies 0-based `moves`, optionally jumps, and renders the result once.
///
/// # Errors
///
/// Fails on the first out-of-range cell or jump index.
#[instrument(skip(config))]
pub fn replay(
    moves: &[usize],
    jump: Option<usize>,
    order: SortOrder,
    config: &RewindConfig,
) -> Result<String> {
    let mut history = History::new();
    for (n, &cell) in moves.iter().enumerate() {
        history
            .submit_move(cell)
            .with_context(|| format!("Move {} (cell {}) rejected", n + 1, cell))?;
    }
    if let Some(index) = jump {
        history
            .jump_to(index)
            .with_context(|| format!("Jump to {} rejected", index))?;
    }

    let mut out = Vec::new();
    write_view(&mut out, &history, order, *config.one_based(), true)?;
    Ok(String::from_utf8(out)?)
}
