//! Tests for the interactive loop and one-shot replay.

use rewind_games::{RewindConfig, SessionManager, SortOrder, replay, run_interactive};
use std::io::Cursor;

fn run(script: &str) -> (String, SessionManager) {
    let manager = SessionManager::new();
    let id = manager.create_session("test".to_string()).expect("new id");
    let mut out = Vec::new();
    run_interactive(
        Cursor::new(script.to_string()),
        &mut out,
        &manager,
        &id,
        &RewindConfig::default(),
    )
    .expect("loop finishes");
    (String::from_utf8(out).expect("utf8"), manager)
}

#[test]
fn test_interactive_win_then_time_travel() {
    let (out, manager) = run("1\n5\n2\n6\n3\n4\njump 2\n6\nmoves\nquit\n");

    assert!(out.contains("Winner: X"));
    assert!(out.contains("[X]|[X]|[X]"));
    assert!(out.contains("Go to move #2 (2, 2)"));
    assert!(out.contains("You are at move #3"));

    let (len, pointer) = manager
        .with_session("test", |s| (s.history.len(), s.history.pointer()))
        .expect("session exists");
    assert_eq!((len, pointer), (4, 3));
}

#[test]
fn test_interactive_reports_bad_input_and_keeps_going() {
    let (out, manager) = run("10\njump 7\nfly\n5\n");

    assert!(out.contains("cell index 9 is out of range"));
    assert!(out.contains("history index 7 is out of range"));
    assert!(out.contains("Unrecognized command 'fly'"));
    let len = manager
        .with_session("test", |s| s.history.len())
        .expect("session exists");
    assert_eq!(len, 2);
}

#[test]
fn test_interactive_sort_and_new_game() {
    let (out, manager) = run("5\n1\nsort\nnew\n");

    let descending = out
        .find("  You are at move #2")
        .expect("current move listed");
    let start = out.rfind("  Go to game start").expect("start listed");
    assert!(descending < start);

    let len = manager
        .with_session("test", |s| s.history.len())
        .expect("session exists");
    assert_eq!(len, 1);
}

#[test]
fn test_replay_renders_branch() {
    let out = replay(&[0, 4, 1, 5, 2], Some(3), SortOrder::Ascending, &RewindConfig::default())
        .expect("valid replay");

    assert!(out.contains("Next player: O"));
    assert!(out.contains("You are at move #3"));
    assert!(out.contains("Go to move #5 (1, 3)"));
}

#[test]
fn test_replay_rejects_out_of_range_cell() {
    let err = replay(&[0, 12], None, SortOrder::Ascending, &RewindConfig::default()).unwrap_err();
    assert!(err.to_string().contains("Move 2 (cell 12) rejected"));
}
