//! Shared helpers for driving matches from tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use tictactoe_core::{Board, Canvas, InputNotifier, Position, ResultAnnouncer, SymbolRegistry};

/// Board and announcer sharing one in-memory canvas.
pub struct Harness {
    pub canvas: Arc<Mutex<Canvas>>,
    pub board: Board,
    pub announcer: ResultAnnouncer,
}

pub fn harness() -> Harness {
    let canvas = Canvas::new().shared();
    let symbols = Arc::new(SymbolRegistry::new("·", "X", "O"));
    Harness {
        board: Board::new(canvas.clone(), symbols),
        announcer: ResultAnnouncer::new(canvas.clone()),
        canvas,
    }
}

pub fn pos(index: usize) -> Position {
    Position::from_index(index).expect("index 0-8")
}

/// Yields until a player is waiting on the notifier.
pub async fn wait_for_listener(notifier: &InputNotifier) {
    while !notifier.has_listener() {
        tokio::task::yield_now().await;
    }
}

/// Yields until a result is on display.
pub async fn wait_for_result(announcer: &ResultAnnouncer) {
    while !announcer.is_displayed() {
        tokio::task::yield_now().await;
    }
}

/// Clicks a cell once somebody is listening; returns whether it was taken.
pub async fn click(notifier: &InputNotifier, index: usize) -> bool {
    wait_for_listener(notifier).await;
    notifier.process_event(pos(index)).expect("known marker")
}

/// Plays `indices` as clicks, then dismisses the result.
pub async fn play_clicks(notifier: &InputNotifier, announcer: &ResultAnnouncer, indices: &[usize]) {
    for &index in indices {
        assert!(click(notifier, index).await, "click on {index} was ignored");
    }
    wait_for_result(announcer).await;
    announcer.clear();
}
