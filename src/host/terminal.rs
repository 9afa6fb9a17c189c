//! Keyboard input from the controlling terminal
//!
//! Wraps another input source, normally the demo autopilot. Arrow keys and
//! space fly the bird for the tick they arrive on. q, Esc or Ctrl-C ask the
//! shell to quit, so teardown still runs.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use super::{HostEvents, InputSource};
use crate::error::StartupError;

/// Check if key should quit the game
pub fn is_quit_key(key: &KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Fold one key event into the events for the current tick
pub fn apply_key(events: &mut HostEvents, key: &KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if is_quit_key(key) {
        events.quit_requested = true;
        return;
    }

    let keys = &mut events.keys;
    match key.code {
        KeyCode::Left | KeyCode::Char('a') => keys.left = true,
        KeyCode::Right | KeyCode::Char('d') => keys.right = true,
        KeyCode::Up | KeyCode::Char(' ') => keys.jump = true,
        _ => return,
    }
    // Manual keys take over from the autopilot for this tick
    keys.demo = false;
}

/// Raw-mode keyboard layered over `inner`
pub struct TerminalInput<I> {
    inner: I,
}

impl<I: InputSource> TerminalInput<I> {
    /// Switch the terminal to raw mode; restored on drop
    pub fn new(inner: I) -> Result<Self, StartupError> {
        terminal::enable_raw_mode().map_err(StartupError::Terminal)?;
        log::info!("Keyboard attached: arrows/space to fly, q or Esc to quit");
        Ok(Self { inner })
    }
}

impl<I: InputSource> InputSource for TerminalInput<I> {
    fn poll(&mut self) -> HostEvents {
        let mut events = self.inner.poll();

        // Drain everything queued since the last tick without blocking
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    log::warn!("Terminal input lost ({err}), quitting");
                    events.quit_requested = true;
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => apply_key(&mut events, &key),
                Ok(_) => {}
                Err(err) => {
                    log::warn!("Terminal input lost ({err}), quitting");
                    events.quit_requested = true;
                    break;
                }
            }
        }

        events
    }
}

impl<I> Drop for TerminalInput<I> {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("Failed to restore terminal: {err}");
        }
    }
}
