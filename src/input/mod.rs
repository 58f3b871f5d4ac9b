use crate::application::{Clock, Control, FrameDeadline};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tracing::debug;

/// What a key press asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    TogglePause,
}

/// Map a key event to an action; unbound keys and releases map to nothing
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(KeyAction::Quit),
        KeyCode::Char(' ') => Some(KeyAction::TogglePause),
        _ => None,
    }
}

/// Where terminal events come from
pub trait EventSource {
    /// Wait up to `timeout` for an event to become readable
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
}

/// The process's own terminal, through crossterm
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        event::read()
    }
}

/// Frame clock for the interactive terminal.
/// Waits for the deadline while reading key presses, so quitting and
/// pausing take effect within one frame.
pub struct KeyboardClock<E = TerminalEvents> {
    deadline: FrameDeadline,
    paused: bool,
    events: E,
}

impl KeyboardClock {
    pub fn new(period: Duration) -> Self {
        Self::with_events(period, TerminalEvents)
    }
}

impl<E: EventSource> KeyboardClock<E> {
    pub fn with_events(period: Duration, events: E) -> Self {
        Self {
            deadline: FrameDeadline::new(period),
            paused: false,
            events,
        }
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Apply an action; returns `Some(Quit)` when the loop should end
    fn apply(&mut self, action: KeyAction) -> Option<Control> {
        match action {
            KeyAction::Quit => Some(Control::Quit),
            KeyAction::TogglePause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
                None
            }
        }
    }
}

impl<E: EventSource> Clock for KeyboardClock<E> {
    fn wait_next_frame(&mut self) -> io::Result<Control> {
        loop {
            let remaining = self.deadline.remaining();
            if !self.events.poll(remaining)? {
                break;
            }
            if let Event::Key(key) = self.events.read()? {
                if let Some(control) = key_action(key).and_then(|action| self.apply(action)) {
                    return Ok(control);
                }
            }
        }
        self.deadline.advance();

        Ok(if self.paused { Control::Hold } else { Control::Advance })
    }
}
