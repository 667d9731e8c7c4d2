use std::io;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, warn};

use crate::components::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Dir),
    Cancel,
}

pub fn decode_key(key: KeyEvent) -> Option<InputEvent> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    let event = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputEvent::Cancel,
        KeyCode::Esc | KeyCode::Char('q') => InputEvent::Cancel,
        KeyCode::Up | KeyCode::Char('k') => InputEvent::Move(Dir::Up),
        KeyCode::Down | KeyCode::Char('j') => InputEvent::Move(Dir::Down),
        KeyCode::Left | KeyCode::Char('h') => InputEvent::Move(Dir::Left),
        KeyCode::Right | KeyCode::Char('l') => InputEvent::Move(Dir::Right),
        _ => return None,
    };
    Some(event)
}

/// Runs `read` on its own thread, forwarding decoded keys. A read error is
/// turned into a final `Cancel`.
pub fn spawn_reader<F>(mut read: F) -> (Receiver<InputEvent>, JoinHandle<()>)
where
    F: FnMut() -> io::Result<Event> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    let handle = thread::spawn(move || loop {
        match read() {
            Ok(Event::Key(key)) => {
                let Some(event) = decode_key(key) else {
                    continue;
                };
                if tx.send(event).is_err() {
                    debug!("input receiver dropped, reader exiting");
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                warn!(%err, "error reading input, cancelling session");
                let _ = tx.send(InputEvent::Cancel);
                break;
            }
        }
    });
    (rx, handle)
}

/// Takes at most one pending event without waiting. A dead reader counts as
/// a cancel.
pub fn poll(rx: &Receiver<InputEvent>) -> Option<InputEvent> {
    match rx.try_recv() {
        Ok(event) => Some(event),
        Err(TryRecvError::Empty) => None,
        Err(TryRecvError::Disconnected) => Some(InputEvent::Cancel),
    }
}
