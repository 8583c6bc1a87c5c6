//! Event mapping from terminal events to game input.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// Map a terminal event to game input, or `None` if the game ignores it.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        // Any button counts; the game has no notion of left vs right click.
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Up(_) => Some(InputEvent::PointerReleased {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(_, _) => Some(InputEvent::Resized),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if is_close_request(key) {
        return Some(InputEvent::CloseRequested);
    }
    match key.code {
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        _ => None,
    }
}

/// The terminal has no close box; these keys stand in for it.
fn is_close_request(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
