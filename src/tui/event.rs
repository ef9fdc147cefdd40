use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key for the core state machine.
    Input(Action),
    /// Terminal size changed; only needs a redraw.
    Resize,
}

/// Block until the next event the editor cares about.
pub fn read_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = translate(event::read()?) {
            return Ok(event);
        }
    }
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            translate_key(key_event).map(TuiEvent::Input)
        }
        Event::Paste(data) => Some(TuiEvent::Input(Action::Paste(data))),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Map a key press to an `Action`. Releases and repeats are dropped.
fn translate_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    let action = match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::ForceQuit,
        // Control and Alt chords are not text and trigger no command.
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::Other
        }
        (_, KeyCode::Up) => Action::Up,
        (_, KeyCode::Down) => Action::Down,
        (_, KeyCode::Tab) => Action::Tab,
        (_, KeyCode::Enter) => Action::Enter,
        (_, KeyCode::Esc) => Action::Escape,
        (_, KeyCode::Backspace) => Action::Backspace,
        (_, KeyCode::Char(c)) => Action::Char(c),
        _ => Action::Other,
    };
    Some(action)
}
