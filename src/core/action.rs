//! # Actions
//!
//! Every key the user presses becomes an `Action`. The TUI translates
//! terminal events; the core never sees crossterm types.
//!
//! `update()` takes the current state and an action, applies it, and
//! returns an `Effect` telling the event loop whether to keep going.
//!
//! ```text
//! App + Action  →  update()  →  App' + Effect
//! ```
//!
//! Dispatch is one flat match over `(interaction, action)`:
//!
//! ```text
//!            a/A                        Enter / Esc
//!   Browse ───────► AddingNew ─────────────────────► Browse
//!          ───────► Editing   ─────────────────────► Browse
//!            e/E
//!          ───────► ConfirmPending(Delete|Transfer) ─(any key)─► Browse
//!           d/D b/B                      y/Y applies, else cancels
//! ```
//!
//! Rejected operations (empty submission, duplicate add, stale index) leave
//! everything unchanged and say nothing. Only failed writes are reported,
//! through `App::error`.

use log::{debug, warn};

use crate::core::state::{App, Interaction, PendingAction};
use crate::core::store::StoreError;

/// Abstract key input, independent of the terminal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
    Tab,
    Enter,
    Escape,
    Backspace,
    Char(char),
    /// Bracketed paste.
    Paste(String),
    /// Ctrl+C: leave from any interaction mode.
    ForceQuit,
    /// Any other key. Ignored, except that it cancels a pending confirmation.
    Other,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("{:?} in {:?}", action, app.editor.interaction);
    if action == Action::ForceQuit {
        return Effect::Quit;
    }
    match app.editor.interaction {
        Interaction::Browse => browse(app, action),
        Interaction::Editing | Interaction::AddingNew => {
            text_entry(app, action);
            Effect::None
        }
        Interaction::ConfirmPending(pending) => {
            confirm(app, pending, action);
            Effect::None
        }
    }
}

fn browse(app: &mut App, action: Action) -> Effect {
    let items = app.model.current();
    app.editor.clamp_selection(items.len());
    let selected = app.editor.selected_index;
    let has_selection = selected < items.len();

    match action {
        Action::Up => {
            app.editor.selected_index = selected.saturating_sub(1);
        }
        Action::Down => {
            if selected + 1 < items.len() {
                app.editor.selected_index = selected + 1;
            }
        }
        Action::Tab => {
            app.model.toggle_mode();
            app.editor.selected_index = 0;
        }
        Action::Char('a' | 'A') => {
            app.editor.interaction = Interaction::AddingNew;
            app.editor.edit_buffer.clear();
        }
        Action::Char('e' | 'E') if has_selection => {
            app.editor.interaction = Interaction::Editing;
            app.editor.edit_buffer = items[selected].clone();
        }
        Action::Char('d' | 'D') if has_selection => {
            app.editor.interaction = Interaction::ConfirmPending(PendingAction::Delete);
        }
        Action::Char('b' | 'B') if has_selection => {
            app.editor.interaction = Interaction::ConfirmPending(PendingAction::Transfer);
        }
        Action::Char('q' | 'Q') => return Effect::Quit,
        _ => {}
    }
    Effect::None
}

fn confirm(app: &mut App, pending: PendingAction, action: Action) {
    app.editor.interaction = Interaction::Browse;
    if !matches!(action, Action::Char('y' | 'Y')) {
        debug!("{:?} cancelled", pending);
        return;
    }

    let index = app.editor.selected_index;
    let result = match pending {
        PendingAction::Delete => app.model.delete_at(index),
        PendingAction::Transfer => app.model.move_to_other_list(index),
    };
    record(app, result);
    let len = app.model.len();
    app.editor.clamp_selection(len);
}

fn text_entry(app: &mut App, action: Action) {
    match action {
        Action::Enter => {
            let value = app.editor.edit_buffer.trim().to_string();
            if !value.is_empty() {
                let result = match app.editor.interaction {
                    Interaction::AddingNew => app.model.add(&value),
                    _ => app.model.edit_at(app.editor.selected_index, &value),
                };
                record(app, result);
            }
            app.editor.enter_browse();
        }
        Action::Escape => app.editor.enter_browse(),
        Action::Backspace => {
            app.editor.edit_buffer.pop();
        }
        Action::Char(c) if is_printable(c) => app.editor.edit_buffer.push(c),
        Action::Paste(text) => app
            .editor
            .edit_buffer
            .extend(text.chars().filter(|c| is_printable(*c))),
        _ => {}
    }
}

/// Printable ASCII, 0x20 through 0x7E.
fn is_printable(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Surface write failures; silent rejections stay silent.
fn record(app: &mut App, result: Result<bool, StoreError>) {
    match result {
        Ok(true) => app.error = None,
        Ok(false) => {}
        Err(e) => {
            warn!("Write failed: {}", e);
            app.error = Some(format!("Write failed: {e}"));
        }
    }
}
