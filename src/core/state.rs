//! # Application State
//!
//! Core business state for Permsync. No terminal types live here;
//! presentation is derived from this in the `tui` module.
//!
//! ```text
//! App
//! ├── model: ListModel          // store + current mode
//! ├── editor: EditorState       // selection, interaction mode, edit buffer
//! └── error: Option<String>     // last failed write, shown in the footer
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use crate::core::list_model::ListModel;
use crate::core::mode::Mode;

/// What a pending confirmation will do when accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Delete,
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    #[default]
    Browse,
    Editing,
    AddingNew,
    /// Waiting for exactly one key: `y`/`Y` accepts, anything else cancels.
    ConfirmPending(PendingAction),
}

/// Transient UI state. Lives for the process lifetime and is never saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    /// 0-based; meaningless while the current list is empty.
    pub selected_index: usize,
    pub interaction: Interaction,
    pub edit_buffer: String,
}

impl EditorState {
    /// Clamp the selection to `[0, max(0, len - 1)]`.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
    }

    pub fn enter_browse(&mut self) {
        self.interaction = Interaction::Browse;
        self.edit_buffer.clear();
    }
}

pub struct App {
    pub model: ListModel,
    pub editor: EditorState,
    pub error: Option<String>,
}

impl App {
    pub fn new(model: ListModel) -> Self {
        Self {
            model,
            editor: EditorState::default(),
            error: None,
        }
    }

    /// Confirmation question for the pending action, if any.
    pub fn confirm_prompt(&self) -> Option<&'static str> {
        let Interaction::ConfirmPending(pending) = self.editor.interaction else {
            return None;
        };
        Some(match pending {
            PendingAction::Delete => "Delete this item? (y/n)",
            PendingAction::Transfer => match self.model.mode() {
                Mode::Allowed => "Move to blacklist? (y/n)",
                Mode::Blacklist => "Remove from blacklist and allow? (y/n)",
            },
        })
    }
}
