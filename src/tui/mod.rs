//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and fully blocking: draw, wait for exactly one event,
//! feed it to `core::update`, repeat. There are no timers and no
//! background work, so nothing redraws between keypresses. Every redraw
//! re-reads the current list from disk, so external edits show up on the
//! next key.
//!
//! A `SteadyBlock` cursor style is used; the cursor is only shown while
//! editing or adding, positioned at the end of the buffer.

mod component;
mod components;
mod event;
pub mod ui;

use log::info;
use std::io::stdout;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::list_model::ListModel;
use crate::core::state::App;
use crate::core::store::Store;
use crate::tui::event::{TuiEvent, read_event};

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let store = Store::new(&config.data_dir);
    info!(
        "Editing rules in {} (starting in {} mode)",
        store.root().display(),
        config.start_mode
    );
    let mut app = App::new(ListModel::new(store, config.start_mode));

    let mut terminal = ratatui::init();
    let result =
        TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app));
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw_ui(f, app))?;

        match read_event()? {
            // Resize just needs a redraw
            TuiEvent::Resize => continue,
            TuiEvent::Input(action) => {
                if update(app, action) == Effect::Quit {
                    info!("Quit requested");
                    return Ok(());
                }
            }
        }
    }
}
