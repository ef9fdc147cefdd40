//! # StatusLine Component
//!
//! One row under the legend. In Browse it shows the item count; while
//! editing or adding it echoes the edit buffer after a prompt and places
//! the terminal cursor at the end of the buffer. Ratatui hides the cursor
//! on any frame that doesn't position it, so Browse gets no cursor.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::state::Interaction;
use crate::tui::component::Component;

pub struct StatusLine<'a> {
    pub interaction: Interaction,
    pub edit_buffer: &'a str,
    pub item_count: usize,
}

impl<'a> StatusLine<'a> {
    pub fn new(interaction: Interaction, edit_buffer: &'a str, item_count: usize) -> Self {
        Self {
            interaction,
            edit_buffer,
            item_count,
        }
    }

    fn prompt(&self) -> Option<&'static str> {
        match self.interaction {
            Interaction::AddingNew => Some("New permission: "),
            Interaction::Editing => Some("Edit permission: "),
            _ => None,
        }
    }

    /// Where the cursor goes while typing: end of the buffer, clamped to
    /// the row. `None` outside text entry.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let prompt = self.prompt()?;
        // An edited item can hold any text, so measure display columns.
        let column = u16::try_from(prompt.width() + self.edit_buffer.width()).unwrap_or(u16::MAX);
        let x = area.x + column.min(area.width.saturating_sub(1));
        Some(Position::new(x, area.y))
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = match self.prompt() {
            Some(prompt) => Line::from(vec![Span::raw(prompt), Span::raw(self.edit_buffer)]),
            None => Line::from(format!("Total: {} items", self.item_count)),
        };
        frame.render_widget(Paragraph::new(line), area);

        if let Some(position) = self.cursor_position(area) {
            frame.set_cursor_position(position);
        }
    }
}
