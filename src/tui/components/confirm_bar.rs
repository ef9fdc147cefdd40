//! # ConfirmBar Component
//!
//! Bottom row. Shows the y/n question while a confirmation is pending;
//! otherwise the last write error, if any. A pending question wins.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

pub struct ConfirmBar<'a> {
    pub prompt: Option<&'a str>,
    pub error: Option<&'a str>,
}

impl<'a> ConfirmBar<'a> {
    pub fn new(prompt: Option<&'a str>, error: Option<&'a str>) -> Self {
        Self { prompt, error }
    }
}

impl Component for ConfirmBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match (self.prompt, self.error) {
            (Some(prompt), _) => Span::styled(
                prompt,
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            (None, Some(error)) => Span::styled(error, Style::default().fg(Color::Red)),
            (None, None) => return,
        };
        frame.render_widget(span, area);
    }
}
