//! # TitleBar Component
//!
//! Top two rows: the centered title naming the current list, then the key
//! legend.
//!
//! ```text
//!            Permsync Manager - Allowed Rules
//! ↑/↓: Navigate | TAB: Switch mode | a: Add | e: Edit | ...
//! ```
//!
//! Stateless: the only prop is the current `Mode`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::mode::Mode;
use crate::tui::component::Component;

pub const LEGEND: &str =
    "↑/↓: Navigate | TAB: Switch mode | a: Add | e: Edit | d: Delete | b: Toggle Blacklist | q: Quit";

pub struct TitleBar {
    pub mode: Mode,
}

impl TitleBar {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn title(&self) -> String {
        format!("Permsync Manager - {} Rules", self.mode.label())
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [title_area, legend_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let title = Paragraph::new(self.title())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(title, title_area);
        frame.render_widget(Paragraph::new(LEGEND), legend_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mode: Mode) -> String {
        let backend = TestBackend::new(120, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = TitleBar::new(mode);
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_names_mode() {
        assert_eq!(TitleBar::new(Mode::Allowed).title(), "Permsync Manager - Allowed Rules");
        assert_eq!(
            TitleBar::new(Mode::Blacklist).title(),
            "Permsync Manager - Blacklist Rules"
        );
    }

    #[test]
    fn test_renders_title_and_legend() {
        let text = rendered(Mode::Blacklist);
        assert!(text.contains("Permsync Manager - Blacklist Rules"));
        assert!(text.contains("TAB: Switch mode"));
        assert!(text.contains("q: Quit"));
    }
}
