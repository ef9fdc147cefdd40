//! # RuleList Component
//!
//! Renders a [`DrawPlan`] into the list region, including the scroll
//! indicator rows that bracket it:
//!
//! ```text
//!                 ↑ More above ↑        ← only when has_more_above
//!     curl
//!   > git                               ← selected, reversed
//!     npm
//!           ↓ More below ↓              ← only when has_more_below
//! ```
//!
//! The plan is computed by the caller from [`RuleList::viewport_height`],
//! so the component itself never reads the store.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::viewport::DrawPlan;
use crate::tui::component::Component;

const SELECTED_INDENT: u16 = 2;
const ROW_INDENT: u16 = 4;
const MORE_ABOVE: &str = "↑ More above ↑";
const MORE_BELOW: &str = "↓ More below ↓";

pub struct RuleList<'a> {
    pub plan: &'a DrawPlan,
    /// True when the current list has no items at all.
    pub empty: bool,
}

impl<'a> RuleList<'a> {
    pub fn new(plan: &'a DrawPlan, empty: bool) -> Self {
        Self { plan, empty }
    }

    /// Rows available for items in a region `area_height` tall (one row
    /// above and one below are reserved for indicators).
    pub fn viewport_height(area_height: u16) -> usize {
        area_height.saturating_sub(2) as usize
    }
}

/// A one-row rect starting `offset` columns into `row`, clipped to it.
fn row_from(row: Rect, offset: u16) -> Rect {
    let offset = offset.min(row.width);
    Rect::new(row.x + offset, row.y, row.width - offset, row.height.min(1))
}

impl Component for RuleList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [above_area, rows_area, below_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        if self.plan.has_more_above {
            frame.render_widget(Span::raw(MORE_ABOVE), row_from(above_area, area.width / 2));
        }
        if self.plan.has_more_below {
            let offset = (area.width / 2).saturating_sub(6);
            frame.render_widget(Span::raw(MORE_BELOW), row_from(below_area, offset));
        }

        if self.empty {
            if rows_area.height > 0 {
                let hint = Span::styled(
                    "No rules yet. Press a to add one.",
                    Style::default().fg(Color::DarkGray),
                );
                frame.render_widget(hint, row_from(Rect { height: 1, ..rows_area }, ROW_INDENT));
            }
            return;
        }

        for (offset, row) in self.plan.rows.iter().enumerate().take(rows_area.height as usize) {
            let line = Rect {
                y: rows_area.y + offset as u16,
                height: 1,
                ..rows_area
            };
            if row.selected {
                let span = Span::styled(
                    format!("> {}", row.text),
                    Style::default().add_modifier(Modifier::REVERSED),
                );
                frame.render_widget(span, row_from(line, SELECTED_INDENT));
            } else {
                frame.render_widget(Span::raw(row.text.as_str()), row_from(line, ROW_INDENT));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::viewport::compute_draw_plan;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_lines(plan: &DrawPlan, empty: bool, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                RuleList::new(plan, empty).render(f, f.area());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("rule-{i:02}")).collect()
    }

    #[test]
    fn test_viewport_height_reserves_indicator_rows() {
        assert_eq!(RuleList::viewport_height(12), 10);
        assert_eq!(RuleList::viewport_height(1), 0);
    }

    #[test]
    fn test_selected_row_has_marker() {
        let items = numbered(3);
        let plan = compute_draw_plan(&items, 1, 5);
        let lines = render_lines(&plan, false, 30, 7);
        assert!(lines[1].starts_with("    rule-00"));
        assert!(lines[2].starts_with("  > rule-01"));
        assert!(lines[3].starts_with("    rule-02"));
        assert!(!lines[0].contains("More above"));
        assert!(!lines[6].contains("More below"));
    }

    #[test]
    fn test_selected_row_is_reversed() {
        let items = numbered(2);
        let plan = compute_draw_plan(&items, 0, 5);
        let backend = TestBackend::new(30, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| RuleList::new(&plan, false).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer[(2, 1)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(4, 2)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_scroll_indicators() {
        let items = numbered(50);
        let plan = compute_draw_plan(&items, 25, 10);
        let lines = render_lines(&plan, false, 40, 12);
        assert!(lines[0].contains("More above"));
        assert!(lines[11].contains("More below"));
        assert!(lines[1].contains("rule-20"));
        assert!(lines[6].contains("> rule-25"));
        assert!(lines[10].contains("rule-29"));
    }

    #[test]
    fn test_empty_hint() {
        let plan = DrawPlan::default();
        let lines = render_lines(&plan, true, 50, 5);
        assert!(lines[1].contains("No rules yet"));
    }
}
