//! # Viewport
//!
//! Works out which slice of a long list is visible, independent of any
//! terminal library. The TUI turns a [`DrawPlan`] into widgets.
//!
//! ```text
//! items:   0 ........ start ........ start+height ........ len
//!                     └──── visible window ────┘
//! ```
//!
//! The window keeps the selection roughly centered and clamps at both ends:
//!
//! - everything fits → `start = 0`
//! - `selected < height/2` → `start = 0`
//! - `selected > len - height/2` → `start = len - height`
//! - otherwise → `start = selected - height/2`

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns reserved for the selection marker and margins.
pub const RESERVED_COLUMNS: usize = 8;
/// An identifier wider than `width - TRUNCATE_THRESHOLD` gets cut.
const TRUNCATE_THRESHOLD: usize = 5;
const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// Index into the full list.
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawPlan {
    pub start_index: usize,
    pub rows: Vec<PlanRow>,
    pub has_more_above: bool,
    pub has_more_below: bool,
}

impl DrawPlan {
    /// Visible row position of the selection, if it is on screen.
    pub fn selected_row(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.selected)
    }

    /// Truncate every row to fit a terminal `width` columns wide.
    pub fn fit_to_width(mut self, width: usize) -> Self {
        for row in &mut self.rows {
            row.text = truncate_identifier(&row.text, width);
        }
        self
    }
}

/// First visible index for a list of `len` items.
pub fn start_index(len: usize, selected: usize, viewport_height: usize) -> usize {
    if len <= viewport_height {
        return 0;
    }
    let half = viewport_height / 2;
    if selected < half {
        0
    } else if selected > len - half {
        len - viewport_height
    } else {
        selected - half
    }
}

pub fn compute_draw_plan(items: &[String], selected: usize, viewport_height: usize) -> DrawPlan {
    let start = start_index(items.len(), selected, viewport_height);
    let end = (start + viewport_height).min(items.len());

    let rows = items[start..end]
        .iter()
        .enumerate()
        .map(|(offset, text)| PlanRow {
            index: start + offset,
            text: text.clone(),
            selected: start + offset == selected,
        })
        .collect();

    DrawPlan {
        start_index: start,
        rows,
        has_more_above: start > 0,
        has_more_below: start + viewport_height < items.len(),
    }
}

/// Cut `item` to `width - 8` columns plus `...` when it is wider than
/// `width - 5`. Widths are display columns, not bytes.
pub fn truncate_identifier(item: &str, terminal_width: usize) -> String {
    if item.width() <= terminal_width.saturating_sub(TRUNCATE_THRESHOLD) {
        return item.to_string();
    }
    let budget = terminal_width.saturating_sub(RESERVED_COLUMNS);
    let mut used = 0;
    let mut out = String::new();
    for c in item.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item-{i:02}")).collect()
    }

    #[test]
    fn test_short_list_starts_at_zero() {
        let items = numbered(5);
        let plan = compute_draw_plan(&items, 4, 10);
        assert_eq!(plan.start_index, 0);
        assert_eq!(plan.rows.len(), 5);
        assert!(!plan.has_more_above);
        assert!(!plan.has_more_below);
    }

    #[test]
    fn test_centering_in_the_middle() {
        let items = numbered(50);
        let plan = compute_draw_plan(&items, 25, 10);
        assert_eq!(plan.start_index, 20);
        assert_eq!(plan.selected_row(), Some(5));
        assert!(plan.has_more_above);
        assert!(plan.has_more_below);
    }

    #[test]
    fn test_clamps_at_top() {
        assert_eq!(start_index(50, 2, 10), 0);
        assert_eq!(start_index(50, 4, 10), 0);
        assert_eq!(start_index(50, 5, 10), 0);
        assert_eq!(start_index(50, 6, 10), 1);
    }

    #[test]
    fn test_clamps_at_bottom() {
        assert_eq!(start_index(50, 48, 10), 40);
        assert_eq!(start_index(50, 46, 10), 40);
        assert_eq!(start_index(50, 45, 10), 40);
        assert_eq!(start_index(50, 44, 10), 39);

        let plan = compute_draw_plan(&numbered(50), 49, 10);
        assert_eq!(plan.rows.len(), 10);
        assert_eq!(plan.rows.last().unwrap().index, 49);
        assert!(plan.rows.last().unwrap().selected);
        assert!(!plan.has_more_below);
    }

    #[test]
    fn test_odd_viewport_height() {
        // half = 3
        assert_eq!(start_index(20, 10, 7), 7);
        assert_eq!(start_index(20, 18, 7), 13);
    }

    #[test]
    fn test_zero_height_viewport() {
        let plan = compute_draw_plan(&numbered(3), 1, 0);
        assert!(plan.rows.is_empty());
        assert!(plan.has_more_below);
    }

    #[test]
    fn test_empty_list() {
        let plan = compute_draw_plan(&[], 0, 10);
        assert_eq!(plan, DrawPlan::default());
    }

    #[test]
    fn test_exactly_full_viewport() {
        let plan = compute_draw_plan(&numbered(10), 9, 10);
        assert_eq!(plan.start_index, 0);
        assert!(!plan.has_more_below);
    }

    #[test]
    fn test_truncate_leaves_short_items() {
        assert_eq!(truncate_identifier("git status", 40), "git status");
        // width - 5 = 35 columns still fits
        let exact = "a".repeat(35);
        assert_eq!(truncate_identifier(&exact, 40), exact);
    }

    #[test]
    fn test_truncate_long_items() {
        let long = "b".repeat(36);
        let cut = truncate_identifier(&long, 40);
        assert_eq!(cut, format!("{}...", "b".repeat(32)));
    }

    #[test]
    fn test_truncate_counts_display_width() {
        // Each CJK char is two columns wide.
        let wide = "漢".repeat(20);
        let cut = truncate_identifier(&wide, 20);
        assert_eq!(cut, format!("{}...", "漢".repeat(6)));
    }

    #[test]
    fn test_fit_to_width_applies_to_rows() {
        let items = vec!["x".repeat(100)];
        let plan = compute_draw_plan(&items, 0, 5).fit_to_width(20);
        assert_eq!(plan.rows[0].text, format!("{}...", "x".repeat(12)));
    }
}
