use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::core::viewport::{DrawPlan, compute_draw_plan};
use crate::tui::component::Component;
use crate::tui::components::{ConfirmBar, RuleList, StatusLine, TitleBar};

/// Screen regions, top to bottom.
///
/// ```text
/// 0      title
/// 1      legend
/// 2      (blank)
/// 3      status
/// 4      ↑ more above
/// 5..    list rows          (height - 7 rows)
/// h-2    ↓ more below
/// h-1    confirmation / error
/// ```
pub struct ScreenAreas {
    pub header: Rect,
    pub status: Rect,
    pub list: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    use Constraint::{Length, Min};
    let [header, _spacer, status, list, footer] =
        Layout::vertical([Length(2), Length(1), Length(1), Min(0), Length(1)]).areas(area);
    ScreenAreas {
        header,
        status,
        list,
        footer,
    }
}

/// Draw plan for the current list at the given frame size.
pub fn plan_for(items: &[String], selected: usize, frame_area: Rect) -> DrawPlan {
    let list_area = screen_areas(frame_area).list;
    compute_draw_plan(items, selected, RuleList::viewport_height(list_area.height))
        .fit_to_width(frame_area.width as usize)
}

pub fn draw_ui(frame: &mut Frame, app: &App) {
    let areas = screen_areas(frame.area());
    let items = app.model.current();
    let plan = plan_for(&items, app.editor.selected_index, frame.area());

    TitleBar::new(app.model.mode()).render(frame, areas.header);
    StatusLine::new(app.editor.interaction, &app.editor.edit_buffer, items.len())
        .render(frame, areas.status);
    RuleList::new(&plan, items.is_empty()).render(frame, areas.list);
    ConfirmBar::new(app.confirm_prompt(), app.error.as_deref()).render(frame, areas.footer);
}
