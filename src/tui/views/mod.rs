//! TUI Views module
//!
//! The Register, History and Monthly Summary views, plus the menu and
//! status bar around them.

pub mod history;
pub mod menu;
pub mod register;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveView, App};
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    menu::render(frame, app, layout.menu);

    match app.active_view {
        ActiveView::Register => register::render(frame, app, layout.main),
        ActiveView::History => history::render(frame, app, layout.main),
        ActiveView::MonthlySummary => summary::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);
}
