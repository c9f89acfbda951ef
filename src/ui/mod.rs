//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Editing => forms::draw_details_form(frame, main_area, app),
        View::Previewing => preview::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
