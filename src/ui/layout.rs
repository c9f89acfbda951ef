//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar and return the content area
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Editing => " Tab/↑↓: move  Enter: next / new line  Backspace: delete",
        View::Previewing => " Esc: back  Enter/d: download",
    }
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let hint_width = quit_hint.len() as u16;
    if status_area.width > hint_width {
        let hint_area = Rect {
            x: status_area.x + status_area.width - hint_width,
            y: status_area.y,
            width: hint_width,
            height: 1,
        };
        let hint = Paragraph::new(quit_hint)
            .style(Style::default().fg(Color::Gray).bg(Color::DarkGray));
        frame.render_widget(hint, hint_area);
    }
}
