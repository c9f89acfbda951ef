//! Resume details form (editing view)

use super::field_renderer::{draw_field, field_height, FieldView};
use crate::app::App;
use crate::icons::Icon;
use crate::state::{Field, FormButton, View};
use crate::ui::components::{render_icon_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the editing view
pub fn draw_details_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let mut constraints = vec![Constraint::Length(2)]; // Title
    for field in Field::ALL {
        if field.is_multiline() {
            constraints.push(Constraint::Min(field_height(field)));
        } else {
            constraints.push(Constraint::Length(field_height(field)));
        }
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let title = Paragraph::new(Line::from(Span::styled(
        View::Editing.title(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for field in Field::ALL {
        let icon = app.icons.resolve(field.icon());
        draw_field(
            frame,
            chunks[1 + field.index()],
            FieldView {
                field,
                value: form.data.get(field),
                error: form.errors.get(field),
                icon: &icon,
                is_active: form.active_field() == Some(field),
            },
        );
    }

    let buttons_area = chunks[1 + Field::ALL.len()];
    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(buttons_area);

    let on_buttons = form.is_buttons_row_active();
    for (idx, (button, icon)) in [
        (FormButton::ViewPdf, Icon::View),
        (FormButton::DownloadPdf, Icon::Download),
    ]
    .into_iter()
    .enumerate()
    {
        render_icon_button(
            frame,
            button_chunks[idx],
            &app.icons.resolve(icon),
            button.label(),
            on_buttons && form.selected_button == button,
        );
    }

    let help_spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(
            crate::platform::VIEW_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": view  "),
        Span::styled(
            crate::platform::DOWNLOAD_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": download"),
    ];
    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[2 + Field::ALL.len()]);
}
