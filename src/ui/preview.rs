//! Resume card preview

use crate::app::App;
use crate::icons::Icon;
use crate::state::{Field, View};
use crate::ui::components::{render_icon_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Widest the card is drawn, in columns
const CARD_MAX_WIDTH: u16 = 72;

/// Draw the preview view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Back control
            Constraint::Min(8),                // Card
            Constraint::Length(BUTTON_HEIGHT), // Download button
        ])
        .margin(1)
        .split(area);

    let back = app.icons.resolve(Icon::ChevronLeft);
    let back_line = Line::from(vec![
        Span::styled(
            format!("{} Back", back.glyph),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (Esc)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(back_line), chunks[0]);

    let card_area = centered(chunks[1], CARD_MAX_WIDTH);
    let data = &app.state.form.data;
    let mut lines = Vec::new();
    for field in Field::ALL {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let label = Span::styled(
            format!("{}: ", field.label()),
            Style::default().add_modifier(Modifier::BOLD),
        );
        if field.is_multiline() {
            lines.push(Line::from(label));
            for text in data.display_value(field).split('\n') {
                lines.push(Line::from(text.to_string()));
            }
        } else {
            lines.push(Line::from(vec![
                label,
                Span::raw(data.display_value(field).to_string()),
            ]));
        }
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", View::Previewing.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(card, card_area);

    let button_area = centered(chunks[2], 24);
    render_icon_button(
        frame,
        button_area,
        &app.icons.resolve(Icon::Download),
        "Download PDF",
        true,
    );
}

/// Horizontally center a column of at most `max_width` inside `area`
fn centered(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}
