//! Field rendering utilities for forms

use crate::icons::IconAsset;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Everything needed to draw one input
pub struct FieldView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub icon: &'a IconAsset,
    pub is_active: bool,
}

/// Rows a field takes, including its error line
pub fn field_height(field: Field) -> u16 {
    let input = if field.is_multiline() { 6 } else { 3 };
    if field.is_validated() {
        input + 1
    } else {
        input
    }
}

/// Rows `text` takes when word-wrapped to `width` columns
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .split('\n')
        .map(|line| {
            let mut rows = 1;
            let mut col = 0;
            for word in line.split(' ') {
                let word_width = Line::from(word).width();
                let gap = usize::from(col > 0);
                if col + gap + word_width <= width {
                    col += gap + word_width;
                    continue;
                }
                if col > 0 {
                    rows += 1;
                }
                // Words wider than the box are broken across rows
                rows += word_width.saturating_sub(1) / width;
                col = match word_width % width {
                    0 if word_width > 0 => width,
                    rest => rest,
                };
            }
            rows
        })
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Draw a labelled input with its icon, placeholder and inline error
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let (input_area, error_area) = if view.field.is_validated() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    let border_style = if view.error.is_some() {
        Style::default().fg(Color::Red)
    } else if view.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if view.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if view.value.is_empty() {
        vec![Line::from(Span::styled(
            view.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        view.value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    };

    if view.is_active {
        if view.value.is_empty() {
            lines[0].spans.insert(0, cursor);
        } else if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {} {} ", view.icon.glyph, view.field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    // Keep the tail (and the cursor) in view once the text outgrows the box
    let inner_width = input_area.width.saturating_sub(2);
    let inner_height = input_area.height.saturating_sub(2);
    let shown = if view.is_active {
        format!("{}▌", view.value)
    } else {
        view.value.to_string()
    };
    let scroll = wrapped_rows(&shown, inner_width).saturating_sub(inner_height);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        input_area,
    );

    if let (Some(area), Some(message)) = (error_area, view.error) {
        let error = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error, area);
    }
}
