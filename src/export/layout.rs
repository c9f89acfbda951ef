//! Fixed-position layout of the resume page
//!
//! Positions are in millimetres measured from the top-left corner of an
//! A4 portrait page; the PDF writer converts them to points.

use super::metrics::text_width_pt;
use crate::state::{Field, FormData};

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;
pub const MM_TO_PT: f32 = 72.0 / 25.4;

pub const FONT_SIZE_PT: f32 = 12.0;
/// Left margin where labels start
pub const LABEL_X_MM: f32 = 20.0;
/// Horizontal offset of values
pub const VALUE_X_MM: f32 = 65.0;
pub const RIGHT_MARGIN_MM: f32 = 20.0;
pub const START_Y_MM: f32 = 30.0;
pub const LINE_HEIGHT_MM: f32 = 12.0;
/// Gap between consecutive fields
pub const FIELD_SPACING_MM: f32 = LINE_HEIGHT_MM * 1.5;
/// Baseline distance between wrapped description lines
pub const WRAPPED_LINE_FACTOR: f32 = 1.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// One line of text placed on the page
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x_mm: f32,
    pub y_mm: f32,
    pub style: FontStyle,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub runs: Vec<TextRun>,
}

/// Width left for values between the value column and the right margin
pub fn available_width_mm() -> f32 {
    PAGE_WIDTH_MM - VALUE_X_MM - RIGHT_MARGIN_MM
}

fn pdf_label(field: Field) -> &'static str {
    match field {
        Field::Name => "Name:",
        Field::Email => "Email:",
        Field::Phone => "Phone Number:",
        Field::Position => "Position:",
        Field::Description => "Description:",
    }
}

/// Place every label and value of the form on a single page
pub fn layout_resume(form: &FormData) -> PageLayout {
    let mut runs = Vec::new();
    let mut y = START_Y_MM;

    for field in Field::ALL {
        runs.push(TextRun {
            x_mm: LABEL_X_MM,
            y_mm: y,
            style: FontStyle::Bold,
            text: pdf_label(field).to_string(),
        });

        let value = form.display_value(field);
        if field.is_multiline() {
            let line_step = FONT_SIZE_PT * WRAPPED_LINE_FACTOR / MM_TO_PT;
            for (i, line) in wrap_text(value, available_width_mm(), FONT_SIZE_PT)
                .into_iter()
                .enumerate()
            {
                runs.push(TextRun {
                    x_mm: VALUE_X_MM,
                    y_mm: y + i as f32 * line_step,
                    style: FontStyle::Regular,
                    text: line,
                });
            }
        } else {
            runs.push(TextRun {
                x_mm: VALUE_X_MM,
                y_mm: y,
                style: FontStyle::Regular,
                text: value.to_string(),
            });
            y += FIELD_SPACING_MM;
        }
    }

    PageLayout { runs }
}

/// Word-wrap `text` so no line is wider than `max_width_mm` at `font_size`.
///
/// Explicit line breaks are kept. A word that cannot fit on a line by
/// itself is split between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, font_size: f32) -> Vec<String> {
    let max_width_pt = max_width_mm * MM_TO_PT;
    let fits = |s: &str| text_width_pt(s, font_size) <= max_width_pt;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if fits(&candidate) {
                current = candidate;
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if fits(word) {
                current = word.to_string();
                continue;
            }

            for c in word.chars() {
                current.push(c);
                if !fits(&current) && current.chars().count() > 1 {
                    current.pop();
                    lines.push(std::mem::take(&mut current));
                    current.push(c);
                }
            }
        }

        lines.push(current);
    }

    lines
}
