//! Helvetica glyph widths for line measurement

/// Advance widths of printable ASCII (0x20..=0x7E) in 1/1000 em,
/// from the standard Helvetica AFM
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Width used for anything outside printable ASCII
const DEFAULT_WIDTH: u16 = 556;

pub fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        return HELVETICA_WIDTHS[(code - 0x20) as usize];
    }
    match c {
        '\u{2018}' | '\u{2019}' | '‚' => 222,
        '\u{201C}' | '\u{201D}' | '„' | '‹' | '›' | 'ˆ' | '˜' => 333,
        '•' => 350,
        'š' | 'ž' => 500,
        '–' | '€' | 'ƒ' | '†' | '‡' => 556,
        'Ž' => 611,
        'Š' | 'Ÿ' => 667,
        'œ' => 944,
        '—' | '…' | '‰' | '™' | 'Œ' => 1000,
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` set in Helvetica at `font_size` points, in points
pub fn text_width_pt(text: &str, font_size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * font_size / 1000.0
}
