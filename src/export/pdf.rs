//! PDF serialization of a laid-out page

use super::layout::{FontStyle, PageLayout, FONT_SIZE_PT, MM_TO_PT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::ExportError;
use chrono::Local;
use lopdf::{
    content::{Content, Operation},
    dictionary, Dictionary, Document, Object, Stream, StringFormat,
};

const FONT_REGULAR: &str = "F1";
const FONT_BOLD: &str = "F2";
const PRODUCER: &str = concat!("resume-tui ", env!("CARGO_PKG_VERSION"));

/// WinAnsi byte for `c`, if the encoding has a slot for it.
///
/// Latin-1 maps straight through; 0x80..=0x9F hold typographic punctuation
/// and a few extra letters in place of the C1 controls.
fn win_ansi_byte(c: char) -> Option<u8> {
    let byte = match c {
        ' '..='~' | '\u{A0}'..='\u{FF}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Encode text for a standard Type1 font with WinAnsiEncoding.
/// Characters without a slot become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

fn text_operations(layout: &PageLayout) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(layout.runs.len() * 5);
    for run in &layout.runs {
        let font = match run.style {
            FontStyle::Regular => FONT_REGULAR,
            FontStyle::Bold => FONT_BOLD,
        };
        let x = run.x_mm * MM_TO_PT;
        let y = (PAGE_HEIGHT_MM - run.y_mm) * MM_TO_PT;

        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec![font.into(), FONT_SIZE_PT.into()]));
        operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&run.text),
                StringFormat::Literal,
            )],
        ));
        operations.push(Operation::new("ET", vec![]));
    }
    operations
}

/// Build a one-page A4 document from `layout` and return its bytes
pub fn render_pdf(layout: &PageLayout, title: &str) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_REGULAR => font_regular,
            FONT_BOLD => font_bold,
        },
    });

    let content = Content {
        operations: text_operations(layout),
    };
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let kids: Vec<Object> = vec![page_id.into()];
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        (PAGE_WIDTH_MM * MM_TO_PT).into(),
        (PAGE_HEIGHT_MM * MM_TO_PT).into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(1),
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(encode_win_ansi(title), StringFormat::Literal),
        "Producer" => Object::string_literal(PRODUCER),
        "CreationDate" => Object::string_literal(
            Local::now().format("D:%Y%m%d%H%M%S").to_string()
        ),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
