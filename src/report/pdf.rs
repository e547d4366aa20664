use chrono::NaiveDateTime;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::report::layout::{LayoutParams, Prim, Surface, layout, text_width};
use crate::report::paginate::{PageSlice, slice_pages};
use crate::report::{ContentBlock, RenderError, fold_ascii};

// A4 geometry in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN_TOP: f32 = 42.0;
const MARGIN_BOTTOM: f32 = 42.0;
const MARGIN_X: f32 = 40.0;
const FOOTER_BAND: f32 = 24.0;
const FOOTER_SIZE: f32 = 9.0;

#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub generated_at: NaiveDateTime,
}

/// Lays the blocks out once, cuts the surface into page-sized bands and
/// composes the final document. Nothing is written anywhere until every
/// page is in place; a failure discards the whole artifact.
pub fn render(
    blocks: &[ContentBlock],
    generated_at: NaiveDateTime,
) -> Result<RenderedDocument, RenderError> {
    let surface = layout(blocks, &LayoutParams::default());
    let scale = (PAGE_WIDTH - 2.0 * MARGIN_X) / surface.width;
    let budget = (PAGE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM - FOOTER_BAND) / scale;
    let slices = slice_pages(surface.height, budget)?;
    compose(&surface, &slices, scale, generated_at)
}

pub fn write_document(doc: &RenderedDocument, path: &std::path::Path) -> std::io::Result<()> {
    std::fs::write(path, &doc.bytes)
}

fn compose(
    surface: &Surface,
    slices: &[PageSlice],
    scale: f32,
    generated_at: NaiveDateTime,
) -> Result<RenderedDocument, RenderError> {
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

    // The whole surface goes into the file once; every page re-draws it
    // shifted and clipped to its own band.
    let form_content = Content {
        operations: surface_operations(surface),
    };
    let form_data = form_content
        .encode()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let form_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Form",
            "BBox" => vec![
                0.into(),
                0.into(),
                surface.width.into(),
                surface.height.into(),
            ],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_regular, "F2" => font_bold },
            },
        },
        form_data,
    ));

    let n_pages = slices.len();
    let mut kids: Vec<Object> = Vec::with_capacity(n_pages);
    for slice in slices {
        let mut ops = page_operations(slice, surface.height, scale);
        ops.extend(footer_operations(slice.index + 1, n_pages, generated_at));
        let content = Content { operations: ops };
        let data = content
            .encode()
            .map_err(|e| RenderError::Pdf(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, data));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_regular, "F2" => font_bold },
                "XObject" => dictionary! { "X0" => form_id },
            },
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => n_pages as i64,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(RenderedDocument {
        bytes,
        page_count: n_pages,
        generated_at,
    })
}

fn surface_operations(surface: &Surface) -> Vec<Operation> {
    let mut ops = Vec::new();
    for prim in &surface.prims {
        match prim {
            Prim::TextRun {
                x,
                y,
                size,
                bold,
                text,
            } => {
                let font = if *bold { "F2" } else { "F1" };
                // Surface y is the top of the line; PDF wants a baseline
                // measured from the bottom of the form.
                let baseline = surface.height - y - size;
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![font.into(), (*size).into()]));
                ops.push(Operation::new("Td", vec![(*x).into(), baseline.into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_text(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            Prim::Rule { y, x0, x1 } => {
                let py = surface.height - y;
                ops.push(Operation::new("q", vec![]));
                ops.push(Operation::new("w", vec![0.7f32.into()]));
                ops.push(Operation::new("m", vec![(*x0).into(), py.into()]));
                ops.push(Operation::new("l", vec![(*x1).into(), py.into()]));
                ops.push(Operation::new("S", vec![]));
                ops.push(Operation::new("Q", vec![]));
            }
        }
    }
    ops
}

fn page_operations(slice: &PageSlice, surface_height: f32, scale: f32) -> Vec<Operation> {
    let top = PAGE_HEIGHT - MARGIN_TOP;
    let slice_h = slice.height();
    let clip_y = top - scale * slice_h;
    let ty = top - scale * (surface_height - slice.y_start);
    vec![
        Operation::new("q", vec![]),
        Operation::new(
            "re",
            vec![
                MARGIN_X.into(),
                clip_y.into(),
                (PAGE_WIDTH - 2.0 * MARGIN_X).into(),
                (scale * slice_h).into(),
            ],
        ),
        Operation::new("W", vec![]),
        Operation::new("n", vec![]),
        Operation::new(
            "cm",
            vec![
                scale.into(),
                0.into(),
                0.into(),
                scale.into(),
                MARGIN_X.into(),
                ty.into(),
            ],
        ),
        Operation::new("Do", vec!["X0".into()]),
        Operation::new("Q", vec![]),
    ]
}

// Stamped after slicing, directly on the page text layer. Every page
// gets the identical band: generation date left, page counter right.
fn footer_operations(page_no: usize, total: usize, generated_at: NaiveDateTime) -> Vec<Operation> {
    let date_text = generated_at.format("%d/%m/%Y %H:%M").to_string();
    let page_text = format!("Trang {} / {}", page_no, total);
    let baseline = MARGIN_BOTTOM + (FOOTER_BAND - FOOTER_SIZE) / 2.0;
    let right_x = PAGE_WIDTH - MARGIN_X - text_width(&page_text, FOOTER_SIZE);
    vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FOOTER_SIZE.into()]),
        Operation::new("Td", vec![MARGIN_X.into(), baseline.into()]),
        Operation::new("Tj", vec![Object::string_literal(encode_text(&date_text))]),
        Operation::new("ET", vec![]),
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), FOOTER_SIZE.into()]),
        Operation::new("Td", vec![right_x.into(), baseline.into()]),
        Operation::new("Tj", vec![Object::string_literal(encode_text(&page_text))]),
        Operation::new("ET", vec![]),
    ]
}

fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(fold_ascii)
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF { code as u8 } else { b'?' }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/pdf.rs"]
mod tests;
