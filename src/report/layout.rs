use crate::report::ContentBlock;

// The whole document is laid out once onto a single tall surface at this
// fixed virtual width; pages are cut out of it afterwards.
pub const VIRTUAL_WIDTH: f32 = 800.0;

const MARGIN_X: f32 = 48.0;
const LABEL_COL: f32 = 190.0;

const TITLE_SIZE: f32 = 20.0;
const SECTION_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;
const TABLE_SIZE: f32 = 10.0;

const TITLE_LINE: f32 = 32.0;
const SECTION_LINE: f32 = 24.0;
const BODY_LINE: f32 = 18.0;
const ROW_LINE: f32 = 17.0;
const SPACER: f32 = 12.0;

// Table column x offsets relative to the left margin.
const COL_NAME: f32 = 0.0;
const COL_VALUE: f32 = 300.0;
const COL_UNIT: f32 = 390.0;
const COL_RANGE: f32 = 470.0;
const COL_STATUS: f32 = 610.0;

#[derive(Debug, Clone)]
pub struct LayoutParams {
    pub width: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: VIRTUAL_WIDTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prim {
    TextRun {
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: String,
    },
    Rule {
        y: f32,
        x0: f32,
        x1: f32,
    },
}

#[derive(Debug, Clone)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub prims: Vec<Prim>,
}

pub fn layout(blocks: &[ContentBlock], params: &LayoutParams) -> Surface {
    let width = params.width;
    let text_span = width - 2.0 * MARGIN_X;
    let mut prims = Vec::new();
    let mut y = 0.0f32;

    for block in blocks {
        match block {
            ContentBlock::Title(text) => {
                let x = ((width - text_width(text, TITLE_SIZE)) / 2.0).max(MARGIN_X);
                prims.push(Prim::TextRun {
                    x,
                    y,
                    size: TITLE_SIZE,
                    bold: true,
                    text: text.clone(),
                });
                y += TITLE_LINE;
            }
            ContentBlock::SectionHeader(text) => {
                prims.push(Prim::TextRun {
                    x: MARGIN_X,
                    y,
                    size: SECTION_SIZE,
                    bold: true,
                    text: text.clone(),
                });
                y += SECTION_LINE;
            }
            ContentBlock::LabelValue { label, value } => {
                prims.push(Prim::TextRun {
                    x: MARGIN_X,
                    y,
                    size: BODY_SIZE,
                    bold: true,
                    text: label.clone(),
                });
                prims.push(Prim::TextRun {
                    x: MARGIN_X + LABEL_COL,
                    y,
                    size: BODY_SIZE,
                    bold: false,
                    text: value.clone(),
                });
                y += BODY_LINE;
            }
            ContentBlock::Text(body) => {
                for line in wrap_text(body, text_span, BODY_SIZE) {
                    prims.push(Prim::TextRun {
                        x: MARGIN_X,
                        y,
                        size: BODY_SIZE,
                        bold: false,
                        text: line,
                    });
                    y += BODY_LINE;
                }
            }
            ContentBlock::Table(rows) => {
                let header = ["Marker", "Value", "Unit", "Normal range", "Status"];
                let cols = [COL_NAME, COL_VALUE, COL_UNIT, COL_RANGE, COL_STATUS];
                for (text, col) in header.iter().zip(cols) {
                    prims.push(Prim::TextRun {
                        x: MARGIN_X + col,
                        y,
                        size: TABLE_SIZE,
                        bold: true,
                        text: (*text).to_string(),
                    });
                }
                y += ROW_LINE;
                prims.push(Prim::Rule {
                    y,
                    x0: MARGIN_X,
                    x1: width - MARGIN_X,
                });
                y += 4.0;
                for row in rows {
                    let cells = [
                        row.name.as_str(),
                        row.value.as_str(),
                        row.unit.as_str(),
                        row.range_text.as_str(),
                        row.status.label(),
                    ];
                    for (text, col) in cells.iter().zip(cols) {
                        prims.push(Prim::TextRun {
                            x: MARGIN_X + col,
                            y,
                            size: TABLE_SIZE,
                            bold: false,
                            text: (*text).to_string(),
                        });
                    }
                    y += ROW_LINE;
                }
                prims.push(Prim::Rule {
                    y,
                    x0: MARGIN_X,
                    x1: width - MARGIN_X,
                });
                y += 6.0;
            }
            ContentBlock::Spacer => {
                y += SPACER;
            }
        }
    }

    Surface {
        width,
        height: y,
        prims,
    }
}

// Approximate Helvetica advance widths in em units, close enough for
// centering and right-alignment of short runs.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: f32 = text.chars().map(char_width).sum();
    units * size
}

fn char_width(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '/' | ' ' => 0.33,
        'm' | 'M' | 'W' | 'w' | '@' => 0.85,
        c if c.is_ascii_uppercase() => 0.67,
        c if c.is_ascii_digit() => 0.556,
        _ => 0.52,
    }
}

fn wrap_text(body: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in body.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };
        if text_width(&candidate, size) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
