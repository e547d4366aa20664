use thiserror::Error;

pub mod csv;
pub mod layout;
pub mod paginate;
pub mod pdf;

use chrono::NaiveDate;

use crate::model::range::{Status, format_number};
use crate::model::record::{BiomarkerMap, SampleRecord};
use crate::model::units::unit_for;

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Title(String),
    SectionHeader(String),
    LabelValue { label: String, value: String },
    Text(String),
    Table(Vec<BiomarkerRow>),
    Spacer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BiomarkerRow {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub range_text: String,
    pub status: Status,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("nothing to render: content is empty")]
    EmptyContent,
    #[error("page content budget must be positive, got {0}")]
    InvalidBudget(f32),
    #[error("PDF composition failed: {0}")]
    Pdf(String),
}

/// Order-dependent accumulator of report content. Blocks come out in
/// exactly the call order they were pushed; `finish` consumes the
/// builder, so an instance cannot leak blocks into a second document.
#[derive(Debug, Default)]
pub struct ReportContent {
    blocks: Vec<ContentBlock>,
}

impl ReportContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_title(&mut self, text: &str) {
        self.blocks.push(ContentBlock::Title(text.to_string()));
    }

    pub fn push_section_header(&mut self, text: &str) {
        self.blocks.push(ContentBlock::SectionHeader(text.to_string()));
    }

    pub fn push_label_value(&mut self, label: &str, value: &str) {
        self.blocks.push(ContentBlock::LabelValue {
            label: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn push_text(&mut self, body: &str) {
        self.blocks.push(ContentBlock::Text(body.to_string()));
    }

    pub fn push_space(&mut self) {
        self.blocks.push(ContentBlock::Spacer);
    }

    pub fn patient_info(&mut self, record: &SampleRecord) {
        self.push_section_header("Patient information");
        self.push_label_value("Patient code", record.patient_code.as_deref().unwrap_or("-"));
        self.push_label_value("Full name", record.name.as_deref().unwrap_or("-"));
        let age = record.age.map(|a| a.to_string());
        self.push_label_value("Age", age.as_deref().unwrap_or("-"));
        self.push_label_value("Gender", record.gender.as_deref().unwrap_or("-"));
    }

    pub fn biomarker_table(&mut self, biomarkers: &BiomarkerMap) {
        self.push_section_header("Biomarker results");
        let rows = biomarkers
            .iter()
            .map(|reading| BiomarkerRow {
                name: reading.name.clone(),
                value: format_number(reading.value),
                unit: unit_for(&reading.name).to_string(),
                range_text: reading.range.display(),
                status: reading.status,
            })
            .collect();
        self.blocks.push(ContentBlock::Table(rows));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn finish(self) -> Vec<ContentBlock> {
        self.blocks
    }
}

pub fn build_filename(prefix: &str, identifier: &str, date: NaiveDate, ext: &str) -> String {
    format!(
        "{}_{}_{}.{}",
        prefix,
        sanitize_identifier(identifier),
        date.format("%Y-%m-%d"),
        ext
    )
}

fn sanitize_identifier(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut last_dash = true;
    for c in identifier.chars().map(fold_ascii) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "sample".to_string()
    } else {
        out
    }
}

// Base-letter substitutions for the Vietnamese alphabet; the builtin
// PDF fonts have no glyphs past WinAnsi.
const FOLD_GROUPS: &[(&str, char)] = &[
    ("àáạảãâầấậẩẫăằắặẳẵ", 'a'),
    ("ÀÁẠẢÃÂẦẤẬẨẪĂẰẮẶẲẴ", 'A'),
    ("èéẹẻẽêềếệểễ", 'e'),
    ("ÈÉẸẺẼÊỀẾỆỂỄ", 'E'),
    ("ìíịỉĩ", 'i'),
    ("ÌÍỊỈĨ", 'I'),
    ("òóọỏõôồốộổỗơờớợởỡ", 'o'),
    ("ÒÓỌỎÕÔỒỐỘỔỖƠỜỚỢỞỠ", 'O'),
    ("ùúụủũưừứựửữ", 'u'),
    ("ÙÚỤỦŨƯỪỨỰỬỮ", 'U'),
    ("ỳýỵỷỹ", 'y'),
    ("ỲÝỴỶỸ", 'Y'),
    ("đ", 'd'),
    ("Đ", 'D'),
];

pub fn fold_ascii(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    for (group, base) in FOLD_GROUPS {
        if group.contains(c) {
            return *base;
        }
    }
    c
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/builder.rs"]
mod tests;
