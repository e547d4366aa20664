use tracing::warn;

use crate::model::record::SampleRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Age,
    Gender,
    PatientCode,
}

// Patient-info labels as they appear in exported matrix files, both the
// Vietnamese originals and the English aliases, keyed in normalized form.
const FIELD_ALIASES: &[(&str, Field)] = &[
    ("name", Field::Name),
    ("họ tên", Field::Name),
    ("ho ten", Field::Name),
    ("age", Field::Age),
    ("tuổi", Field::Age),
    ("tuoi", Field::Age),
    ("gender", Field::Gender),
    ("giới tính", Field::Gender),
    ("gioi tinh", Field::Gender),
    ("patient_code", Field::PatientCode),
    ("patient code", Field::PatientCode),
    ("mã bệnh nhân", Field::PatientCode),
    ("ma benh nhan", Field::PatientCode),
];

pub fn field_for_label(label: &str) -> Option<Field> {
    let norm = normalize_label(label);
    FIELD_ALIASES
        .iter()
        .find(|(alias, _)| *alias == norm)
        .map(|(_, field)| *field)
}

pub fn normalize_label(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply_field(record: &mut SampleRecord, field: Field, value: &str) {
    match field {
        Field::Name => record.name = Some(value.to_string()),
        Field::Gender => record.gender = Some(value.to_string()),
        Field::PatientCode => record.patient_code = Some(value.to_string()),
        Field::Age => match value.parse::<u32>() {
            Ok(age) => record.age = Some(age),
            Err(_) => warn!("unparseable age value '{}'; ignoring", value),
        },
    }
}
