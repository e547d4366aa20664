use crate::tiers::normalize_marker;

// Display units for the markers the report path knows about. Markers
// outside this table render with an empty unit column.
const MARKER_UNITS: &[(&str, &str)] = &[
    ("glucose", "mg/dL"),
    ("cholesterol", "mg/dL"),
    ("ldl", "mg/dL"),
    ("hdl", "mg/dL"),
    ("triglycerides", "mg/dL"),
    ("creatinine", "mg/dL"),
    ("urea", "mg/dL"),
    ("uric acid", "mg/dL"),
    ("hba1c", "%"),
    ("ast", "U/L"),
    ("alt", "U/L"),
    ("ggt", "U/L"),
    ("hemoglobin", "g/dL"),
    ("wbc", "10^3/uL"),
    ("platelets", "10^3/uL"),
    ("crp", "mg/L"),
];

pub fn unit_for(name: &str) -> &'static str {
    let norm = normalize_marker(name);
    MARKER_UNITS
        .iter()
        .find(|(marker, _)| *marker == norm)
        .map(|(_, unit)| *unit)
        .unwrap_or("")
}
