// The high-impact set covers only the markers the scoring path has
// validated weights for; the wider marker catalog stays tier 2 until a
// tier file says otherwise.
const BUILTIN_HIGH_IMPACT: &[&str] = &[
    "glucose",
    "cholesterol",
    "ldl",
    "triglycerides",
    "creatinine",
    "hba1c",
];

pub fn builtin_high_impact() -> &'static [&'static str] {
    BUILTIN_HIGH_IMPACT
}
