//! Coercion from controlled-input text to record values.
//!
//! Inputs always hold the text the user typed. Conversion happens once, at
//! submit time: blank numeric text becomes "unset", never zero.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

/// How a form field is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select(&'static [(&'static str, &'static str)]),
}

impl FieldKind {
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Select(_) => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

/// Battery categories offered by the passport and template forms.
pub const BATTERY_CATEGORIES: &[(&str, &str)] = &[
    ("lmt", "Light means of transport (LMT)"),
    ("industrial", "Industrial >2kWh"),
    ("ev", "Electric vehicle"),
];

/// Lifecycle states a passport can be edited to.
pub const BATTERY_STATUSES: &[(&str, &str)] = &[
    ("original", "Original"),
    ("repurposed", "Repurposed"),
    ("reused", "Reused"),
    ("remanufactured", "Remanufactured"),
    ("waste", "Waste"),
];

/// Decimal input: blank or unparseable text is unset.
pub fn parse_f64(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integer input; accepts `800` and `800.0`.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_i64(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok().or_else(|| {
        parse_f64(trimmed)
            .filter(|v| v.fract() == 0.0 && v.abs() < 9.0e15)
            .map(|v| v as i64)
    })
}

/// Optional text: blank is unset, otherwise kept as entered.
pub fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text.to_owned()) }
}

/// Text for an update body: blank is sent as `""` so the stored value is
/// cleared instead of left untouched.
pub fn edited_text(text: &str) -> Option<String> {
    Some(if text.trim().is_empty() { String::new() } else { text.to_owned() })
}

/// Comma- or newline-separated references, trimmed, blanks dropped.
pub fn split_list(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Text shown in a numeric input for an optional value.
pub fn number_text<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
