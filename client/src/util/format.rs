//! Display formatting for list and detail views.
//!
//! Timestamps arrive as naive ISO strings (`2025-03-02T10:00:00.123456`).
//! Anything that does not parse is shown as received rather than hidden.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use std::fmt::Display;

use time::Date;
use time::macros::format_description;

pub const NOT_AVAILABLE: &str = "N/A";

/// `value`, or `N/A` when absent.
pub fn value_or_na<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| v.to_string())
}

/// Text, or `fallback` when absent or blank.
pub fn text_or(value: Option<&str>, fallback: &str) -> String {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(fallback).to_owned()
}

/// `75 kWh`, or `N/A` when absent.
pub fn with_unit(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("{v} {unit}"))
}

/// Percentage for recycled-content fields.
pub fn percent(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_owned(), |v| format!("{v}%"))
}

/// Euro amount with thousands grouping, e.g. `€12,345.60`. Absent is zero.
pub fn format_eur(amount: Option<f64>) -> String {
    let amount = amount.unwrap_or(0.0);
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}€{grouped}.{cents}")
}

/// Tonnes of CO2e with two decimals.
pub fn format_tonnes(value: Option<f64>) -> String {
    format!("{:.2} tCO2e", value.unwrap_or(0.0))
}

/// `2025-03-02T10:00:00` -> `2 Mar 2025`.
pub fn format_date(iso: &str) -> String {
    parse_date(iso).map_or_else(|| iso.to_owned(), render_date)
}

/// `2025-03-02T10:05:59` -> `2 Mar 2025, 10:05`.
pub fn format_datetime(iso: &str) -> String {
    let Some(date) = parse_date(iso) else {
        return iso.to_owned();
    };
    match iso.split_once('T').and_then(|(_, t)| t.get(..5)) {
        Some(clock) => format!("{}, {clock}", render_date(date)),
        None => render_date(date),
    }
}

/// Comma-separated list, or `None` when empty.
pub fn join_list(items: &[String]) -> String {
    if items.is_empty() { "None".to_owned() } else { items.join(", ") }
}

fn parse_date(iso: &str) -> Option<Date> {
    let day = iso.get(..10)?;
    Date::parse(day, format_description!("[year]-[month]-[day]")).ok()
}

fn render_date(date: Date) -> String {
    date.format(format_description!("[day padding:none] [month repr:short] [year]"))
        .unwrap_or_else(|_| date.to_string())
}
