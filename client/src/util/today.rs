//! Current calendar date as `YYYY-MM-DD`, used to prefill date inputs.

/// Browser clock, UTC date.
#[cfg(feature = "hydrate")]
pub fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.get(..10).unwrap_or_default().to_owned()
}

/// UTC date on the server and in tests.
#[cfg(not(feature = "hydrate"))]
pub fn today_iso() -> String {
    time::OffsetDateTime::now_utc().date().to_string()
}
