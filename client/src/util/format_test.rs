use super::*;

#[test]
fn value_or_na_handles_missing() {
    assert_eq!(value_or_na(Some(800)), "800");
    assert_eq!(value_or_na::<i64>(None), "N/A");
}

#[test]
fn text_or_treats_blank_as_missing() {
    assert_eq!(text_or(Some("  "), "None listed"), "None listed");
    assert_eq!(text_or(Some("Pb"), "None listed"), "Pb");
    assert_eq!(text_or(None, "N/A"), "N/A");
}

#[test]
fn units_and_percent() {
    assert_eq!(with_unit(Some(75.0), "kWh"), "75 kWh");
    assert_eq!(with_unit(Some(61.25), "kg/kWh"), "61.25 kg/kWh");
    assert_eq!(with_unit(None, "kg"), "N/A");
    assert_eq!(percent(Some(16.0)), "16%");
}

#[test]
fn eur_groups_thousands() {
    assert_eq!(format_eur(Some(0.0)), "€0.00");
    assert_eq!(format_eur(None), "€0.00");
    assert_eq!(format_eur(Some(999.5)), "€999.50");
    assert_eq!(format_eur(Some(1234.5)), "€1,234.50");
    assert_eq!(format_eur(Some(12_345_678.9)), "€12,345,678.90");
    assert_eq!(format_eur(Some(-4200.0)), "-€4,200.00");
}

#[test]
fn tonnes_have_two_decimals() {
    assert_eq!(format_tonnes(Some(71.0)), "71.00 tCO2e");
    assert_eq!(format_tonnes(None), "0.00 tCO2e");
}

#[test]
fn dates_render_short_month() {
    assert_eq!(format_date("2025-03-02T10:00:00.123456"), "2 Mar 2025");
    assert_eq!(format_date("2025-12-31"), "31 Dec 2025");
    assert_eq!(format_datetime("2025-03-02T10:05:59"), "2 Mar 2025, 10:05");
    assert_eq!(format_datetime("2025-03-02"), "2 Mar 2025");
}

#[test]
fn unparseable_dates_pass_through() {
    assert_eq!(format_date("yesterday"), "yesterday");
    assert_eq!(format_datetime(""), "");
}

#[test]
fn join_list_reads_naturally() {
    assert_eq!(join_list(&[]), "None");
    assert_eq!(join_list(&["TR-1".to_owned(), "TR-2".to_owned()]), "TR-1, TR-2");
}

#[test]
fn malformed_clock_falls_back_to_date() {
    assert_eq!(format_datetime("2025-03-02T10:0é0"), "2 Mar 2025");
    assert_eq!(format_datetime("2025-03-02T1"), "2 Mar 2025");
}
