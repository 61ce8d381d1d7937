use super::*;

#[test]
fn blank_numbers_are_unset() {
    assert_eq!(parse_f64(""), None);
    assert_eq!(parse_f64("   "), None);
    assert_eq!(parse_i64(""), None);
}

#[test]
fn numbers_parse_with_whitespace() {
    assert_eq!(parse_f64(" 61.2 "), Some(61.2));
    assert_eq!(parse_f64("0"), Some(0.0));
    assert_eq!(parse_i64("800"), Some(800));
    assert_eq!(parse_i64("800.0"), Some(800));
}

#[test]
fn garbage_numbers_are_unset() {
    assert_eq!(parse_f64("abc"), None);
    assert_eq!(parse_f64("NaN"), None);
    assert_eq!(parse_i64("8.5"), None);
}

#[test]
fn non_blank_keeps_text_as_entered() {
    assert_eq!(non_blank("  "), None);
    assert_eq!(non_blank(" Pb, Cd "), Some(" Pb, Cd ".to_owned()));
}

#[test]
fn split_list_accepts_commas_and_newlines() {
    assert_eq!(split_list("TR-1, TR-2\nTR-3,,"), vec!["TR-1", "TR-2", "TR-3"]);
    assert!(split_list(" ").is_empty());
}

#[test]
fn number_text_round_trips_display() {
    assert_eq!(number_text(Some(75.5)), "75.5");
    assert_eq!(number_text::<i64>(None), "");
}
