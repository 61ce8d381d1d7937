use super::*;

#[test]
fn default_draft_has_one_steel_line() {
    let draft = CbamDraft::default();
    assert_eq!(draft.period, "2025-Q4");
    assert_eq!(draft.lines.len(), 1);
    assert_eq!(draft.lines[0].cn_code, "7208");
    assert!(draft.is_complete());
}

#[test]
fn lines_keep_order_and_unique_keys() {
    let mut draft = CbamDraft::default();
    draft.add_line();
    let key = draft.lines[1].key.clone();
    assert_ne!(draft.lines[0].key, key);

    draft.update_line(&key, |line| {
        line.cn_code = "7601".to_owned();
        line.quantity_tonnes = "5".to_owned();
        line.verified_factor = "10".to_owned();
    });

    let input = draft.to_input().unwrap();
    assert_eq!(input.items.len(), 2);
    assert_eq!(input.items[0].cn_code, "7208");
    assert_eq!(input.items[0].quantity_tonnes, 10.0);
    assert_eq!(input.items[1].cn_code, "7601");
    assert_eq!(input.items[1].verified_emission_factor, Some(10.0));
    assert_eq!(input.items[1].supplier_id, None);
}

#[test]
fn remove_line_keeps_at_least_one() {
    let mut draft = CbamDraft::default();
    let only = draft.lines[0].key.clone();
    draft.remove_line(&only);
    assert_eq!(draft.lines.len(), 1);

    draft.add_line();
    draft.remove_line(&only);
    assert_eq!(draft.lines.len(), 1);
    assert_ne!(draft.lines[0].key, only);
}

#[test]
fn blank_cn_code_is_incomplete() {
    let mut draft = CbamDraft::default();
    draft.add_line();
    assert!(!draft.is_complete());
}

#[test]
fn unparseable_quantity_blocks_the_body() {
    let mut draft = CbamDraft::default();
    let key = draft.lines[0].key.clone();
    draft.update_line(&key, |line| line.quantity_tonnes = "ten".to_owned());
    assert!(!draft.is_complete());
    assert_eq!(draft.to_input(), None);

    draft.update_line(&key, |line| line.quantity_tonnes = " 12.5 ".to_owned());
    assert_eq!(draft.to_input().unwrap().items[0].quantity_tonnes, 12.5);
}

#[test]
fn supplier_body_skips_blank_optionals() {
    let draft = SupplierDraft { name: "Nordic Steel".to_owned(), default_emission_factor: "1.7".to_owned(), ..SupplierDraft::default() };
    let json = serde_json::to_value(draft.to_input()).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Nordic Steel", "default_emission_factor": 1.7 }));
}

#[test]
fn factor_needs_prefix_and_number() {
    let mut draft = FactorDraft { cn_prefix: "7208".to_owned(), ..FactorDraft::default() };
    assert_eq!(draft.to_input(), None);
    draft.emission_factor = "2.3".to_owned();
    let input = draft.to_input().unwrap();
    assert_eq!(input.emission_factor, 2.3);
    assert_eq!(input.source, None);
}
