use super::*;

#[test]
fn component_body_splits_refs_and_skips_blanks() {
    let draft = ComponentDraft {
        name: " NMC cell ".to_owned(),
        kind: "cell".to_owned(),
        test_report_refs: "TR-1, TR-2".to_owned(),
        ..ComponentDraft::default()
    };
    let json = serde_json::to_value(draft.to_input()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "NMC cell", "kind": "cell", "test_report_refs": ["TR-1", "TR-2"] })
    );
}

#[test]
fn component_requires_name() {
    assert!(!ComponentDraft::default().is_complete());
    assert!(ComponentDraft { name: "Pack".to_owned(), ..ComponentDraft::default() }.is_complete());
}

#[test]
fn component_draft_round_trips_existing_record() {
    let component = Component {
        id: "c-1".to_owned(),
        name: "BMS".to_owned(),
        kind: Some("electronics".to_owned()),
        test_report_refs: vec!["TR-9".to_owned()],
        ..Component::default()
    };
    let draft = ComponentDraft::from_component(&component);
    assert_eq!(draft.test_report_refs, "TR-9");
    assert_eq!(draft.to_input().kind.as_deref(), Some("electronics"));
}

#[test]
fn template_defaults_to_industrial_and_coerces_numbers() {
    let mut draft = TemplateDraft::default();
    assert_eq!(draft.battery_category, "industrial");
    assert!(!draft.is_complete());

    draft.name = "Rack 48V".to_owned();
    draft.battery_model = "R48".to_owned();
    draft.rated_capacity_kwh = "5.12".to_owned();
    draft.battery_weight_kg = String::new();
    assert!(draft.is_complete());

    let input = draft.to_input();
    assert_eq!(input.rated_capacity_kwh, Some(5.12));
    assert_eq!(input.battery_weight_kg, None);
    assert_eq!(input.gtin, None);
}

#[test]
fn template_draft_seeds_from_record() {
    let template = ProductTemplate {
        id: "t-1".to_owned(),
        name: "VX".to_owned(),
        battery_category: "ev".to_owned(),
        battery_model: "VX-48".to_owned(),
        rated_capacity_kwh: Some(75.0),
        expected_lifetime_cycles: Some(1500),
        ..ProductTemplate::default()
    };
    let draft = TemplateDraft::from_template(&template);
    assert_eq!(draft.rated_capacity_kwh, "75");
    assert_eq!(draft.expected_lifetime_cycles, "1500");
    assert_eq!(draft.to_input().expected_lifetime_cycles, Some(1500));
}

#[test]
fn component_update_clears_blank_fields() {
    let draft = ComponentDraft { name: "BMS".to_owned(), kind: "electronics".to_owned(), ..ComponentDraft::default() };
    let json = serde_json::to_value(draft.to_update()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "BMS",
            "kind": "electronics",
            "description": "",
            "hazardous_substances": "",
            "carbon_footprint_ref": "",
            "test_report_refs": []
        })
    );
}

#[test]
fn template_update_clears_blank_text_but_not_numbers() {
    let draft = TemplateDraft {
        name: "Rack".to_owned(),
        battery_model: "R48".to_owned(),
        gtin: " ".to_owned(),
        ..TemplateDraft::default()
    };
    let input = draft.to_update();
    assert_eq!(input.gtin.as_deref(), Some(""));
    assert_eq!(input.manufacturer_name.as_deref(), Some(""));
    assert_eq!(input.rated_capacity_kwh, None);
}
