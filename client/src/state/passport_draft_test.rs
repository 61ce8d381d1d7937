use super::*;

fn filled() -> PassportDraft {
    let mut draft = PassportDraft::new("2025-03-01");
    draft.set(PassportField::ManufacturerName, "Voltcraft GmbH".to_owned());
    draft.set(PassportField::ManufacturerAddress, "Werkstr. 1, Berlin".to_owned());
    draft.set(PassportField::BatteryModel, "VX-48".to_owned());
    draft.set(PassportField::BatteryCategory, "ev".to_owned());
    draft.set(PassportField::ManufacturingPlace, "Berlin, DE".to_owned());
    draft.set(PassportField::SerialNumber, "SN-001".to_owned());
    draft.set(PassportField::Gtin, "01234567890123".to_owned());
    draft.set(PassportField::BatteryWeightKg, "310.5".to_owned());
    draft.set(PassportField::RatedCapacityKwh, "75".to_owned());
    draft.set(PassportField::CarbonFootprintKgPerKwh, "61.2".to_owned());
    draft
}

#[test]
fn field_table_matches_discriminants() {
    for (index, field) in PassportField::ALL.into_iter().enumerate() {
        assert_eq!(field as usize, index);
    }
}

#[test]
fn new_draft_carries_defaults() {
    let draft = PassportDraft::new("2025-03-01");
    assert_eq!(draft.get(PassportField::BatteryCategory), "industrial");
    assert_eq!(draft.get(PassportField::ManufacturingDate), "2025-03-01");
    assert_eq!(draft.get(PassportField::LifetimeCycles), "800");
    assert_eq!(draft.get(PassportField::LifetimeYears), "8");
    assert!(!draft.is_touched(PassportField::BatteryCategory));
}

#[test]
fn create_body_coerces_numbers_and_skips_blanks() {
    let input = filled().to_input();
    assert_eq!(input.serial_number.as_deref(), Some("SN-001"));
    assert_eq!(input.battery_weight_kg, Some(310.5));
    assert_eq!(input.expected_lifetime_cycles, Some(800));
    assert_eq!(input.carbon_footprint_class, None);
    assert_eq!(input.recycled_content_cobalt, None);
    assert_eq!(input.additional_public_data, None);
    assert_eq!(input.restricted_data, None);
}

#[test]
fn blank_numeric_field_is_unset_not_zero() {
    let mut draft = filled();
    draft.set(PassportField::LifetimeYears, String::new());
    assert_eq!(draft.to_input().expected_lifetime_years, None);
}

#[test]
fn notes_go_to_their_tiers_only_when_present() {
    let mut draft = filled();
    draft.public_note = "Return to dealer".to_owned();
    draft.restricted_note = "   ".to_owned();
    let input = draft.to_input();
    assert_eq!(input.additional_public_data, Some(OpaqueValue::note("Return to dealer")));
    assert_eq!(input.restricted_data, None);
}

#[test]
fn missing_required_lists_blank_mandatory_fields() {
    let draft = PassportDraft::new("2025-03-01");
    let missing = draft.missing_required();
    assert!(missing.contains(&PassportField::SerialNumber));
    assert!(missing.contains(&PassportField::Gtin));
    assert!(!missing.contains(&PassportField::BatteryCategory));
    assert!(filled().missing_required().is_empty());
}

#[test]
fn template_selection_relaxes_required_fields() {
    let mut draft = PassportDraft::new("2025-03-01");
    draft.template_id = "t-1".to_owned();
    assert!(draft.uses_template());
    assert!(!draft.is_required(PassportField::SerialNumber));
    assert!(draft.missing_required().is_empty());
}

#[test]
fn template_request_carries_only_touched_fields() {
    let mut draft = PassportDraft::new("2025-03-01");
    draft.template_id = " t-1 ".to_owned();
    draft.set(PassportField::SerialNumber, "SN-T1".to_owned());
    draft.set(PassportField::RatedCapacityKwh, "80".to_owned());
    draft.restricted_note = "Remove busbar first".to_owned();

    let request = draft.to_template_request();
    assert_eq!(request.template_id, "t-1");
    let json = serde_json::to_value(&request.overrides).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "serial_number": "SN-T1",
            "rated_capacity_kwh": 80.0,
            "restricted_data": { "note": "Remove busbar first" }
        })
    );
}

#[test]
fn edit_draft_patches_only_changes() {
    let passport: BatteryPassport = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "manufacturer_name": "Voltcraft GmbH",
        "manufacturer_address": "Werkstr. 1",
        "battery_model": "VX-48",
        "battery_category": "ev",
        "manufacturing_date": "2025-03-01",
        "manufacturing_place": "Berlin",
        "serial_number": "SN-001",
        "gtin": "0123",
        "battery_weight_kg": 310.5,
        "carbon_footprint_kg_per_kwh": 61.2,
        "rated_capacity_kwh": 75.0,
        "expected_lifetime_cycles": 1500
    }))
    .unwrap();

    let mut draft = PassportDraft::from_passport(&passport);
    assert_eq!(draft.get(PassportField::RatedCapacityKwh), "75");
    assert_eq!(draft.get(PassportField::LifetimeCycles), "1500");
    assert_eq!(draft.get(PassportField::LifetimeYears), "");
    assert!(draft.to_patch().is_empty());

    draft.set(PassportField::BatteryStatus, "repurposed".to_owned());
    let patch = draft.to_patch();
    assert_eq!(patch, PassportInput { battery_status: Some("repurposed".to_owned()), ..PassportInput::default() });
}

#[test]
fn clearing_a_touched_text_field_patches_blank() {
    let passport: BatteryPassport = serde_json::from_value(serde_json::json!({
        "id": "p-2",
        "manufacturer_name": "Voltcraft GmbH",
        "manufacturer_address": "Werkstr. 1",
        "battery_model": "VX-48",
        "battery_category": "ev",
        "manufacturing_date": "2025-03-01",
        "manufacturing_place": "Berlin",
        "serial_number": "SN-002",
        "gtin": "0123",
        "battery_weight_kg": 310.5,
        "carbon_footprint_kg_per_kwh": 61.2,
        "rated_capacity_kwh": 75.0,
        "hazardous_substances": "Lead"
    }))
    .unwrap();

    let mut edit = PassportDraft::from_passport(&passport);
    edit.set(PassportField::HazardousSubstances, "  ".to_owned());
    let patch = edit.to_patch();
    assert!(!patch.is_empty());
    assert_eq!(serde_json::to_value(&patch).unwrap(), serde_json::json!({ "hazardous_substances": "" }));
}

#[test]
fn blank_touched_field_is_not_a_template_override() {
    let mut draft = PassportDraft::new("2025-03-01");
    draft.template_id = "t-1".to_owned();
    draft.set(PassportField::Gtin, String::new());
    assert!(draft.to_template_request().overrides.is_empty());
}
