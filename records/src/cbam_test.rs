use super::*;

#[test]
fn declaration_request_keeps_item_order() {
    let input = CbamDeclarationInput {
        period: "2025-Q4".to_owned(),
        status: None,
        items: vec![
            CbamItemInput { cn_code: "7208".to_owned(), quantity_tonnes: 10.0, ..CbamItemInput::default() },
            CbamItemInput {
                cn_code: "7601".to_owned(),
                quantity_tonnes: 5.0,
                verified_emission_factor: Some(10.0),
                ..CbamItemInput::default()
            },
        ],
    };
    let json = serde_json::to_value(&input).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "period": "2025-Q4",
            "items": [
                { "cn_code": "7208", "quantity_tonnes": 10.0 },
                { "cn_code": "7601", "quantity_tonnes": 5.0, "verified_emission_factor": 10.0 }
            ]
        })
    );
}

#[test]
fn item_read_model_keeps_supplier_id_and_name() {
    let item: CbamItem = serde_json::from_value(serde_json::json!({
        "id": "i-1",
        "cn_code": "7208",
        "quantity_tonnes": 10.0,
        "supplier_id": "s-1",
        "supplier_name": "Nordic Steel",
        "calculated_emissions": 18.5
    }))
    .unwrap();
    assert_eq!(item.supplier_id.as_deref(), Some("s-1"));
    assert_eq!(item.supplier_name.as_deref(), Some("Nordic Steel"));
    assert_eq!(item.default_emission_factor, None);
}

#[test]
fn only_drafts_offer_submission() {
    let mut decl = CbamDeclaration { status: "draft".to_owned(), ..CbamDeclaration::default() };
    assert_eq!(decl.next_status(), Some(STATUS_SUBMITTED));
    decl.status = "submitted".to_owned();
    assert_eq!(decl.next_status(), None);
}
