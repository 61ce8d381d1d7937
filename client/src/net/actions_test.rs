use super::*;
use crate::state::passport_draft::PassportField;
use records::{EudrSupplier, JobPhase};
use rest::mock::MockServer;

fn filled(serial: &str) -> PassportDraft {
    let mut draft = PassportDraft::new("2025-03-01");
    for (field, value) in [
        (PassportField::ManufacturerName, "Voltcraft GmbH"),
        (PassportField::ManufacturerAddress, "Werkstr. 1, Berlin"),
        (PassportField::BatteryModel, "VX-48"),
        (PassportField::BatteryCategory, "ev"),
        (PassportField::ManufacturingPlace, "Berlin, DE"),
        (PassportField::SerialNumber, serial),
        (PassportField::Gtin, "01234567890123"),
        (PassportField::BatteryWeightKg, "310.5"),
        (PassportField::RatedCapacityKwh, "75"),
        (PassportField::CarbonFootprintKgPerKwh, "61.2"),
    ] {
        draft.set(field, value.to_owned());
    }
    draft
}

fn template_draft() -> TemplateDraft {
    TemplateDraft {
        name: "VX-48 pack".to_owned(),
        battery_model: "VX-48".to_owned(),
        battery_category: "ev".to_owned(),
        manufacturer_name: "Voltcraft GmbH".to_owned(),
        manufacturer_address: "Werkstr. 1, Berlin".to_owned(),
        gtin: "01234567890123".to_owned(),
        battery_weight_kg: "310.5".to_owned(),
        rated_capacity_kwh: "75".to_owned(),
        carbon_footprint_kg_per_kwh: "61.2".to_owned(),
        ..TemplateDraft::default()
    }
}

#[tokio::test]
async fn plain_create_returns_new_id_and_public_view_hides_restricted_note() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let mut draft = filled("SN-001");
    draft.restricted_note = "Dismantling: remove busbar first".to_owned();

    let created = create_passport(&client, &draft).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(server.requests_to("POST", "/passports").len(), 1);
    assert!(server.requests_to("POST", "/passports/from-template").is_empty());

    let public = client.get_public_passport(&created.id).await.unwrap();
    assert_eq!(public.serial_number, "SN-001");
}

#[tokio::test]
async fn template_selection_routes_to_template_endpoint_with_overrides_only() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let template = save_template(&client, None, &template_draft()).await.unwrap();

    let mut draft = PassportDraft::new("2025-03-01");
    draft.template_id = template.id.clone();
    draft.set(PassportField::SerialNumber, "SN-T-1".to_owned());
    draft.set(PassportField::ManufacturingDate, "2025-03-02".to_owned());
    draft.set(PassportField::ManufacturingPlace, "Leipzig, DE".to_owned());

    let created = create_passport(&client, &draft).await.unwrap();
    assert_eq!(created.battery_model, "VX-48");
    assert_eq!(created.serial_number, "SN-T-1");

    assert!(server.requests_to("POST", "/passports").is_empty());
    let sent = server.requests_to("POST", "/passports/from-template");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body["template_id"], template.id.as_str());
    assert!(sent[0].body["overrides"].get("battery_category").is_none());
    assert!(sent[0].body["overrides"].get("expected_lifetime_cycles").is_none());
}

#[tokio::test]
async fn failed_create_reports_backend_text_and_keeps_draft() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let draft = filled("SN-DUP");
    create_passport(&client, &draft).await.unwrap();

    let snapshot = draft.clone();
    let err = create_passport(&client, &draft).await.unwrap_err();
    assert!(err.contains("Serial number already exists"));
    assert_eq!(draft, snapshot);
}

#[tokio::test]
async fn edit_without_changes_sends_no_patch() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let created = create_passport(&client, &filled("SN-E-1")).await.unwrap();

    let mut draft = PassportDraft::from_passport(&created);
    let unchanged = update_passport(&client, &created.id, &draft).await.unwrap();
    assert_eq!(unchanged.id, created.id);
    assert!(server.requests().iter().all(|r| r.method != "PATCH"));

    draft.set(PassportField::PerformanceClass, "A".to_owned());
    let updated = update_passport(&client, &created.id, &draft).await.unwrap();
    assert_eq!(updated.performance_class.as_deref(), Some("A"));
    let patches: Vec<_> = server.requests().into_iter().filter(|r| r.method == "PATCH").collect();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].body, serde_json::json!({ "performance_class": "A" }));
}

#[tokio::test]
async fn blank_required_fields_block_create_locally() {
    let server = MockServer::start().await.unwrap();
    let mut draft = filled("SN-R-1");
    draft.set(PassportField::Gtin, "  ".to_owned());

    let err = create_passport(&server.client(), &draft).await.unwrap_err();
    assert_eq!(err, "Required fields missing: GTIN");
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn clearing_a_field_on_edit_sends_blank_value() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let mut draft = filled("SN-C-1");
    draft.set(PassportField::HazardousSubstances, "Lead".to_owned());
    let created = create_passport(&client, &draft).await.unwrap();

    let mut edit = PassportDraft::from_passport(&created);
    edit.set(PassportField::HazardousSubstances, String::new());
    let updated = update_passport(&client, &created.id, &edit).await.unwrap();

    let patches: Vec<_> = server.requests().into_iter().filter(|r| r.method == "PATCH").collect();
    assert_eq!(patches.len(), 1);
    assert_eq!(patches[0].body, serde_json::json!({ "hazardous_substances": "" }));
    assert_eq!(updated.hazardous_substances.as_deref(), Some(""));
}

#[tokio::test]
async fn component_edit_clears_blanked_fields() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let draft = ComponentDraft {
        name: "Busbar".to_owned(),
        kind: "electrical".to_owned(),
        test_report_refs: "TR-1".to_owned(),
        ..ComponentDraft::default()
    };
    let created = save_component(&client, None, &draft).await.unwrap();

    let cleared = ComponentDraft { kind: String::new(), test_report_refs: String::new(), ..draft };
    let updated = save_component(&client, Some(&created.id), &cleared).await.unwrap();
    assert_eq!(updated.kind.as_deref(), Some(""));
    assert!(updated.test_report_refs.is_empty());
}

#[tokio::test]
async fn component_save_creates_then_updates() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let draft = ComponentDraft { name: "Cell 21700".to_owned(), kind: "cell".to_owned(), ..ComponentDraft::default() };

    let created = save_component(&client, None, &draft).await.unwrap();
    let edited = ComponentDraft { description: "NMC 811".to_owned(), ..draft };
    let updated = save_component(&client, Some(&created.id), &edited).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.description.as_deref(), Some("NMC 811"));
}

#[tokio::test]
async fn declaration_keeps_line_order_and_advances_once() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let mut draft = CbamDraft::default();
    draft.add_line();
    let key = draft.lines[1].key.clone();
    draft.update_line(&key, |line| {
        line.cn_code = "7601".to_owned();
        line.quantity_tonnes = "5".to_owned();
        line.verified_factor = "10".to_owned();
    });

    let created = create_declaration(&client, &draft).await.unwrap();
    let codes: Vec<_> = created.items.iter().map(|i| i.cn_code.as_str()).collect();
    assert_eq!(codes, ["7208", "7601"]);

    let submitted = advance_declaration(&client, &created).await.unwrap();
    assert_eq!(submitted.status, "submitted");
    let again = advance_declaration(&client, &submitted).await.unwrap();
    assert_eq!(again.status, "submitted");
    assert_eq!(server.requests_to("POST", &format!("/cbam/declarations/{}/status", created.id)).len(), 1);
}

#[tokio::test]
async fn declaration_with_bad_quantity_never_reaches_backend() {
    let server = MockServer::start().await.unwrap();
    let mut draft = CbamDraft::default();
    draft.lines[0].quantity_tonnes = "lots".to_owned();

    let err = create_declaration(&server.client(), &draft).await.unwrap_err();
    assert_eq!(err, "Every line needs a numeric quantity");
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn factor_with_bad_number_never_reaches_backend() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let draft = FactorDraft { cn_prefix: "7208".to_owned(), emission_factor: "abc".to_owned(), ..FactorDraft::default() };
    assert!(create_factor(&client, &draft).await.is_err());
    assert!(server.requests_to("POST", "/cbam/factors").is_empty());

    let supplier = SupplierDraft { name: "Nordic Steel".to_owned(), ..SupplierDraft::default() };
    assert_eq!(create_supplier(&client, &supplier).await.unwrap().name, "Nordic Steel");
}

#[tokio::test]
async fn import_runs_once_and_reaches_terminal_state() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    let job = run_import(&client, &ImportDraft::default()).await.unwrap();
    assert!(job.phase().is_terminal());
    assert_eq!(job.phase(), JobPhase::Succeeded);
    assert_eq!(server.requests_to("POST", "/jobs/imports").len(), 1);
    assert_eq!(server.requests_to("POST", &format!("/jobs/imports/{}/run", job.id)).len(), 1);
    assert_eq!(client.list_components().await.unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_import_json_sends_nothing() {
    let server = MockServer::start().await.unwrap();
    let draft = ImportDraft { kind: JobKind::Components, records_json: "not json".to_owned() };
    assert!(run_import(&server.client(), &draft).await.is_err());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn export_create_failure_skips_run() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    server.fail_next(500, "export queue full");

    assert_eq!(run_export(&client, JobKind::Passports).await.unwrap_err(), "export queue full");
    assert!(server.requests().iter().all(|r| !r.path.ends_with("/run")));

    let job = run_export(&client, JobKind::Passports).await.unwrap();
    assert!(job.result_csv().is_some());
}

#[tokio::test]
async fn quick_add_posts_starter_record() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let saved: EudrSupplier = quick_add(&client).await.unwrap();
    assert_eq!(saved.name, EudrSupplier::starter().name);
    assert_eq!(client.list_compliance::<EudrSupplier>().await.unwrap().len(), 1);
}
