use super::*;
use crate::mock::MockServer;
use records::{CbamItemInput, CraProduct, JobPhase, OpaqueValue};

fn ev_passport(serial: &str) -> PassportInput {
    PassportInput {
        manufacturer_name: Some("Voltcraft GmbH".to_owned()),
        manufacturer_address: Some("Werkstr. 1, Berlin".to_owned()),
        battery_model: Some("VX-48".to_owned()),
        battery_category: Some("ev".to_owned()),
        manufacturing_date: Some("2025-03-01".to_owned()),
        manufacturing_place: Some("Berlin, DE".to_owned()),
        serial_number: Some(serial.to_owned()),
        gtin: Some("01234567890123".to_owned()),
        battery_weight_kg: Some(310.5),
        carbon_footprint_kg_per_kwh: Some(61.2),
        rated_capacity_kwh: Some(75.0),
        restricted_data: Some(OpaqueValue::note("Dismantling: remove busbar first")),
        ..PassportInput::default()
    }
}

#[tokio::test]
async fn public_projection_omits_restricted_data() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    let created = client.create_passport(&ev_passport("SN-001")).await.unwrap();
    assert!(created.restricted_data.is_some());

    let raw: Value = client
        .request(Method::GET, &format!("/passports/{}/public", created.id), None, &[])
        .await
        .unwrap();
    assert_eq!(raw["serial_number"], "SN-001");
    assert!(raw.get("restricted_data").is_none());

    let public = client.get_public_passport(&created.id).await.unwrap();
    assert_eq!(public.serial_number, "SN-001");
}

#[tokio::test]
async fn every_request_carries_json_and_no_cache_headers() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    client.list_passports().await.unwrap();
    let seen = server.requests_to("GET", "/passports");
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(seen[0].cache_control.as_deref(), Some("no-store"));
    assert_eq!(seen[0].api_key, None);
}

#[tokio::test]
async fn configured_api_key_is_sent() {
    let server = MockServer::start_with_api_key("k-123").await.unwrap();
    let client = ApiClient::new(server.config().with_api_key(Some("k-123".to_owned())));

    assert!(client.list_components().await.unwrap().is_empty());
    assert_eq!(server.requests()[0].api_key.as_deref(), Some("k-123"));
}

#[tokio::test]
async fn missing_api_key_surfaces_backend_body() {
    let server = MockServer::start_with_api_key("k-123").await.unwrap();
    let err = server.client().list_passports().await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.message(), r#"{"detail":"API key required"}"#);
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let _: Vec<Value> = client
        .request(Method::GET, "/audit", None, &[("Cache-Control", "max-age=0")])
        .await
        .unwrap();
    assert_eq!(server.requests()[0].cache_control.as_deref(), Some("max-age=0"));
}

#[tokio::test]
async fn status_error_keeps_body_or_falls_back() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    server.fail_next(422, "gtin must be 14 digits");
    let err = client.create_passport(&ev_passport("SN-002")).await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 422, body: "gtin must be 14 digits".to_owned() });
    assert_eq!(err.message(), "gtin must be 14 digits");

    server.fail_next(500, "");
    let err = client.list_passports().await.unwrap_err();
    assert_eq!(err.message(), crate::error::FALLBACK_MESSAGE);
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(ApiConfig::new(&format!("http://{addr}/api")));
    let err = client.list_passports().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn non_json_success_body_is_decode_error() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let created = client.create_passport(&ev_passport("SN-003")).await.unwrap();

    let err = client
        .request::<Value>(Method::GET, &format!("/passports/{}/qr", created.id), None, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn from_template_uses_dedicated_path() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let template = client
        .create_template(&TemplateInput {
            name: Some("VX-48 baseline".to_owned()),
            battery_category: Some("ev".to_owned()),
            battery_model: Some("VX-48".to_owned()),
            manufacturer_name: Some("Voltcraft GmbH".to_owned()),
            manufacturer_address: Some("Werkstr. 1, Berlin".to_owned()),
            gtin: Some("01234567890123".to_owned()),
            battery_weight_kg: Some(310.5),
            rated_capacity_kwh: Some(75.0),
            carbon_footprint_kg_per_kwh: Some(61.2),
            ..TemplateInput::default()
        })
        .await
        .unwrap();

    let overrides = PassportInput {
        serial_number: Some("SN-T1".to_owned()),
        manufacturing_date: Some("2025-04-01".to_owned()),
        manufacturing_place: Some("Berlin, DE".to_owned()),
        ..PassportInput::default()
    };
    let passport = client
        .create_passport_from_template(&FromTemplateRequest { template_id: template.id.clone(), overrides })
        .await
        .unwrap();

    assert_eq!(passport.battery_model, "VX-48");
    assert_eq!(passport.serial_number, "SN-T1");
    assert!(server.requests_to("POST", "/passports").is_empty());
    let calls = server.requests_to("POST", "/passports/from-template");
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].body["template_id"], template.id.as_str());
    assert_eq!(calls[0].body["overrides"]["serial_number"], "SN-T1");
    assert!(calls[0].body["overrides"].get("battery_model").is_none());
}

#[tokio::test]
async fn update_passport_sends_only_edited_fields() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let created = client.create_passport(&ev_passport("SN-004")).await.unwrap();

    let edit = PassportInput { battery_status: Some("repurposed".to_owned()), ..PassportInput::default() };
    let updated = client.update_passport(&created.id, &edit).await.unwrap();

    assert_eq!(updated.battery_status, "repurposed");
    assert_eq!(updated.serial_number, "SN-004");
    let calls = server.requests_to("PATCH", &format!("/passports/{}", created.id));
    assert_eq!(calls[0].body, serde_json::json!({ "battery_status": "repurposed" }));
}

#[tokio::test]
async fn cbam_declaration_preserves_item_order() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    let declaration = client
        .create_cbam_declaration(&CbamDeclarationInput {
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
        })
        .await
        .unwrap();

    assert_eq!(declaration.period, "2025-Q4");
    assert_eq!(declaration.items.len(), 2);
    assert_eq!(declaration.items[0].cn_code, "7208");
    assert_eq!(declaration.items[1].cn_code, "7601");
    assert_eq!(declaration.items[1].calculated_emissions, Some(50.0));
    assert_eq!(declaration.next_status(), Some("submitted"));

    let submitted = client.update_cbam_status(&declaration.id, "submitted").await.unwrap();
    assert_eq!(submitted.status, "submitted");
    assert_eq!(submitted.items.len(), 2);
}

#[tokio::test]
async fn import_job_reaches_terminal_status_with_one_run_call() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    let job = client
        .create_import_job(&ImportJobRequest::new(
            JobKind::Components,
            vec![serde_json::json!({ "name": "Example component", "kind": "cell" })],
        ))
        .await
        .unwrap();
    assert_eq!(job.phase(), JobPhase::Pending);

    let ran = client.run_import_job(&job.id).await.unwrap();
    assert!(ran.phase().is_terminal());
    assert_ne!(ran.status, job.status);
    assert_eq!(server.requests_to("POST", &format!("/jobs/imports/{}/run", job.id)).len(), 1);

    let components = client.list_components().await.unwrap();
    assert_eq!(components.len(), 1);
    assert_eq!(components[0].name, "Example component");
}

#[tokio::test]
async fn passport_export_offers_csv() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    client.create_passport(&ev_passport("SN-005")).await.unwrap();

    let job = client.create_export_job(JobKind::Passports).await.unwrap();
    let ran = client.run_export_job(&job.id).await.unwrap();
    let csv = ran.result_csv().unwrap();
    assert!(csv.starts_with("id,battery_model,gtin"));
    assert!(csv.contains("SN-005"));
    assert_eq!(client.list_export_jobs().await.unwrap().len(), 1);
}

#[tokio::test]
async fn compliance_registers_round_trip_through_one_wrapper() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    client.create_compliance(&CraProduct::starter()).await.unwrap();
    let products: Vec<CraProduct> = client.list_compliance().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].summary(), "New product (default)");
    assert!(!products[0].id.is_empty());
}

#[tokio::test]
async fn audit_lists_mutations_newest_first() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let created = client.create_passport(&ev_passport("SN-006")).await.unwrap();
    client
        .update_passport(&created.id, &PassportInput { gtin: Some("0999".to_owned()), ..PassportInput::default() })
        .await
        .unwrap();

    let logs = client.list_audit_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].action, "update");
    assert_eq!(logs[0].entity_id.as_deref(), Some(created.id.as_str()));
}

#[test]
fn link_builders_compose_against_base_url() {
    let client = ApiClient::new(ApiConfig::new("https://dpp.example.test/api/"));
    assert_eq!(client.passport_qr_url("p-1"), "https://dpp.example.test/api/passports/p-1/qr");
    assert_eq!(
        client.cbam_export_url("d-1", CbamExportFormat::Pdf),
        "https://dpp.example.test/api/cbam/declarations/d-1/export/pdf"
    );
    assert_eq!(client.dop_pdf_url("t-1"), "https://dpp.example.test/api/dop/templates/t-1/pdf");
}
