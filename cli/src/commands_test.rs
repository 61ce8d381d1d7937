use super::*;
use records::{OpaqueValue, PassportInput};
use rest::mock::MockServer;

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
        restricted_data: Some(OpaqueValue::note("pack disassembly order")),
        ..PassportInput::default()
    }
}

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn parse_records_accepts_array_object_and_lines() {
    let array = parse_records(r#"[{"name":"a"},{"name":"b"}]"#).unwrap();
    assert_eq!(array.len(), 2);

    let single = parse_records("{\n  \"name\": \"a\"\n}").unwrap();
    assert_eq!(single.len(), 1);

    let lines = parse_records("{\"name\":\"a\"}\n\n{\"name\":\"b\"}\n").unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1]["name"], "b");
}

#[test]
fn parse_records_rejects_non_objects_and_empty_input() {
    assert!(matches!(parse_records("[1, 2]"), Err(CliError::NotAnObject { line: 1 })));
    assert!(matches!(parse_records("{\"a\":1}\n7"), Err(CliError::NotAnObject { line: 2 })));
    assert!(matches!(parse_records("[]"), Err(CliError::NoRecords)));
    assert!(matches!(parse_records("  \n"), Err(CliError::NoRecords)));
    assert!(matches!(parse_records("{not json"), Err(CliError::InvalidJson(_))));
}

#[tokio::test]
async fn passports_list_prints_one_row_each() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let first = client.create_passport(&ev_passport("SN-001")).await.unwrap();
    client.create_passport(&ev_passport("SN-002")).await.unwrap();

    let mut out = Vec::new();
    list_passports(&client, &mut out).await.unwrap();
    let printed = text(out);
    let rows: Vec<&str> = printed.lines().collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], format!("{}\tSN-001\tVX-48\toriginal", first.id));
}

#[tokio::test]
async fn public_get_never_prints_restricted_data() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    let created = client.create_passport(&ev_passport("SN-003")).await.unwrap();

    let mut out = Vec::new();
    get_passport(&client, &created.id, true, &mut out).await.unwrap();
    let printed = text(out);
    assert!(printed.contains("\"serial_number\": \"SN-003\""));
    assert!(!printed.contains("restricted_data"));
    assert!(!printed.contains("pack disassembly order"));

    let mut out = Vec::new();
    get_passport(&client, &created.id, false, &mut out).await.unwrap();
    assert!(text(out).contains("pack disassembly order"));
}

#[tokio::test]
async fn missing_passport_is_an_api_error() {
    let server = MockServer::start().await.unwrap();
    let mut out = Vec::new();
    let err = get_passport(&server.client(), "nope", false, &mut out).await.unwrap_err();
    assert!(matches!(err, CliError::Api(_)));
    assert!(out.is_empty());
}

#[tokio::test]
async fn import_creates_then_runs_once() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();

    let mut out = Vec::new();
    run_import(&client, JobKind::Components, r#"[{"name":"Example component","kind":"cell"}]"#, &mut out)
        .await
        .unwrap();

    let printed = text(out);
    assert!(printed.contains("(components, 1 records): completed"));
    assert_eq!(server.requests_to("POST", "/jobs/imports").len(), 1);
    let job = &client.list_import_jobs().await.unwrap()[0];
    assert_eq!(server.requests_to("POST", &format!("/jobs/imports/{}/run", job.id)).len(), 1);
    assert_eq!(client.list_components().await.unwrap().len(), 1);
}

#[tokio::test]
async fn failed_import_is_reported_as_error() {
    let server = MockServer::start().await.unwrap();
    let mut out = Vec::new();
    let err = run_import(&server.client(), JobKind::Cbam, r#"{"period":"2025-Q1"}"#, &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, CliError::JobFailed { ref status, .. } if status == "failed"));
}

#[tokio::test]
async fn invalid_import_input_sends_nothing() {
    let server = MockServer::start().await.unwrap();
    let mut out = Vec::new();
    assert!(run_import(&server.client(), JobKind::Components, "[]", &mut out).await.is_err());
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn passport_export_writes_csv() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    client.create_passport(&ev_passport("SN-004")).await.unwrap();

    let mut out = Vec::new();
    run_export(&client, JobKind::Passports, &mut out).await.unwrap();
    let printed = text(out);
    assert!(printed.starts_with("id,battery_model,gtin"));
    assert!(printed.contains("SN-004"));
}

#[tokio::test]
async fn non_exportable_kind_is_rejected_locally() {
    let server = MockServer::start().await.unwrap();
    let mut out = Vec::new();
    let err = run_export(&server.client(), JobKind::Components, &mut out).await.unwrap_err();
    assert!(matches!(err, CliError::NotExportable(JobKind::Components)));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn jobs_listing_covers_both_directions() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    client.create_export_job(JobKind::Cbam).await.unwrap();

    let mut out = Vec::new();
    list_jobs(&client, JobDirection::Exports, &mut out).await.unwrap();
    assert!(text(out).contains("\tcbam\tpending\t"));

    let mut out = Vec::new();
    list_jobs(&client, JobDirection::Imports, &mut out).await.unwrap();
    assert!(out.is_empty());
}

#[tokio::test]
async fn audit_respects_limit() {
    let server = MockServer::start().await.unwrap();
    let client = server.client();
    client.create_passport(&ev_passport("SN-010")).await.unwrap();
    let newest = client.create_passport(&ev_passport("SN-011")).await.unwrap();

    let mut out = Vec::new();
    audit(&client, Some(1), &mut out).await.unwrap();
    let printed = text(out);
    assert_eq!(printed.lines().count(), 1);
    assert!(printed.contains(&format!("api-key\tcreate\tpassport\t{}", newest.id)));
}
