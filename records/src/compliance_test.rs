use super::*;

#[test]
fn starter_body_omits_server_fields() {
    let json = serde_json::to_value(CraProduct::starter()).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "New product", "classification": "default" }));
}

#[test]
fn summary_falls_back_when_blank() {
    let supplier = EudrSupplier { name: "Acme".to_owned(), country: Some(" ".to_owned()), ..EudrSupplier::default() };
    assert_eq!(supplier.summary(), "Acme (N/A)");
    let system = AiSystem { name: "Vision".to_owned(), ..AiSystem::default() };
    assert_eq!(system.summary(), "Vision (unknown)");
}

#[test]
fn paths_are_distinct() {
    let paths = [
        CraProduct::PATH,
        EudrSupplier::PATH,
        AiSystem::PATH,
        EpdRecord::PATH,
        Nis2Attestation::PATH,
    ];
    let unique: std::collections::HashSet<_> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len());
}

#[test]
fn decodes_record_with_server_fields() {
    let record: Nis2Attestation = serde_json::from_value(serde_json::json!({
        "id": "n-1",
        "supplier_name": "Grid Co",
        "status": "attested",
        "created_at": "2025-01-01T00:00:00"
    }))
    .unwrap();
    assert_eq!(record.id(), "n-1");
    assert_eq!(record.summary(), "Grid Co (attested)");
}
