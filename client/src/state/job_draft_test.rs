use super::*;

#[test]
fn default_draft_parses_example_component() {
    let request = ImportDraft::default().to_request().unwrap();
    assert_eq!(request.kind, JobKind::Components);
    assert_eq!(request.payload.records, vec![serde_json::json!({ "name": "Example component", "kind": "cell" })]);
}

#[test]
fn single_object_is_one_record() {
    let draft = ImportDraft { kind: JobKind::Templates, records_json: r#"{"name": "T"}"#.to_owned() };
    assert_eq!(draft.to_request().unwrap().payload.records.len(), 1);
}

#[test]
fn invalid_json_is_reported() {
    let draft = ImportDraft { kind: JobKind::Passports, records_json: "[{".to_owned() };
    assert!(draft.to_request().unwrap_err().starts_with("Records are not valid JSON"));
}

#[test]
fn scalars_are_rejected() {
    let draft = ImportDraft { kind: JobKind::Passports, records_json: "[1, 2]".to_owned() };
    assert_eq!(draft.to_request().unwrap_err(), "Records must be a JSON array of objects");
}
