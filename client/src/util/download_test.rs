use super::*;

fn job(kind: &str, result: serde_json::Value) -> Job {
    serde_json::from_value(serde_json::json!({
        "id": "0123456789abcdef",
        "kind": kind,
        "status": "completed",
        "result": result,
    }))
    .unwrap()
}

#[test]
fn data_url_escapes_reserved_and_multibyte() {
    assert_eq!(data_url("text/csv", "a,b\nc"), "data:text/csv;charset=utf-8,a%2Cb%0Ac");
    assert_eq!(data_url("text/csv", "safe-_.~"), "data:text/csv;charset=utf-8,safe-_.~");
    assert_eq!(data_url("text/csv", "€ 5"), "data:text/csv;charset=utf-8,%E2%82%AC%205");
}

#[test]
fn csv_result_becomes_csv_download() {
    let downloads = job_downloads(&job("passports", serde_json::json!({ "csv": "id,gtin\np-1,0123" })));
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].file_name, "passports-export-01234567.csv");
    assert_eq!(downloads[0].href, "data:text/csv;charset=utf-8,id%2Cgtin%0Ap-1%2C0123");
}

#[test]
fn json_result_becomes_json_download() {
    let downloads = job_downloads(&job("cbam", serde_json::json!({ "json": [] })));
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].label, "Download JSON");
    assert!(downloads[0].href.starts_with("data:application/json;charset=utf-8,"));
}

#[test]
fn no_result_offers_nothing() {
    assert!(job_downloads(&job("passports", serde_json::Value::Null)).is_empty());
}
