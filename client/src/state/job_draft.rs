//! Import job draft: a kind plus a pasted JSON array of records.

#[cfg(test)]
#[path = "job_draft_test.rs"]
mod job_draft_test;

use records::{ImportJobRequest, JobKind};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDraft {
    pub kind: JobKind,
    pub records_json: String,
}

impl Default for ImportDraft {
    fn default() -> Self {
        Self {
            kind: JobKind::Components,
            records_json: "[\n  {\"name\": \"Example component\", \"kind\": \"cell\"}\n]".to_owned(),
        }
    }
}

impl ImportDraft {
    /// Parse the pasted records. A single object is accepted as a one-record
    /// batch.
    ///
    /// # Errors
    ///
    /// A human-readable message when the text is not a JSON object or array
    /// of objects.
    pub fn to_request(&self) -> Result<ImportJobRequest, String> {
        let parsed: Value =
            serde_json::from_str(self.records_json.trim()).map_err(|e| format!("Records are not valid JSON: {e}"))?;
        let records = match parsed {
            Value::Array(items) => items,
            Value::Object(_) => vec![parsed],
            _ => return Err("Records must be a JSON array of objects".to_owned()),
        };
        if records.iter().any(|r| !r.is_object()) {
            return Err("Records must be a JSON array of objects".to_owned());
        }
        Ok(ImportJobRequest::new(self.kind, records))
    }
}
