//! Import and export job records.
//!
//! DESIGN
//! ======
//! The backend interprets `kind` per value, so the client models it as a
//! closed enum. An unknown kind can be read back from the server (it decodes
//! into [`JobKind`] or fails loudly) but can never be constructed for a
//! request. Status strings stay backend-defined; [`JobPhase`] only groups them
//! for display.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::opaque::OpaqueValue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Components,
    Templates,
    Passports,
    Cbam,
}

impl JobKind {
    pub const ALL: [Self; 4] = [Self::Components, Self::Templates, Self::Passports, Self::Cbam];

    /// Kinds the export runner can produce.
    pub const EXPORTABLE: [Self; 2] = [Self::Passports, Self::Cbam];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Templates => "templates",
            Self::Passports => "passports",
            Self::Cbam => "cbam",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Components => "Components",
            Self::Templates => "Templates",
            Self::Passports => "Passports",
            Self::Cbam => "CBAM declarations",
        }
    }

    #[must_use]
    pub fn is_exportable(self) -> bool {
        Self::EXPORTABLE.contains(&self)
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown job kind: {0}")]
pub struct UnknownJobKind(pub String);

impl FromStr for JobKind {
    type Err = UnknownJobKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownJobKind(s.to_owned()))
    }
}

/// Display grouping of a backend job status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JobPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Other,
}

impl JobPhase {
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "pending" | "queued" => Self::Pending,
            "running" => Self::Running,
            "completed" | "done" => Self::Succeeded,
            "failed" | "error" => Self::Failed,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Pending => "job-pending",
            Self::Running => "job-running",
            Self::Succeeded => "job-succeeded",
            Self::Failed => "job-failed",
            Self::Other => "job-other",
        }
    }
}

/// An import or export job as returned by `/jobs/imports` and `/jobs/exports`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub kind: JobKind,
    pub status: String,
    #[serde(default)]
    pub payload: Option<OpaqueValue>,
    #[serde(default)]
    pub result: Option<OpaqueValue>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Job {
    #[must_use]
    pub fn phase(&self) -> JobPhase {
        JobPhase::classify(&self.status)
    }

    /// Text of a `csv` member in the run result, if any.
    #[must_use]
    pub fn result_csv(&self) -> Option<&str> {
        self.result.as_ref()?.member("csv")?.as_str()
    }

    /// Pretty JSON of a `json` member in the run result, if any.
    #[must_use]
    pub fn result_json(&self) -> Option<String> {
        let member = self.result.as_ref()?.member("json")?;
        Some(OpaqueValue::new(member.clone()).pretty())
    }
}

/// Body wrapper for import records: `{"records": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportPayload {
    #[serde(default)]
    pub records: Vec<serde_json::Value>,
}

/// Body of `POST /jobs/imports`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportJobRequest {
    pub kind: JobKind,
    pub payload: ImportPayload,
}

impl ImportJobRequest {
    #[must_use]
    pub fn new(kind: JobKind, records: Vec<serde_json::Value>) -> Self {
        Self { kind, payload: ImportPayload { records } }
    }
}

/// Body of `POST /jobs/exports`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportJobRequest {
    pub kind: JobKind,
}
