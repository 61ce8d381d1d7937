//! Minor compliance registers: CRA, EUDR, AI Act, EPD and NIS2.
//!
//! DESIGN
//! ======
//! The five registers share one shape (flat record, list plus create, no
//! cross-references), so they share one trait. Each record doubles as its own
//! create body; `id` and `created_at` are left empty on a new record and are
//! omitted from the JSON until the backend fills them.

#[cfg(test)]
#[path = "compliance_test.rs"]
mod compliance_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub trait ComplianceRecord: Clone + Serialize + DeserializeOwned + Send + 'static {
    /// Collection path below the API base URL.
    const PATH: &'static str;
    /// Section heading.
    const TITLE: &'static str;

    /// Record posted by the quick-add action.
    fn starter() -> Self;
    fn id(&self) -> &str;
    /// One-line summary, e.g. `New product (default)`.
    fn summary(&self) -> String;
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(fallback).to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraProduct {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl ComplianceRecord for CraProduct {
    const PATH: &'static str = "/compliance/cra/products";
    const TITLE: &'static str = "CRA products";

    fn starter() -> Self {
        Self { name: "New product".to_owned(), classification: Some("default".to_owned()), ..Self::default() }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, or_fallback(self.classification.as_deref(), "default"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EudrSupplier {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl ComplianceRecord for EudrSupplier {
    const PATH: &'static str = "/compliance/eudr/suppliers";
    const TITLE: &'static str = "EUDR suppliers";

    fn starter() -> Self {
        Self { name: "Supplier".to_owned(), country: Some("NL".to_owned()), ..Self::default() }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, or_fallback(self.country.as_deref(), "N/A"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSystem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub risk_level: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl ComplianceRecord for AiSystem {
    const PATH: &'static str = "/compliance/ai/systems";
    const TITLE: &'static str = "AI Act systems";

    fn starter() -> Self {
        Self { name: "AI System".to_owned(), risk_level: Some("low".to_owned()), ..Self::default() }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.name, or_fallback(self.risk_level.as_deref(), "unknown"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpdRecord {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub product_name: String,
    pub pcr_reference: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl ComplianceRecord for EpdRecord {
    const PATH: &'static str = "/compliance/epd/records";
    const TITLE: &'static str = "EPD records";

    fn starter() -> Self {
        Self { product_name: "Product".to_owned(), pcr_reference: Some("EN 15804".to_owned()), ..Self::default() }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.product_name, or_fallback(self.pcr_reference.as_deref(), "N/A"))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nis2Attestation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub supplier_name: String,
    pub status: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub created_at: String,
}

impl ComplianceRecord for Nis2Attestation {
    const PATH: &'static str = "/compliance/nis2/attestations";
    const TITLE: &'static str = "NIS2 attestations";

    fn starter() -> Self {
        Self { supplier_name: "Supplier".to_owned(), status: Some("pending".to_owned()), ..Self::default() }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.supplier_name, or_fallback(self.status.as_deref(), "unknown"))
    }
}
