//! CBAM declarations and their reference data.
//!
//! Emissions, certificate cost and resolved default factors are computed by
//! the backend. The client only sends CN codes, quantities and optional
//! verified factors, and echoes back what it is given.

#[cfg(test)]
#[path = "cbam_test.rs"]
mod cbam_test;

use serde::{Deserialize, Serialize};

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_SUBMITTED: &str = "submitted";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CbamItem {
    pub id: String,
    pub cn_code: String,
    pub product_description: Option<String>,
    pub quantity_tonnes: f64,
    pub default_emission_factor: Option<f64>,
    pub verified_emission_factor: Option<f64>,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
    pub country_of_origin: Option<String>,
    pub calculated_emissions: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CbamDeclaration {
    pub id: String,
    pub period: String,
    pub status: String,
    pub total_emissions: Option<f64>,
    pub certificate_price_per_tonne: Option<f64>,
    pub certificate_cost_estimate: Option<f64>,
    pub items: Vec<CbamItem>,
    pub created_at: String,
    pub updated_at: String,
}

impl CbamDeclaration {
    /// Status the list view offers to move this declaration to, if any.
    #[must_use]
    pub fn next_status(&self) -> Option<&'static str> {
        self.status
            .eq_ignore_ascii_case(STATUS_DRAFT)
            .then_some(STATUS_SUBMITTED)
    }
}

/// One line of a declaration request. Suppliers are referenced by id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CbamItemInput {
    pub cn_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    pub quantity_tonnes: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_emission_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
}

/// Body of `POST /cbam/declarations`. Item order is preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CbamDeclarationInput {
    pub period: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub items: Vec<CbamItemInput>,
}

/// Body of `POST /cbam/declarations/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CbamStatusUpdate {
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CbamSupplier {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub default_emission_factor: Option<f64>,
    pub contact: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CbamSupplierInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_emission_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

/// Org-level emission factor keyed by CN code prefix.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CbamFactor {
    pub id: String,
    pub cn_prefix: String,
    pub emission_factor: f64,
    pub source: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CbamFactorInput {
    pub cn_prefix: String,
    pub emission_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
