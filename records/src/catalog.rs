//! Component and product-template catalog records.
//!
//! Components are reusable building blocks referenced by id string from
//! templates and passports; nothing here checks those references. Templates
//! are default-value sets the backend copies into a new passport.

use serde::{Deserialize, Serialize};

use crate::opaque::OpaqueValue;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Component {
    pub id: String,
    pub name: String,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub specifications: Option<OpaqueValue>,
    pub carbon_footprint_ref: Option<String>,
    pub recycled_content: Option<OpaqueValue>,
    pub hazardous_substances: Option<String>,
    pub test_report_refs: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create and PATCH body for `/catalog/components`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<OpaqueValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_footprint_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content: Option<OpaqueValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hazardous_substances: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_report_refs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductTemplate {
    pub id: String,
    pub name: String,
    pub battery_category: String,
    pub battery_model: String,
    pub manufacturer_name: Option<String>,
    pub manufacturer_address: Option<String>,
    pub gtin: Option<String>,
    pub battery_weight_kg: Option<f64>,
    pub rated_capacity_kwh: Option<f64>,
    pub carbon_footprint_kg_per_kwh: Option<f64>,
    pub carbon_footprint_class: Option<String>,
    pub recycled_content_cobalt: Option<f64>,
    pub recycled_content_lead: Option<f64>,
    pub recycled_content_lithium: Option<f64>,
    pub recycled_content_nickel: Option<f64>,
    pub expected_lifetime_cycles: Option<i64>,
    pub expected_lifetime_years: Option<i64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create and PATCH body for `/catalog/templates`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_weight_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rated_capacity_kwh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_footprint_kg_per_kwh: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_footprint_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_cobalt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_lead: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_lithium: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recycled_content_nickel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_lifetime_cycles: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_lifetime_years: Option<i64>,
}
