//! Battery passport records.
//!
//! DESIGN
//! ======
//! A passport has two visibility tiers. [`BatteryPassport`] is the restricted
//! registry view. [`PublicPassport`] is the QR-scan view and has no fields for
//! `restricted_data`, `end_of_life` or `updated_at`, so decoding a payload that
//! carries them simply drops them; the public page cannot render what the type
//! cannot hold.

#[cfg(test)]
#[path = "passport_test.rs"]
mod passport_test;

use serde::{Deserialize, Serialize};

use crate::opaque::OpaqueValue;

/// Field names that never appear in the public projection.
pub const PUBLIC_EXCLUDED_FIELDS: [&str; 3] = ["restricted_data", "end_of_life", "updated_at"];

fn default_status() -> String {
    "original".to_owned()
}

/// Full passport record as returned by `GET /passports/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatteryPassport {
    pub id: String,
    pub manufacturer_name: String,
    pub manufacturer_address: String,
    pub battery_model: String,
    pub battery_category: String,
    pub manufacturing_date: String,
    pub manufacturing_place: String,
    pub serial_number: String,
    pub gtin: String,
    #[serde(default = "default_status")]
    pub battery_status: String,
    pub battery_weight_kg: f64,
    pub carbon_footprint_kg_per_kwh: f64,
    #[serde(default)]
    pub carbon_footprint_class: Option<String>,
    #[serde(default)]
    pub recycled_content_cobalt: Option<f64>,
    #[serde(default)]
    pub recycled_content_lead: Option<f64>,
    #[serde(default)]
    pub recycled_content_lithium: Option<f64>,
    #[serde(default)]
    pub recycled_content_nickel: Option<f64>,
    pub rated_capacity_kwh: f64,
    #[serde(default)]
    pub expected_lifetime_cycles: Option<i64>,
    #[serde(default)]
    pub expected_lifetime_years: Option<i64>,
    #[serde(default)]
    pub hazardous_substances: Option<String>,
    #[serde(default)]
    pub performance_class: Option<String>,
    #[serde(default)]
    pub additional_public_data: Option<OpaqueValue>,
    #[serde(default)]
    pub restricted_data: Option<OpaqueValue>,
    #[serde(default)]
    pub end_of_life: Option<OpaqueValue>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl BatteryPassport {
    /// Project this record onto the public tier.
    #[must_use]
    pub fn public_view(&self) -> PublicPassport {
        PublicPassport::from(self)
    }
}

/// Public tier of a passport, as returned by `GET /passports/{id}/public`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PublicPassport {
    pub id: String,
    #[serde(default)]
    pub manufacturer_name: String,
    #[serde(default)]
    pub manufacturer_address: String,
    #[serde(default)]
    pub battery_model: String,
    #[serde(default)]
    pub battery_category: String,
    #[serde(default)]
    pub manufacturing_date: String,
    #[serde(default)]
    pub manufacturing_place: String,
    #[serde(default)]
    pub serial_number: String,
    #[serde(default)]
    pub gtin: String,
    /// Not part of the backend's public schema; only shown when sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_status: Option<String>,
    #[serde(default)]
    pub battery_weight_kg: f64,
    #[serde(default)]
    pub carbon_footprint_kg_per_kwh: f64,
    #[serde(default)]
    pub carbon_footprint_class: Option<String>,
    #[serde(default)]
    pub recycled_content_cobalt: Option<f64>,
    #[serde(default)]
    pub recycled_content_lead: Option<f64>,
    #[serde(default)]
    pub recycled_content_lithium: Option<f64>,
    #[serde(default)]
    pub recycled_content_nickel: Option<f64>,
    #[serde(default)]
    pub rated_capacity_kwh: f64,
    #[serde(default)]
    pub expected_lifetime_cycles: Option<i64>,
    #[serde(default)]
    pub expected_lifetime_years: Option<i64>,
    #[serde(default)]
    pub hazardous_substances: Option<String>,
    #[serde(default)]
    pub performance_class: Option<String>,
    #[serde(default)]
    pub additional_public_data: Option<OpaqueValue>,
    #[serde(default)]
    pub created_at: String,
}

impl From<&BatteryPassport> for PublicPassport {
    fn from(p: &BatteryPassport) -> Self {
        Self {
            id: p.id.clone(),
            manufacturer_name: p.manufacturer_name.clone(),
            manufacturer_address: p.manufacturer_address.clone(),
            battery_model: p.battery_model.clone(),
            battery_category: p.battery_category.clone(),
            manufacturing_date: p.manufacturing_date.clone(),
            manufacturing_place: p.manufacturing_place.clone(),
            serial_number: p.serial_number.clone(),
            gtin: p.gtin.clone(),
            battery_status: Some(p.battery_status.clone()),
            battery_weight_kg: p.battery_weight_kg,
            carbon_footprint_kg_per_kwh: p.carbon_footprint_kg_per_kwh,
            carbon_footprint_class: p.carbon_footprint_class.clone(),
            recycled_content_cobalt: p.recycled_content_cobalt,
            recycled_content_lead: p.recycled_content_lead,
            recycled_content_lithium: p.recycled_content_lithium,
            recycled_content_nickel: p.recycled_content_nickel,
            rated_capacity_kwh: p.rated_capacity_kwh,
            expected_lifetime_cycles: p.expected_lifetime_cycles,
            expected_lifetime_years: p.expected_lifetime_years,
            hazardous_substances: p.hazardous_substances.clone(),
            performance_class: p.performance_class.clone(),
            additional_public_data: p.additional_public_data.clone(),
            created_at: p.created_at.clone(),
        }
    }
}

/// Writable passport fields.
///
/// Used as the create body, the partial-update body, and the `overrides` of a
/// from-template request. Unset fields are omitted from the JSON so a PATCH
/// only touches what was edited and template overrides only carry what the
/// user filled in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PassportInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturing_place: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_footprint_kg_per_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbon_footprint_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycled_content_cobalt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycled_content_lead: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycled_content_lithium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycled_content_nickel: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_capacity_kwh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_lifetime_cycles: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_lifetime_years: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hazardous_substances: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_public_data: Option<OpaqueValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restricted_data: Option<OpaqueValue>,
}

impl PassportInput {
    /// True when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /passports/from-template`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FromTemplateRequest {
    pub template_id: String,
    #[serde(default)]
    pub overrides: PassportInput,
}
