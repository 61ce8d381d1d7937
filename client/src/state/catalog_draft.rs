//! Component and template form drafts.

#[cfg(test)]
#[path = "catalog_draft_test.rs"]
mod catalog_draft_test;

use records::{Component, ComponentInput, ProductTemplate, TemplateInput};

use super::fields::{edited_text, non_blank, number_text, parse_f64, parse_i64, split_list};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentDraft {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub hazardous_substances: String,
    pub carbon_footprint_ref: String,
    /// Comma- or newline-separated test report references.
    pub test_report_refs: String,
}

impl ComponentDraft {
    pub fn from_component(c: &Component) -> Self {
        Self {
            name: c.name.clone(),
            kind: c.kind.clone().unwrap_or_default(),
            description: c.description.clone().unwrap_or_default(),
            hazardous_substances: c.hazardous_substances.clone().unwrap_or_default(),
            carbon_footprint_ref: c.carbon_footprint_ref.clone().unwrap_or_default(),
            test_report_refs: c.test_report_refs.join(", "),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_input(&self) -> ComponentInput {
        let refs = split_list(&self.test_report_refs);
        ComponentInput {
            name: Some(self.name.trim().to_owned()),
            kind: non_blank(&self.kind),
            description: non_blank(&self.description),
            hazardous_substances: non_blank(&self.hazardous_substances),
            carbon_footprint_ref: non_blank(&self.carbon_footprint_ref),
            test_report_refs: if refs.is_empty() { None } else { Some(refs) },
            ..ComponentInput::default()
        }
    }

    /// PATCH body: blank text fields and an empty reference list clear the
    /// stored values.
    pub fn to_update(&self) -> ComponentInput {
        ComponentInput {
            kind: edited_text(&self.kind),
            description: edited_text(&self.description),
            hazardous_substances: edited_text(&self.hazardous_substances),
            carbon_footprint_ref: edited_text(&self.carbon_footprint_ref),
            test_report_refs: Some(split_list(&self.test_report_refs)),
            ..self.to_input()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateDraft {
    pub name: String,
    pub battery_model: String,
    pub battery_category: String,
    pub manufacturer_name: String,
    pub manufacturer_address: String,
    pub gtin: String,
    pub rated_capacity_kwh: String,
    pub battery_weight_kg: String,
    pub carbon_footprint_kg_per_kwh: String,
    pub carbon_footprint_class: String,
    pub expected_lifetime_cycles: String,
    pub expected_lifetime_years: String,
}

impl Default for TemplateDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            battery_model: String::new(),
            battery_category: "industrial".to_owned(),
            manufacturer_name: String::new(),
            manufacturer_address: String::new(),
            gtin: String::new(),
            rated_capacity_kwh: String::new(),
            battery_weight_kg: String::new(),
            carbon_footprint_kg_per_kwh: String::new(),
            carbon_footprint_class: String::new(),
            expected_lifetime_cycles: String::new(),
            expected_lifetime_years: String::new(),
        }
    }
}

impl TemplateDraft {
    pub fn from_template(t: &ProductTemplate) -> Self {
        Self {
            name: t.name.clone(),
            battery_model: t.battery_model.clone(),
            battery_category: t.battery_category.clone(),
            manufacturer_name: t.manufacturer_name.clone().unwrap_or_default(),
            manufacturer_address: t.manufacturer_address.clone().unwrap_or_default(),
            gtin: t.gtin.clone().unwrap_or_default(),
            rated_capacity_kwh: number_text(t.rated_capacity_kwh),
            battery_weight_kg: number_text(t.battery_weight_kg),
            carbon_footprint_kg_per_kwh: number_text(t.carbon_footprint_kg_per_kwh),
            carbon_footprint_class: t.carbon_footprint_class.clone().unwrap_or_default(),
            expected_lifetime_cycles: number_text(t.expected_lifetime_cycles),
            expected_lifetime_years: number_text(t.expected_lifetime_years),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.battery_model, &self.battery_category]
            .iter()
            .all(|v| !v.trim().is_empty())
    }

    pub fn to_input(&self) -> TemplateInput {
        TemplateInput {
            name: Some(self.name.trim().to_owned()),
            battery_model: Some(self.battery_model.trim().to_owned()),
            battery_category: Some(self.battery_category.clone()),
            manufacturer_name: non_blank(&self.manufacturer_name),
            manufacturer_address: non_blank(&self.manufacturer_address),
            gtin: non_blank(&self.gtin),
            rated_capacity_kwh: parse_f64(&self.rated_capacity_kwh),
            battery_weight_kg: parse_f64(&self.battery_weight_kg),
            carbon_footprint_kg_per_kwh: parse_f64(&self.carbon_footprint_kg_per_kwh),
            carbon_footprint_class: non_blank(&self.carbon_footprint_class),
            expected_lifetime_cycles: parse_i64(&self.expected_lifetime_cycles),
            expected_lifetime_years: parse_i64(&self.expected_lifetime_years),
            ..TemplateInput::default()
        }
    }

    /// PATCH body: blank optional text fields clear the stored values.
    pub fn to_update(&self) -> TemplateInput {
        TemplateInput {
            manufacturer_name: edited_text(&self.manufacturer_name),
            manufacturer_address: edited_text(&self.manufacturer_address),
            gtin: edited_text(&self.gtin),
            carbon_footprint_class: edited_text(&self.carbon_footprint_class),
            ..self.to_input()
        }
    }
}
