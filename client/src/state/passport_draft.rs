//! Passport form draft.
//!
//! SYSTEM CONTEXT
//! ==============
//! One draft backs three submissions: plain create, create-from-template and
//! edit. The field table drives the rendered form, so labels, required flags
//! and input kinds live next to the values they describe.
//!
//! DESIGN
//! ======
//! Every field is held as entered text and tracked as "touched" once the user
//! changes it. Plain create sends the whole draft. Template create and edit
//! send only touched fields: template defaults are applied behind the API, so
//! prefilled values such as today's date must not mask them.

#[cfg(test)]
#[path = "passport_draft_test.rs"]
mod passport_draft_test;

use std::collections::BTreeSet;

use records::{BatteryPassport, FromTemplateRequest, OpaqueValue, PassportInput};

use super::fields::{BATTERY_CATEGORIES, BATTERY_STATUSES, FieldKind, edited_text, non_blank, number_text, parse_f64, parse_i64};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum PassportField {
    ManufacturerName,
    ManufacturerAddress,
    BatteryModel,
    BatteryCategory,
    ManufacturingDate,
    ManufacturingPlace,
    SerialNumber,
    Gtin,
    BatteryStatus,
    BatteryWeightKg,
    RatedCapacityKwh,
    CarbonFootprintKgPerKwh,
    CarbonFootprintClass,
    RecycledCobalt,
    RecycledLead,
    RecycledLithium,
    RecycledNickel,
    LifetimeCycles,
    LifetimeYears,
    HazardousSubstances,
    PerformanceClass,
}

impl PassportField {
    pub const ALL: [Self; 21] = [
        Self::ManufacturerName,
        Self::ManufacturerAddress,
        Self::BatteryModel,
        Self::BatteryCategory,
        Self::ManufacturingDate,
        Self::ManufacturingPlace,
        Self::SerialNumber,
        Self::Gtin,
        Self::BatteryStatus,
        Self::BatteryWeightKg,
        Self::RatedCapacityKwh,
        Self::CarbonFootprintKgPerKwh,
        Self::CarbonFootprintClass,
        Self::RecycledCobalt,
        Self::RecycledLead,
        Self::RecycledLithium,
        Self::RecycledNickel,
        Self::LifetimeCycles,
        Self::LifetimeYears,
        Self::HazardousSubstances,
        Self::PerformanceClass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ManufacturerName => "Manufacturer name",
            Self::ManufacturerAddress => "Manufacturer address",
            Self::BatteryModel => "Battery model",
            Self::BatteryCategory => "Category",
            Self::ManufacturingDate => "Manufacturing date",
            Self::ManufacturingPlace => "Manufacturing place (country/city)",
            Self::SerialNumber => "Serial number",
            Self::Gtin => "GTIN",
            Self::BatteryStatus => "Battery status",
            Self::BatteryWeightKg => "Weight (kg)",
            Self::RatedCapacityKwh => "Rated capacity (kWh)",
            Self::CarbonFootprintKgPerKwh => "Carbon footprint (kg CO2e/kWh)",
            Self::CarbonFootprintClass => "Carbon footprint class",
            Self::RecycledCobalt => "Recycled cobalt (%)",
            Self::RecycledLead => "Recycled lead (%)",
            Self::RecycledLithium => "Recycled lithium (%)",
            Self::RecycledNickel => "Recycled nickel (%)",
            Self::LifetimeCycles => "Expected lifetime (cycles)",
            Self::LifetimeYears => "Expected lifetime (years)",
            Self::HazardousSubstances => "Hazardous substances present",
            Self::PerformanceClass => "Performance class",
        }
    }

    pub fn helper(self) -> Option<&'static str> {
        match self {
            Self::SerialNumber => Some("Must be unique; pairs with GTIN for the QR link."),
            Self::Gtin => Some("GS1 Digital Link recommended for QR payload."),
            Self::CarbonFootprintClass => Some("A-E classification per Annex XIII."),
            Self::HazardousSubstances => Some("List key substances requiring disclosure."),
            Self::PerformanceClass => Some("Optional manufacturer performance tier."),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::BatteryCategory => FieldKind::Select(BATTERY_CATEGORIES),
            Self::BatteryStatus => FieldKind::Select(BATTERY_STATUSES),
            Self::ManufacturingDate => FieldKind::Date,
            Self::BatteryWeightKg
            | Self::RatedCapacityKwh
            | Self::CarbonFootprintKgPerKwh
            | Self::RecycledCobalt
            | Self::RecycledLead
            | Self::RecycledLithium
            | Self::RecycledNickel
            | Self::LifetimeCycles
            | Self::LifetimeYears => FieldKind::Number,
            _ => FieldKind::Text,
        }
    }

    /// Annex XIII mandatory fields.
    pub fn required(self) -> bool {
        matches!(
            self,
            Self::ManufacturerName
                | Self::ManufacturerAddress
                | Self::BatteryModel
                | Self::BatteryCategory
                | Self::ManufacturingDate
                | Self::ManufacturingPlace
                | Self::SerialNumber
                | Self::Gtin
                | Self::BatteryWeightKg
                | Self::RatedCapacityKwh
                | Self::CarbonFootprintKgPerKwh
        )
    }

    /// Fields shown on the create form; status is only edited later.
    pub fn on_create_form(self) -> bool {
        !matches!(
            self,
            Self::BatteryStatus
                | Self::RecycledCobalt
                | Self::RecycledLead
                | Self::RecycledLithium
                | Self::RecycledNickel
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassportDraft {
    values: Vec<String>,
    touched: BTreeSet<PassportField>,
    /// Stored as `additional_public_data.note`; shown on the scan page.
    pub public_note: String,
    /// Stored as `restricted_data.note`; registry view only.
    pub restricted_note: String,
    /// Selected template id; blank means plain create.
    pub template_id: String,
}

impl PassportDraft {
    /// Blank create-form draft with the usual defaults.
    pub fn new(today: &str) -> Self {
        let mut draft = Self { values: vec![String::new(); PassportField::ALL.len()], ..Self::default() };
        draft.values[PassportField::BatteryCategory as usize] = "industrial".to_owned();
        draft.values[PassportField::ManufacturingDate as usize] = today.to_owned();
        draft.values[PassportField::BatteryStatus as usize] = "original".to_owned();
        draft.values[PassportField::LifetimeCycles as usize] = "800".to_owned();
        draft.values[PassportField::LifetimeYears as usize] = "8".to_owned();
        draft
    }

    /// Edit-form draft seeded from an existing record; nothing is touched.
    pub fn from_passport(p: &BatteryPassport) -> Self {
        let mut draft = Self::new("");
        let pairs = [
            (PassportField::ManufacturerName, p.manufacturer_name.clone()),
            (PassportField::ManufacturerAddress, p.manufacturer_address.clone()),
            (PassportField::BatteryModel, p.battery_model.clone()),
            (PassportField::BatteryCategory, p.battery_category.clone()),
            (PassportField::ManufacturingDate, p.manufacturing_date.clone()),
            (PassportField::ManufacturingPlace, p.manufacturing_place.clone()),
            (PassportField::SerialNumber, p.serial_number.clone()),
            (PassportField::Gtin, p.gtin.clone()),
            (PassportField::BatteryStatus, p.battery_status.clone()),
            (PassportField::BatteryWeightKg, p.battery_weight_kg.to_string()),
            (PassportField::RatedCapacityKwh, p.rated_capacity_kwh.to_string()),
            (PassportField::CarbonFootprintKgPerKwh, p.carbon_footprint_kg_per_kwh.to_string()),
            (PassportField::CarbonFootprintClass, p.carbon_footprint_class.clone().unwrap_or_default()),
            (PassportField::RecycledCobalt, number_text(p.recycled_content_cobalt)),
            (PassportField::RecycledLead, number_text(p.recycled_content_lead)),
            (PassportField::RecycledLithium, number_text(p.recycled_content_lithium)),
            (PassportField::RecycledNickel, number_text(p.recycled_content_nickel)),
            (PassportField::LifetimeCycles, number_text(p.expected_lifetime_cycles)),
            (PassportField::LifetimeYears, number_text(p.expected_lifetime_years)),
            (PassportField::HazardousSubstances, p.hazardous_substances.clone().unwrap_or_default()),
            (PassportField::PerformanceClass, p.performance_class.clone().unwrap_or_default()),
        ];
        for (field, value) in pairs {
            draft.values[field as usize] = value;
        }
        draft
    }

    pub fn get(&self, field: PassportField) -> &str {
        self.values.get(field as usize).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: PassportField, value: String) {
        if let Some(slot) = self.values.get_mut(field as usize) {
            *slot = value;
            self.touched.insert(field);
        }
    }

    pub fn is_touched(&self, field: PassportField) -> bool {
        self.touched.contains(&field)
    }

    pub fn uses_template(&self) -> bool {
        !self.template_id.trim().is_empty()
    }

    /// Whether the form should mark `field` required right now. Template
    /// defaults may supply any field, so nothing is required while one is
    /// selected.
    pub fn is_required(&self, field: PassportField) -> bool {
        field.required() && !self.uses_template()
    }

    /// Required fields that are still blank.
    pub fn missing_required(&self) -> Vec<PassportField> {
        PassportField::ALL
            .into_iter()
            .filter(|f| f.on_create_form() && self.is_required(*f) && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Full create body.
    pub fn to_input(&self) -> PassportInput {
        let mut input = self.collect(|_| true, non_blank);
        self.attach_notes(&mut input);
        input
    }

    /// Create-from-template body: only what the user typed.
    pub fn to_template_request(&self) -> FromTemplateRequest {
        let mut overrides = self.collect(|f| self.is_touched(f), non_blank);
        self.attach_notes(&mut overrides);
        FromTemplateRequest { template_id: self.template_id.trim().to_owned(), overrides }
    }

    /// PATCH body for the edit form: touched fields only. A touched text
    /// field left blank is sent as `""` to clear it.
    pub fn to_patch(&self) -> PassportInput {
        self.collect(|f| self.is_touched(f), edited_text)
    }

    fn attach_notes(&self, input: &mut PassportInput) {
        if !self.public_note.trim().is_empty() {
            input.additional_public_data = Some(OpaqueValue::note(&self.public_note));
        }
        if !self.restricted_note.trim().is_empty() {
            input.restricted_data = Some(OpaqueValue::note(&self.restricted_note));
        }
    }

    fn collect(&self, include: impl Fn(PassportField) -> bool, text_value: fn(&str) -> Option<String>) -> PassportInput {
        use PassportField as F;

        let text = |f: F| if include(f) { text_value(self.get(f)) } else { None };
        let float = |f: F| if include(f) { parse_f64(self.get(f)) } else { None };
        let int = |f: F| if include(f) { parse_i64(self.get(f)) } else { None };

        PassportInput {
            manufacturer_name: text(F::ManufacturerName),
            manufacturer_address: text(F::ManufacturerAddress),
            battery_model: text(F::BatteryModel),
            battery_category: text(F::BatteryCategory),
            manufacturing_date: text(F::ManufacturingDate),
            manufacturing_place: text(F::ManufacturingPlace),
            serial_number: text(F::SerialNumber),
            gtin: text(F::Gtin),
            battery_status: text(F::BatteryStatus),
            battery_weight_kg: float(F::BatteryWeightKg),
            carbon_footprint_kg_per_kwh: float(F::CarbonFootprintKgPerKwh),
            carbon_footprint_class: text(F::CarbonFootprintClass),
            recycled_content_cobalt: float(F::RecycledCobalt),
            recycled_content_lead: float(F::RecycledLead),
            recycled_content_lithium: float(F::RecycledLithium),
            recycled_content_nickel: float(F::RecycledNickel),
            rated_capacity_kwh: float(F::RatedCapacityKwh),
            expected_lifetime_cycles: int(F::LifetimeCycles),
            expected_lifetime_years: int(F::LifetimeYears),
            hazardous_substances: text(F::HazardousSubstances),
            performance_class: text(F::PerformanceClass),
            additional_public_data: None,
            restricted_data: None,
        }
    }
}
