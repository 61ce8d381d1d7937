//! CBAM declaration, supplier and factor drafts.
//!
//! DESIGN
//! ======
//! Declaration lines carry a client-only key so the rendered list stays
//! stable when a line in the middle is removed. Lines are submitted in the
//! order shown; the backend keeps that order.

#[cfg(test)]
#[path = "cbam_draft_test.rs"]
mod cbam_draft_test;

use records::{CbamDeclarationInput, CbamFactorInput, CbamItemInput, CbamSupplierInput};

use super::fields::{non_blank, parse_f64};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CbamLine {
    pub key: String,
    pub cn_code: String,
    pub description: String,
    pub quantity_tonnes: String,
    pub verified_factor: String,
    pub supplier_id: String,
    pub country_of_origin: String,
}

impl CbamLine {
    pub fn blank() -> Self {
        Self {
            key: uuid::Uuid::new_v4().to_string(),
            cn_code: String::new(),
            description: String::new(),
            quantity_tonnes: "0".to_owned(),
            verified_factor: String::new(),
            supplier_id: String::new(),
            country_of_origin: String::new(),
        }
    }

    /// `None` when the quantity is not a number.
    fn to_input(&self) -> Option<CbamItemInput> {
        Some(CbamItemInput {
            cn_code: self.cn_code.trim().to_owned(),
            product_description: non_blank(&self.description),
            quantity_tonnes: parse_f64(&self.quantity_tonnes)?,
            verified_emission_factor: parse_f64(&self.verified_factor),
            supplier_id: non_blank(&self.supplier_id),
            country_of_origin: non_blank(&self.country_of_origin),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CbamDraft {
    pub period: String,
    pub lines: Vec<CbamLine>,
}

impl Default for CbamDraft {
    /// One steel line for the current reporting quarter.
    fn default() -> Self {
        let first = CbamLine {
            cn_code: "7208".to_owned(),
            description: "Flat-rolled steel".to_owned(),
            quantity_tonnes: "10".to_owned(),
            ..CbamLine::blank()
        };
        Self { period: "2025-Q4".to_owned(), lines: vec![first] }
    }
}

impl CbamDraft {
    pub fn add_line(&mut self) {
        self.lines.push(CbamLine::blank());
    }

    /// Remove a line by key. The last line is kept so the form never empties.
    pub fn remove_line(&mut self, key: &str) {
        if self.lines.len() > 1 {
            self.lines.retain(|line| line.key != key);
        }
    }

    pub fn update_line(&mut self, key: &str, apply: impl FnOnce(&mut CbamLine)) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.key == key) {
            apply(line);
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.period.trim().is_empty()
            && self
                .lines
                .iter()
                .all(|line| !line.cn_code.trim().is_empty() && parse_f64(&line.quantity_tonnes).is_some())
    }

    /// `None` when any line's quantity is not a number.
    pub fn to_input(&self) -> Option<CbamDeclarationInput> {
        Some(CbamDeclarationInput {
            period: self.period.trim().to_owned(),
            status: None,
            items: self.lines.iter().map(CbamLine::to_input).collect::<Option<Vec<_>>>()?,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupplierDraft {
    pub name: String,
    pub country: String,
    pub default_emission_factor: String,
    pub contact: String,
}

impl SupplierDraft {
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn to_input(&self) -> CbamSupplierInput {
        CbamSupplierInput {
            name: self.name.trim().to_owned(),
            country: non_blank(&self.country),
            default_emission_factor: parse_f64(&self.default_emission_factor),
            contact: non_blank(&self.contact),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactorDraft {
    pub cn_prefix: String,
    pub emission_factor: String,
    pub source: String,
}

impl FactorDraft {
    pub fn is_complete(&self) -> bool {
        !self.cn_prefix.trim().is_empty() && parse_f64(&self.emission_factor).is_some()
    }

    /// `None` until both prefix and factor are usable.
    pub fn to_input(&self) -> Option<CbamFactorInput> {
        if !self.is_complete() {
            return None;
        }
        Some(CbamFactorInput {
            cn_prefix: self.cn_prefix.trim().to_owned(),
            emission_factor: parse_f64(&self.emission_factor)?,
            source: non_blank(&self.source),
        })
    }
}
