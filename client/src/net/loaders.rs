//! Route-level data loaders.
//!
//! DESIGN
//! ======
//! List loaders never fail: a rejected fetch becomes an empty list plus the
//! captured message (see `state::listing`). Single-record loaders return
//! `None` for any failure and the page renders not-found. The catalog has
//! no single-record GET, so edit pages select from the full list by id.

#[cfg(test)]
#[path = "loaders_test.rs"]
mod loaders_test;

use std::future::Future;

use records::{AiSystem, ComplianceRecord, Component, CraProduct, EpdRecord, EudrSupplier, Nis2Attestation, ProductTemplate};
use rest::{ApiClient, ApiError};

use crate::state::listing::{Loaded, best_effort};

/// Best-effort list fetch that logs when the page degrades to empty.
pub async fn load_list<T, F>(what: &'static str, call: F) -> Loaded<T>
where
    F: Future<Output = Result<Vec<T>, ApiError>>,
{
    let loaded = best_effort(call).await;
    if let Some(error) = &loaded.error {
        leptos::logging::warn!("{what} unavailable: {error}");
    }
    loaded
}

/// Every compliance register, loaded together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComplianceLists {
    pub cra: Loaded<CraProduct>,
    pub eudr: Loaded<EudrSupplier>,
    pub ai: Loaded<AiSystem>,
    pub epd: Loaded<EpdRecord>,
    pub nis2: Loaded<Nis2Attestation>,
}

impl ComplianceLists {
    /// First captured fetch error, if any register failed.
    pub fn first_error(&self) -> Option<String> {
        [&self.cra.error, &self.eudr.error, &self.ai.error, &self.epd.error, &self.nis2.error]
            .into_iter()
            .find_map(Clone::clone)
    }
}

pub async fn load_compliance(client: &ApiClient) -> ComplianceLists {
    let (cra, eudr, ai, epd, nis2) = futures::join!(
        load_list(CraProduct::TITLE, client.list_compliance::<CraProduct>()),
        load_list(EudrSupplier::TITLE, client.list_compliance::<EudrSupplier>()),
        load_list(AiSystem::TITLE, client.list_compliance::<AiSystem>()),
        load_list(EpdRecord::TITLE, client.list_compliance::<EpdRecord>()),
        load_list(Nis2Attestation::TITLE, client.list_compliance::<Nis2Attestation>()),
    );
    ComplianceLists { cra, eudr, ai, epd, nis2 }
}

pub async fn find_component(client: &ApiClient, id: &str) -> Option<Component> {
    client.list_components().await.ok()?.into_iter().find(|c| c.id == id)
}

pub async fn find_template(client: &ApiClient, id: &str) -> Option<ProductTemplate> {
    client.list_templates().await.ok()?.into_iter().find(|t| t.id == id)
}
