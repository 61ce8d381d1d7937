//! Shared record model for the passport studio.
//!
//! This crate owns the JSON shapes exchanged with the compliance backend and
//! is used by `rest`, `client` and `cli`. Types only mirror the backend; no
//! field is validated here beyond what serde needs to decode it.
//!
//! LAYOUT
//! ======
//! - `passport`: battery passports and the public projection.
//! - `catalog`: reusable components and product templates.
//! - `jobs`: bulk import/export job records and the closed job-kind enum.
//! - `cbam`: carbon border declarations, suppliers and factor library.
//! - `audit`, `artifacts`, `compliance`: read-mostly auxiliary records.

pub mod artifacts;
pub mod audit;
pub mod catalog;
pub mod cbam;
pub mod compliance;
pub mod jobs;
pub mod opaque;
pub mod passport;

pub use artifacts::RestrictedArtifact;
pub use audit::AuditLog;
pub use catalog::{Component, ComponentInput, ProductTemplate, TemplateInput};
pub use cbam::{
    CbamDeclaration, CbamDeclarationInput, CbamFactor, CbamFactorInput, CbamItem, CbamItemInput, CbamStatusUpdate,
    CbamSupplier, CbamSupplierInput,
};
pub use compliance::{AiSystem, ComplianceRecord, CraProduct, EpdRecord, EudrSupplier, Nis2Attestation};
pub use jobs::{ExportJobRequest, ImportJobRequest, ImportPayload, Job, JobKind, JobPhase, UnknownJobKind};
pub use opaque::OpaqueValue;
pub use passport::{BatteryPassport, FromTemplateRequest, PassportInput, PublicPassport};
