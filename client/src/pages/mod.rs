//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its loaders and submit orchestration and delegates
//! rendering details to `components`.

pub mod artifacts;
pub mod audit;
pub mod catalog_components;
pub mod catalog_templates;
pub mod cbam;
pub mod cbam_library;
pub mod compliance;
pub mod home;
pub mod jobs;
pub mod not_found;
pub mod passport_detail;
pub mod passport_edit;
pub mod passport_new;
pub mod passports;
pub mod scan;
