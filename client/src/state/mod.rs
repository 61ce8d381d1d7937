//! Form drafts and page state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drafts hold the raw text a user typed and convert it into request bodies
//! at submit time. Nothing here touches the network or the DOM, so every
//! module is tested natively.

pub mod catalog_draft;
pub mod cbam_draft;
pub mod fields;
pub mod form;
pub mod job_draft;
pub mod listing;
pub mod passport_draft;
