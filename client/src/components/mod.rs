//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render records handed down by pages. They never fetch; the
//! one exception is `passport_form`, which only reports submit intent back
//! to its page through a callback.

pub mod field;
pub mod job_card;
pub mod layout;
pub mod notice;
pub mod passport_card;
pub mod passport_form;
pub mod passport_view;
