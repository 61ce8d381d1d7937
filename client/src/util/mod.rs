//! Pure helpers shared by pages and components.

pub mod download;
pub mod format;
pub mod today;
