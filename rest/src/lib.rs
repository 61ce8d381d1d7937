//! Typed REST client for the compliance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen in the studio is a pass-through to the backend: collect
//! fields, call one endpoint, render the JSON. This crate is that call. It is
//! shared by the browser bundle (`wasm32`), the SSR server and the CLI, so it
//! only depends on crates that build on both targets.
//!
//! DESIGN
//! ======
//! - [`ApiConfig`] is built once and handed to [`ApiClient::new`]; nothing
//!   reads the environment after that.
//! - [`ApiClient::request`] is the single place headers, caching and error
//!   normalization happen. The per-endpoint methods only fix path, method and
//!   body shape. No retries, no timeouts.
//! - [`ApiError`] collapses transport, status and decode failures into one
//!   user-facing message.

pub mod client;
pub mod config;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use client::{ApiClient, CbamExportFormat};
pub use config::ApiConfig;
pub use error::ApiError;
