//! Backend access for pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app receives an `ApiConfig` through Leptos context once at startup.
//! Pages hold a copyable [`Api`] handle and build an `ApiClient` inside each
//! task; `actions` holds the submits and `loaders` the page fetches.
//! Requests only run in the browser. During server rendering pages show
//! their loading state.

pub mod actions;
pub mod loaders;

use std::future::Future;

use leptos::prelude::*;
use rest::{ApiClient, ApiConfig};

/// Copyable handle to the configuration provided at the app root.
///
/// Tasks may outlive the page that spawned them; once the page is gone the
/// handle yields the default config instead of panicking.
#[derive(Clone, Copy)]
pub struct Api(StoredValue<ApiConfig>);

impl Api {
    pub fn client(self) -> ApiClient {
        ApiClient::new(self.config())
    }

    pub fn config(self) -> ApiConfig {
        self.0.try_get_value().unwrap_or_default()
    }
}

pub fn use_api() -> Api {
    Api(StoredValue::new(expect_context::<ApiConfig>()))
}

/// Run a backend task on the browser's event loop. Dropped unpolled when
/// rendering on the server.
pub fn spawn<F>(task: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}
