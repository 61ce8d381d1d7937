//! Backend connection settings.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::fmt;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SCAN_BASE_URL: &str = "http://localhost:3000/scan";
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Immutable connection settings shared by every request.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub scan_base_url: String,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_url(base_url),
            api_key: None,
            scan_base_url: DEFAULT_SCAN_BASE_URL.to_owned(),
        }
    }

    /// Attach an API key. Blank keys are treated as unset.
    #[must_use]
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_scan_base_url(mut self, scan_base_url: &str) -> Self {
        self.scan_base_url = normalize_url(scan_base_url);
        self
    }

    /// Build config from the environment.
    ///
    /// Each of `API_BASE_URL`, `API_KEY` and `SCAN_BASE_URL` is looked up in
    /// the process environment first, then in the value baked in at compile
    /// time. The browser bundle has no process environment, so only the
    /// compile-time value applies there.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = lookup("API_BASE_URL", option_env!("API_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let scan_base_url = lookup("SCAN_BASE_URL", option_env!("SCAN_BASE_URL"))
            .unwrap_or_else(|| DEFAULT_SCAN_BASE_URL.to_owned());
        let api_key = lookup("API_KEY", option_env!("API_KEY"));

        Self::new(&base_url).with_api_key(api_key).with_scan_base_url(&scan_base_url)
    }

    /// Absolute URL for an API path such as `/passports`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Human-shareable scan page for a passport; the QR image encodes this.
    #[must_use]
    pub fn scan_url(&self, passport_id: &str) -> String {
        format!("{}/{}", self.scan_base_url, passport_id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

// The key never reaches logs through `{:?}`.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("scan_base_url", &self.scan_base_url)
            .finish()
    }
}

fn lookup(key: &str, baked: Option<&'static str>) -> Option<String> {
    std::env::var(key)
        .ok()
        .or_else(|| baked.map(str::to_owned))
        .filter(|v| !v.trim().is_empty())
}

fn normalize_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
