//! HTTP client and one wrapper per backend endpoint.
//!
//! DESIGN
//! ======
//! All calls funnel through [`ApiClient::request`]. Headers are attached per
//! request in a fixed order (JSON content type, no-cache, API key, caller
//! headers), so a caller header can override any default. The response body
//! is read as text before parsing so a non-2xx body can be surfaced verbatim.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use records::compliance::ComplianceRecord;
use records::{
    AuditLog, BatteryPassport, CbamDeclaration, CbamDeclarationInput, CbamFactor, CbamFactorInput, CbamStatusUpdate,
    CbamSupplier, CbamSupplierInput, Component, ComponentInput, ExportJobRequest, FromTemplateRequest,
    ImportJobRequest, Job, JobKind, PassportInput, ProductTemplate, PublicPassport, RestrictedArtifact,
    TemplateInput,
};
use reqwest::Method;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{API_KEY_HEADER, ApiConfig};
use crate::error::ApiError;

/// Download format for a CBAM declaration export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbamExportFormat {
    Csv,
    Pdf,
}

impl CbamExportFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] when no response arrives, [`ApiError::Status`]
    /// with the response text for any non-2xx status, [`ApiError::Decode`]
    /// when a 2xx body is not the expected JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, %path, "api request");

        let mut builder = self
            .http
            .request(method.clone(), self.config.url(path))
            .header(CONTENT_TYPE, "application/json")
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache");
        if let Some(key) = &self.config.api_key {
            builder = builder.header(API_KEY_HEADER, key.as_str());
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%method, %path, status = status.as_u16(), "api request failed");
            return Err(ApiError::Status { status: status.as_u16(), body });
        }

        let text = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None, &[]).await
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.request(method, path, Some(body), &[]).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Method::POST, path, body).await
    }

    async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        self.send_json(Method::PATCH, path, body).await
    }

    // =========================================================================
    // Passports
    // =========================================================================

    pub async fn list_passports(&self) -> Result<Vec<BatteryPassport>, ApiError> {
        self.get("/passports").await
    }

    pub async fn get_passport(&self, id: &str) -> Result<BatteryPassport, ApiError> {
        self.get(&format!("/passports/{id}")).await
    }

    /// Public tier only. The return type cannot hold restricted fields.
    pub async fn get_public_passport(&self, id: &str) -> Result<PublicPassport, ApiError> {
        self.get(&format!("/passports/{id}/public")).await
    }

    pub async fn create_passport(&self, input: &PassportInput) -> Result<BatteryPassport, ApiError> {
        self.post("/passports", input).await
    }

    pub async fn create_passport_from_template(
        &self,
        request: &FromTemplateRequest,
    ) -> Result<BatteryPassport, ApiError> {
        self.post("/passports/from-template", request).await
    }

    pub async fn update_passport(&self, id: &str, input: &PassportInput) -> Result<BatteryPassport, ApiError> {
        self.patch(&format!("/passports/{id}"), input).await
    }

    /// QR image URL for use in an `<img src>`.
    #[must_use]
    pub fn passport_qr_url(&self, id: &str) -> String {
        self.config.url(&format!("/passports/{id}/qr"))
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub async fn list_components(&self) -> Result<Vec<Component>, ApiError> {
        self.get("/catalog/components").await
    }

    pub async fn create_component(&self, input: &ComponentInput) -> Result<Component, ApiError> {
        self.post("/catalog/components", input).await
    }

    pub async fn update_component(&self, id: &str, input: &ComponentInput) -> Result<Component, ApiError> {
        self.patch(&format!("/catalog/components/{id}"), input).await
    }

    pub async fn list_templates(&self) -> Result<Vec<ProductTemplate>, ApiError> {
        self.get("/catalog/templates").await
    }

    pub async fn create_template(&self, input: &TemplateInput) -> Result<ProductTemplate, ApiError> {
        self.post("/catalog/templates", input).await
    }

    pub async fn update_template(&self, id: &str, input: &TemplateInput) -> Result<ProductTemplate, ApiError> {
        self.patch(&format!("/catalog/templates/{id}"), input).await
    }

    /// Declaration-of-Performance PDF for a template.
    #[must_use]
    pub fn dop_pdf_url(&self, template_id: &str) -> String {
        self.config.url(&format!("/dop/templates/{template_id}/pdf"))
    }

    // =========================================================================
    // Jobs
    // =========================================================================

    pub async fn list_import_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/jobs/imports").await
    }

    pub async fn create_import_job(&self, request: &ImportJobRequest) -> Result<Job, ApiError> {
        self.post("/jobs/imports", request).await
    }

    pub async fn run_import_job(&self, id: &str) -> Result<Job, ApiError> {
        self.request(Method::POST, &format!("/jobs/imports/{id}/run"), None, &[]).await
    }

    pub async fn list_export_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get("/jobs/exports").await
    }

    pub async fn create_export_job(&self, kind: JobKind) -> Result<Job, ApiError> {
        self.post("/jobs/exports", &ExportJobRequest { kind }).await
    }

    pub async fn run_export_job(&self, id: &str) -> Result<Job, ApiError> {
        self.request(Method::POST, &format!("/jobs/exports/{id}/run"), None, &[]).await
    }

    // =========================================================================
    // CBAM
    // =========================================================================

    pub async fn list_cbam_declarations(&self) -> Result<Vec<CbamDeclaration>, ApiError> {
        self.get("/cbam/declarations").await
    }

    pub async fn create_cbam_declaration(&self, input: &CbamDeclarationInput) -> Result<CbamDeclaration, ApiError> {
        self.post("/cbam/declarations", input).await
    }

    pub async fn update_cbam_status(&self, id: &str, status: &str) -> Result<CbamDeclaration, ApiError> {
        let body = CbamStatusUpdate { status: status.to_owned() };
        self.post(&format!("/cbam/declarations/{id}/status"), &body).await
    }

    #[must_use]
    pub fn cbam_export_url(&self, id: &str, format: CbamExportFormat) -> String {
        self.config.url(&format!("/cbam/declarations/{id}/export/{}", format.as_str()))
    }

    pub async fn list_cbam_suppliers(&self) -> Result<Vec<CbamSupplier>, ApiError> {
        self.get("/cbam/suppliers").await
    }

    pub async fn create_cbam_supplier(&self, input: &CbamSupplierInput) -> Result<CbamSupplier, ApiError> {
        self.post("/cbam/suppliers", input).await
    }

    pub async fn list_cbam_factors(&self) -> Result<Vec<CbamFactor>, ApiError> {
        self.get("/cbam/factors").await
    }

    pub async fn create_cbam_factor(&self, input: &CbamFactorInput) -> Result<CbamFactor, ApiError> {
        self.post("/cbam/factors", input).await
    }

    // =========================================================================
    // Audit, artifacts, compliance registers
    // =========================================================================

    pub async fn list_audit_logs(&self) -> Result<Vec<AuditLog>, ApiError> {
        self.get("/audit").await
    }

    pub async fn list_artifacts(&self) -> Result<Vec<RestrictedArtifact>, ApiError> {
        self.get("/artifacts").await
    }

    pub async fn list_compliance<R: ComplianceRecord>(&self) -> Result<Vec<R>, ApiError> {
        self.get(R::PATH).await
    }

    pub async fn create_compliance<R: ComplianceRecord>(&self, record: &R) -> Result<R, ApiError> {
        self.post(R::PATH, record).await
    }
}
