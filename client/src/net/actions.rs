//! Form submits and button actions.
//!
//! DESIGN
//! ======
//! Every action takes the already-snapshotted draft and returns the saved
//! record or the user-facing error text. Actions never touch reactive
//! state, so pages decide how success and failure update their forms.
//! Jobs are created and then run with exactly one call each; there is no
//! polling and no retry.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use records::{
    BatteryPassport, CbamDeclaration, CbamFactor, CbamSupplier, Component, ComplianceRecord, Job, JobKind,
    ProductTemplate,
};
use rest::{ApiClient, ApiError};

use crate::state::catalog_draft::{ComponentDraft, TemplateDraft};
use crate::state::cbam_draft::{CbamDraft, FactorDraft, SupplierDraft};
use crate::state::job_draft::ImportDraft;
use crate::state::passport_draft::PassportDraft;

fn message(error: ApiError) -> String {
    error.message()
}

/// Create a passport, routing through the template endpoint when a template
/// is selected.
///
/// # Errors
///
/// A local message naming blank required fields, otherwise the backend's
/// error text, verbatim.
pub async fn create_passport(client: &ApiClient, draft: &PassportDraft) -> Result<BatteryPassport, String> {
    let missing = draft.missing_required();
    if !missing.is_empty() {
        let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
        return Err(format!("Required fields missing: {}", labels.join(", ")));
    }
    if draft.uses_template() {
        client.create_passport_from_template(&draft.to_template_request()).await.map_err(message)
    } else {
        client.create_passport(&draft.to_input()).await.map_err(message)
    }
}

/// Save the edited fields of an existing passport.
///
/// Nothing is sent when no field was touched; the current record is
/// returned instead so the caller can navigate the same way.
///
/// # Errors
///
/// The backend's error text, verbatim.
pub async fn update_passport(client: &ApiClient, id: &str, draft: &PassportDraft) -> Result<BatteryPassport, String> {
    let patch = draft.to_patch();
    if patch.is_empty() {
        return client.get_passport(id).await.map_err(message);
    }
    client.update_passport(id, &patch).await.map_err(message)
}

/// # Errors
///
/// The backend's error text, verbatim.
pub async fn save_component(client: &ApiClient, id: Option<&str>, draft: &ComponentDraft) -> Result<Component, String> {
    match id {
        Some(id) => client.update_component(id, &draft.to_update()).await,
        None => client.create_component(&draft.to_input()).await,
    }
    .map_err(message)
}

/// # Errors
///
/// The backend's error text, verbatim.
pub async fn save_template(
    client: &ApiClient,
    id: Option<&str>,
    draft: &TemplateDraft,
) -> Result<ProductTemplate, String> {
    match id {
        Some(id) => client.update_template(id, &draft.to_update()).await,
        None => client.create_template(&draft.to_input()).await,
    }
    .map_err(message)
}

/// # Errors
///
/// A local message when a quantity is not a number, otherwise the backend's
/// error text.
pub async fn create_declaration(client: &ApiClient, draft: &CbamDraft) -> Result<CbamDeclaration, String> {
    let Some(input) = draft.to_input() else {
        return Err("Every line needs a numeric quantity".to_owned());
    };
    client.create_cbam_declaration(&input).await.map_err(message)
}

/// Move a declaration to its next status. A declaration with no next status
/// is returned unchanged without a request.
///
/// # Errors
///
/// The backend's error text, verbatim.
pub async fn advance_declaration(client: &ApiClient, declaration: &CbamDeclaration) -> Result<CbamDeclaration, String> {
    match declaration.next_status() {
        Some(status) => client.update_cbam_status(&declaration.id, status).await.map_err(message),
        None => Ok(declaration.clone()),
    }
}

/// # Errors
///
/// The backend's error text, verbatim.
pub async fn create_supplier(client: &ApiClient, draft: &SupplierDraft) -> Result<CbamSupplier, String> {
    client.create_cbam_supplier(&draft.to_input()).await.map_err(message)
}

/// # Errors
///
/// A local message when the factor is not a number, otherwise the backend's
/// error text.
pub async fn create_factor(client: &ApiClient, draft: &FactorDraft) -> Result<CbamFactor, String> {
    let Some(input) = draft.to_input() else {
        return Err("CN prefix and a numeric emission factor are required".to_owned());
    };
    client.create_cbam_factor(&input).await.map_err(message)
}

/// Create an import job and run it once.
///
/// # Errors
///
/// A parse message for bad records JSON, otherwise the backend's error text
/// from whichever of the two calls failed.
pub async fn run_import(client: &ApiClient, draft: &ImportDraft) -> Result<Job, String> {
    let request = draft.to_request()?;
    let job = client.create_import_job(&request).await.map_err(message)?;
    client.run_import_job(&job.id).await.map_err(message)
}

/// Create an export job and run it once.
///
/// # Errors
///
/// The backend's error text from whichever of the two calls failed.
pub async fn run_export(client: &ApiClient, kind: JobKind) -> Result<Job, String> {
    let job = client.create_export_job(kind).await.map_err(message)?;
    client.run_export_job(&job.id).await.map_err(message)
}

/// Post the starter record for one compliance register.
///
/// # Errors
///
/// The backend's error text, verbatim.
pub async fn quick_add<R: ComplianceRecord>(client: &ApiClient) -> Result<R, String> {
    client.create_compliance(&R::starter()).await.map_err(message)
}
