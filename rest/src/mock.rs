//! In-memory fake of the compliance backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tests across the workspace drive the real [`ApiClient`] over real HTTP
//! against this server. It follows the backend's observable contract closely
//! enough for that: FastAPI-style `{"detail": ...}` error bodies, server-side
//! template prefill, CBAM emission math, job runners that finish in one call.
//!
//! DESIGN
//! ======
//! - Records are stored as `serde_json::Value` so the fake never drifts from
//!   whatever the client sends.
//! - A middleware records every request and can inject a one-shot failure or
//!   enforce an API key before the handler runs.
//! - The server task is aborted when [`MockServer`] is dropped.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::body::{Body, to_bytes};
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use records::passport::PUBLIC_EXCLUDED_FIELDS;
use serde_json::{Map, Value, json};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::client::ApiClient;
use crate::config::{API_KEY_HEADER, ApiConfig};

const TIMESTAMP: &str = "2025-01-01T00:00:00";
const CERTIFICATE_PRICE_PER_TONNE: f64 = 80.0;
const AUDIT_LIMIT: usize = 200;

const DEFAULT_FACTORS: [(&str, f64); 5] = [("7208", 2.1), ("7207", 2.4), ("7210", 1.9), ("7601", 16.0), ("2523", 0.8)];

const REQUIRED_PASSPORT_FIELDS: [&str; 11] = [
    "manufacturer_name",
    "manufacturer_address",
    "battery_model",
    "battery_category",
    "manufacturing_date",
    "manufacturing_place",
    "serial_number",
    "gtin",
    "battery_weight_kg",
    "carbon_footprint_kg_per_kwh",
    "rated_capacity_kwh",
];

const TEMPLATE_DEFAULT_FIELDS: [&str; 16] = [
    "battery_category",
    "battery_model",
    "manufacturer_name",
    "manufacturer_address",
    "gtin",
    "battery_weight_kg",
    "rated_capacity_kwh",
    "carbon_footprint_kg_per_kwh",
    "carbon_footprint_class",
    "recycled_content_cobalt",
    "recycled_content_lead",
    "recycled_content_lithium",
    "recycled_content_nickel",
    "expected_lifetime_cycles",
    "expected_lifetime_years",
    "performance_class",
];

const COMPLIANCE_COLLECTIONS: [&str; 5] =
    ["cra/products", "eudr/suppliers", "ai/systems", "epd/records", "nis2/attestations"];

/// One request as seen by the fake, with the `/api` prefix removed.
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub api_key: Option<String>,
    pub cache_control: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Default)]
struct MockState {
    api_key: Option<String>,
    fail_next: Option<(StatusCode, String)>,
    requests: Vec<RecordedRequest>,
    passports: Vec<Value>,
    components: Vec<Value>,
    templates: Vec<Value>,
    import_jobs: Vec<Value>,
    export_jobs: Vec<Value>,
    declarations: Vec<Value>,
    suppliers: Vec<Value>,
    factors: Vec<Value>,
    audit: Vec<Value>,
    artifacts: Vec<Value>,
    compliance: HashMap<String, Vec<Value>>,
}

type Shared = Arc<Mutex<MockState>>;

fn lock(state: &Shared) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A running fake backend bound to an ephemeral localhost port.
pub struct MockServer {
    addr: SocketAddr,
    state: Shared,
    task: JoinHandle<()>,
}

impl MockServer {
    /// Start a fake that accepts any caller.
    ///
    /// # Errors
    ///
    /// Returns the bind error if no local port is available.
    pub async fn start() -> std::io::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a fake that rejects requests without the given `X-API-Key`.
    ///
    /// # Errors
    ///
    /// Returns the bind error if no local port is available.
    pub async fn start_with_api_key(key: &str) -> std::io::Result<Self> {
        Self::start_inner(Some(key.to_owned())).await
    }

    async fn start_inner(api_key: Option<String>) -> std::io::Result<Self> {
        let state: Shared = Arc::new(Mutex::new(MockState { api_key, ..MockState::default() }));
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let app = app(state.clone());
        let task = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(error = %e, "mock backend stopped");
            }
        });
        Ok(Self { addr, state, task })
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    #[must_use]
    pub fn config(&self) -> ApiConfig {
        ApiConfig::new(&self.base_url())
    }

    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.config())
    }

    /// Make the next request fail with `status` and a raw `body`.
    pub fn fail_next(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        lock(&self.state).fail_next = Some((status, body.to_owned()));
    }

    #[must_use]
    pub fn requests(&self) -> Vec<RecordedRequest> {
        lock(&self.state).requests.clone()
    }

    /// Requests whose path equals `path`, in arrival order.
    #[must_use]
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests().into_iter().filter(|r| r.method == method && r.path == path).collect()
    }

    /// Insert an artifact record; the API exposes no create endpoint for them.
    pub fn seed_artifact(&self, artifact: Value) -> String {
        let mut state = lock(&self.state);
        let record = stamp(artifact);
        let id = id_of(&record);
        state.artifacts.push(record);
        id
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

fn app(state: Shared) -> Router {
    let api = Router::new()
        .route("/passports", get(list_passports).post(create_passport))
        .route("/passports/from-template", post(create_from_template))
        .route("/passports/{id}", get(get_passport).patch(update_passport))
        .route("/passports/{id}/public", get(get_public_passport))
        .route("/passports/{id}/qr", get(passport_qr))
        .route("/catalog/components", get(list_components).post(create_component))
        .route("/catalog/components/{id}", patch(update_component))
        .route("/catalog/templates", get(list_templates).post(create_template))
        .route("/catalog/templates/{id}", patch(update_template))
        .route("/jobs/imports", get(list_import_jobs).post(create_import_job))
        .route("/jobs/imports/{id}/run", post(run_import_job))
        .route("/jobs/exports", get(list_export_jobs).post(create_export_job))
        .route("/jobs/exports/{id}/run", post(run_export_job))
        .route("/cbam/declarations", get(list_declarations).post(create_declaration))
        .route("/cbam/declarations/{id}/status", post(update_declaration_status))
        .route("/cbam/declarations/{id}/export/{format}", get(export_declaration))
        .route("/cbam/suppliers", get(list_suppliers).post(create_supplier))
        .route("/cbam/factors", get(list_factors).post(create_factor))
        .route("/audit", get(list_audit))
        .route("/artifacts", get(list_artifacts))
        .route("/compliance/{module}/{collection}", get(list_compliance).post(create_compliance))
        .route("/dop/templates/{id}/pdf", get(dop_pdf));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), gate))
        .with_state(state)
}

// =============================================================================
// Middleware
// =============================================================================

async fn gate(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let headers = &parts.headers;
    let api_key = header_text(headers, API_KEY_HEADER);

    let rejection = {
        let mut guard = lock(&state);
        guard.requests.push(RecordedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().trim_start_matches("/api").to_owned(),
            api_key: api_key.clone(),
            cache_control: header_text(headers, header::CACHE_CONTROL.as_str()),
            content_type: header_text(headers, header::CONTENT_TYPE.as_str()),
            body: serde_json::from_slice(&bytes).unwrap_or(Value::Null),
        });

        if let Some((status, body)) = guard.fail_next.take() {
            Some((status, body).into_response())
        } else {
            match (&guard.api_key, &api_key) {
                (Some(_), None) => Some(detail(StatusCode::UNAUTHORIZED, "API key required")),
                (Some(expected), Some(given)) if expected != given => {
                    Some(detail(StatusCode::UNAUTHORIZED, "Invalid API key"))
                }
                _ => None,
            }
        }
    };

    if let Some(response) = rejection {
        return response;
    }
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

// =============================================================================
// Helpers
// =============================================================================

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn not_found(what: &str) -> Response {
    detail(StatusCode::NOT_FOUND, &format!("{what} not found"))
}

fn created(value: Value) -> Response {
    (StatusCode::CREATED, Json(value)).into_response()
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

fn id_of(value: &Value) -> String {
    value.get("id").and_then(Value::as_str).unwrap_or_default().to_owned()
}

/// Assign id and timestamps to an incoming object.
fn stamp(value: Value) -> Value {
    let mut object = match value {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    object.insert("id".into(), Value::String(new_id()));
    object.insert("created_at".into(), Value::String(TIMESTAMP.into()));
    object.insert("updated_at".into(), Value::String(TIMESTAMP.into()));
    Value::Object(object)
}

fn merge(target: &mut Value, patch: &Value) {
    if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
        for (key, value) in patch {
            if !value.is_null() {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn find<'a>(items: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    items.iter_mut().find(|item| item.get("id").and_then(Value::as_str) == Some(id))
}

fn audit(state: &mut MockState, action: &str, entity: &str, entity_id: &str) {
    state.audit.push(json!({
        "id": new_id(),
        "actor": "api-key",
        "action": action,
        "entity": entity,
        "entity_id": entity_id,
        "details": {},
        "created_at": TIMESTAMP,
    }));
}

fn newest_first(items: &[Value]) -> Json<Value> {
    Json(Value::Array(items.iter().rev().cloned().collect()))
}

// =============================================================================
// Passports
// =============================================================================

fn insert_passport(state: &mut MockState, body: Value) -> Response {
    for field in REQUIRED_PASSPORT_FIELDS {
        if body.get(field).is_none_or(Value::is_null) {
            return detail(StatusCode::UNPROCESSABLE_ENTITY, &format!("Field required: {field}"));
        }
    }
    let serial = body.get("serial_number").cloned().unwrap_or(Value::Null);
    if state.passports.iter().any(|p| p.get("serial_number") == Some(&serial)) {
        return detail(StatusCode::BAD_REQUEST, "Serial number already exists");
    }
    let mut record = stamp(body);
    if record.get("battery_status").is_none_or(Value::is_null) {
        record["battery_status"] = json!("original");
    }
    let id = id_of(&record);
    state.passports.push(record.clone());
    audit(state, "create", "passport", &id);
    created(record)
}

async fn list_passports(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).passports)
}

async fn create_passport(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    insert_passport(&mut lock(&state), body)
}

async fn create_from_template(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    let template_id = body.get("template_id").and_then(Value::as_str).unwrap_or_default();
    let Some(template) = state.templates.iter().find(|t| id_of(t) == template_id).cloned() else {
        return not_found("Template");
    };
    let mut merged = Value::Object(Map::new());
    for field in TEMPLATE_DEFAULT_FIELDS {
        if let Some(value) = template.get(field).filter(|v| !v.is_null()) {
            merged[field] = value.clone();
        }
    }
    if let Some(overrides) = body.get("overrides") {
        merge(&mut merged, overrides);
    }
    insert_passport(&mut state, merged)
}

async fn get_passport(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    match lock(&state).passports.iter().find(|p| id_of(p) == id) {
        Some(record) => Json(record.clone()).into_response(),
        None => not_found("Passport"),
    }
}

async fn get_public_passport(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let state = lock(&state);
    let Some(record) = state.passports.iter().find(|p| id_of(p) == id) else {
        return not_found("Passport");
    };
    let mut public = record.clone();
    if let Some(object) = public.as_object_mut() {
        for field in PUBLIC_EXCLUDED_FIELDS {
            object.remove(field);
        }
    }
    Json(public).into_response()
}

async fn update_passport(State(state): State<Shared>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    let Some(record) = find(&mut state.passports, &id) else {
        return not_found("Passport");
    };
    merge(record, &body);
    let updated = record.clone();
    audit(&mut state, "update", "passport", &id);
    Json(updated).into_response()
}

async fn passport_qr(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if !lock(&state).passports.iter().any(|p| id_of(p) == id) {
        return not_found("Passport");
    }
    let svg = format!("<svg xmlns=\"http://www.w3.org/2000/svg\"><title>{id}</title></svg>");
    ([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response()
}

// =============================================================================
// Catalog
// =============================================================================

async fn list_components(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).components)
}

async fn create_component(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body.get("name").and_then(Value::as_str).is_none_or(str::is_empty) {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Field required: name");
    }
    let mut state = lock(&state);
    let record = stamp(body);
    state.components.push(record.clone());
    audit(&mut state, "create", "component", &id_of(&record));
    created(record)
}

async fn update_component(State(state): State<Shared>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    let Some(record) = find(&mut state.components, &id) else {
        return not_found("Component");
    };
    merge(record, &body);
    Json(record.clone()).into_response()
}

async fn list_templates(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).templates)
}

async fn create_template(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    for field in ["name", "battery_category", "battery_model"] {
        if body.get(field).and_then(Value::as_str).is_none_or(str::is_empty) {
            return detail(StatusCode::UNPROCESSABLE_ENTITY, &format!("Field required: {field}"));
        }
    }
    let mut state = lock(&state);
    let record = stamp(body);
    state.templates.push(record.clone());
    audit(&mut state, "create", "template", &id_of(&record));
    created(record)
}

async fn update_template(State(state): State<Shared>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    let Some(record) = find(&mut state.templates, &id) else {
        return not_found("Template");
    };
    merge(record, &body);
    Json(record.clone()).into_response()
}

async fn dop_pdf(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    if !lock(&state).templates.iter().any(|t| id_of(t) == id) {
        return not_found("Template");
    }
    ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4\n%mock\n".to_vec()).into_response()
}

// =============================================================================
// Jobs
// =============================================================================

fn new_job(body: &Value) -> Value {
    let mut job = stamp(json!({
        "kind": body.get("kind").cloned().unwrap_or(Value::Null),
        "status": "pending",
        "payload": body.get("payload").cloned().unwrap_or_else(|| json!({})),
        "result": null,
        "error": null,
    }));
    job["updated_at"] = json!(TIMESTAMP);
    job
}

fn runnable(job: &Value) -> bool {
    matches!(job.get("status").and_then(Value::as_str), Some("pending" | "failed"))
}

async fn list_import_jobs(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).import_jobs)
}

async fn create_import_job(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let job = new_job(&body);
    lock(&state).import_jobs.push(job.clone());
    created(job)
}

async fn run_import_job(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = lock(&state);
    let Some(job) = state.import_jobs.iter().find(|j| id_of(j) == id).cloned() else {
        return not_found("Import job");
    };
    if !runnable(&job) {
        return Json(job).into_response();
    }

    let kind = job.get("kind").and_then(Value::as_str).unwrap_or_default().to_owned();
    let records: Vec<Value> = job
        .pointer("/payload/records")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let target = match kind.as_str() {
        "components" => Some(&mut state.components),
        "templates" => Some(&mut state.templates),
        "passports" => Some(&mut state.passports),
        _ => None,
    };
    let (status, result, error) = match target {
        Some(target) => {
            let created = records.len();
            target.extend(records.into_iter().map(stamp));
            ("completed", json!({ "created": created }), Value::Null)
        }
        None => ("failed", json!({ "created": 0 }), json!(format!("Unsupported import kind: {kind}"))),
    };

    let Some(record) = find(&mut state.import_jobs, &id) else {
        return not_found("Import job");
    };
    record["status"] = json!(status);
    record["result"] = result;
    record["error"] = error;
    Json(record.clone()).into_response()
}

async fn list_export_jobs(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).export_jobs)
}

async fn create_export_job(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let job = new_job(&body);
    lock(&state).export_jobs.push(job.clone());
    created(job)
}

fn passports_csv(passports: &[Value]) -> String {
    let headers = [
        "id",
        "battery_model",
        "gtin",
        "serial_number",
        "battery_category",
        "battery_weight_kg",
        "rated_capacity_kwh",
        "carbon_footprint_kg_per_kwh",
    ];
    let mut lines = vec![headers.join(",")];
    for passport in passports.iter().rev() {
        let cells: Vec<String> = headers
            .iter()
            .map(|h| match passport.get(*h) {
                Some(Value::String(s)) => s.replace(',', " "),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            })
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

async fn run_export_job(State(state): State<Shared>, Path(id): Path<String>) -> Response {
    let mut state = lock(&state);
    let Some(job) = state.export_jobs.iter().find(|j| id_of(j) == id).cloned() else {
        return not_found("Export job");
    };
    if !runnable(&job) {
        return Json(job).into_response();
    }

    let kind = job.get("kind").and_then(Value::as_str).unwrap_or_default().to_owned();
    let (status, result, error) = match kind.as_str() {
        "passports" => ("completed", json!({ "csv": passports_csv(&state.passports) }), Value::Null),
        "cbam" => {
            let payload: Vec<Value> = state
                .declarations
                .iter()
                .rev()
                .map(|d| {
                    json!({
                        "id": d["id"],
                        "period": d["period"],
                        "status": d["status"],
                        "total_emissions": d["total_emissions"],
                        "items": d["items"],
                    })
                })
                .collect();
            ("completed", json!({ "json": payload }), Value::Null)
        }
        _ => ("failed", Value::Null, json!(format!("Unsupported export kind: {kind}"))),
    };

    let Some(record) = find(&mut state.export_jobs, &id) else {
        return not_found("Export job");
    };
    record["status"] = json!(status);
    record["result"] = result;
    record["error"] = error;
    Json(record.clone()).into_response()
}

// =============================================================================
// CBAM
// =============================================================================

fn default_factor(state: &MockState, cn_code: &str) -> f64 {
    let prefix: String = cn_code.chars().take(4).collect();
    state
        .factors
        .iter()
        .find(|f| f.get("cn_prefix").and_then(Value::as_str) == Some(prefix.as_str()))
        .and_then(|f| f.get("emission_factor").and_then(Value::as_f64))
        .or_else(|| DEFAULT_FACTORS.iter().find(|(p, _)| *p == prefix).map(|(_, f)| *f))
        .unwrap_or(0.0)
}

fn build_item(state: &MockState, input: &Value) -> Value {
    let cn_code = input.get("cn_code").and_then(Value::as_str).unwrap_or_default();
    let quantity = input.get("quantity_tonnes").and_then(Value::as_f64).unwrap_or(0.0);
    let verified = input.get("verified_emission_factor").and_then(Value::as_f64);
    let supplier_id = input.get("supplier_id").and_then(Value::as_str);
    let supplier = supplier_id.and_then(|sid| state.suppliers.iter().find(|s| id_of(s) == sid));

    let mut default = default_factor(state, cn_code);
    if default <= 0.0 {
        if let Some(factor) = supplier.and_then(|s| s.get("default_emission_factor")).and_then(Value::as_f64) {
            default = factor;
        }
    }
    let factor = verified.filter(|f| *f > 0.0).unwrap_or(default);

    json!({
        "id": new_id(),
        "cn_code": cn_code,
        "product_description": input.get("product_description"),
        "quantity_tonnes": quantity,
        "default_emission_factor": default,
        "verified_emission_factor": verified,
        "supplier_id": supplier_id,
        "supplier_name": supplier.and_then(|s| s.get("name")),
        "country_of_origin": input.get("country_of_origin"),
        "calculated_emissions": quantity * factor,
    })
}

async fn list_declarations(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).declarations)
}

async fn create_declaration(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut state = lock(&state);
    let Some(period) = body.get("period").and_then(Value::as_str).filter(|p| !p.is_empty()) else {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Field required: period");
    };
    let inputs = body.get("items").and_then(Value::as_array).cloned().unwrap_or_default();
    let items: Vec<Value> = inputs.iter().map(|i| build_item(&state, i)).collect();
    let total: f64 = items.iter().filter_map(|i| i["calculated_emissions"].as_f64()).sum();
    let status = body.get("status").and_then(Value::as_str).unwrap_or("draft");

    let record = stamp(json!({
        "period": period,
        "status": status,
        "total_emissions": total,
        "certificate_price_per_tonne": CERTIFICATE_PRICE_PER_TONNE,
        "certificate_cost_estimate": total * CERTIFICATE_PRICE_PER_TONNE,
        "items": items,
    }));
    state.declarations.push(record.clone());
    audit(&mut state, "create", "cbam_declaration", &id_of(&record));
    created(record)
}

async fn update_declaration_status(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = lock(&state);
    let Some(record) = find(&mut state.declarations, &id) else {
        return not_found("Declaration");
    };
    record["status"] = body.get("status").cloned().unwrap_or(Value::Null);
    let updated = record.clone();
    audit(&mut state, "status", "cbam_declaration", &id);
    Json(updated).into_response()
}

async fn export_declaration(State(state): State<Shared>, Path((id, format)): Path<(String, String)>) -> Response {
    let state = lock(&state);
    let Some(record) = state.declarations.iter().find(|d| id_of(d) == id) else {
        return not_found("Declaration");
    };
    match format.as_str() {
        "csv" => {
            let mut lines = vec!["cn_code,quantity_tonnes,calculated_emissions".to_owned()];
            for item in record["items"].as_array().into_iter().flatten() {
                let cn_code = item["cn_code"].as_str().unwrap_or_default();
                lines.push(format!("{cn_code},{},{}", item["quantity_tonnes"], item["calculated_emissions"]));
            }
            ([(header::CONTENT_TYPE, "text/csv")], lines.join("\n")).into_response()
        }
        "pdf" => ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.4\n%mock\n".to_vec()).into_response(),
        _ => not_found("Format"),
    }
}

async fn list_suppliers(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).suppliers)
}

async fn create_supplier(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body.get("name").and_then(Value::as_str).is_none_or(str::is_empty) {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Field required: name");
    }
    let record = stamp(body);
    lock(&state).suppliers.push(record.clone());
    created(record)
}

async fn list_factors(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).factors)
}

async fn create_factor(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    if body.get("emission_factor").and_then(Value::as_f64).is_none() {
        return detail(StatusCode::UNPROCESSABLE_ENTITY, "Field required: emission_factor");
    }
    let record = stamp(body);
    lock(&state).factors.push(record.clone());
    created(record)
}

// =============================================================================
// Audit, artifacts, compliance
// =============================================================================

async fn list_audit(State(state): State<Shared>) -> Json<Value> {
    let state = lock(&state);
    Json(Value::Array(state.audit.iter().rev().take(AUDIT_LIMIT).cloned().collect()))
}

async fn list_artifacts(State(state): State<Shared>) -> Json<Value> {
    newest_first(&lock(&state).artifacts)
}

async fn list_compliance(State(state): State<Shared>, Path((module, collection)): Path<(String, String)>) -> Response {
    let key = format!("{module}/{collection}");
    if !COMPLIANCE_COLLECTIONS.contains(&key.as_str()) {
        return not_found("Collection");
    }
    let state = lock(&state);
    newest_first(state.compliance.get(&key).map_or(&[][..], Vec::as_slice)).into_response()
}

async fn create_compliance(
    State(state): State<Shared>,
    Path((module, collection)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Response {
    let key = format!("{module}/{collection}");
    if !COMPLIANCE_COLLECTIONS.contains(&key.as_str()) {
        return not_found("Collection");
    }
    let record = stamp(body);
    lock(&state).compliance.entry(key).or_default().push(record.clone());
    created(record)
}
