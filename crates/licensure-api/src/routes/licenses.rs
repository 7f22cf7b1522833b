use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use jiff::Zoned;
use serde::Deserialize;
use uuid::Uuid;

use licensure_audit::events::AuditEvent;
use licensure_core::models::license::{License, NewLicense};
use licensure_registry::filter::ListFilter;

use crate::error::ApiError;
use crate::state::AppState;

/// Caller identity for audit events. There is no authentication layer in
/// front of this service yet, so the `x-actor` header is trusted as-is.
fn actor(headers: &HeaderMap) -> String {
    headers
        .get("x-actor")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .unwrap_or("anonymous")
        .to_string()
}

pub async fn list_licenses(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Json<Vec<License>> {
    let registry = state.registry.lock().await;
    Json(registry.list(&filter))
}

pub async fn get_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<License>, ApiError> {
    let registry = state.registry.lock().await;
    let license = registry.get(id)?;
    Ok(Json(license.clone()))
}

pub async fn create_license(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<NewLicense>,
) -> Result<Json<License>, ApiError> {
    let mut registry = state.registry.lock().await;
    let license = registry.create(request, &Zoned::now())?;

    AuditEvent::new("create", "license", license.id.to_string(), actor(&headers))
        .with_details(serde_json::json!({ "license_number": license.license_number }))
        .emit();
    Ok(Json(license))
}

pub async fn initiate_renewal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<License>, ApiError> {
    let mut registry = state.registry.lock().await;
    let license = registry.initiate_renewal(id, &Zoned::now())?.clone();

    AuditEvent::new("initiate_renewal", "license", id.to_string(), actor(&headers)).emit();
    Ok(Json(license))
}

pub async fn complete_renewal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<Json<License>, ApiError> {
    let mut registry = state.registry.lock().await;
    let license = registry.complete_renewal(id, &Zoned::now())?.clone();

    AuditEvent::new("complete_renewal", "license", id.to_string(), actor(&headers))
        .with_details(serde_json::json!({ "new_expiry": license.expiry_date.to_string() }))
        .emit();
    Ok(Json(license))
}

#[derive(Deserialize)]
pub struct DeleteParams {
    /// Must match the license number of the record being deleted.
    pub confirm: String,
}

pub async fn delete_license(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<Json<()>, ApiError> {
    let mut registry = state.registry.lock().await;
    registry.delete(id, &params.confirm)?;

    AuditEvent::new("delete", "license", id.to_string(), actor(&headers)).emit();
    Ok(Json(()))
}

pub async fn select_license(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<License>, ApiError> {
    let mut registry = state.registry.lock().await;
    let license = registry.select(id)?;
    Ok(Json(license.clone()))
}

pub async fn selected_license(
    State(state): State<AppState>,
) -> Result<Json<License>, ApiError> {
    let registry = state.registry.lock().await;
    let license = registry
        .selected()
        .ok_or_else(|| ApiError::NotFound("no license selected".to_string()))?;
    Ok(Json(license.clone()))
}
