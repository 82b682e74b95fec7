use crate::dtos::MessageResponse;
use crate::services::{document_to_json, json_to_document, metrics};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{Map, Value};
use service_core::error::AppError;

pub async fn insert_data(
    State(state): State<AppState>,
    Json(body): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, AppError> {
    let document = json_to_document(&body).map_err(|e| {
        tracing::warn!("Rejected document that cannot be stored: {}", e);
        e
    })?;

    state.store.insert(document).await?;
    metrics::record_document_inserted();

    tracing::info!(fields = body.len(), "Document inserted");

    Ok((StatusCode::CREATED, Json(MessageResponse::inserted())))
}

pub async fn list_data(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let documents = state.store.find_all().await?;
    metrics::record_documents_listed(documents.len());

    let body: Vec<Value> = documents.into_iter().map(document_to_json).collect();
    Ok(Json(body))
}
