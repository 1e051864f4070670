//! Axum route handlers for the Curation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::curation::models::CuratedResource;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CurateRequest {
    pub role_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CurateResponse {
    pub resources: Vec<CuratedResource>,
}

/// POST /api/v1/resources/curate
///
/// Selects, verifies and ranks learning resources for a role. Never fails
/// past validation: unverifiable links come back with a fallback URL.
pub async fn handle_curate(
    State(state): State<AppState>,
    Json(request): Json<CurateRequest>,
) -> Result<Json<CurateResponse>, AppError> {
    if request.role_title.trim().is_empty() {
        return Err(AppError::Validation("role_title cannot be empty".to_string()));
    }

    let resources = state
        .pipeline
        .curate(&request.role_title, &request.description, &request.requirements)
        .await;

    Ok(Json(CurateResponse { resources }))
}
