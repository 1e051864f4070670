use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::learning_path::models::LearningPathView;
use crate::learning_path::store::{
    create_learning_path, get_learning_path, list_learning_paths, mark_resource_completed,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateLearningPathRequest {
    pub user_id: Uuid,
    pub role_title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteResourceRequest {
    pub url: String,
}

/// POST /api/v1/learning-paths
///
/// Curates resources for the role and persists them as a new learning path.
pub async fn handle_create_learning_path(
    State(state): State<AppState>,
    Json(req): Json<CreateLearningPathRequest>,
) -> Result<(StatusCode, Json<LearningPathView>), AppError> {
    if req.role_title.trim().is_empty() {
        return Err(AppError::Validation("role_title cannot be empty".to_string()));
    }

    let resources = state
        .pipeline
        .curate(&req.role_title, &req.description, &req.requirements)
        .await;
    let row = create_learning_path(&state.db, req.user_id, &req.role_title, &resources).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /api/v1/learning-paths
pub async fn handle_list_learning_paths(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<LearningPathView>>, AppError> {
    let rows = list_learning_paths(&state.db, params.user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /api/v1/learning-paths/:id
pub async fn handle_get_learning_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningPathView>, AppError> {
    let row = get_learning_path(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Learning path {id} not found")))?;
    Ok(Json(row.into()))
}

/// POST /api/v1/learning-paths/:id/complete
pub async fn handle_complete_resource(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CompleteResourceRequest>,
) -> Result<Json<LearningPathView>, AppError> {
    let existing = get_learning_path(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Learning path {id} not found")))?;

    if !existing.contains_url(&req.url) {
        return Err(AppError::Validation(format!(
            "{} is not a resource on learning path {id}",
            req.url
        )));
    }

    let row = mark_resource_completed(&state.db, id, &req.url)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Learning path {id} not found")))?;
    Ok(Json(row.into()))
}
