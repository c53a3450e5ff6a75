//! Handlers for the `/subjects` resource.
//!
//! A subject belongs to at most one group.

use axum::extract::{Path, State};
use axum::Json;
use edudebts_core::types::DbId;
use edudebts_db::models::subject::{CreateSubject, Subject, UpdateSubject};
use edudebts_db::repositories::SubjectRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Subject";

/// POST /subjects/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubject>,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::create(&state.pool, &input).await?;
    tracing::info!(subject_id = subject.id, "Subject created");
    Ok(Json(subject))
}

/// GET /subjects/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subject>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(subjects))
}

/// GET /subjects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(subject))
}

/// PUT /subjects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSubject>,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(subject_id = id, "Subject updated");
    Ok(Json(subject))
}

/// DELETE /subjects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !SubjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(subject_id = id, "Subject deleted");
    Ok(Json(MessageResponse::new("Subject deleted")))
}
