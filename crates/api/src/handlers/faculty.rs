//! Handlers for the `/faculties` resource.

use axum::extract::{Path, State};
use axum::Json;
use edudebts_core::types::DbId;
use edudebts_db::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};
use edudebts_db::repositories::FacultyRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Faculty";

/// POST /faculties/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFaculty>,
) -> AppResult<Json<Faculty>> {
    let faculty = FacultyRepo::create(&state.pool, &input).await?;
    tracing::info!(faculty_id = faculty.id, "Faculty created");
    Ok(Json(faculty))
}

/// GET /faculties/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Faculty>>> {
    let faculties = FacultyRepo::list(&state.pool).await?;
    Ok(Json(faculties))
}

/// GET /faculties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Faculty>> {
    let faculty = FacultyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(faculty))
}

/// PUT /faculties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFaculty>,
) -> AppResult<Json<Faculty>> {
    let faculty = FacultyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(faculty_id = id, "Faculty updated");
    Ok(Json(faculty))
}

/// DELETE /faculties/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !FacultyRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(faculty_id = id, "Faculty deleted");
    Ok(Json(MessageResponse::new("Faculty deleted")))
}
