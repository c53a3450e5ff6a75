//! Handlers for the `/groups` resource.

use axum::extract::{Path, State};
use axum::Json;
use edudebts_core::types::DbId;
use edudebts_db::models::group::{CreateGroup, Group, UpdateGroup};
use edudebts_db::repositories::GroupRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Group";

/// POST /groups/
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGroup>,
) -> AppResult<Json<Group>> {
    let group = GroupRepo::create(&state.pool, &input).await?;
    tracing::info!(group_id = group.id, "Group created");
    Ok(Json(group))
}

/// GET /groups/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Group>>> {
    let groups = GroupRepo::list(&state.pool).await?;
    Ok(Json(groups))
}

/// GET /groups/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Group>> {
    let group = GroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(group))
}

/// PUT /groups/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGroup>,
) -> AppResult<Json<Group>> {
    let group = GroupRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(group_id = id, "Group updated");
    Ok(Json(group))
}

/// DELETE /groups/{id}
///
/// Rejected with 409 while students or subjects still reference the group.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !GroupRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(group_id = id, "Group deleted");
    Ok(Json(MessageResponse::new("Group deleted")))
}
