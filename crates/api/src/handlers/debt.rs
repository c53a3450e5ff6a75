//! Handlers for the `/debts` resource, including the settle transition.

use axum::extract::{Path, State};
use axum::Json;
use edudebts_core::types::DbId;
use edudebts_db::models::debt::{CreateDebt, Debt, UpdateDebt};
use edudebts_db::repositories::DebtRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Debt";

/// POST /debts/
///
/// An omitted `status` is stored as `"active"`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDebt>,
) -> AppResult<Json<Debt>> {
    let debt = DebtRepo::create(&state.pool, &input).await?;
    tracing::info!(
        debt_id = debt.id,
        student_id = debt.student_id,
        subject_id = debt.subject_id,
        "Debt created"
    );
    Ok(Json(debt))
}

/// GET /debts/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Debt>>> {
    let debts = DebtRepo::list(&state.pool).await?;
    Ok(Json(debts))
}

/// GET /debts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Debt>> {
    let debt = DebtRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    Ok(Json(debt))
}

/// PUT /debts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDebt>,
) -> AppResult<Json<Debt>> {
    let debt = DebtRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(debt_id = id, status = %debt.status, "Debt updated");
    Ok(Json(debt))
}

/// PUT /debts/{id}/settle
pub async fn settle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    DebtRepo::settle(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY, id))?;
    tracing::info!(debt_id = id, "Debt settled");
    Ok(Json(MessageResponse::new("Debt marked as settled")))
}

/// DELETE /debts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !DebtRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found(ENTITY, id));
    }
    tracing::info!(debt_id = id, "Debt deleted");
    Ok(Json(MessageResponse::new("Debt deleted")))
}
