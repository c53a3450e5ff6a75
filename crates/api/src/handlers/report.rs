//! Handlers for the read-only `/reports` aggregates.
//!
//! Reports for an unknown group or student return an empty list rather than
//! a 404.

use axum::extract::{Path, State};
use axum::Json;
use edudebts_core::types::DbId;
use edudebts_db::models::report::{
    FacultyDebtCount, GroupDebtEntry, StudentDebtCount, StudentDebtEntry,
};
use edudebts_db::repositories::ReportRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /reports/debts_by_faculty
pub async fn debts_by_faculty(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FacultyDebtCount>>> {
    let rows = ReportRepo::debts_by_faculty(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /reports/debts_by_group/{group_id}
pub async fn debts_by_group(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentDebtCount>>> {
    let rows = ReportRepo::debts_by_group(&state.pool, group_id).await?;
    Ok(Json(rows))
}

/// GET /reports/student_debts/{student_id}
pub async fn student_debts(
    State(state): State<AppState>,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<Vec<StudentDebtEntry>>> {
    let rows = ReportRepo::student_debts(&state.pool, student_id).await?;
    Ok(Json(rows))
}

/// GET /reports/group_debts/{group_id}
pub async fn group_debts(
    State(state): State<AppState>,
    Path(group_id): Path<DbId>,
) -> AppResult<Json<Vec<GroupDebtEntry>>> {
    let rows = ReportRepo::group_debts(&state.pool, group_id).await?;
    Ok(Json(rows))
}
