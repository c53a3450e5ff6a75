//! Debt entity model and DTOs.

use chrono::NaiveDate;
use edudebts_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A debt row from the `debts` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Debt {
    pub id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub reason: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    /// Open text; see `edudebts_core::debt_status` for the known values.
    pub status: String,
}

/// DTO for creating a new debt.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDebt {
    pub student_id: DbId,
    pub subject_id: DbId,
    pub reason: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    /// Defaults to `"active"` if omitted.
    pub status: Option<String>,
}

/// PUT replaces every field. An omitted `status` resets it to `"active"`.
pub type UpdateDebt = CreateDebt;
