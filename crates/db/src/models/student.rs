//! Student entity model and DTOs.

use chrono::NaiveDate;
use edudebts_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student row from the `students` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    /// Not unique-constrained; two students may share a number.
    pub record_book_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group_id: Option<DbId>,
    pub date_of_birth: Option<NaiveDate>,
}

/// DTO for creating a new student. Optional fields may be omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub record_book_number: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group_id: Option<DbId>,
    pub date_of_birth: Option<NaiveDate>,
}

/// PUT replaces every field; omitted optional fields are cleared.
pub type UpdateStudent = CreateStudent;
