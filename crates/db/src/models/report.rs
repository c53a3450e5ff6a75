//! Row shapes for the read-only aggregate reports.
//!
//! Field names are part of the HTTP contract (`faculty`, `student`,
//! `subject` carry display names, not ids).

use chrono::NaiveDate;
use edudebts_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// Active debt count for one faculty.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FacultyDebtCount {
    /// Faculty id.
    pub id: DbId,
    /// Faculty name.
    pub faculty: String,
    pub debt_count: i64,
}

/// Active debt count for one student of a group.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentDebtCount {
    /// Student id.
    pub id: DbId,
    /// `"<last_name> <first_name>"`.
    pub student: String,
    pub debt_count: i64,
}

/// One debt of a single student, joined with its subject name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentDebtEntry {
    /// Debt id.
    pub id: DbId,
    pub subject: String,
    pub reason: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    pub status: String,
}

/// One debt of a student in a group, joined with student and subject names.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GroupDebtEntry {
    /// Debt id.
    pub id: DbId,
    /// `"<last_name> <first_name>"`.
    pub student: String,
    pub subject: String,
    pub reason: Option<String>,
    pub date_occurred: Option<NaiveDate>,
    pub status: String,
}
