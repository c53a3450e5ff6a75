//! Subject entity model and DTOs.

use edudebts_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subject row from the `subjects` table.
///
/// Subjects are scoped to a single group rather than shared.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    pub group_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubject {
    pub name: String,
    pub group_id: Option<DbId>,
}

pub type UpdateSubject = CreateSubject;
