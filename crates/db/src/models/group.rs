//! Group entity model and DTOs.

use edudebts_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A group row from the `groups` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Group {
    pub id: DbId,
    pub name: String,
    /// `None` when the group is not assigned to any faculty.
    pub faculty_id: Option<DbId>,
}

/// DTO for creating a new group.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroup {
    pub name: String,
    pub faculty_id: Option<DbId>,
}

/// PUT replaces every field, so updates carry the full create payload.
pub type UpdateGroup = CreateGroup;
