//! Faculty entity model and DTOs.

use edudebts_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A faculty row from the `faculties` table. Root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Faculty {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new faculty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFaculty {
    pub name: String,
}

/// PUT replaces every field, so updates carry the full create payload.
pub type UpdateFaculty = CreateFaculty;
