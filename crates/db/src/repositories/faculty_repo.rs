//! Repository for the `faculties` table.

use edudebts_core::types::DbId;
use sqlx::PgPool;

use crate::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name";

/// Provides CRUD operations for faculties.
pub struct FacultyRepo;

impl FacultyRepo {
    /// Insert a new faculty, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFaculty) -> Result<Faculty, sqlx::Error> {
        let query = format!("INSERT INTO faculties (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a faculty by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all faculties ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties ORDER BY name, id");
        sqlx::query_as::<_, Faculty>(&query).fetch_all(pool).await
    }

    /// Replace every field of a faculty.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaculty,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("UPDATE faculties SET name = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .bind(&input.name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a faculty by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while groups still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
