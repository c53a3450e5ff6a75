//! Repository for the `students` table.

use edudebts_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, Student, UpdateStudent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, patronymic, record_book_number, \
                       phone, email, group_id, date_of_birth";

/// Provides CRUD operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Insert a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students
                (first_name, last_name, patronymic, record_book_number,
                 phone, email, group_id, date_of_birth)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.patronymic)
            .bind(&input.record_book_number)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.group_id)
            .bind(input.date_of_birth)
            .fetch_one(pool)
            .await
    }

    /// Find a student by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all students ordered by last name, then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM students ORDER BY last_name, first_name, id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Replace every field of a student. Omitted optional fields become NULL.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                first_name = $2,
                last_name = $3,
                patronymic = $4,
                record_book_number = $5,
                phone = $6,
                email = $7,
                group_id = $8,
                date_of_birth = $9
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.patronymic)
            .bind(&input.record_book_number)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(input.group_id)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete a student by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation while debts still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
