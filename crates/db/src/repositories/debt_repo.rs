//! Repository for the `debts` table.

use edudebts_core::debt_status::{DEBT_ACTIVE, DEBT_SETTLED};
use edudebts_core::types::DbId;
use sqlx::PgPool;

use crate::models::debt::{CreateDebt, Debt, UpdateDebt};

const COLUMNS: &str = "id, student_id, subject_id, reason, date_occurred, status";

/// Provides CRUD operations and the settle transition for debts.
pub struct DebtRepo;

impl DebtRepo {
    /// Insert a new debt, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `"active"`.
    pub async fn create(pool: &PgPool, input: &CreateDebt) -> Result<Debt, sqlx::Error> {
        let query = format!(
            "INSERT INTO debts (student_id, subject_id, reason, date_occurred, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, $6))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Debt>(&query)
            .bind(input.student_id)
            .bind(input.subject_id)
            .bind(&input.reason)
            .bind(input.date_occurred)
            .bind(&input.status)
            .bind(DEBT_ACTIVE)
            .fetch_one(pool)
            .await
    }

    /// Find a debt by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Debt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM debts WHERE id = $1");
        sqlx::query_as::<_, Debt>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all debts, most recent occurrence first.
    ///
    /// Debts without a date sort first (PostgreSQL `DESC` places NULLs first).
    pub async fn list(pool: &PgPool) -> Result<Vec<Debt>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM debts ORDER BY date_occurred DESC, id");
        sqlx::query_as::<_, Debt>(&query).fetch_all(pool).await
    }

    /// Replace every field of a debt. An omitted `status` resets to `"active"`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDebt,
    ) -> Result<Option<Debt>, sqlx::Error> {
        let query = format!(
            "UPDATE debts SET
                student_id = $2,
                subject_id = $3,
                reason = $4,
                date_occurred = $5,
                status = COALESCE($6, $7)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Debt>(&query)
            .bind(id)
            .bind(input.student_id)
            .bind(input.subject_id)
            .bind(&input.reason)
            .bind(input.date_occurred)
            .bind(&input.status)
            .bind(DEBT_ACTIVE)
            .fetch_optional(pool)
            .await
    }

    /// Mark a debt as settled regardless of its current status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn settle(pool: &PgPool, id: DbId) -> Result<Option<Debt>, sqlx::Error> {
        let query = format!("UPDATE debts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Debt>(&query)
            .bind(id)
            .bind(DEBT_SETTLED)
            .fetch_optional(pool)
            .await
    }

    /// Delete a debt by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM debts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
