//! Read-only aggregate reports over faculties, groups, students and debts.
//!
//! Every report is computed per call; nothing is materialized or cached.
//! Only debts with `status = 'active'` are counted.

use edudebts_core::debt_status::DEBT_ACTIVE;
use edudebts_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::{
    FacultyDebtCount, GroupDebtEntry, StudentDebtCount, StudentDebtEntry,
};

/// Provides the aggregate report queries.
pub struct ReportRepo;

impl ReportRepo {
    /// Active debt count per faculty, highest first.
    ///
    /// Every faculty appears, including those with no groups or no debts.
    pub async fn debts_by_faculty(pool: &PgPool) -> Result<Vec<FacultyDebtCount>, sqlx::Error> {
        let query = "\
            SELECT f.id, f.name AS faculty, COUNT(d.id)::BIGINT AS debt_count \
            FROM faculties f \
            LEFT JOIN groups g ON g.faculty_id = f.id \
            LEFT JOIN students s ON s.group_id = g.id \
            LEFT JOIN debts d ON d.student_id = s.id AND d.status = $1 \
            GROUP BY f.id, f.name \
            ORDER BY debt_count DESC, f.name, f.id";
        sqlx::query_as::<_, FacultyDebtCount>(query)
            .bind(DEBT_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// Active debt count per student of a group, highest first.
    ///
    /// An unknown group yields an empty list.
    pub async fn debts_by_group(
        pool: &PgPool,
        group_id: DbId,
    ) -> Result<Vec<StudentDebtCount>, sqlx::Error> {
        let query = "\
            SELECT s.id, s.last_name || ' ' || s.first_name AS student, \
                   COUNT(d.id)::BIGINT AS debt_count \
            FROM students s \
            LEFT JOIN debts d ON d.student_id = s.id AND d.status = $2 \
            WHERE s.group_id = $1 \
            GROUP BY s.id, s.last_name, s.first_name \
            ORDER BY debt_count DESC, student, s.id";
        sqlx::query_as::<_, StudentDebtCount>(query)
            .bind(group_id)
            .bind(DEBT_ACTIVE)
            .fetch_all(pool)
            .await
    }

    /// Every debt of one student with its subject name.
    ///
    /// Ordered by status, then most recent occurrence first.
    pub async fn student_debts(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentDebtEntry>, sqlx::Error> {
        let query = "\
            SELECT d.id, sub.name AS subject, d.reason, d.date_occurred, d.status \
            FROM debts d \
            JOIN subjects sub ON sub.id = d.subject_id \
            WHERE d.student_id = $1 \
            ORDER BY d.status, d.date_occurred DESC, d.id";
        sqlx::query_as::<_, StudentDebtEntry>(query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Every debt of every student in a group, with student and subject names.
    ///
    /// Same ordering as [`ReportRepo::student_debts`].
    pub async fn group_debts(
        pool: &PgPool,
        group_id: DbId,
    ) -> Result<Vec<GroupDebtEntry>, sqlx::Error> {
        let query = "\
            SELECT d.id, s.last_name || ' ' || s.first_name AS student, \
                   sub.name AS subject, d.reason, d.date_occurred, d.status \
            FROM debts d \
            JOIN students s ON s.id = d.student_id \
            JOIN subjects sub ON sub.id = d.subject_id \
            WHERE s.group_id = $1 \
            ORDER BY d.status, d.date_occurred DESC, d.id";
        sqlx::query_as::<_, GroupDebtEntry>(query)
            .bind(group_id)
            .fetch_all(pool)
            .await
    }
}
