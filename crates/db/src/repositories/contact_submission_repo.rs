//! Repository for the `contact_submissions` table.

use portfolio_core::contact::SubmissionStatus;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::contact_submission::{
    ContactSubmission, ContactSubmissionRow, CreateContactSubmission,
};
use crate::models::map_row;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, email, phone, inquiry_type, message, status, created_at, updated_at";

/// Provides CRUD operations for contact form submissions.
pub struct ContactSubmissionRepo;

impl ContactSubmissionRepo {
    /// Insert a new submission with status `new`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_submissions (id, name, email, phone, inquiry_type, message, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, ContactSubmissionRow>(&query)
            .bind(Uuid::now_v7().to_string())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.inquiry_type.as_str())
            .bind(&input.message)
            .bind(SubmissionStatus::New.as_str())
            .fetch_one(pool)
            .await?;
        map_row::<_, ContactSubmission>(row)
    }

    /// Find a submission by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: &str,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmissionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(map_row::<_, ContactSubmission>)
            .transpose()
    }

    /// List submissions newest first, optionally only those with `status`.
    pub async fn list(
        pool: &PgPool,
        status: Option<SubmissionStatus>,
    ) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmissionRow>(&query)
            .bind(status.map(|s| s.as_str()))
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(map_row::<_, ContactSubmission>)
            .collect()
    }

    /// Set a submission's status. Any status may follow any other.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: &str,
        status: SubmissionStatus,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_submissions SET
                status = $2,
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmissionRow>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await?
            .map(map_row::<_, ContactSubmission>)
            .transpose()
    }

    /// Permanently delete a submission. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
