//! Contact submission model, row mapping and DTOs.

use portfolio_core::contact::{ContactForm, InquiryType, SubmissionStatus};
use portfolio_core::error::CoreError;
use portfolio_core::types::{RecordId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A contact form submission as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
    pub status: SubmissionStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactSubmissionRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: String,
    pub message: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ContactSubmissionRow> for ContactSubmission {
    type Error = CoreError;

    fn try_from(row: ContactSubmissionRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            inquiry_type: row.inquiry_type.parse()?,
            message: row.message,
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for inserting a new submission. Built only from a validated
/// [`ContactForm`]; new submissions always start as `new`.
#[derive(Debug, Clone)]
pub struct CreateContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl From<ContactForm> for CreateContactSubmission {
    fn from(form: ContactForm) -> Self {
        Self {
            name: form.name,
            email: form.email,
            phone: form.phone,
            inquiry_type: form.inquiry_type,
            message: form.message,
        }
    }
}
