//! Contact form inquiry types, submission lifecycle statuses and the
//! validation rules applied to public form posts.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Inquiry types
// ---------------------------------------------------------------------------

pub const INQUIRY_COMMISSION: &str = "commission";
pub const INQUIRY_PURCHASE: &str = "purchase";
pub const INQUIRY_COLLABORATION: &str = "collaboration";
pub const INQUIRY_EXHIBITION: &str = "exhibition";
pub const INQUIRY_GENERAL: &str = "general";

/// All valid inquiry types.
pub const VALID_INQUIRY_TYPES: &[&str] = &[
    INQUIRY_COMMISSION,
    INQUIRY_PURCHASE,
    INQUIRY_COLLABORATION,
    INQUIRY_EXHIBITION,
    INQUIRY_GENERAL,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Commission,
    Purchase,
    Collaboration,
    Exhibition,
    General,
}

impl InquiryType {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commission => INQUIRY_COMMISSION,
            Self::Purchase => INQUIRY_PURCHASE,
            Self::Collaboration => INQUIRY_COLLABORATION,
            Self::Exhibition => INQUIRY_EXHIBITION,
            Self::General => INQUIRY_GENERAL,
        }
    }
}

impl FromStr for InquiryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INQUIRY_COMMISSION => Ok(Self::Commission),
            INQUIRY_PURCHASE => Ok(Self::Purchase),
            INQUIRY_COLLABORATION => Ok(Self::Collaboration),
            INQUIRY_EXHIBITION => Ok(Self::Exhibition),
            INQUIRY_GENERAL => Ok(Self::General),
            other => Err(CoreError::Validation(format!(
                "Unknown inquiry type: '{other}'. Valid types: {}",
                VALID_INQUIRY_TYPES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Submission statuses
// ---------------------------------------------------------------------------

pub const STATUS_NEW: &str = "new";
pub const STATUS_READ: &str = "read";
pub const STATUS_RESPONDED: &str = "responded";
pub const STATUS_ARCHIVED: &str = "archived";

/// All valid submission statuses. Any status may follow any other.
pub const VALID_STATUSES: &[&str] = &[STATUS_NEW, STATUS_READ, STATUS_RESPONDED, STATUS_ARCHIVED];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    New,
    Read,
    Responded,
    Archived,
}

impl SubmissionStatus {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => STATUS_NEW,
            Self::Read => STATUS_READ,
            Self::Responded => STATUS_RESPONDED,
            Self::Archived => STATUS_ARCHIVED,
        }
    }
}

impl FromStr for SubmissionStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_NEW => Ok(Self::New),
            STATUS_READ => Ok(Self::Read),
            STATUS_RESPONDED => Ok(Self::Responded),
            STATUS_ARCHIVED => Ok(Self::Archived),
            other => Err(CoreError::Validation(format!(
                "Invalid status: '{other}'. Valid statuses: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Form validation
// ---------------------------------------------------------------------------

/// Minimum message length, counted in characters after trimming.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Whether `email` is syntactically plausible.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Raw contact form body as posted by the public site. Every field is
/// optional here so that missing fields surface as validation messages
/// rather than deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub inquiry_type: Option<String>,
    pub message: Option<String>,
}

/// A contact form that passed validation, with whitespace trimmed, the
/// email lowercased and a blank phone number dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub inquiry_type: InquiryType,
    pub message: String,
}

impl ContactFormInput {
    /// Validate and normalize the form. The first failing field wins.
    pub fn validate(&self) -> Result<ContactForm, CoreError> {
        let name = trimmed(self.name.as_deref());
        if name.is_empty() {
            return Err(CoreError::Validation("Name is required".into()));
        }

        let email = trimmed(self.email.as_deref());
        if email.is_empty() || !is_valid_email(email) {
            return Err(CoreError::Validation("Valid email is required".into()));
        }

        let inquiry_type = trimmed(self.inquiry_type.as_deref());
        if inquiry_type.is_empty() {
            return Err(CoreError::Validation("Inquiry type is required".into()));
        }
        let inquiry_type: InquiryType = inquiry_type.parse()?;

        let message = trimmed(self.message.as_deref());
        if message.chars().count() < MIN_MESSAGE_LEN {
            return Err(CoreError::Validation(format!(
                "Message must be at least {MIN_MESSAGE_LEN} characters"
            )));
        }

        let phone = Some(trimmed(self.phone.as_deref()))
            .filter(|p| !p.is_empty())
            .map(str::to_string);

        Ok(ContactForm {
            name: name.to_string(),
            email: email.to_lowercase(),
            phone,
            inquiry_type,
            message: message.to_string(),
        })
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn valid_input() -> ContactFormInput {
        ContactFormInput {
            name: Some("  Ada Potter ".into()),
            email: Some(" Ada@Example.COM ".into()),
            phone: Some("   ".into()),
            inquiry_type: Some("commission".into()),
            message: Some("  I would love a large vase.  ".into()),
        }
    }

    fn validation_message(input: &ContactFormInput) -> String {
        match input.validate() {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_form_is_normalized() {
        let form = valid_input().validate().expect("form should be valid");
        assert_eq!(form.name, "Ada Potter");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.phone, None);
        assert_eq!(form.inquiry_type, InquiryType::Commission);
        assert_eq!(form.message, "I would love a large vase.");
    }

    #[test]
    fn phone_is_kept_when_present() {
        let mut input = valid_input();
        input.phone = Some(" 555-0100 ".into());
        let form = input.validate().unwrap();
        assert_eq!(form.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn missing_name_is_rejected() {
        let mut input = valid_input();
        input.name = Some("   ".into());
        assert_eq!(validation_message(&input), "Name is required");
        input.name = None;
        assert_eq!(validation_message(&input), "Name is required");
    }

    #[test]
    fn email_format_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@studio.example.org"));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut input = valid_input();
        input.email = Some("no-at-sign.example.com".into());
        assert_eq!(validation_message(&input), "Valid email is required");
        input.email = Some("user@nodot".into());
        assert_eq!(validation_message(&input), "Valid email is required");
    }

    #[test]
    fn inquiry_type_must_be_known() {
        let mut input = valid_input();
        input.inquiry_type = None;
        assert_eq!(validation_message(&input), "Inquiry type is required");
        input.inquiry_type = Some("Commission".into());
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn short_message_is_rejected_after_trim() {
        let mut input = valid_input();
        input.message = Some("  123456789  ".into());
        assert_eq!(
            validation_message(&input),
            "Message must be at least 10 characters"
        );

        input.message = Some("1234567890".into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        let mut input = valid_input();
        // 10 characters, 20 bytes.
        input.message = Some("éééééééééé".into());
        assert!(input.validate().is_ok());
    }

    #[test]
    fn status_parse_and_display() {
        for name in VALID_STATUSES {
            let status: SubmissionStatus = name.parse().unwrap();
            assert_eq!(status.to_string(), *name);
        }
        assert_matches!("closed".parse::<SubmissionStatus>(), Err(CoreError::Validation(_)));
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::New);
    }

    #[test]
    fn inquiry_type_serde_is_lowercase() {
        let parsed: InquiryType = serde_json::from_str("\"exhibition\"").unwrap();
        assert_eq!(parsed, InquiryType::Exhibition);
        assert_eq!(
            serde_json::to_string(&InquiryType::Purchase).unwrap(),
            "\"purchase\""
        );
    }
}
