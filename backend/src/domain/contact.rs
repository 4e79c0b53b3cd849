//! Contact-form submissions. Append-only; never read back over HTTP.

use chrono::{DateTime, Utc};

use super::validation::{FieldViolation, ValidationErrors, ViolationCode, Violations};

/// Untrusted contact form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// Validated contact submission awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A stored contact submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: i64,
    contact: NewContact,
    created_at: DateTime<Utc>,
}

impl Contact {
    pub fn new(id: i64, contact: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            contact,
            created_at,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.contact.name
    }

    pub fn email(&self) -> &str {
        &self.contact.email
    }

    pub fn subject(&self) -> &str {
        &self.contact.subject
    }

    pub fn message(&self) -> &str {
        &self.contact.message
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Structural email check: exactly one `@` with text on both sides.
fn is_plausible_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !value.contains(char::is_whitespace)
        }
        _ => false,
    }
}

impl TryFrom<ContactDraft> for NewContact {
    type Error = ValidationErrors;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let name = violations.require_text("name", draft.name);
        let email = violations
            .require_text("email", draft.email)
            .and_then(|email| {
                if is_plausible_email(&email) {
                    Some(email)
                } else {
                    violations.push(FieldViolation::new(
                        "email",
                        ViolationCode::InvalidEmail,
                        "email must look like name@domain",
                    ));
                    None
                }
            });
        let subject = violations.require_text("subject", draft.subject);
        let message = violations.require_text("message", draft.message);

        violations.finish(|| {
            Some(Self {
                name: name?,
                email: email?,
                subject: subject?,
                message: message?,
            })
        })
    }
}
