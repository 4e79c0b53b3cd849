//! Field-level validation results shared by the draft-to-record conversions.
//!
//! Drafts (`OrderDraft`, `ContactDraft`, `MenuItemDraft`) carry untrusted
//! input with every field optional. Converting a draft into its typed record
//! checks every field and reports all violations at once.

use std::fmt;

use serde_json::{Value, json};

use super::{Error, Price};

/// Machine-readable reason a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCode {
    MissingField,
    BlankValue,
    NegativeAmount,
    InvalidQuantity,
    InvalidStatus,
    InvalidEmail,
}

impl ViolationCode {
    /// Stable snake_case identifier used in API error details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::BlankValue => "blank_value",
            Self::NegativeAmount => "negative_amount",
            Self::InvalidQuantity => "invalid_quantity",
            Self::InvalidStatus => "invalid_status",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: String,
    code: ViolationCode,
    message: String,
}

impl FieldViolation {
    /// Build a violation for `field` (camelCase, as clients spell it).
    pub fn new(field: impl Into<String>, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    /// Shorthand for a missing required field.
    pub fn missing(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("missing required field: {field}");
        Self::new(field, ViolationCode::MissingField, message)
    }

    /// Shorthand for a field that is present but blank.
    pub fn blank(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{field} must not be blank");
        Self::new(field, ViolationCode::BlankValue, message)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn code(&self) -> ViolationCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Every violation found while validating one draft. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Iterate violations in the order they were detected.
    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when some violation concerns `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            f.write_str(&violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    /// Details payload listing each violation as `{field, code, message}`.
    pub fn to_details(&self) -> Value {
        let errors: Vec<Value> = self
            .0
            .iter()
            .map(|violation| {
                json!({
                    "field": violation.field,
                    "code": violation.code.as_str(),
                    "message": violation.message,
                })
            })
            .collect();
        json!({ "errors": errors })
    }
}

impl From<ValidationErrors> for Error {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors.to_string();
        let message = if message.trim().is_empty() {
            "request validation failed".to_owned()
        } else {
            message
        };
        Error::invalid_request(message).with_details(errors.to_details())
    }
}

/// Accumulates violations while a draft is checked field by field.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<FieldViolation>);

impl Violations {
    pub(crate) fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    /// Require a non-blank string; returns the trimmed value when valid.
    pub(crate) fn require_text(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            None => {
                self.push(FieldViolation::missing(field));
                None
            }
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    self.push(FieldViolation::blank(field));
                    None
                } else {
                    Some(trimmed.to_owned())
                }
            }
        }
    }

    /// Require a non-negative amount of minor units.
    pub(crate) fn require_price(&mut self, field: &str, value: Option<i64>) -> Option<Price> {
        let Some(raw) = value else {
            self.push(FieldViolation::missing(field));
            return None;
        };
        match Price::new(raw) {
            Ok(price) => Some(price),
            Err(err) => {
                self.push(FieldViolation::new(
                    field,
                    ViolationCode::NegativeAmount,
                    format!("{field}: {err}"),
                ));
                None
            }
        }
    }

    /// Finish validation, yielding `value` only if nothing was rejected.
    pub(crate) fn finish<T>(self, value: impl FnOnce() -> Option<T>) -> Result<T, ValidationErrors> {
        if !self.0.is_empty() {
            return Err(ValidationErrors(self.0));
        }
        value().ok_or_else(|| {
            ValidationErrors(vec![FieldViolation::new(
                "body",
                ViolationCode::MissingField,
                "request body is incomplete",
            )])
        })
    }
}
