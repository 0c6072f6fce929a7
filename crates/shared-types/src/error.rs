use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
        }
    }
}

/// Structured application error shared by the form container and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<String, String>,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: BTreeMap::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: BTreeMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Message for a single field, if the error carries one.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    /// A user-facing sentence for banners and toasts.
    ///
    /// Validation errors that carry field messages point the user at the
    /// highlighted fields; everything else shows its own message.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError if !self.field_errors.is_empty() => {
                "Please correct the highlighted fields.".to_string()
            }
            AppErrorKind::ValidationError | AppErrorKind::BadRequest => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::validation("Validation failed", first_messages(&errors))
    }
}

/// Collapse `validator` errors to the first message reported for each field.
pub(crate) fn first_messages(errors: &validator::ValidationErrors) -> BTreeMap<String, String> {
    let mut field_errors = BTreeMap::new();
    for (field, errs) in errors.field_errors() {
        if let Some(first) = errs.first() {
            let msg = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            field_errors.insert(field.to_string(), msg);
        }
    }
    field_errors
}
