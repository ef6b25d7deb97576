use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// Bad credentials or an unauthenticated session.
    Authentication,
    /// The account exists but is not allowed in.
    Forbidden,
    /// The backend was unreachable.
    Network,
    /// The request timed out.
    Timeout,
    /// A lookup-list fetch failed. Non-fatal: the list degrades to empty.
    ReferenceData,
    /// Required fields are missing or invalid. Raised before any I/O.
    Validation,
    /// The backend rejected or failed the protocol call.
    Submission,
    /// The local draft store failed.
    Storage,
    Internal,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Authentication => write!(f, "Authentication"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Timeout => write!(f, "Timeout"),
            AppErrorKind::ReferenceData => write!(f, "ReferenceData"),
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Submission => write!(f, "Submission"),
            AppErrorKind::Storage => write!(f, "Storage"),
            AppErrorKind::Internal => write!(f, "Internal"),
        }
    }
}

/// Structured application error shared by the API client and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Authentication, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Timeout, message)
    }

    pub fn reference_data(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ReferenceData, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::Validation,
            message: message.into(),
            field_errors,
        }
    }

    pub fn submission(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Submission, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Internal, message)
    }

    /// Message suitable for a toast: the per-field detail when present,
    /// otherwise the top-level message.
    pub fn friendly_message(&self) -> String {
        if self.field_errors.is_empty() {
            self.message.clone()
        } else {
            let mut fields: Vec<&str> = self.field_errors.values().map(String::as_str).collect();
            fields.sort_unstable();
            fields.join(" ")
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
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
        AppError::validation("Required fields are missing", field_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_kind_and_message() {
        let err = AppError::authentication("bad credentials");
        assert_eq!(format!("{}", err), "Authentication: bad credentials");
    }

    #[test]
    fn validation_error_carries_field_errors() {
        let mut fields = HashMap::new();
        fields.insert("violation_id".to_string(), "Select a violation.".to_string());
        let err = AppError::validation("Required fields are missing", fields);
        assert_eq!(err.kind, AppErrorKind::Validation);
        assert_eq!(
            err.field_errors.get("violation_id").unwrap(),
            "Select a violation."
        );
    }

    #[test]
    fn friendly_message_prefers_field_detail() {
        let mut fields = HashMap::new();
        fields.insert("operator_id".to_string(), "Select an operator.".to_string());
        let err = AppError::validation("Required fields are missing", fields);
        assert_eq!(err.friendly_message(), "Select an operator.");

        let plain = AppError::network("Could not reach the server.");
        assert_eq!(plain.friendly_message(), "Could not reach the server.");
    }

    #[test]
    fn roundtrip_through_json() {
        let mut fields = HashMap::new();
        fields.insert("line_id".to_string(), "Select a line.".to_string());
        let err = AppError::validation("Required fields are missing", fields);
        let json = serde_json::to_string(&err).unwrap();
        let parsed: AppError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }

    #[test]
    fn empty_field_errors_skipped_in_json() {
        let err = AppError::storage("write failed");
        let json = serde_json::to_string(&err).unwrap();
        assert!(!json.contains("field_errors"));
    }
}
