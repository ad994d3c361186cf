use serde_json::{json, Value};
use thiserror::Error;

use crate::validation::FieldError;

/// Application-level error type.
/// The filter core never produces one of these; they come from loading and
/// validating record collections at the edges.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("{source_name}: {} invalid field(s)", .errors.len())]
    InvalidRecords {
        source_name: String,
        errors: Vec<FieldError>,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "IO_ERROR",
            AppError::Json(_) => "JSON_ERROR",
            AppError::DuplicateId(_) => "DUPLICATE_ID",
            AppError::InvalidRecords { .. } => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Renders the error the same way on stdout regardless of variant.
    pub fn to_json(&self) -> Value {
        let details = match self {
            AppError::InvalidRecords { errors, .. } => json!(errors),
            _ => Value::Null,
        };

        json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "details": details
            }
        })
    }
}
