//! Common error types used across the dashchart crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for dashchart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum DashChartsError {
    // Payload errors
    #[error("Payload parse error: {message}")]
    PayloadParse { message: String },

    // Role errors
    #[error("Duplicate role in ladder: {role}")]
    DuplicateRole { role: String },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

const SERIALIZE_FALLBACK: &str = r#"{"success":false,"error":{"type":"JsInterop","details":{"message":"Failed to serialize error"}},"timestamp":0,"context":null}"#;

/// Result type alias for dashchart operations
pub type DashChartsResult<T> = Result<T, DashChartsError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: DashChartsError,
    pub timestamp: u64,
    pub context: Option<ErrorContext>,
}

/// Additional context for error reporting
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorContext {
    pub component: String,
    pub operation: String,
}

impl ErrorResponse {
    pub fn new(error: DashChartsError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis().max(0) as u64,
            context: None,
        }
    }

    pub fn with_context(mut self, component: &str, operation: &str) -> Self {
        self.context = Some(ErrorContext {
            component: component.to_string(),
            operation: operation.to_string(),
        });
        self
    }

    /// Convert to JSON string for JavaScript
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| SERIALIZE_FALLBACK.to_string())
    }
}

impl From<serde_json::Error> for DashChartsError {
    fn from(err: serde_json::Error) -> Self {
        DashChartsError::PayloadParse {
            message: format!("line {}: {}", err.line(), err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DashChartsError::DuplicateRole {
            role: "admin".to_string(),
        };

        let json = ErrorResponse::new(error)
            .with_context("RoleLadder", "new")
            .to_json();
        assert!(json.contains("DuplicateRole"));
        assert!(json.contains("admin"));
        assert!(json.contains("RoleLadder"));
    }

    #[test]
    fn test_serialize_fallback_is_a_valid_response() {
        let response: ErrorResponse = serde_json::from_str(SERIALIZE_FALLBACK).unwrap();
        assert!(!response.success);
        assert!(matches!(response.error, DashChartsError::JsInterop { .. }));
    }

    #[test]
    fn test_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DashChartsError = parse_err.into();

        match err {
            DashChartsError::PayloadParse { message } => assert!(message.starts_with("line 1")),
            _ => panic!("Wrong error variant"),
        }
    }
}
