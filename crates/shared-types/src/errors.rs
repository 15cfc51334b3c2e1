//! Common error types used across all price chart crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all price chart operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum ChartError {
    // Data-related errors
    #[error("Network request failed: {message}")]
    Network { message: String },

    #[error("HTTP error {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Data parse error: {message}")]
    Parse {
        message: String,
        offset: Option<usize>,
    },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    #[error("Unknown {kind}: {value}")]
    UnknownSelection { kind: String, value: String },

    // Browser errors
    #[error("DOM error: {message}")]
    Dom { message: String },

    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },

    #[error("Render error: {message}")]
    Render { message: String },
}

/// Result type alias for price chart operations
pub type ChartResult<T> = Result<T, ChartError>;

/// Error response structure for JavaScript interop
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ChartError,
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
    pub fn new(error: ChartError) -> Self {
        Self {
            success: false,
            error,
            timestamp: chrono::Utc::now().timestamp_millis() as u64,
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
        const FALLBACK: &str = concat!(
            r#"{"success":false,"error":{"type":"Render","#,
            r#""details":{"message":"Failed to serialize error"}}}"#
        );
        serde_json::to_string(self).unwrap_or_else(|_| FALLBACK.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Parse {
            message: err.to_string(),
            offset: Some(err.column()),
        }
    }
}

impl From<wasm_bindgen::JsValue> for ChartError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        ChartError::JsInterop {
            message: err.as_string().unwrap_or_else(|| format!("{err:?}")),
        }
    }
}

impl From<ChartError> for wasm_bindgen::JsValue {
    fn from(err: ChartError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
