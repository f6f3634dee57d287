/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// A request object failed construction-time validation
    #[error("validation error: {0}")]
    Validation(String),

    /// An argument had the wrong shape (for example a malformed UUID)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The service answered with a non-success status
    #[error("api error: {0}")]
    Api(ApiError),

    /// Transport level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A response had an unexpected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl AppError {
    /// HTTP status code carried by an [`AppError::Api`], if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.status_code),
            _ => None,
        }
    }
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

/// Error body returned by the service on non-success responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Service specific error code, e.g. `40110000`
    pub code: u64,
    /// Human readable message
    pub message: String,
}

/// Error reported by the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code of the response
    pub status_code: u16,
    /// Service specific error code when the body carried one
    pub code: Option<u64>,
    /// Service provided message, or the raw body when it was not JSON
    pub message: String,
}

impl ApiError {
    /// Builds an error from a status code and whatever body the service sent
    pub fn from_body(status_code: u16, body: &serde_json::Value) -> Self {
        match serde_json::from_value::<ApiErrorBody>(body.clone()) {
            Ok(parsed) => Self {
                status_code,
                code: Some(parsed.code),
                message: parsed.message,
            },
            Err(_) => {
                let message = match body {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Self {
                    status_code,
                    code: None,
                    message,
                }
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (code {}): {}", self.status_code, code, self.message),
            None => write!(f, "{}: {}", self.status_code, self.message),
        }
    }
}

impl std::error::Error for ApiError {}
