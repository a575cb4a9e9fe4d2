//! API error type and its JSON body

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use crate::domain::DomainError;

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    /// Field name to violation messages, present for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                message: message.into(),
                errors: None,
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Bad request listing every field that failed validation
    pub fn validation(errors: &ValidationErrors) -> Self {
        let fields = errors
            .field_errors()
            .into_iter()
            .map(|(field, violations)| {
                let messages = violations
                    .iter()
                    .map(|v| {
                        v.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| v.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect();

        let mut err = Self::bad_request("Validation failed");
        err.response.errors = Some(fields);
        err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Storage { message } => Self::internal(message),
            DomainError::Configuration { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRequest;
    use validator::Validate;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid body");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.message, "Invalid body");
        assert!(err.response.errors.is_none());
    }

    #[test]
    fn test_not_found_conversion_keeps_message() {
        let api_err: ApiError = DomainError::not_found("User not found with id: 99").into();

        assert_eq!(api_err.status, StatusCode::NOT_FOUND);
        assert_eq!(api_err.response.message, "User not found with id: 99");
    }

    #[test]
    fn test_storage_conversion_is_internal() {
        let api_err: ApiError = DomainError::storage("pool timed out").into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_serialization() {
        let err = ApiError::not_found("User not found with id: 99");
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(json, serde_json::json!({"message": "User not found with id: 99"}));
    }

    #[test]
    fn test_validation_error_lists_fields() {
        let errors = UserRequest::new("", "Babayev", 9).validate().unwrap_err();

        let err = ApiError::validation(&errors);
        let fields = err.response.errors.unwrap();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(fields["name"], vec!["Name can not be empty".to_string()]);
        assert_eq!(fields["age"], vec!["Age must be at least 10".to_string()]);
        assert!(!fields.contains_key("surname"));
    }
}
