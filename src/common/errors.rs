use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use std::collections::BTreeMap;
use std::fmt;

/// Error types for validation rules and application failures
#[derive(Debug, Clone)]
pub enum BusinessError {
    /// Validation error on a single field (400 Bad Request)
    ValidationError { field: String, message: String },
    /// Validation errors reported per field (400 Bad Request)
    FieldErrors { fields: BTreeMap<String, String> },
    /// Business rule violations (422 Unprocessable Entity)
    BusinessRuleViolation { rule: String, message: String },
    /// Resource not found (404 Not Found)
    NotFound { resource: String, id: String },
    /// Duplicate resource (409 Conflict)
    Duplicate { resource: String, field: String },
    /// External service errors (502 Bad Gateway)
    ExternalServiceError { service: String, message: String },
    /// Generic application error (500 Internal Server Error)
    InternalError { message: String },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::ValidationError { field, message } => {
                write!(f, "Validation error in field '{field}': {message}")
            }
            BusinessError::FieldErrors { fields } => {
                let names: Vec<&str> = fields.keys().map(String::as_str).collect();
                write!(f, "Validation failed for fields: {}", names.join(", "))
            }
            BusinessError::BusinessRuleViolation { rule, message } => {
                write!(f, "Business rule '{rule}' violated: {message}")
            }
            BusinessError::NotFound { resource, id } => {
                write!(f, "{resource} with id '{id}' not found")
            }
            BusinessError::Duplicate { resource, field } => {
                write!(f, "{resource} with this {field} already exists")
            }
            BusinessError::ExternalServiceError { service, message } => {
                write!(f, "External service '{service}' error: {message}")
            }
            BusinessError::InternalError { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for BusinessError {}

impl BusinessError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            BusinessError::ValidationError { .. } | BusinessError::FieldErrors { .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            BusinessError::BusinessRuleViolation { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "BUSINESS_RULE_VIOLATION")
            }
            BusinessError::NotFound { .. } => (StatusCode::NOT_FOUND, "RESOURCE_NOT_FOUND"),
            BusinessError::Duplicate { .. } => (StatusCode::CONFLICT, "DUPLICATE_RESOURCE"),
            BusinessError::ExternalServiceError { .. } => {
                (StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR")
            }
            BusinessError::InternalError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

/// Convert `BusinessError` to HTTP responses
impl IntoResponse for BusinessError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        let message = self.to_string();
        let error_type = format!("{self:?}")
            .split([' ', '{'])
            .next()
            .unwrap_or("Unknown")
            .to_string();

        let mut error = json!({
            "code": error_code,
            "message": message,
            "type": error_type,
        });
        match &self {
            BusinessError::FieldErrors { fields } => {
                error["fields"] = json!(fields);
            }
            BusinessError::ValidationError { field, message } => {
                error["fields"] = json!({ field: message });
            }
            _ => {}
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}

/// Maps `DbErr` onto business errors
pub struct ErrorMapper;

impl ErrorMapper {
    pub fn map_db_error(err: DbErr, context: &str) -> BusinessError {
        match err {
            DbErr::RecordNotFound(msg) => BusinessError::NotFound {
                resource: Self::resource_from_context(context),
                id: Self::id_from_message(&msg),
            },
            DbErr::Custom(msg) => {
                if let Some(detail) = msg.strip_prefix("Validation failed:") {
                    let message = detail.trim().to_string();
                    BusinessError::ValidationError {
                        field: Self::field_from_validation(&message),
                        message,
                    }
                } else if msg.contains("already exists") || msg.contains("duplicate") {
                    BusinessError::Duplicate {
                        resource: Self::resource_from_context(context),
                        field: "name".to_string(),
                    }
                } else {
                    BusinessError::InternalError { message: msg }
                }
            }
            DbErr::Conn(conn_err) => BusinessError::ExternalServiceError {
                service: "database".to_string(),
                message: conn_err.to_string(),
            },
            DbErr::Exec(exec_err) => {
                let err_msg = exec_err.to_string();
                if err_msg.contains("FOREIGN KEY constraint")
                    || err_msg.contains("violates foreign key")
                {
                    BusinessError::BusinessRuleViolation {
                        rule: "referential integrity".to_string(),
                        message: format!(
                            "{} references a record that does not exist",
                            Self::resource_from_context(context)
                        ),
                    }
                } else {
                    BusinessError::InternalError { message: err_msg }
                }
            }
            _ => BusinessError::InternalError {
                message: err.to_string(),
            },
        }
    }

    fn resource_from_context(context: &str) -> String {
        context.replace('_', " ")
    }

    fn id_from_message(msg: &str) -> String {
        msg.split_whitespace()
            .map(|word| word.trim_matches('\'').trim_matches('"'))
            .find(|word| word.len() == 36 && word.matches('-').count() == 4)
            .unwrap_or("unknown")
            .to_string()
    }

    /// "temperature must be numeric" -> "temperature"
    fn field_from_validation(message: &str) -> String {
        message
            .split_whitespace()
            .next()
            .unwrap_or("unknown")
            .to_string()
    }
}

#[macro_export]
macro_rules! validation_error {
    ($field:expr, $message:expr) => {
        $crate::common::errors::BusinessError::ValidationError {
            field: $field.to_string(),
            message: $message.to_string(),
        }
    };
}

#[macro_export]
macro_rules! not_found {
    ($resource:expr, $id:expr) => {
        $crate::common::errors::BusinessError::NotFound {
            resource: $resource.to_string(),
            id: $id.to_string(),
        }
    };
}

/// Extension trait to add business error conversion to `DbErr`
pub trait DbErrorExt {
    fn to_business_error(self, context: &str) -> BusinessError;
}

impl DbErrorExt for DbErr {
    fn to_business_error(self, context: &str) -> BusinessError {
        ErrorMapper::map_db_error(self, context)
    }
}

/// Result type alias for handlers that surface business errors
pub type BusinessResult<T> = Result<T, BusinessError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_validation_error_creation() {
        let err = validation_error!("temperature", "must be numeric");
        assert!(matches!(err, BusinessError::ValidationError { .. }));
    }

    #[test]
    fn test_error_mapper_validation() {
        let db_err = DbErr::Custom("Validation failed: year is required".to_string());
        match ErrorMapper::map_db_error(db_err, "specimen_record") {
            BusinessError::ValidationError { field, message } => {
                assert_eq!(field, "year");
                assert_eq!(message, "year is required");
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_mapper_not_found() {
        let db_err = DbErr::RecordNotFound(
            "County with id '0b5d6c2e-8f0a-4c55-9d7b-3c1f2b8a9e10' not found".to_string(),
        );
        match ErrorMapper::map_db_error(db_err, "county") {
            BusinessError::NotFound { resource, id } => {
                assert_eq!(resource, "county");
                assert_eq!(id, "0b5d6c2e-8f0a-4c55-9d7b-3c1f2b8a9e10");
            }
            other => panic!("Expected not found error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_field_errors_response_body() {
        let mut fields = BTreeMap::new();
        fields.insert("county".to_string(), "bad".to_string());
        fields.insert("state".to_string(), "bad".to_string());

        let response = BusinessError::FieldErrors { fields }.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["type"], "FieldErrors");
        assert_eq!(body["error"]["fields"]["county"], "bad");
        assert_eq!(body["error"]["fields"]["state"], "bad");
    }
}
