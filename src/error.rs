//! Error type shared by the catalog services and its HTTP mapping

use axum::{http::StatusCode, Json};
use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};

use crate::models::error::ErrorResponse;
use crate::validation::ValidationError;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

#[derive(Debug)]
pub enum CatalogError {
    /// One or more field constraints failed
    Validation(ValidationError),
    /// No row with the requested key
    NotFound(String),
    /// A unique column already holds the value
    Conflict(String),
    Database(DbErr),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Validation(err) => write!(f, "Validation failed: {}", err),
            CatalogError::NotFound(msg) => write!(f, "Not found: {}", msg),
            CatalogError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            CatalogError::Database(err) => write!(f, "Database error: {}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Validation(err) => Some(err),
            CatalogError::Database(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for CatalogError {
    fn from(err: ValidationError) -> Self {
        CatalogError::Validation(err)
    }
}

/// Message of a unique-index violation reported by the driver, if `err` is one
fn unique_violation(err: &DbErr) -> Option<String> {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return Some(detail);
    }
    // sql_err() only recognises concrete driver error types
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db_err)))
            if db_err.is_unique_violation() =>
        {
            Some(db_err.message().to_string())
        }
        _ => None,
    }
}

impl From<DbErr> for CatalogError {
    fn from(err: DbErr) -> Self {
        if let Some(detail) = unique_violation(&err) {
            return CatalogError::Conflict(detail);
        }
        match err {
            DbErr::RecordNotFound(msg) => CatalogError::NotFound(msg),
            DbErr::RecordNotUpdated => CatalogError::NotFound("record was not updated".to_string()),
            other => CatalogError::Database(other),
        }
    }
}

impl CatalogError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = err.status_code();
        let body = match err {
            CatalogError::Validation(validation) => ErrorResponse {
                error: "Field constraints violated".to_string(),
                violations: Some(validation.violations),
            },
            other => ErrorResponse::message(other.to_string()),
        };
        (status, Json(body))
    }
}

/// Log a failed request under its correlation id and build the response
pub fn reject(correlation_id: &str, err: CatalogError) -> ApiError {
    match &err {
        CatalogError::Database(_) => {
            tracing::error!(correlation_id = %correlation_id, error = %err, "Request failed")
        }
        _ => tracing::warn!(correlation_id = %correlation_id, error = %err, "Request rejected"),
    }
    err.into()
}
