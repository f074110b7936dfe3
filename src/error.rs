//! Error types for the catalogue service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Catalog Error Enum ==
/// Unified error type for the catalogue service.
///
/// Backing-store errors travel through the cache layer unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Entity absent from the backing store
    #[error("Not found: {0}")]
    NotFound(String),

    /// Natural key already taken by another entity
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed request payload
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store failed to complete the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::Conflict(_) => StatusCode::CONFLICT,
            CatalogError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            CatalogError::Storage(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalogue service.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CatalogError::NotFound("a".into()), StatusCode::NOT_FOUND),
            (CatalogError::Conflict("a".into()), StatusCode::CONFLICT),
            (CatalogError::InvalidInput("a".into()), StatusCode::BAD_REQUEST),
            (CatalogError::Storage("a".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CatalogError::Internal("a".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_display_includes_detail() {
        let err = CatalogError::NotFound("album 7".to_string());
        assert_eq!(err.to_string(), "Not found: album 7");
    }
}
