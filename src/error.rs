//! Error types for the student service
//!
//! Each collaborator gets its own error enum. Only `ServiceError` ever
//! reaches a caller; cache and codec failures are absorbed by the service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Service Error Enum ==
/// Error returned by `StudentService` operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Missing payload or empty required field on create
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No student with this id in the store
    #[error("Student not found: {0}")]
    NotFound(i64),

    /// The persistent store failed; propagated uninterpreted
    #[error(transparent)]
    Store(#[from] StoreError),
}

// == Store Error Enum ==
/// Failures raised by a `StudentRepository`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

// == Cache Error Enum ==
/// Failures raised by a `CacheBackend`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key or value rejected by the backend
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),

    /// Backend could not be reached
    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

// == Codec Error Enum ==
/// Failures raised while converting students to and from cache bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Encode failed: {0}")]
    Encode(String),

    #[error("Decode failed: {0}")]
    Decode(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Aliases ==
/// Convenience Result type for service operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Result type for repository operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for cache backend operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
