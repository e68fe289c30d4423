//! API Handlers
//!
//! HTTP request handlers for the student endpoints. Each handler is a thin
//! shell around one `StudentService` operation.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::cache::{CachePolicy, MemoryCache};
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{HealthResponse, StatsResponse, StudentInput};
use crate::repository::InMemoryStudentRepository;
use crate::service::{Origin, StudentService};

/// Header telling clients whether a read was served from the cache.
pub const CACHE_HEADER: &str = "x-cache";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<StudentService>,
}

impl AppState {
    /// Creates a new AppState around a service.
    pub fn new(service: StudentService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the in-memory repository and the given memory cache, so the
    /// caller can keep a handle to the cache for the cleanup task.
    pub fn from_config(config: &Config, cache: MemoryCache) -> Self {
        Self::new(StudentService::new(
            Arc::new(InMemoryStudentRepository::new()),
            Arc::new(cache),
            CachePolicy::from_config(config),
        ))
    }
}

fn cache_header(origin: Origin) -> [(&'static str, &'static str); 1] {
    let value = match origin {
        Origin::Cache => "hit",
        Origin::Store => "miss",
    };
    [(CACHE_HEADER, value)]
}

fn payload(body: std::result::Result<Json<StudentInput>, JsonRejection>) -> Option<StudentInput> {
    match body {
        Ok(Json(input)) => Some(input),
        Err(rejection) => {
            debug!(error = %rejection, "Rejected student payload");
            None
        }
    }
}

/// Handler for GET /students
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let fetched = state.service.list().await?;
    Ok((cache_header(fetched.origin), Json(fetched.value)))
}

/// Handler for GET /students/:id
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let fetched = state.service.get_by_id(id).await?;
    Ok((cache_header(fetched.origin), Json(fetched.value)))
}

/// Handler for POST /students
///
/// A missing or malformed body is a validation failure, same as a blank name.
pub async fn create_student(
    State(state): State<AppState>,
    body: std::result::Result<Json<StudentInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let student = state.service.create(payload(body)).await?;
    Ok((StatusCode::CREATED, Json(student)))
}

/// Handler for PUT /students/:id
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: std::result::Result<Json<StudentInput>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let patch = payload(body)
        .ok_or_else(|| ServiceError::Validation("Student payload is required".to_string()))?;
    let student = state.service.update(id, patch).await?;
    Ok((StatusCode::OK, Json(student)))
}

/// Handler for DELETE /students/:id
///
/// Answers 410 Gone with the removed record.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let student = state.service.delete(id).await?;
    Ok((StatusCode::GONE, Json(student)))
}

/// Handler for GET /stats
///
/// Backends without statistics report all zeros.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.cache().stats().await.unwrap_or_default();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default(), MemoryCache::new(100))
    }

    fn alice() -> Json<StudentInput> {
        Json(StudentInput::new("Alice", 90.5, "CS"))
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = test_state();

        let result = create_student(State(state.clone()), Ok(alice())).await;
        assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

        let result = get_student(State(state.clone()), Path(1)).await;
        let response = result.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CACHE_HEADER], "miss");

        let response = get_student(State(state), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.headers()[CACHE_HEADER], "hit");
    }

    #[tokio::test]
    async fn test_get_nonexistent_student() {
        let result = get_student(State(test_state()), Path(99)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_delete_handler_answers_gone() {
        let state = test_state();
        create_student(State(state.clone()), Ok(alice()))
            .await
            .unwrap();

        let response = delete_student(State(state.clone()), Path(1))
            .await
            .unwrap()
            .into_response();
        assert_eq!(response.status(), StatusCode::GONE);

        let result = delete_student(State(state), Path(1)).await;
        assert!(matches!(result, Err(ServiceError::NotFound(1))));
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_create_blank_name() {
        let body = Json(StudentInput::new("", 75.0, "ME"));
        let result = create_student(State(test_state()), Ok(body)).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
