//! API Routes
//!
//! Configures the Axum router with all student service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_student, delete_student, get_student, health_handler, list_students, stats_handler,
    update_student, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /students` - List all students
/// - `POST /students` - Create a student
/// - `GET /students/:id` - Fetch one student
/// - `PUT /students/:id` - Replace a student's fields
/// - `DELETE /students/:id` - Delete a student
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/:id",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
