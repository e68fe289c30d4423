//! API Module
//!
//! HTTP handlers and routing for the student REST API.
//!
//! # Endpoints
//! - `GET /students`, `POST /students`
//! - `GET /students/:id`, `PUT /students/:id`, `DELETE /students/:id`
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
