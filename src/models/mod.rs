//! Data model and HTTP DTOs
//!
//! `Student` is the stored entity; `StudentInput` carries its mutable
//! fields on create and update.

pub mod requests;
pub mod responses;
pub mod student;

// Re-export commonly used types
pub use requests::StudentInput;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use student::Student;
