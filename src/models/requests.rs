//! Request DTOs for the student API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::{Deserialize, Serialize};

/// Mutable student fields.
///
/// Used as the body of `POST /students` and as the patch for
/// `PUT /students/:id`. `score` and `category` default when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentInput {
    /// Display name, required on create
    pub name: String,
    /// Numeric score
    #[serde(default)]
    pub score: f64,
    /// Free-form category (e.g. a department)
    #[serde(default)]
    pub category: String,
}

impl StudentInput {
    /// Creates a new StudentInput
    pub fn new(name: impl Into<String>, score: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            category: category.into(),
        }
    }

    /// Validates the fields required on create
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_input_deserialize() {
        let json = r#"{"name": "Alice", "score": 90.5, "category": "CS"}"#;
        let input: StudentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, StudentInput::new("Alice", 90.5, "CS"));
    }

    #[test]
    fn test_student_input_defaults() {
        let json = r#"{"name": "Bob"}"#;
        let input: StudentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.score, 0.0);
        assert!(input.category.is_empty());
    }

    #[test]
    fn test_validate_empty_name() {
        assert!(StudentInput::new("", 75.0, "ME").validate().is_some());
        assert!(StudentInput::new("   ", 75.0, "ME").validate().is_some());
    }

    #[test]
    fn test_validate_valid_input() {
        assert!(StudentInput::new("Charlie", 75.0, "ME").validate().is_none());
    }
}
