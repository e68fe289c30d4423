//! Student entity
//!
//! The single record type managed by the service.

use serde::{Deserialize, Serialize};

use super::StudentInput;

/// A stored student record.
///
/// `id` is assigned by the repository on creation and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub score: f64,
    pub category: String,
}

impl Student {
    /// Builds a student from an id and its mutable fields.
    pub fn from_input(id: i64, input: StudentInput) -> Self {
        Self {
            id,
            name: input.name,
            score: input.score,
            category: input.category,
        }
    }

    // == Merge ==
    /// Replaces every mutable field with the patch's value, keeping the id.
    pub fn merge(&mut self, patch: StudentInput) {
        self.name = patch.name;
        self.score = patch.score;
        self.category = patch.category;
    }

    /// Returns the mutable fields of this student.
    pub fn to_input(&self) -> StudentInput {
        StudentInput {
            name: self.name.clone(),
            score: self.score,
            category: self.category.clone(),
        }
    }
}
