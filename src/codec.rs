//! Cache value codec
//!
//! Students are cached as JSON. Each value shape has its own pair of
//! functions and the call site picks the pair, so a cached listing is never
//! mistaken for a single student or the other way round.

use crate::error::CodecError;
use crate::models::Student;

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Encodes one student for the single-entity key.
pub fn encode_student(student: &Student) -> Result<Vec<u8>> {
    serde_json::to_vec(student).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decodes bytes written by [`encode_student`].
pub fn decode_student(bytes: &[u8]) -> Result<Student> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Encodes an ordered listing for the collection key.
pub fn encode_students(students: &[Student]) -> Result<Vec<u8>> {
    serde_json::to_vec(students).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decodes bytes written by [`encode_students`].
pub fn decode_students(bytes: &[u8]) -> Result<Vec<Student>> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}
