//! Persistent store contract
//!
//! The repository is the source of truth for students and the only place
//! ids are allocated.

mod memory;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Student, StudentInput};

pub use memory::InMemoryStudentRepository;

/// Authoritative storage for students.
///
/// Implementations provide their own concurrency safety; `save` and
/// `delete_by_id` must each be atomic.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Every stored student, ordered by id.
    async fn find_all(&self) -> StoreResult<Vec<Student>>;

    /// The student with this id, if stored.
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>>;

    /// Inserts or updates a student.
    ///
    /// With `id == None` a fresh id is allocated; otherwise the record with
    /// that id is written, created if missing.
    async fn save(&self, id: Option<i64>, input: StudentInput) -> StoreResult<Student>;

    /// Removes the student with this id. Removing an absent id is a no-op.
    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
