//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::StudentRepository;
use crate::error::StoreResult;
use crate::models::{Student, StudentInput};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, Student>,
    next_id: i64,
}

/// In-memory student store.
///
/// Ids start at 1 and increase monotonically, so a deleted id is never
/// handed out again. Data is lost when the last clone is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryStudentRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStudentRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> StoreResult<Vec<Student>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Student>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, id: Option<i64>, input: StudentInput) -> StoreResult<Student> {
        let mut table = self.table.write().await;

        let id = match id {
            Some(id) => id,
            None => table.next_id,
        };
        table.next_id = table.next_id.max(id.saturating_add(1));

        let student = Student::from_input(id, input);
        table.rows.insert(id, student.clone());
        Ok(student)
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
