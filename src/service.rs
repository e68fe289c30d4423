//! Cache-aside student service
//!
//! Reads consult the cache first and fall back to the repository on a miss,
//! repopulating the cache with the standard TTL. Writes go to the
//! repository first and then invalidate (or refresh) every cache key the
//! write could have made stale:
//!
//! | operation | `<collection>:<id>`      | `<collection>:all` |
//! |-----------|--------------------------|--------------------|
//! | create    | untouched                | deleted            |
//! | update    | deleted, then refreshed  | deleted            |
//! | delete    | deleted                  | deleted            |
//!
//! The cache is best effort. Backend and codec failures are logged and
//! handled as a miss; only repository errors reach the caller.

use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::cache::{CacheBackend, CachePolicy};
use crate::codec;
use crate::error::{Result, ServiceError};
use crate::models::{Student, StudentInput};
use crate::repository::StudentRepository;

/// Where a read was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Store,
}

/// A read result tagged with its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Fetched<T> {
    fn cached(value: T) -> Self {
        Self {
            value,
            origin: Origin::Cache,
        }
    }

    fn stored(value: T) -> Self {
        Self {
            value,
            origin: Origin::Store,
        }
    }

    pub fn is_cached(&self) -> bool {
        self.origin == Origin::Cache
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Student CRUD with a cache-aside layer over the repository.
pub struct StudentService {
    repository: Arc<dyn StudentRepository>,
    cache: Arc<dyn CacheBackend>,
    policy: CachePolicy,
}

impl StudentService {
    pub fn new(
        repository: Arc<dyn StudentRepository>,
        cache: Arc<dyn CacheBackend>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    pub fn cache(&self) -> &Arc<dyn CacheBackend> {
        &self.cache
    }

    // == List ==
    /// Returns every student. An empty listing is cached like any other.
    pub async fn list(&self) -> Result<Fetched<Vec<Student>>> {
        let key = self.policy.collection_key();

        if let Some(students) = self.read_cached(&key, codec::decode_students).await {
            trace!(%key, count = students.len(), "Cache hit for student listing");
            return Ok(Fetched::cached(students));
        }

        trace!(%key, "Cache miss for student listing");
        let students = self.repository.find_all().await?;
        self.write_cached(&key, codec::encode_students(&students))
            .await;

        Ok(Fetched::stored(students))
    }

    // == Get By Id ==
    /// Returns one student. A missing id is never cached.
    pub async fn get_by_id(&self, id: i64) -> Result<Fetched<Student>> {
        let key = self.policy.entity_key(id);

        if let Some(student) = self.read_cached(&key, codec::decode_student).await {
            trace!(student_id = id, "Cache hit for student");
            return Ok(Fetched::cached(student));
        }

        trace!(student_id = id, "Cache miss for student");
        let student = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        self.write_cached(&key, codec::encode_student(&student)).await;

        Ok(Fetched::stored(student))
    }

    // == Create ==
    /// Validates and stores a new student, then drops the cached listing.
    ///
    /// A missing payload or blank name is rejected before the repository or
    /// cache is touched.
    pub async fn create(&self, input: Option<StudentInput>) -> Result<Student> {
        let input = input
            .ok_or_else(|| ServiceError::Validation("Student payload is required".to_string()))?;
        if let Some(message) = input.validate() {
            return Err(ServiceError::Validation(message));
        }

        let student = self.repository.save(None, input).await?;
        self.invalidate(&[self.policy.collection_key()]).await;

        info!(student_id = student.id, "Student created");
        Ok(student)
    }

    // == Update ==
    /// Replaces the mutable fields of an existing student.
    ///
    /// Both keys are invalidated whether or not the id exists; on success
    /// the single-entity key is then refreshed with the merged value.
    pub async fn update(&self, id: i64, patch: StudentInput) -> Result<Student> {
        let entity_key = self.policy.entity_key(id);
        let stale_keys = [entity_key.clone(), self.policy.collection_key()];

        let Some(mut student) = self.repository.find_by_id(id).await? else {
            self.invalidate(&stale_keys).await;
            debug!(student_id = id, "Update of unknown student");
            return Err(ServiceError::NotFound(id));
        };

        student.merge(patch);
        let saved = self.repository.save(Some(id), student.to_input()).await?;

        // Delete before refreshing so a failed refresh cannot leave the old value
        self.invalidate(&stale_keys).await;
        self.write_cached(&entity_key, codec::encode_student(&saved))
            .await;

        info!(student_id = id, "Student updated");
        Ok(saved)
    }

    // == Delete ==
    /// Removes a student and returns the removed record.
    ///
    /// Cache keys are invalidated first and unconditionally, so deleting an
    /// unknown id still clears any stale entries. They are invalidated again
    /// once the row is gone, dropping anything a concurrent miss wrote back
    /// while the delete was in flight.
    pub async fn delete(&self, id: i64) -> Result<Student> {
        let stale_keys = [self.policy.entity_key(id), self.policy.collection_key()];
        self.invalidate(&stale_keys).await;

        let student = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        self.repository.delete_by_id(id).await?;
        self.invalidate(&stale_keys).await;

        info!(student_id = id, "Student deleted");
        Ok(student)
    }

    // == Cache Helpers ==
    async fn read_cached<T>(
        &self,
        key: &str,
        decode: fn(&[u8]) -> codec::Result<T>,
    ) -> Option<T> {
        match self.cache.get(key).await {
            Ok(Some(bytes)) => match decode(&bytes) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(key, error = %err, "Cached value could not be decoded");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                warn!(key, error = %err, "Cache read failed, falling back to store");
                None
            }
        }
    }

    async fn write_cached(&self, key: &str, encoded: codec::Result<Vec<u8>>) {
        let bytes = match encoded {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(key, error = %err, "Value could not be encoded for cache");
                return;
            }
        };

        if let Err(err) = self
            .cache
            .set_with_ttl(key, &bytes, self.policy.ttl_seconds())
            .await
        {
            warn!(key, error = %err, "Failed to populate cache");
        }
    }

    async fn invalidate(&self, keys: &[String]) {
        for key in keys {
            if let Err(err) = self.cache.delete(key).await {
                warn!(%key, error = %err, "Failed to invalidate cache key");
            }
        }
    }
}
