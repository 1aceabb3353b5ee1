//! Persistence contract consumed by the seeder.
//!
//! A store stages records with [`RecordStore::add_all`] and writes them in a
//! single batch on [`RecordStore::commit`]. [`MemoryStore`] keeps everything
//! in process; [`crate::database::PgStore`] writes to PostgreSQL.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::StoreError;

/// A top-level entity with a store-assigned identifier.
pub trait Record: Send + Sync + 'static {
    /// Collection name used in logs and error messages.
    const COLLECTION: &'static str;

    fn id(&self) -> Option<i64>;

    fn assign_id(&mut self, id: i64);
}

/// Handle to one persisted collection.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Number of committed records in the collection.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Stages records for insertion. Nothing is written until [`commit`](Self::commit).
    fn add_all(&mut self, records: Vec<T>);

    /// Writes all staged records as one batch and returns how many were written.
    async fn commit(&mut self) -> Result<u64, StoreError>;
}

/// In-process store that assigns sequential ids on commit.
#[derive(Debug)]
pub struct MemoryStore<T> {
    committed: Vec<T>,
    staged: Vec<T>,
    next_id: i64,
    reject_commits: bool,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            staged: Vec::new(),
            next_id: 1,
            reject_commits: false,
        }
    }

    /// Creates a store that already holds the given records.
    pub fn with_records(records: Vec<T>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.push_committed(record);
        }
        store
    }

    /// Creates a store whose commits always fail.
    pub fn failing() -> Self {
        Self {
            reject_commits: true,
            ..Self::new()
        }
    }

    /// Committed records in insertion order.
    pub fn records(&self) -> &[T] {
        &self.committed
    }

    /// Records added but not yet committed.
    pub fn staged(&self) -> &[T] {
        &self.staged
    }

    fn push_committed(&mut self, mut record: T) {
        record.assign_id(self.next_id);
        self.next_id += 1;
        self.committed.push(record);
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.committed.len() as i64)
    }

    fn add_all(&mut self, records: Vec<T>) {
        debug!("Staging {} {}", records.len(), T::COLLECTION);
        self.staged.extend(records);
    }

    async fn commit(&mut self) -> Result<u64, StoreError> {
        if self.reject_commits {
            return Err(StoreError::CommitRejected(format!(
                "{} store does not accept writes",
                T::COLLECTION
            )));
        }

        let staged = std::mem::take(&mut self.staged);
        let written = staged.len() as u64;
        for record in staged {
            self.push_committed(record);
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;

    fn user(name: &str) -> User {
        User::new(name, "pw", "First", "Last", format!("{name}@example.com"))
    }

    #[tokio::test]
    async fn test_staged_records_are_not_counted() {
        let mut store = MemoryStore::new();
        store.add_all(vec![user("a"), user("b")]);

        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.staged().len(), 2);

        assert_eq!(store.commit().await.unwrap(), 2);
        assert_eq!(store.count().await.unwrap(), 2);
        assert!(store.staged().is_empty());
    }

    #[tokio::test]
    async fn test_commit_assigns_sequential_ids() {
        let mut store = MemoryStore::with_records(vec![user("existing")]);
        store.add_all(vec![user("a"), user("b")]);
        store.commit().await.unwrap();

        let ids: Vec<_> = store.records().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[tokio::test]
    async fn test_failing_store_keeps_committed_rows() {
        let mut store = MemoryStore::<User>::failing();
        store.add_all(vec![user("a")]);

        let err = store.commit().await.unwrap_err();
        assert!(matches!(err, StoreError::CommitRejected(_)));
        assert_eq!(store.count().await.unwrap(), 0);
        assert_eq!(store.staged().len(), 1);
    }
}
