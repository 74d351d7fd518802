use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};

use crate::{
    application::{error::ApplicationError, repositories::file_repository::FileRepository},
    domain::models::{
        file::{FileData, FileRecord},
        registry::Registry,
    },
};

/// Process-local registry behind a single lock. Every operation takes the
/// lock exactly once and never holds it across an await point.
pub struct InMemoryFileRepository {
    registry: Mutex<Registry>,
}

impl InMemoryFileRepository {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Registry>, ApplicationError> {
        self.registry.lock().map_err(|e| {
            error!("File registry lock poisoned: {}", e);
            ApplicationError::InternalError("File registry unavailable".to_string())
        })
    }
}

#[async_trait]
impl FileRepository for InMemoryFileRepository {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApplicationError> {
        Ok(self.lock()?.records())
    }

    async fn create_files(&self, files: Vec<FileData>) -> Result<Vec<FileRecord>, ApplicationError> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut registry = self.lock()?;
        let created: Vec<FileRecord> = files
            .into_iter()
            .map(|file_data| registry.insert(file_data, Utc::now()))
            .collect();

        debug!(
            "Registry now holds {} records, next id {}",
            registry.len(),
            registry.next_id()
        );
        Ok(created)
    }

    async fn delete_file(&self, id: u64) -> Result<bool, ApplicationError> {
        Ok(self.lock()?.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn part(name: &str, len: usize) -> FileData {
        FileData::new(vec![7u8; len], name.to_string(), None)
    }

    #[tokio::test]
    async fn test_batch_is_returned_in_processing_order() {
        let repo = InMemoryFileRepository::new(Registry::seeded(Utc::now()));

        let created = repo
            .create_files(vec![part("p1", 1), part("p2", 2), part("p3", 3)])
            .await
            .unwrap();

        let created_ids: Vec<u64> = created.iter().map(|r| r.id).collect();
        assert_eq!(created_ids, vec![100, 101, 102]);

        let listed_ids: Vec<u64> = repo.list_files().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(listed_ids, vec![102, 101, 100, 1, 2]);
    }

    #[tokio::test]
    async fn test_empty_batch_does_not_touch_registry() {
        let repo = InMemoryFileRepository::new(Registry::seeded(Utc::now()));
        let before = repo.list_files().await.unwrap();

        assert!(repo.create_files(Vec::new()).await.unwrap().is_empty());
        assert_eq!(repo.list_files().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_record_was_removed() {
        let repo = InMemoryFileRepository::new(Registry::seeded(Utc::now()));

        assert!(repo.delete_file(2).await.unwrap());
        assert!(!repo.delete_file(2).await.unwrap());
        assert_eq!(repo.list_files().await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_uploads_get_distinct_ids() {
        let repo = Arc::new(InMemoryFileRepository::new(Registry::empty()));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create_files(vec![part(&format!("f{}", i), i), part("g", 1)])
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            let batch = handle.await.unwrap();
            // A batch is inserted under one lock, so its ids are contiguous.
            assert_eq!(batch[1].id, batch[0].id + 1);
        }

        let mut ids: Vec<u64> = repo.list_files().await.unwrap().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 32);
        assert_eq!(ids.first(), Some(&100));
        assert_eq!(ids.last(), Some(&131));
    }
}
