use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::file::{FileData, FileRecord},
};

#[async_trait]
pub trait FileRepository: Send + Sync {
    /// All records, newest first.
    async fn list_files(&self) -> Result<Vec<FileRecord>, ApplicationError>;

    /// Stores every part as one atomic batch. Returns the created records
    /// in the order the parts were given.
    async fn create_files(&self, files: Vec<FileData>) -> Result<Vec<FileRecord>, ApplicationError>;

    /// Removes the record with `id`, if any. Returns whether one was removed.
    async fn delete_file(&self, id: u64) -> Result<bool, ApplicationError>;
}
