use axum::extract::FromRef;
use std::sync::Arc;

use crate::{
    adapters::repositories::InMemoryFileRepository,
    application::repositories::file_repository::FileRepository,
    domain::models::registry::Registry,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    pub file_repository: Arc<dyn FileRepository>,
}

impl AppState {
    /// State backed by an in-memory registry.
    pub fn in_memory(registry: Registry) -> Self {
        Self {
            file_repository: Arc::new(InMemoryFileRepository::new(registry))
                as Arc<dyn FileRepository>,
        }
    }
}
