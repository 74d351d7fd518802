use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};

use crate::domain::models::file::{FileData, FileRecord};

/// First id handed out to uploads. Seed records sit below it.
pub const FIRST_UPLOAD_ID: u64 = 100;

/// Ordered file records, newest first, plus the id counter.
#[derive(Debug, Clone)]
pub struct Registry {
    records: VecDeque<FileRecord>,
    next_id: u64,
}

impl Registry {
    pub fn empty() -> Self {
        Self {
            records: VecDeque::new(),
            next_id: FIRST_UPLOAD_ID,
        }
    }

    /// Registry as it looks at process start: two example documents.
    pub fn seeded(started_at: DateTime<Utc>) -> Self {
        let mut registry = Self::empty();
        registry.records.push_back(FileRecord {
            id: 1,
            name: "Документ.pdf".to_string(),
            size: 234_567,
            created_at: started_at,
            mime_type: "application/pdf".to_string(),
        });
        registry.records.push_back(FileRecord {
            id: 2,
            name: "Фото.jpg".to_string(),
            size: 1_456_789,
            created_at: started_at - Duration::hours(24),
            mime_type: "image/jpeg".to_string(),
        });
        registry
    }

    pub fn records(&self) -> Vec<FileRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Inserts one record at the front and returns it.
    pub fn insert(&mut self, file_data: FileData, created_at: DateTime<Utc>) -> FileRecord {
        let id = self.next_id;
        self.next_id += 1;

        let record = FileRecord::from_upload(id, file_data, created_at);
        self.records.push_front(record.clone());
        record
    }

    /// Removes the record with `id`. Returns it if one was present.
    pub fn remove(&mut self, id: u64) -> Option<FileRecord> {
        let position = self.records.iter().position(|record| record.id == id)?;
        self.records.remove(position)
    }
}
