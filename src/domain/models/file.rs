use chrono::{DateTime, Utc};

/// Content type recorded when an upload does not declare one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A single file part received in an upload request, fully buffered.
#[derive(Debug, Clone)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: Option<String>,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String, mime_type: Option<String>) -> Self {
        Self {
            content,
            filename,
            mime_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Declared content type, or the binary default when absent or empty.
    pub fn resolved_mime_type(&self) -> String {
        match self.mime_type.as_deref() {
            Some(mime) if !mime.is_empty() => mime.to_string(),
            _ => DEFAULT_MIME_TYPE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    pub id: u64,
    pub name: String,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub mime_type: String,
}

impl FileRecord {
    pub fn from_upload(id: u64, file_data: FileData, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            size: file_data.size(),
            mime_type: file_data.resolved_mime_type(),
            name: file_data.filename,
            created_at,
        }
    }
}
