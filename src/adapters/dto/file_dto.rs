use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::domain::models::file::FileRecord;

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: u64,
    pub name: String,
    pub size: u64,
    #[serde(rename = "createdAt", serialize_with = "serialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            size: record.size,
            created_at: record.created_at,
            mime_type: record.mime_type,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteFileResponse {
    pub ok: bool,
}

/// `2024-05-01T12:00:00.000Z`
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
