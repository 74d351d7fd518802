use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use tracing::{info, warn};

use crate::{
    adapters::{
        dto::file_dto::{DeleteFileResponse, FileResponse},
        state::AppState,
    },
    application::error::ApplicationError,
    domain::models::file::FileData,
};

/// Multipart field that carries uploaded files.
pub const FILES_FIELD: &str = "files";

pub struct FileController;

impl FileController {
    /// GET /api/files
    pub async fn list_files(
        State(app_state): State<AppState>,
    ) -> Result<Json<Vec<FileResponse>>, ApplicationError> {
        let records = app_state.file_repository.list_files().await?;
        Ok(Json(records.into_iter().map(FileResponse::from).collect()))
    }

    /// POST /api/files
    ///
    /// Accepts any number of file parts under `files`. Parts without a
    /// filename are plain form fields and are skipped; a file under any
    /// other field name is rejected.
    pub async fn upload_files(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Json<Vec<FileResponse>>, ApplicationError> {
        let mut files = Vec::new();

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            let Some(filename) = field.file_name().map(str::to_string) else {
                continue;
            };

            let field_name = field.name().unwrap_or("").to_string();
            if field_name != FILES_FIELD {
                warn!("File part under unexpected field '{}'", field_name);
                return Err(ApplicationError::BadRequest(format!(
                    "Unexpected field '{}'",
                    field_name
                )));
            }

            let mime_type = field.content_type().map(str::to_string);
            let content = field.bytes().await.map_err(|e| {
                warn!("Cannot read file bytes for '{}': {}", filename, e);
                ApplicationError::BadRequest("Invalid file data".to_string())
            })?;

            files.push(FileData::new(content.to_vec(), filename, mime_type));
        }

        let created = app_state.file_repository.create_files(files).await?;
        if !created.is_empty() {
            info!(
                "Stored {} uploaded file(s): {:?}",
                created.len(),
                created.iter().map(|r| r.id).collect::<Vec<_>>()
            );
        }

        Ok(Json(created.into_iter().map(FileResponse::from).collect()))
    }

    /// DELETE /api/files/{id}
    ///
    /// Always acknowledges, whether or not the id matched a record.
    pub async fn delete_file(
        State(app_state): State<AppState>,
        Path(raw_id): Path<String>,
    ) -> Result<Json<DeleteFileResponse>, ApplicationError> {
        match parse_file_id(&raw_id) {
            Some(id) => {
                if app_state.file_repository.delete_file(id).await? {
                    info!("Deleted file {}", id);
                } else {
                    info!("Delete of unknown file {} ignored", id);
                }
            }
            None => info!("Delete with non-numeric id '{}' ignored", raw_id),
        }

        Ok(Json(DeleteFileResponse { ok: true }))
    }
}

/// Reads a path id with JavaScript `Number()` rules: surrounding whitespace
/// is ignored, an empty id is 0, `0x`/`0o`/`0b` prefixes select the radix and
/// integral decimal spellings like `1.0` or `1e2` are accepted. Anything that
/// is not a non-negative integer matches no record.
fn parse_file_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let has_prefix = trimmed.len() > prefix.len()
            && trimmed.is_char_boundary(prefix.len())
            && trimmed[..prefix.len()].eq_ignore_ascii_case(prefix);
        if has_prefix {
            let digits = &trimmed[prefix.len()..];
            if !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok();
        }
    }

    if let Ok(id) = trimmed.parse::<u64>() {
        return Some(id);
    }

    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 {
        Some(value as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_id() {
        assert_eq!(parse_file_id("1"), Some(1));
        assert_eq!(parse_file_id(" 42 "), Some(42));
        assert_eq!(parse_file_id("1.0"), Some(1));
        assert_eq!(parse_file_id("1e2"), Some(100));
        assert_eq!(parse_file_id("1.5"), None);
        assert_eq!(parse_file_id("-1"), None);
        assert_eq!(parse_file_id("abc"), None);
        assert_eq!(parse_file_id("NaN"), None);
        assert_eq!(parse_file_id("inf"), None);
        assert_eq!(parse_file_id(""), Some(0));
        assert_eq!(parse_file_id("0x64"), Some(100));
        assert_eq!(parse_file_id("0X64"), Some(100));
        assert_eq!(parse_file_id("0o17"), Some(15));
        assert_eq!(parse_file_id("0b101"), Some(5));
        assert_eq!(parse_file_id("0x"), None);
        assert_eq!(parse_file_id("0x+1"), None);
        assert_eq!(parse_file_id("0b102"), None);
        assert_eq!(parse_file_id("-0x10"), None);
    }
}
