//! Handlers for the `/media` resource: upload and delete objects through the
//! storage adapter.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of a successful upload.
#[derive(Debug, Serialize)]
pub struct UploadedMedia {
    /// Stored object name (what `DELETE /media/{name}` expects).
    pub name: String,
    /// Public URL, or the bare name when no storage service is configured.
    pub url: String,
    pub content_type: String,
    pub size: u64,
}

/// POST /api/v1/media (staff, multipart)
///
/// Accepts the first file field in the multipart body. The stored name is
/// prefixed with a UUID so repeated uploads of the same filename never
/// collide.
pub async fn upload(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadedMedia>>)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
        .ok_or_else(|| AppError::BadRequest("Multipart body contains no file field".into()))?;

    let filename = field
        .file_name()
        .map(sanitize_filename)
        .ok_or_else(|| AppError::BadRequest("File field is missing a filename".into()))?;

    let content_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let content = field
        .bytes()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read upload body: {e}")))?;

    if content.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }

    let size = content.len() as u64;
    let name = format!("{}-{}", Uuid::new_v4(), filename);

    let stored = state.storage.save(&name, content, &content_type).await?;
    let url = state.storage.url(&stored);

    tracing::info!(
        object = %stored,
        size,
        user_id = user.user_id,
        "Media uploaded"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadedMedia {
                name: stored,
                url,
                content_type,
                size,
            },
        }),
    ))
}

/// DELETE /api/v1/media/{name} (staff)
pub async fn delete(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<StatusCode> {
    state.storage.delete(&name).await?;

    tracing::info!(object = %name, user_id = user.user_id, "Media deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Strip path separators and control characters from a client-supplied
/// filename so it cannot escape the bucket namespace.
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    base.chars()
        .filter(|c| !c.is_control())
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::sanitize_filename;

    #[test]
    fn strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir\\evil.png"), "evil.png");
    }

    #[test]
    fn replaces_spaces() {
        assert_eq!(sanitize_filename("hero image.png"), "hero_image.png");
    }
}
