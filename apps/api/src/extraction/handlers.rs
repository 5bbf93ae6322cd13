use axum::extract::Multipart;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::dispatch::{declared_extension, dispatch};
use crate::extraction::orchestrator;
use crate::extraction::workspace::Workspace;

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub text: String,
}

/// POST /extract
/// Multipart upload with a `file` field. A missing field or empty
/// filename is a valid degenerate request and yields empty text; only an
/// exhausted strategy chain produces an error response.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = match upload {
        Some((name, bytes)) if !name.is_empty() => (name, bytes),
        _ => return Ok(Json(ExtractResponse { text: String::new() })),
    };

    let workspace = Workspace::acquire()
        .map_err(|e| AppError::Extraction(format!("Failed to create workspace: {e}")))?;
    debug!("Workspace at {}", workspace.path().display());
    // The explicit release runs before any error propagates; a panic in
    // between is still covered by the workspace's Drop.
    let result = materialize_and_extract(&workspace, &filename, &bytes);
    workspace.release();

    let text = result?;
    debug!("Extracted {} chars from {filename}", text.len());
    Ok(Json(ExtractResponse { text }))
}

fn materialize_and_extract(
    workspace: &Workspace,
    filename: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    let path = workspace
        .materialize(filename, bytes)
        .map_err(|e| AppError::Extraction(format!("Failed to materialize upload: {e}")))?;
    let kind = dispatch(&declared_extension(filename));
    orchestrator::extract_text(&path, kind).map_err(|e| AppError::Extraction(e.to_string()))
}

/// POST /noop
/// Accepts the same shape as /extract but never runs a strategy; callers
/// use it to skip extraction while keeping the response contract.
pub async fn handle_noop() -> Json<ExtractResponse> {
    Json(ExtractResponse {
        text: String::new(),
    })
}
