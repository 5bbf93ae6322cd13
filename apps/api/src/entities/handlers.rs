use axum::Json;
use serde::Deserialize;

use crate::entities::{extract_entities, EntityExtractionOutcome};

#[derive(Debug, Default, Deserialize)]
pub struct EntityExtractionRequest {
    /// A missing `text` field is the same degenerate input as empty text.
    #[serde(default)]
    pub text: String,
}

/// POST /extract_entities
/// Pure text matching; a missing or non-JSON body is treated as empty
/// text, so this endpoint always answers 200.
pub async fn handle_extract_entities(
    body: Option<Json<EntityExtractionRequest>>,
) -> Json<EntityExtractionOutcome> {
    let text = body.map(|Json(req)| req.text).unwrap_or_default();
    Json(extract_entities(&text))
}
