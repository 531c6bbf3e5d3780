use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::parse::fields::{extract_fields, ParseResult};
use crate::state::AppState;

/// Multipart field names we accept for the uploaded document. Older clients
/// send `resume`, newer ones send `file`.
const FILE_FIELDS: &[&str] = &["file", "resume"];

/// POST /parse
///
/// Accepts a multipart upload containing one PDF, extracts its text and
/// returns the structured parse result.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResult>, AppError> {
    let (filename, data) = read_upload(&mut multipart).await?;
    tracing::info!(file = %filename, bytes = data.len(), "Received resume upload");

    let text = state.extractor.extract(data).await?;
    let result = extract_fields(text);

    tracing::info!(
        email_found = result.email.is_some(),
        phone_found = result.phone.is_some(),
        skills_found = result.skills.len(),
        "Parsed resume"
    );

    Ok(Json(result))
}

/// Walk the multipart stream until a recognized file field turns up and
/// buffer its contents.
async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if FILE_FIELDS.contains(&field_name.as_str()) {
            let filename = field.file_name().unwrap_or("unnamed").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }

    Err(AppError::Validation("no file uploaded".to_string()))
}
