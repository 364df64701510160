use crate::error::ComplianceError;
use crate::pipeline::input::{Upload, FALLBACK_FILENAME};
use axum::extract::Multipart;
use tracing::debug;

/// Form field carrying the document.
pub const DOCUMENT_FIELD: &str = "docx";
/// Form field carrying the free-text instruction.
pub const INSTRUCTION_FIELD: &str = "prompt";

/// Parsed form fields from the multipart upload.
pub struct FormFields {
    /// Empty when the field was absent.
    pub instruction: String,
    /// `None` when no `docx` part was sent; checked by the handler.
    pub document: Option<Upload>,
}

/// Parse a multipart form upload into structured form fields.
///
/// Only a part with a filename counts as the document, and only a part
/// without one counts as the instruction. The first `docx` file wins; later
/// ones are read and discarded, as are unknown fields. A repeated `prompt`
/// keeps its first value.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<FormFields, ComplianceError> {
    let mut instruction: Option<String> = None;
    let mut document: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ComplianceError::Multipart(format!("Failed to read form field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        let is_file = field.file_name().is_some();

        match name.as_str() {
            DOCUMENT_FIELD if is_file && document.is_none() => {
                let filename = field
                    .file_name()
                    .filter(|n| !n.is_empty())
                    .unwrap_or(FALLBACK_FILENAME)
                    .to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(|e| {
                    ComplianceError::Multipart(format!("Failed to read file data: {}", e))
                })?;
                debug!("Received '{}' ({} bytes)", filename, data.len());
                document = Some(Upload::spool(filename, content_type, &data).await);
            }
            INSTRUCTION_FIELD if !is_file && instruction.is_none() => {
                let val = field.text().await.map_err(|e| {
                    ComplianceError::Multipart(format!("Failed to read prompt: {}", e))
                })?;
                instruction = Some(val);
            }
            _ => {
                // Ignore unknown, repeated and mistyped fields
                let _ = field.bytes().await;
            }
        }
    }

    Ok(FormFields {
        instruction: instruction.unwrap_or_default(),
        document,
    })
}
