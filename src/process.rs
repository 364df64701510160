//! Review entry points.
//!
//! [`review_upload`] is the whole POST workflow after form parsing: resolve
//! the upload's path, extract, assemble the prompt, call the model. The HTTP
//! handler and the CLI both go through it, so they cannot drift apart.

use crate::config::ServiceConfig;
use crate::error::ComplianceError;
use crate::pipeline::extract;
use crate::pipeline::input::Upload;
use crate::pipeline::llm::CompletionClient;
use crate::prompts::build_prompt;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Successful review: the model's answer plus the exact prompt that produced it.
///
/// The prompt is echoed back on purpose so callers can see what the model saw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewOutput {
    /// Model answer, trimmed; empty if the response had no content.
    #[serde(rename = "resultado")]
    pub result: String,
    /// The prompt sent to the model.
    pub prompt: String,
}

/// Review an uploaded document against `instruction`.
///
/// # Errors
/// - [`ComplianceError::UploadPathUnresolved`] if the upload was never spooled
/// - extraction errors for unreadable or non-docx files
/// - completion errors (missing key, transport, non-2xx, non-JSON body)
pub async fn review_upload(
    upload: &Upload,
    instruction: &str,
    client: &CompletionClient,
) -> Result<ReviewOutput, ComplianceError> {
    let start = Instant::now();

    // ── Step 1: Resolve path ─────────────────────────────────────────────
    let path = upload.path()?;
    info!("Reviewing '{}'", upload.display_name());
    debug!(
        "Upload content type: {}",
        upload.content_type().unwrap_or("unknown")
    );

    // ── Step 2: Extract text ─────────────────────────────────────────────
    let text = extract::extract_markdown(path).await?;

    // ── Step 3: Assemble prompt ──────────────────────────────────────────
    let prompt = build_prompt(instruction, upload.display_name(), &text);
    debug!("Prompt assembled: {} chars", prompt.chars().count());

    // ── Step 4: Ask the model ────────────────────────────────────────────
    let result = client.complete(&prompt).await?;

    info!(
        "Review of '{}' complete in {}ms",
        upload.display_name(),
        start.elapsed().as_millis()
    );
    Ok(ReviewOutput { result, prompt })
}

/// Review a local `.docx` file.
pub async fn review_file(
    path: impl AsRef<Path>,
    instruction: &str,
    config: &ServiceConfig,
) -> Result<ReviewOutput, ComplianceError> {
    let upload = Upload::from_path(path)?;
    let client = CompletionClient::new(config)?;
    review_upload(&upload, instruction, &client).await
}

/// Extract a local `.docx` file to Markdown without calling the model.
///
/// Does not require an API key.
pub async fn extract_file(path: impl AsRef<Path>) -> Result<String, ComplianceError> {
    let upload = Upload::from_path(path)?;
    extract::extract_markdown(upload.path()?).await
}
