//! Error types for the docx-compliance library.
//!
//! A single enum, [`ComplianceError`], covers every way a review can fail.
//! Each request fails at most once and is never retried, so there is no
//! need for the fatal/non-fatal split a multi-item pipeline would want.
//!
//! The `Display` text of each variant is exactly what the HTTP layer puts in
//! the `error` field of the response body, so the wording of the input
//! errors is part of the public contract and must not drift.

use std::path::PathBuf;
use thiserror::Error;

/// Message returned when the `docx` form field is missing.
pub const MISSING_DOCUMENT_MSG: &str = "Falta archivo .docx";

/// Message returned when the spooled upload has no usable file path.
pub const UNRESOLVED_UPLOAD_MSG: &str = "No se encontró la ruta del archivo subido";

/// All errors returned by the docx-compliance library.
#[derive(Debug, Error)]
pub enum ComplianceError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The request carried no file under the `docx` field.
    #[error("Falta archivo .docx")]
    MissingDocument,

    /// The multipart body could not be read.
    #[error("{0}")]
    Multipart(String),

    /// The upload could not be spooled to a readable temp file.
    #[error("No se encontró la ruta del archivo subido")]
    UploadPathUnresolved,

    /// A local input file does not exist.
    #[error("File not found: '{path}'")]
    FileNotFound { path: PathBuf },

    // ── Extraction errors ─────────────────────────────────────────────────
    /// The file is not a zip container, so it cannot be a .docx.
    #[error("File is not a valid .docx: '{path}' (first bytes: {magic:?})")]
    NotADocx { path: PathBuf, magic: [u8; 2] },

    /// The container opened but the WordprocessingML inside is unreadable.
    #[error("Could not read document '{path}': {detail}")]
    CorruptDocument { path: PathBuf, detail: String },

    // ── Completion errors ─────────────────────────────────────────────────
    /// No API key was configured for the completion endpoint.
    #[error("DEEPSEEK_API_KEY is not set; cannot call the completion endpoint")]
    MissingApiKey,

    /// The completion endpoint answered with a non-success status.
    ///
    /// Displays as the raw response body, unparsed.
    #[error("{body}")]
    CompletionStatus { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection reset…).
    #[error("Completion request failed: {0}")]
    CompletionTransport(#[from] reqwest::Error),

    /// A 2xx response whose body is not JSON at all.
    #[error("Completion endpoint returned invalid JSON: {0}")]
    CompletionDecode(String),

    // ── Store errors ──────────────────────────────────────────────────────
    /// No connection string is configured for the user store.
    #[error("DATABASE_URL is not set")]
    StoreNotConfigured,

    /// A query against the user store failed.
    #[error("{0}")]
    Store(#[from] sqlx::Error),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ComplianceError {
    /// HTTP status this error maps to.
    ///
    /// Only a missing document is the caller's fault; everything else is an
    /// upstream or integration failure and reported as 500.
    pub fn status_code(&self) -> u16 {
        match self {
            ComplianceError::MissingDocument => 400,
            _ => 500,
        }
    }
}
