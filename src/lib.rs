//! # docx-compliance
//!
//! Review Word documents against a compliance instruction with an LLM.
//!
//! A user uploads a `.docx` together with a free-text instruction. The
//! document is flattened to Markdown, wrapped into a prompt that ends with a
//! fixed "answer as a table" directive, and sent to a chat-completion model
//! (DeepSeek by default). The model's answer and the exact prompt are returned
//! together.
//!
//! ## Pipeline Overview
//!
//! ```text
//! multipart upload
//!  │
//!  ├─ 1. Input    spool the uploaded bytes to a per-request temp file
//!  ├─ 2. Extract  unzip word/document.xml and walk it into Markdown
//!  ├─ 3. Prompt   instruction + "Documento: <name>" + text + table directive
//!  └─ 4. LLM      one chat-completion call (temperature 0.2, 1000 tokens)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docx_compliance::{review_file, ServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ServiceConfig::builder()
//!         .api_key(std::env::var("DEEPSEEK_API_KEY")?)
//!         .build()?;
//!     let output = review_file("contrato.docx", "Revisa las cláusulas de privacidad", &config).await?;
//!     println!("{}", output.result);
//!     Ok(())
//! }
//! ```
//!
//! ## HTTP Service
//!
//! [`server::build_router`] exposes the same workflow at `/api/procesar`
//! (GET is a database health probe, POST runs a review) plus an upload form
//! at `/`.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `docx-compliance` binary (clap + anyhow + tracing-subscriber) |
//!
//! ```toml
//! docx-compliance = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod prompts;
pub mod server;
pub mod store;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::ComplianceError;
pub use pipeline::input::Upload;
pub use pipeline::llm::CompletionClient;
pub use process::{extract_file, review_file, review_upload, ReviewOutput};
pub use prompts::{build_prompt, TABLE_DIRECTIVE};
pub use server::{build_router, router_with_store, AppState};
pub use store::{PgUserStore, UserStore};
