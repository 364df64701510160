//! Pipeline stages for document review.
//!
//! Each submodule implements exactly one step, and each step runs once per
//! request, in order.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ prompts ──▶ llm
//! (spool)   (docx→md)   (assemble)  (completion)
//! ```
//!
//! 1. [`input`]  : give the uploaded bytes a path on disk, scoped to the request
//! 2. [`extract`]: unzip the `.docx` and walk its XML into Markdown; runs in
//!    `spawn_blocking`
//! 3. [`crate::prompts`]: concatenate instruction, name, text and directive
//! 4. [`llm`]    : one chat-completion call; the only stage with network I/O

pub mod extract;
pub mod input;
pub mod llm;
