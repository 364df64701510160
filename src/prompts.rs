//! Prompt assembly for document review.
//!
//! The closing directive is what makes the model answer with a three-column
//! table; the rest of the system (and the form that renders the answer)
//! assumes that shape, so the text below is a compatibility contract and is
//! kept byte-for-byte stable.

/// Directive appended to every prompt.
pub const TABLE_DIRECTIVE: &str =
    "Por favor, devuélveme sólo una tabla Markdown con columnas: Criterio, Cumple (Sí/No) y Observaciones.";

/// Build the prompt sent to the completion endpoint.
///
/// Layout, each part separated by a blank line:
///
/// ```text
/// <instruction>
///
/// Documento: <display name>
///
/// <extracted text>
///
/// <TABLE_DIRECTIVE>
/// ```
///
/// The result is trimmed, so an empty instruction does not leave leading
/// blank lines. Pure and deterministic.
pub fn build_prompt(instruction: &str, display_name: &str, extracted_text: &str) -> String {
    format!(
        "{instruction}\n\nDocumento: {display_name}\n\n{extracted_text}\n\n{TABLE_DIRECTIVE}"
    )
    .trim()
    .to_string()
}
