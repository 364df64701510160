//! Text extraction: `.docx` → Markdown.
//!
//! A `.docx` file is a zip container of WordprocessingML parts. Only three
//! of them matter for text:
//!
//! | Part | Used for |
//! |------|----------|
//! | `word/document.xml` | body paragraphs, runs, tables |
//! | `word/styles.xml` | style id → style name, to spot headings |
//! | `word/_rels/document.xml.rels` | relationship id → hyperlink target |
//!
//! Headings are recognised by style *name* ("heading 1"), not id, because
//! localised Word writes ids such as `Ttulo1` while keeping the English name.
//!
//! The body is walked as a flat stream of quick-xml events. Paragraphs and
//! tables are kept on small stacks so that paragraphs inside table cells (and
//! tables inside cells) end up in the right place.

use crate::error::ComplianceError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const RELS_PART: &str = "word/_rels/document.xml.rels";

/// Failure converting raw bytes; mapped to [`ComplianceError`] with the path.
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("not a zip container (first bytes {0:?})")]
    NotAZip([u8; 2]),
    #[error("{0}")]
    Corrupt(String),
}

impl DocxError {
    fn at(self, path: &Path) -> ComplianceError {
        match self {
            DocxError::NotAZip(magic) => ComplianceError::NotADocx {
                path: path.to_path_buf(),
                magic,
            },
            DocxError::Corrupt(detail) => ComplianceError::CorruptDocument {
                path: path.to_path_buf(),
                detail,
            },
        }
    }
}

/// Extract Markdown from the `.docx` at `path`.
///
/// Zip inflation and XML walking are CPU-bound, so the work runs on the
/// blocking pool.
pub async fn extract_markdown(path: &Path) -> Result<String, ComplianceError> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || extract_markdown_blocking(&path))
        .await
        .map_err(|e| ComplianceError::Internal(format!("Extraction task panicked: {e}")))?
}

/// Blocking implementation of [`extract_markdown`].
pub fn extract_markdown_blocking(path: &Path) -> Result<String, ComplianceError> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ComplianceError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ComplianceError::CorruptDocument {
                path: path.to_path_buf(),
                detail: e.to_string(),
            }
        }
    })?;

    let markdown = docx_to_markdown(&bytes).map_err(|e| e.at(path))?;
    info!(
        "Extracted {} chars of Markdown from {}",
        markdown.len(),
        path.display()
    );
    Ok(markdown)
}

/// Convert the raw bytes of a `.docx` file to Markdown.
pub fn docx_to_markdown(bytes: &[u8]) -> Result<String, DocxError> {
    if bytes.len() < 2 || &bytes[..2] != b"PK" {
        let mut magic = [0u8; 2];
        for (dst, src) in magic.iter_mut().zip(bytes) {
            *dst = *src;
        }
        return Err(DocxError::NotAZip(magic));
    }

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DocxError::Corrupt(format!("Failed to open zip container: {e}")))?;

    let document = read_part(&mut archive, DOCUMENT_PART)?
        .ok_or_else(|| DocxError::Corrupt(format!("missing {DOCUMENT_PART}")))?;
    let styles = read_part(&mut archive, STYLES_PART)?
        .map(|xml| parse_styles(&xml))
        .unwrap_or_default();
    let links = read_part(&mut archive, RELS_PART)?
        .map(|xml| parse_hyperlinks(&xml))
        .unwrap_or_default();
    debug!(
        "docx parts: {} bytes of body, {} styles, {} hyperlinks",
        document.len(),
        styles.len(),
        links.len()
    );

    render_body(&document, &styles, &links)
}

fn read_part(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<Option<String>, DocxError> {
    let mut file = match archive.by_name(name) {
        Ok(f) => f,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(DocxError::Corrupt(format!("{name}: {e}"))),
    };
    let mut xml = String::new();
    file.read_to_string(&mut xml)
        .map_err(|e| DocxError::Corrupt(format!("{name}: {e}")))?;
    Ok(Some(xml))
}

/// Attribute value by local name, ignoring the namespace prefix.
fn attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == key)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// `<w:b/>` means on; `<w:b w:val="0"/>` (or false/none/off) means off.
fn toggle_on(e: &BytesStart<'_>) -> bool {
    !matches!(
        attr(e, b"val").as_deref(),
        Some("0") | Some("false") | Some("none") | Some("off")
    )
}

// ── Auxiliary parts ──────────────────────────────────────────────────────

/// Map style id → style name. Malformed XML yields whatever was read so far.
fn parse_styles(xml: &str) -> HashMap<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut styles = HashMap::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"style" => {
                current = attr(&e, b"styleId");
            }
            Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.local_name().as_ref() == b"name" => {
                if let (Some(id), Some(name)) = (current.as_ref(), attr(&e, b"val")) {
                    styles.insert(id.clone(), name);
                }
            }
            Ok(Event::End(e)) if e.local_name().as_ref() == b"style" => current = None,
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }
    styles
}

/// Map relationship id → external hyperlink target.
fn parse_hyperlinks(xml: &str) -> HashMap<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut links = HashMap::new();

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e)) | Ok(Event::Start(e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let is_link = attr(&e, b"Type").is_some_and(|t| t.ends_with("/hyperlink"));
                if let (true, Some(id), Some(target)) = (is_link, attr(&e, b"Id"), attr(&e, b"Target"))
                {
                    links.insert(id, target);
                }
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }
    links
}

/// Heading level for a paragraph style, if it is one of "heading 1"…"heading 6".
fn heading_level(style_id: &str, styles: &HashMap<String, String>) -> Option<usize> {
    let name = styles
        .get(style_id)
        .map(String::as_str)
        .unwrap_or(style_id)
        .to_ascii_lowercase();
    let level: usize = name.strip_prefix("heading")?.trim_start().parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

// ── Body model ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunStyle {
    bold: bool,
    italic: bool,
}

#[derive(Debug)]
struct Segment {
    text: String,
    style: RunStyle,
    link: Option<String>,
}

impl Segment {
    fn render(&self) -> String {
        let text = escape_markdown(&self.text).replace('\n', "  \n");
        let text = wrap_emphasis(&text, self.style);
        match &self.link {
            Some(href) => format!("[{text}]({href})"),
            None => text,
        }
    }
}

#[derive(Debug, Default)]
struct Paragraph {
    style_id: Option<String>,
    list_level: Option<usize>,
    segments: Vec<Segment>,
}

impl Paragraph {
    /// Append text, merging with the previous segment when formatting matches
    /// so that Word's arbitrary run splits don't produce `**a****b**`.
    fn push(&mut self, text: &str, style: RunStyle, link: &Option<String>) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.segments.last_mut() {
            if last.style == style && &last.link == link {
                last.text.push_str(text);
                return;
            }
        }
        self.segments.push(Segment {
            text: text.to_string(),
            style,
            link: link.clone(),
        });
    }

    fn render(&self, styles: &HashMap<String, String>) -> Option<String> {
        let body: String = self.segments.iter().map(Segment::render).collect();
        let body = body.trim();
        if body.is_empty() {
            return None;
        }

        let heading = self
            .style_id
            .as_deref()
            .and_then(|id| heading_level(id, styles));
        let prefix = match (heading, self.list_level) {
            (Some(level), _) => format!("{} ", "#".repeat(level)),
            (None, Some(level)) => format!("{}- ", "  ".repeat(level)),
            (None, None) => String::new(),
        };
        Some(format!("{prefix}{body}"))
    }
}

#[derive(Debug, Default)]
struct Table {
    rows: Vec<Vec<String>>,
    row: Option<Vec<String>>,
    cell: Option<Vec<String>>,
}

impl Table {
    /// GFM pipe table; the first row is the header.
    fn render(&self) -> Option<String> {
        let width = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return None;
        }
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = (0..width)
                .map(|c| row.get(c).map(|s| s.replace('|', "\\|")).unwrap_or_default())
                .collect();
            lines.push(format!("| {} |", cells.join(" | ")));
            if i == 0 {
                lines.push(format!("|{}|", vec![" --- "; width].join("|")));
            }
        }
        Some(lines.join("\n"))
    }
}

fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Wrap `text` in emphasis markers, keeping edge whitespace outside them
/// (`** a**` is not emphasis in CommonMark).
fn wrap_emphasis(text: &str, style: RunStyle) -> String {
    let marker = match (style.bold, style.italic) {
        (true, true) => "***",
        (true, false) => "**",
        (false, true) => "*",
        (false, false) => return text.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return text.to_string();
    }
    let start = text.len() - text.trim_start().len();
    let end = start + trimmed.len();
    format!("{}{marker}{trimmed}{marker}{}", &text[..start], &text[end..])
}

/// Send a finished block to the innermost open table cell, or to the body.
fn emit(tables: &mut [Table], blocks: &mut Vec<String>, block: String) {
    match tables.last_mut().and_then(|t| t.cell.as_mut()) {
        Some(cell) => cell.push(block),
        None => blocks.push(block),
    }
}

// ── Body walk ────────────────────────────────────────────────────────────

fn render_body(
    xml: &str,
    styles: &HashMap<String, String>,
    links: &HashMap<String, String>,
) -> Result<String, DocxError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut blocks: Vec<String> = Vec::new();
    let mut tables: Vec<Table> = Vec::new();
    let mut paragraphs: Vec<Paragraph> = Vec::new();

    let mut in_ppr = false;
    let mut in_rpr = false;
    let mut in_run = false;
    let mut in_text = false;
    let mut run = RunStyle::default();
    let mut link: Option<String> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            DocxError::Corrupt(format!(
                "{DOCUMENT_PART}: malformed XML at byte {}: {e}",
                reader.buffer_position()
            ))
        })?;

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => paragraphs.push(Paragraph::default()),
                b"pPr" => in_ppr = true,
                b"rPr" => in_rpr = true,
                b"r" => {
                    in_run = true;
                    run = RunStyle::default();
                }
                b"t" if in_run => in_text = true,
                b"hyperlink" => {
                    link = attr(&e, b"id")
                        .and_then(|id| links.get(&id).cloned())
                        .or_else(|| attr(&e, b"anchor").map(|a| format!("#{a}")));
                }
                b"numPr" if in_ppr => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.list_level.get_or_insert(0);
                    }
                }
                b"tbl" => tables.push(Table::default()),
                b"tr" => {
                    if let Some(t) = tables.last_mut() {
                        t.row = Some(Vec::new());
                    }
                }
                b"tc" => {
                    if let Some(t) = tables.last_mut() {
                        t.cell = Some(Vec::new());
                    }
                }
                b"b" if in_rpr => run.bold = toggle_on(&e),
                b"i" if in_rpr => run.italic = toggle_on(&e),
                _ => {}
            },

            Event::Empty(e) => match e.local_name().as_ref() {
                b"pStyle" if in_ppr => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.style_id = attr(&e, b"val");
                    }
                }
                b"ilvl" if in_ppr => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.list_level = Some(
                            attr(&e, b"val")
                                .and_then(|v| v.parse().ok())
                                .unwrap_or(0),
                        );
                    }
                }
                b"b" if in_rpr => run.bold = toggle_on(&e),
                b"i" if in_rpr => run.italic = toggle_on(&e),
                b"tab" if in_run && !in_rpr => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.push("\t", run, &link);
                    }
                }
                b"br" | b"cr" if in_run && !in_rpr => {
                    if let Some(p) = paragraphs.last_mut() {
                        p.push("\n", run, &link);
                    }
                }
                _ => {}
            },

            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| {
                    DocxError::Corrupt(format!("{DOCUMENT_PART}: bad text entity: {e}"))
                })?;
                if let Some(p) = paragraphs.last_mut() {
                    p.push(&text, run, &link);
                }
            }

            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    if let Some(md) = paragraphs.pop().and_then(|p| p.render(styles)) {
                        emit(&mut tables, &mut blocks, md);
                    }
                }
                b"pPr" => in_ppr = false,
                b"rPr" => in_rpr = false,
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"hyperlink" => link = None,
                b"tc" => {
                    if let Some(t) = tables.last_mut() {
                        if let Some(cell) = t.cell.take() {
                            let text = cell.join(" ").replace("  \n", " ").replace('\n', " ");
                            t.row.get_or_insert_with(Vec::new).push(text);
                        }
                    }
                }
                b"tr" => {
                    if let Some(t) = tables.last_mut() {
                        if let Some(row) = t.row.take() {
                            t.rows.push(row);
                        }
                    }
                }
                b"tbl" => {
                    if let Some(md) = tables.pop().and_then(|t| t.render()) {
                        emit(&mut tables, &mut blocks, md);
                    }
                }
                _ => {}
            },

            Event::Eof => break,
            _ => {}
        }
    }

    Ok(blocks.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    fn body(inner: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{W_NS}" xmlns:r="{R_NS}"><w:body>{inner}</w:body></w:document>"#
        )
    }

    fn docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    fn convert(inner: &str) -> String {
        docx_to_markdown(&docx(&[(DOCUMENT_PART, &body(inner))])).unwrap()
    }

    #[test]
    fn single_paragraph() {
        let md = convert(r#"<w:p><w:r><w:t>El proyecto cumple el criterio X</w:t></w:r></w:p>"#);
        assert_eq!(md, "El proyecto cumple el criterio X");
    }

    #[test]
    fn paragraphs_are_separated_and_empty_ones_dropped() {
        let md = convert(
            r#"<w:p><w:r><w:t>Uno</w:t></w:r></w:p><w:p/><w:p><w:r><w:t xml:space="preserve">  </w:t></w:r></w:p><w:p><w:r><w:t>Dos</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "Uno\n\nDos");
    }

    #[test]
    fn split_runs_with_same_format_merge() {
        let md = convert(
            r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Cri</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>terio</w:t></w:r><w:r><w:t xml:space="preserve"> uno</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "**Criterio** uno");
    }

    #[test]
    fn explicit_off_toggle_and_italic() {
        let md = convert(
            r#"<w:p><w:r><w:rPr><w:b w:val="0"/><w:i/></w:rPr><w:t>nota</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "*nota*");
    }

    #[test]
    fn emphasis_keeps_edge_spaces_outside() {
        assert_eq!(
            wrap_emphasis(" a ", RunStyle { bold: true, italic: false }),
            " **a** "
        );
        assert_eq!(wrap_emphasis("  ", RunStyle { bold: true, italic: true }), "  ");
    }

    #[test]
    fn markdown_specials_are_escaped() {
        let md = convert(r#"<w:p><w:r><w:t>a*b_c`d\e</w:t></w:r></w:p>"#);
        assert_eq!(md, r"a\*b\_c\`d\\e");
    }

    #[test]
    fn entities_are_unescaped() {
        let md = convert(r#"<w:p><w:r><w:t>R&amp;D &lt;ok&gt;</w:t></w:r></w:p>"#);
        assert_eq!(md, "R&D <ok>");
    }

    #[test]
    fn headings_resolve_through_style_names() {
        let styles = format!(
            r#"<w:styles xmlns:w="{W_NS}"><w:style w:type="paragraph" w:styleId="Ttulo1"><w:name w:val="heading 1"/></w:style><w:style w:type="paragraph" w:styleId="Ttulo2"><w:name w:val="heading 2"/></w:style></w:styles>"#
        );
        let doc = body(
            r#"<w:p><w:pPr><w:pStyle w:val="Ttulo1"/></w:pPr><w:r><w:t>Resumen</w:t></w:r></w:p><w:p><w:pPr><w:pStyle w:val="Ttulo2"/></w:pPr><w:r><w:t>Alcance</w:t></w:r></w:p>"#,
        );
        let md = docx_to_markdown(&docx(&[(DOCUMENT_PART, &doc), (STYLES_PART, &styles)])).unwrap();
        assert_eq!(md, "# Resumen\n\n## Alcance");
    }

    #[test]
    fn heading_ids_work_without_styles_part() {
        let md = convert(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading3"/></w:pPr><w:r><w:t>T</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "### T");
    }

    #[test]
    fn list_items_are_indented_by_level() {
        let md = convert(
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>a</w:t></w:r></w:p><w:p><w:pPr><w:numPr><w:ilvl w:val="1"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>b</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "- a\n\n  - b");
    }

    #[test]
    fn hyperlinks_resolve_through_relationships() {
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId9" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.org/norma" TargetMode="External"/></Relationships>"#;
        let doc = body(
            r#"<w:p><w:r><w:t xml:space="preserve">Ver </w:t></w:r><w:hyperlink r:id="rId9"><w:r><w:t>norma</w:t></w:r></w:hyperlink></w:p>"#,
        );
        let md = docx_to_markdown(&docx(&[(DOCUMENT_PART, &doc), (RELS_PART, rels)])).unwrap();
        assert_eq!(md, "Ver [norma](https://example.org/norma)");
    }

    #[test]
    fn tabs_and_breaks() {
        let md = convert(
            r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "a\tb  \nc");
    }

    #[test]
    fn tables_become_pipe_tables() {
        let md = convert(
            r#"<w:p><w:r><w:t>Antes</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>Criterio</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>Estado</w:t></w:r></w:p></w:tc></w:tr><w:tr><w:tc><w:p><w:r><w:t>A|B</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>ok</w:t></w:r></w:p><w:p><w:r><w:t>revisado</w:t></w:r></w:p></w:tc></w:tr></w:tbl><w:p><w:r><w:t>Después</w:t></w:r></w:p>"#,
        );
        assert_eq!(
            md,
            "Antes\n\n| Criterio | Estado |\n| --- | --- |\n| A\\|B | ok revisado |\n\nDespués"
        );
    }

    #[test]
    fn deleted_text_and_field_codes_are_ignored() {
        let md = convert(
            r#"<w:p><w:del><w:r><w:delText>borrado</w:delText></w:r></w:del><w:r><w:instrText>PAGE</w:instrText></w:r><w:r><w:t>visible</w:t></w:r></w:p>"#,
        );
        assert_eq!(md, "visible");
    }

    #[test]
    fn rejects_non_zip_bytes() {
        let err = docx_to_markdown(b"%PDF-1.7").unwrap_err();
        assert!(matches!(err, DocxError::NotAZip(m) if &m == b"%P"));
        assert!(matches!(docx_to_markdown(b"").unwrap_err(), DocxError::NotAZip([0, 0])));
    }

    #[test]
    fn rejects_zip_without_document_part() {
        let bytes = docx(&[("hello.txt", "hi")]);
        let err = docx_to_markdown(&bytes).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART), "got: {err}");
    }

    #[test]
    fn malformed_body_is_an_error() {
        let bytes = docx(&[(DOCUMENT_PART, "<w:document><w:body><w:p></w:body>")]);
        assert!(matches!(docx_to_markdown(&bytes), Err(DocxError::Corrupt(_))));
    }

    #[tokio::test]
    async fn extract_from_path_maps_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, b"plain text").unwrap();
        let err = extract_markdown(&path).await.unwrap_err();
        assert!(matches!(err, ComplianceError::NotADocx { .. }));

        let missing = dir.path().join("missing.docx");
        let err = extract_markdown(&missing).await.unwrap_err();
        assert!(matches!(err, ComplianceError::FileNotFound { .. }));
    }
}
