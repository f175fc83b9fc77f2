//! DOCX format detection and structural inspection.

use crate::error::{Error, Result};
use crate::model::DocumentStats;
use crate::render::TITLE_STYLE;
use docx_rs::DocumentChild;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Package format information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocxFormat {
    /// Whether the first entry is deflate-compressed
    pub deflated: bool,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Office Open XML (ZIP)")
    }
}

/// Detect the DOCX container from the leading bytes of a file.
///
/// # Returns
/// * `Ok(DocxFormat)` if the data starts with a ZIP local file header
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    // Compression method sits at offset 8 of the local file header
    const METHOD_OFFSET: usize = 8;
    const DEFLATE: u16 = 8;

    if data.len() < ZIP_MAGIC.len() || !data.starts_with(ZIP_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let deflated = data
        .get(METHOD_OFFSET..METHOD_OFFSET + 2)
        .is_some_and(|m| u16::from_le_bytes([m[0], m[1]]) == DEFLATE);

    Ok(DocxFormat { deflated })
}

/// Detect the DOCX container from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(64);
    BufReader::new(file).take(64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Check if bytes start like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

/// Structure of a DOCX body as read back from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocxOutline {
    /// Top-level paragraphs in the body
    pub body_paragraphs: usize,

    /// Paragraphs carrying a title or heading style
    pub headings: usize,

    /// Top-level tables
    pub tables: usize,

    /// Rows across all tables
    pub table_rows: usize,
}

impl DocxOutline {
    /// Check that the package holds exactly the authored structure.
    pub fn matches(&self, stats: &DocumentStats) -> bool {
        self.body_paragraphs == stats.body_paragraphs
            && self.headings == stats.headings
            && self.tables == stats.tables
            && self.table_rows == stats.table_rows
    }
}

fn is_heading_style(style_id: &str) -> bool {
    style_id == TITLE_STYLE
        || style_id
            .strip_prefix("Heading")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Read a DOCX package from memory and summarize its body.
pub fn inspect_bytes(data: &[u8]) -> Result<DocxOutline> {
    detect_format_from_bytes(data)?;
    let docx = docx_rs::read_docx(data).map_err(|e| Error::Read(e.to_string()))?;

    let mut outline = DocxOutline::default();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => {
                outline.body_paragraphs += 1;
                if p
                    .property
                    .style
                    .as_ref()
                    .is_some_and(|s| is_heading_style(&s.val))
                {
                    outline.headings += 1;
                }
            }
            DocumentChild::Table(t) => {
                outline.tables += 1;
                outline.table_rows += t.rows.len();
            }
            _ => {}
        }
    }

    Ok(outline)
}

/// Read the custom document properties of a DOCX package.
pub fn inspect_properties(data: &[u8]) -> Result<BTreeMap<String, String>> {
    detect_format_from_bytes(data)?;
    let docx = docx_rs::read_docx(data).map_err(|e| Error::Read(e.to_string()))?;
    Ok(docx.doc_props.custom.properties.into_iter().collect())
}

/// Read a DOCX file and summarize its body.
pub fn inspect_file<P: AsRef<Path>>(path: P) -> Result<DocxOutline> {
    let data = fs::read(path)?;
    inspect_bytes(&data)
}
