//! # infinitus-report
//!
//! Generates the INFINITUS Sistemas Inteligentes strategic analysis report
//! as a DOCX document.
//!
//! The report content is fixed. This library assembles it into a small
//! document model, serializes the model with `docx-rs`, and can read the
//! written package back to confirm its structure.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> infinitus_report::Result<()> {
//!     let report = infinitus_report::create_report()?;
//!     println!("{}", report.path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Fixed content**: headings, bullet lists, grid tables and page breaks
//! - **DOCX output**: page margins, heading and list styles, bullet numbering
//! - **Inspection**: structural read-back of the written package

pub mod builder;
pub mod content;
pub mod error;
pub mod model;
pub mod render;
pub mod verify;

// Re-export commonly used types
pub use builder::{DocumentBuilder, Marker};
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, DocumentStats, InlineContent, ListKind, Margins, Metadata,
    PageSetup, Paragraph, ParagraphStyle, Table, TableCell, TableRow, TableStyle, TextRun,
    TextStyle,
};
pub use render::{RenderOptions, RenderResult};
pub use verify::{
    detect_format_from_bytes, detect_format_from_path, inspect_bytes, inspect_file,
    inspect_properties, is_docx_bytes, DocxFormat, DocxOutline,
};

use chrono::{DateTime, Utc};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// File name the report is written to, relative to the working directory.
pub const OUTPUT_FILENAME: &str = "INFINITUS_Analise_Estrategica_2025.docx";

/// Build the report document model.
///
/// # Example
///
/// ```
/// let doc = infinitus_report::build_report();
/// assert_eq!(doc.stats().tables, 3);
/// ```
pub fn build_report() -> Document {
    content::strategic_analysis()
}

/// Build and pack the report without touching the filesystem.
pub fn render_report(options: &RenderOptions) -> Result<RenderResult> {
    render::to_docx(&build_report(), options)
}

/// A report written to disk.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    /// Path the report was written to, as given
    pub path: PathBuf,

    /// Package size in bytes
    pub size: usize,

    /// Structural statistics of the written document
    pub stats: DocumentStats,

    /// When the file was written
    pub generated_at: DateTime<Utc>,
}

impl GeneratedReport {
    /// File name component of the output path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Absolute location of the output file.
    pub fn absolute_path(&self) -> Result<PathBuf> {
        Ok(fs::canonicalize(&self.path)?)
    }
}

/// Write the report to `path`, replacing any existing file.
///
/// # Example
///
/// ```no_run
/// let report = infinitus_report::write_report_to("/tmp/report.docx")?;
/// println!("~{} pages", report.stats.estimated_pages());
/// # Ok::<(), infinitus_report::Error>(())
/// ```
pub fn write_report_to<P: AsRef<Path>>(path: P) -> Result<GeneratedReport> {
    let path = path.as_ref();
    let result = render_report(&RenderOptions::default())?;
    fs::write(path, &result.bytes)?;

    let generated_at = Utc::now();
    info!(
        "wrote {} ({} bytes) at {}",
        path.display(),
        result.len(),
        generated_at.to_rfc3339()
    );

    Ok(GeneratedReport {
        path: path.to_path_buf(),
        size: result.len(),
        stats: result.stats,
        generated_at,
    })
}

/// Write the report to [`OUTPUT_FILENAME`] in the current directory.
pub fn create_report() -> Result<GeneratedReport> {
    write_report_to(OUTPUT_FILENAME)
}
