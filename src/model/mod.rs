//! Document model types for the report.
//!
//! This module defines the in-memory representation that sits between the
//! literal report content and the DOCX renderer. The model only knows about
//! the handful of constructs the report uses: headings, paragraphs built from
//! styled runs, bullet items, grid tables and page breaks.

mod block;
mod document;
mod page_setup;
mod paragraph;
mod table;

pub use block::Block;
pub use document::{Document, DocumentStats, Metadata};
pub use page_setup::{Margins, PageSetup, TWIPS_PER_INCH};
pub use paragraph::{
    Alignment, InlineContent, ListKind, Paragraph, ParagraphStyle, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow, TableStyle};
