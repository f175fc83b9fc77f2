//! Document-level types.

use super::{Block, PageSetup, Paragraph, Table};

/// Number of body paragraphs assumed to fill one printed page.
const PARAGRAPHS_PER_PAGE: usize = 25;

/// A complete document ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Document metadata (title, company, etc.)
    pub metadata: Metadata,

    /// Page geometry
    pub page_setup: PageSetup,

    /// Body blocks in rendering order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Add a page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over body paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }

    /// Iterate over tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    /// Iterate over headings as `(level, text)` pairs.
    pub fn headings(&self) -> impl Iterator<Item = (u8, String)> + '_ {
        self.paragraphs()
            .filter_map(|p| p.heading_level().map(|level| (level, p.plain_text())))
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Compute structural statistics.
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats::default();

        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => {
                    stats.body_paragraphs += 1;
                    if p.is_heading() {
                        stats.headings += 1;
                    }
                    if p.is_list_item() {
                        stats.list_items += 1;
                    }
                }
                Block::Table(t) => {
                    stats.tables += 1;
                    stats.table_rows += t.row_count();
                }
                Block::PageBreak => {
                    // A page break is carried by its own paragraph in the output
                    stats.body_paragraphs += 1;
                    stats.page_breaks += 1;
                }
            }
        }

        stats.words = self.plain_text().split_whitespace().count();
        stats
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Issuing company
    pub company: Option<String>,

    /// Date label printed in the document
    pub date: Option<String>,

    /// Document version label
    pub version: Option<String>,
}

impl Metadata {
    /// Set fields as `(name, value)` pairs, in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("title", &self.title),
            ("subject", &self.subject),
            ("company", &self.company),
            ("date", &self.date),
            ("version", &self.version),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
    }
}

/// Structural statistics of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Paragraphs in the body, headings and page-break carriers included
    pub body_paragraphs: usize,

    /// Headings, title included
    pub headings: usize,

    /// Bulleted list items
    pub list_items: usize,

    /// Tables
    pub tables: usize,

    /// Rows across all tables
    pub table_rows: usize,

    /// Page breaks
    pub page_breaks: usize,

    /// Whitespace-separated words
    pub words: usize,
}

impl DocumentStats {
    /// Rough page count, at 25 body paragraphs per page (rounded down).
    pub fn estimated_pages(&self) -> usize {
        self.body_paragraphs / PARAGRAPHS_PER_PAGE
    }
}
