//! Body-level blocks.

use super::{Paragraph, Table};

/// A block in the document body, rendered in order.
#[derive(Debug, Clone)]
pub enum Block {
    /// A paragraph (headings and list items included)
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A hard page break
    PageBreak,
}

impl Block {
    /// Get the paragraph if this block is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Get the table if this block is one.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Check if this block is a heading paragraph.
    pub fn is_heading(&self) -> bool {
        self.as_paragraph().is_some_and(|p| p.is_heading())
    }

    /// Get plain text content of the block.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Table(t) => t.plain_text(),
            Block::PageBreak => String::new(),
        }
    }
}
