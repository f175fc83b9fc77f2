//! Rendering result with statistics.

use crate::model::DocumentStats;

/// Result of rendering a document: the packed DOCX and what went into it.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The packed DOCX bytes
    pub bytes: Vec<u8>,

    /// Structural statistics of the rendered document
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(bytes: Vec<u8>, stats: DocumentStats) -> Self {
        Self { bytes, stats }
    }

    /// Get the package size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
