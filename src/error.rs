//! Error types for the report generator.

use std::io;
use thiserror::Error;

/// Result type alias for report operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building, writing or inspecting the report.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The DOCX package could not be assembled.
    #[error("Failed to pack DOCX: {0}")]
    Pack(String),

    /// An existing DOCX package could not be read back.
    #[error("Failed to read DOCX: {0}")]
    Read(String),

    /// The data is not a ZIP-based Office document.
    #[error("Unknown file format: not a valid DOCX")]
    UnknownFormat,

    /// The document model is inconsistent (e.g. a ragged table).
    #[error("Invalid document structure: {0}")]
    InvalidStructure(String),
}
