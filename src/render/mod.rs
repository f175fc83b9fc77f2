//! Rendering module for serializing documents to DOCX.

mod docx;
mod numbering;
mod options;
mod result;
mod styles;

pub use docx::{to_docx, DocxRenderer};
pub use numbering::DocxNumbering;
pub use options::RenderOptions;
pub use result::RenderResult;
pub use styles::{
    heading_style_id, table_style_id, DocxStyles, LIST_BULLET_STYLE, TABLE_GRID_STYLE, TITLE_STYLE,
};
