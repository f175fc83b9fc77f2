//! DOCX serialization of the document model.

use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, IndentLevel, NumberingId, PageMargin,
    Paragraph as DocxParagraph, Run, Table as DocxTable, TableCell as DocxTableCell,
    TableRow as DocxTableRow,
};
use log::{debug, trace};

use super::numbering::DocxNumbering;
use super::styles::{heading_style_id, table_style_id, DocxStyles, LIST_BULLET_STYLE};
use super::{RenderOptions, RenderResult};
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Document, InlineContent, ListKind, Margins, Paragraph, Table, TextRun,
};

/// Render a document to packed DOCX bytes.
pub fn to_docx(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    DocxRenderer::new(options.clone()).render(doc)
}

/// DOCX renderer that walks the document model block by block.
pub struct DocxRenderer {
    options: RenderOptions,
    styles: DocxStyles,
    numbering: DocxNumbering,
}

impl DocxRenderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            styles: DocxStyles::new(),
            numbering: DocxNumbering::new(),
        }
    }

    /// Build the in-memory DOCX without packing it.
    pub fn build(&mut self, doc: &Document) -> Result<Docx> {
        for table in doc.tables() {
            table.validate()?;
        }

        self.styles = DocxStyles::new();
        self.numbering = DocxNumbering::new();

        let mut docx = Docx::new().page_margin(page_margin(doc.page_setup.margins));
        docx = self.styles.initialize_styles(docx, &self.options);

        for (name, value) in doc.metadata.properties() {
            docx = docx.custom_property(name, value);
        }

        for block in &doc.blocks {
            docx = match block {
                Block::Paragraph(p) => self.add_paragraph(docx, p),
                Block::Table(t) => docx.add_table(build_table(t)),
                Block::PageBreak => docx.add_paragraph(
                    DocxParagraph::new().add_run(Run::new().add_break(BreakType::Page)),
                ),
            };
        }

        debug!("built DOCX with {} body blocks", doc.blocks.len());
        Ok(docx)
    }

    /// Build and pack the document.
    pub fn render(&mut self, doc: &Document) -> Result<RenderResult> {
        let docx = self.build(doc)?;

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::Pack(e.to_string()))?;

        debug!("packed DOCX: {} bytes", buffer.len());
        Ok(RenderResult::new(buffer, doc.stats()))
    }

    fn add_paragraph(&mut self, docx: Docx, para: &Paragraph) -> Docx {
        let mut p = build_paragraph(para);

        if let Some(ListKind::Bullet) = para.style.list {
            p = p.style(LIST_BULLET_STYLE);
            if self.options.list_numbering {
                let (docx, id) = self.numbering.ensure_bullet_numbering(docx);
                p = p.numbering(NumberingId::new(id), IndentLevel::new(0));
                return docx.add_paragraph(p);
            }
        }

        docx.add_paragraph(p)
    }
}

fn page_margin(margins: Margins) -> PageMargin {
    PageMargin::new()
        .top(margins.top)
        .right(margins.right)
        .bottom(margins.bottom)
        .left(margins.left)
}

fn map_alignment(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

fn build_run(run: &TextRun) -> Run {
    let mut r = Run::new().add_text(&run.text);
    if run.style.bold {
        r = r.bold();
    }
    if run.style.italic {
        r = r.italic();
    }
    r
}

/// Convert a model paragraph: heading style, alignment and runs.
///
/// List styling is applied by the renderer since it owns the numbering.
fn build_paragraph(para: &Paragraph) -> DocxParagraph {
    let mut p = DocxParagraph::new();

    if let Some(level) = para.heading_level() {
        trace!("heading level {}", level);
        p = p.style(&heading_style_id(level));
    }
    if para.style.alignment != Alignment::Left {
        p = p.align(map_alignment(para.style.alignment));
    }

    for content in &para.content {
        p = match content {
            InlineContent::Text(run) => p.add_run(build_run(run)),
            InlineContent::LineBreak => p.add_run(Run::new().add_break(BreakType::TextWrapping)),
        };
    }
    p
}

fn build_table(table: &Table) -> DocxTable {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    // Every cell needs at least one paragraph to be valid
                    if cell.content.is_empty() {
                        return DocxTableCell::new().add_paragraph(DocxParagraph::new());
                    }
                    cell.content
                        .iter()
                        .fold(DocxTableCell::new(), |c, p| c.add_paragraph(build_paragraph(p)))
                })
                .collect();
            DocxTableRow::new(cells)
        })
        .collect();

    DocxTable::new(rows).style(table_style_id(table.style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, TableCell, TableRow};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::heading("ANÁLISE SWOT", 1));
        let mut item = Paragraph::bullet();
        item.add_run(TextRun::bold("✅ "));
        item.add_text("Arquitetura escalável");
        doc.add_paragraph(item);
        doc.add_page_break();
        let mut table = Table::with_header(1);
        table.add_row(TableRow::header(["Plano", "Preço/Mês"]));
        table.add_row(TableRow::new(vec![
            TableCell::bold("SISGEAD STARTER"),
            TableCell::empty(),
        ]));
        doc.add_table(table);
        doc
    }

    #[test]
    fn test_build_keeps_block_count() {
        let doc = sample();
        let docx = DocxRenderer::new(RenderOptions::default())
            .build(&doc)
            .unwrap();
        assert_eq!(docx.document.children.len(), doc.blocks.len());
    }

    #[test]
    fn test_render_produces_zip() {
        let result = to_docx(&sample(), &RenderOptions::default()).unwrap();
        assert!(!result.is_empty());
        assert!(result.bytes.starts_with(b"PK\x03\x04"));
        assert_eq!(result.stats.tables, 1);
        assert_eq!(result.stats.list_items, 1);
    }

    #[test]
    fn test_numbering_only_when_lists_present() {
        let mut renderer = DocxRenderer::new(RenderOptions::default());
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("sem listas"));
        renderer.build(&doc).unwrap();
        assert_eq!(renderer.numbering.bullet_id(), None);

        renderer.build(&sample()).unwrap();
        assert!(renderer.numbering.bullet_id().is_some());
    }

    #[test]
    fn test_list_numbering_can_be_disabled() {
        let options = RenderOptions::new().with_list_numbering(false);
        let mut renderer = DocxRenderer::new(options);
        renderer.build(&sample()).unwrap();
        assert_eq!(renderer.numbering.bullet_id(), None);
    }

    #[test]
    fn test_ragged_table_is_rejected() {
        let mut doc = Document::new();
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["a", "b"]));
        table.add_row(TableRow::from_strings(["c"]));
        doc.add_table(table);

        let result = to_docx(&doc, &RenderOptions::default());
        assert!(matches!(result, Err(Error::InvalidStructure(_))));
    }

    #[test]
    fn test_metadata_written_as_custom_properties() {
        let mut doc = sample();
        doc.metadata = Metadata {
            title: Some("INFINITUS - Análise Estratégica 2025".to_string()),
            company: Some("INFINITUS Sistemas Inteligentes LTDA".to_string()),
            ..Default::default()
        };

        let result = to_docx(&doc, &RenderOptions::default()).unwrap();
        let docx = docx_rs::read_docx(&result.bytes).unwrap();
        let props = &docx.doc_props.custom.properties;

        assert_eq!(
            props.get("title").map(String::as_str),
            Some("INFINITUS - Análise Estratégica 2025")
        );
        assert_eq!(
            props.get("company").map(String::as_str),
            Some("INFINITUS Sistemas Inteligentes LTDA")
        );
        assert!(!props.contains_key("version"));
    }

    #[test]
    fn test_alignment_mapping() {
        assert!(matches!(
            map_alignment(Alignment::Center),
            AlignmentType::Center
        ));
        assert!(matches!(
            map_alignment(Alignment::Justify),
            AlignmentType::Both
        ));
    }
}
