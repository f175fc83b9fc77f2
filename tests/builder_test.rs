//! Integration tests for building and rendering custom documents.

use infinitus_report::render::{to_docx, DocxRenderer};
use infinitus_report::{
    inspect_bytes, DocumentBuilder, Margins, Marker, RenderOptions, TextRun,
};

fn small_document() -> infinitus_report::Document {
    DocumentBuilder::new()
        .margins(Margins::inches(1.0, 1.25, 1.0, 1.25))
        .title("Relatório")
        .heading("Resumo", 1)
        .italic_paragraph("Texto de apoio.")
        .bullets(Marker::Check, ["um", "dois"])
        .page_break()
        .heading("Planos", 1)
        .table(&["Plano", "Preço"], [["Básico", "R$ 10"], ["Pro", "R$ 20"]], true)
        .labeled("Total:", "\nlinha 1\nlinha 2")
        .centered(TextRun::bold("fim"))
        .finish()
}

#[test]
fn test_custom_document_round_trips_structure() {
    let doc = small_document();
    let result = to_docx(&doc, &RenderOptions::default()).unwrap();
    let outline = inspect_bytes(&result.bytes).unwrap();

    assert_eq!(outline.headings, 3);
    assert_eq!(outline.tables, 1);
    assert_eq!(outline.table_rows, 3);
    assert_eq!(outline.body_paragraphs, doc.stats().body_paragraphs);
    assert!(outline.matches(&doc.stats()));
}

#[test]
fn test_renderer_is_reusable() {
    let doc = small_document();
    let mut renderer = DocxRenderer::new(RenderOptions::new().with_font_family("Arial"));

    let first = renderer.render(&doc).unwrap();
    let second = renderer.render(&doc).unwrap();

    assert_eq!(
        inspect_bytes(&first.bytes).unwrap(),
        inspect_bytes(&second.bytes).unwrap()
    );
}

#[test]
fn test_empty_document_renders() {
    let doc = DocumentBuilder::new().finish();
    let result = to_docx(&doc, &RenderOptions::default()).unwrap();
    let outline = inspect_bytes(&result.bytes).unwrap();

    assert_eq!(outline.tables, 0);
    assert_eq!(outline.headings, 0);
}
