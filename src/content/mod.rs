//! The INFINITUS strategic analysis report.
//!
//! Every section is literal content; the only runtime work is assembling it
//! into a [`Document`] in the fixed order below.

mod achievements;
mod business;
mod conclusion;
mod cover;
mod market;
mod swot;

use log::debug;

use crate::builder::DocumentBuilder;
use crate::model::{Document, Margins, Metadata};

/// Legal name of the issuing company.
pub const COMPANY: &str = "INFINITUS Sistemas Inteligentes LTDA";

/// Company registration number.
pub const CNPJ: &str = "09.371.580/0001-06";

/// Flagship product named throughout the report.
pub const PRODUCT: &str =
    "SISGEAD 2.0 - Sistema Inteligente de Gestão de Equipes de Alto Desempenho";

/// Date printed in the document.
pub const DOCUMENT_DATE: &str = "4 de novembro de 2025";

/// Document version label.
pub const DOCUMENT_VERSION: &str = "1.0";

/// Build the complete report.
pub fn strategic_analysis() -> Document {
    let mut builder = DocumentBuilder::new()
        .metadata(Metadata {
            title: Some("INFINITUS - Análise Estratégica 2025".to_string()),
            subject: Some(
                "Análise de Potencial de Mercado e Roadmap Estratégico".to_string(),
            ),
            company: Some(COMPANY.to_string()),
            date: Some(DOCUMENT_DATE.to_string()),
            version: Some(DOCUMENT_VERSION.to_string()),
        })
        .margins(Margins::inches(1.0, 1.25, 1.0, 1.25));

    let sections: [(&str, fn(DocumentBuilder) -> DocumentBuilder); 10] = [
        ("cover", cover::header),
        ("summary", cover::summary),
        ("achievements", achievements::append),
        ("market", market::analysis),
        ("roadmap", market::roadmap),
        ("monetization", business::monetization),
        ("projections", business::projections),
        ("swot", swot::append),
        ("conclusion", conclusion::append),
        ("footer", conclusion::footer),
    ];

    for (name, section) in sections {
        debug!("appending section: {}", name);
        builder = section(builder);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Block};

    #[test]
    fn test_report_shape() {
        let doc = strategic_analysis();
        let stats = doc.stats();

        assert_eq!(stats.tables, 3);
        assert_eq!(stats.page_breaks, 8);
        assert_eq!(stats.headings, 29);
        assert_eq!(stats.list_items, 46);
        assert_eq!(stats.body_paragraphs, 100);
        assert_eq!(stats.estimated_pages(), 4);
    }

    #[test]
    fn test_table_shapes() {
        let doc = strategic_analysis();
        let shapes: Vec<_> = doc
            .tables()
            .map(|t| (t.row_count(), t.column_count()))
            .collect();
        assert_eq!(shapes, vec![(6, 2), (6, 3), (4, 4)]);
        assert!(doc.tables().all(|t| t.validate().is_ok()));
    }

    #[test]
    fn test_top_level_sections_in_order() {
        let doc = strategic_analysis();
        let top: Vec<_> = doc
            .headings()
            .filter(|(level, _)| *level <= 1)
            .map(|(_, text)| text)
            .collect();

        assert_eq!(
            top,
            vec![
                "🚀 INFINITUS SISTEMAS INTELIGENTES",
                "📋 INFORMAÇÕES DO DOCUMENTO",
                "📊 RESUMO EXECUTIVO",
                "🏆 CONQUISTAS REALIZADAS",
                "📈 ANÁLISE DE MERCADO",
                "🚀 ROADMAP ESTRATÉGICO",
                "💰 MODELO DE MONETIZAÇÃO",
                "📊 PROJEÇÕES FINANCEIRAS",
                "💡 ANÁLISE SWOT",
                "🏆 CONCLUSÕES E RECOMENDAÇÕES",
            ]
        );
    }

    #[test]
    fn test_report_is_deterministic() {
        let first = strategic_analysis();
        let second = strategic_analysis();
        assert_eq!(first.stats(), second.stats());
        assert_eq!(first.plain_text(), second.plain_text());
    }

    #[test]
    fn test_margins() {
        let doc = strategic_analysis();
        let margins = doc.page_setup.margins;
        assert_eq!((margins.top, margins.bottom), (1440, 1440));
        assert_eq!((margins.left, margins.right), (1800, 1800));
    }

    #[test]
    fn test_footer_is_last_and_centered() {
        let doc = strategic_analysis();
        let last = doc.blocks.last().and_then(Block::as_paragraph).unwrap();
        assert_eq!(last.style.alignment, Alignment::Center);
        let text = last.plain_text();
        assert!(text.starts_with(COMPANY));
        assert!(text.contains(CNPJ));
        assert!(text.contains(DOCUMENT_DATE));
        assert!(matches!(doc.blocks[doc.blocks.len() - 2], Block::PageBreak));
    }
}
