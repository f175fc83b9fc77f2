//! Title block, document information and executive summary.

use super::{CNPJ, COMPANY, DOCUMENT_DATE, DOCUMENT_VERSION, PRODUCT};
use crate::builder::{DocumentBuilder, Marker};
use crate::model::TextRun;

const SEPARATOR_WIDTH: usize = 80;

const SUMMARY: &str = "A INFINITUS Sistemas Inteligentes representa uma oportunidade única no \
mercado de People Analytics e gestão de talentos. Com o SISGEAD 2.0 como produto flagship, a \
empresa está posicionada para capturar uma fatia significativa do mercado em expansão de \
soluções de RH baseadas em Inteligência Artificial.";

const HIGHLIGHTS: &[&str] = &[
    "Produto MVP certificado com 98.75% de aprovação em testes de usabilidade",
    "Tecnologia diferenciada combinando IA Google Gemini + Análise DISC",
    "Mercado em crescimento de 15% ao ano (People Analytics)",
    "Timing perfeito para entrada no mercado de IA empresarial",
    "Base técnica sólida com arquitetura escalável",
];

pub(super) fn header(b: DocumentBuilder) -> DocumentBuilder {
    let info = [
        ("Empresa:", COMPANY),
        ("CNPJ:", CNPJ),
        ("Produto Principal:", PRODUCT),
        ("Data de Elaboração:", DOCUMENT_DATE),
        ("Versão do Documento:", DOCUMENT_VERSION),
        ("Classificação:", "Estratégico - Uso Interno"),
    ];

    b.title("🚀 INFINITUS SISTEMAS INTELIGENTES")
        .centered(TextRun::bold(
            "Análise de Potencial de Mercado e Roadmap Estratégico",
        ))
        .centered(TextRun::new("Documento Executivo - Novembro 2025"))
        .text(&"=".repeat(SEPARATOR_WIDTH))
        .heading("📋 INFORMAÇÕES DO DOCUMENTO", 1)
        .label_value_table(info)
}

pub(super) fn summary(b: DocumentBuilder) -> DocumentBuilder {
    b.heading("📊 RESUMO EXECUTIVO", 1)
        .italic_paragraph(SUMMARY)
        .heading("🎯 Principais Destaques:", 2)
        .bullets(Marker::Check, HIGHLIGHTS.iter().copied())
}
