//! Conclusions, final recommendation and the closing footer page.

use super::{CNPJ, COMPANY, DOCUMENT_DATE, DOCUMENT_VERSION, PRODUCT};
use crate::builder::{DocumentBuilder, Marker};
use crate::model::{Alignment, Paragraph, TextRun};

const ASSESSMENT: &str = "A INFINITUS Sistemas Inteligentes representa uma oportunidade \
excepcional no mercado brasileiro de People Analytics. Com o SISGEAD 2.0 como produto \
diferenciado e um mercado em crescimento de 15%+ ao ano, todos os elementos estão alinhados \
para um crescimento acelerado e sustentável.";

const KEY_STRENGTHS: &[&str] = &[
    "Produto Validado: 98.75% de aprovação em testes enterprise",
    "Timing Perfeito: Confluência de IA + transformação do trabalho",
    "Vantagem Técnica: Arquitetura moderna e escalável",
    "Mercado Atrativo: TAM de $6.8B globalmente até 2030",
];

const VERDICT_LEAD: &str = "A INFINITUS Sistemas Inteligentes possui todos os elementos \
fundamentais para se tornar uma empresa líder no segmento de People Analytics:";

const FUNDAMENTALS: &[&str] = &[
    "Produto diferenciado com validação de mercado",
    "Mercado grande e em crescimento acelerado",
    "Timing adequado para capturar a wave da IA",
    "Fundação técnica sólida e escalável",
    "Visão estratégica clara e executável",
];

const OUTLOOK: &str = "Com execução disciplinada e capital adequado, a empresa tem potencial \
para atingir R$ 25M+ ARR em 3-5 anos e se posicionar como líder regional em People Analytics.";

const WEBSITE: &str = "https://carlosorvate-tech.github.io/sisgead-2.0/";

pub(super) fn append(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("🏆 CONCLUSÕES E RECOMENDAÇÕES", 1)
        .heading("AVALIAÇÃO GERAL", 2)
        .italic_paragraph(ASSESSMENT)
        .heading("PRINCIPAIS FORÇAS", 2)
        .numbered_items(KEY_STRENGTHS.iter().copied())
        .heading("PARECER FINAL", 2)
        .bold_paragraph("RECOMENDAÇÃO: GO/INVESTIR ✅")
        .text(VERDICT_LEAD)
        .bullets(Marker::Check, FUNDAMENTALS.iter().copied())
        .text(OUTLOOK)
        .centered(TextRun::bold("O futuro é infinitamente promissor! 🚀"))
}

pub(super) fn footer(b: DocumentBuilder) -> DocumentBuilder {
    let mut p = Paragraph::with_run(TextRun::bold(COMPANY)).align(Alignment::Center);
    let lines = format!(
        "\nCNPJ: {CNPJ}\
         \nWebsite: {WEBSITE}\
         \nProduto: {PRODUCT}\
         \n\nDocumento elaborado em: {DOCUMENT_DATE}\
         \nElaborado por: GitHub Copilot + Visão Estratégica do Founder\
         \nVersão: {DOCUMENT_VERSION}\
         \n\n© 2025 {COMPANY}. Todos os direitos reservados.\
         \nEste documento contém informações confidenciais e estratégicas para uso interno da empresa."
    );
    p.add_lines(TextRun::new(lines));

    b.page_break().paragraph(p)
}
