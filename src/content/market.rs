//! Market sizing and the strategic roadmap.

use crate::builder::{DocumentBuilder, Marker};

const GLOBAL_MARKET: &[&str] = &[
    "Valor Atual: $3.4 bilhões (2025)",
    "Crescimento: 15% CAGR (2025-2030)",
    "Valor Projetado: $6.8 bilhões (2030)",
];

const BRAZILIAN_MARKET: &[&str] = &[
    "Valor Estimado: R$ 850 milhões (2025)",
    "Crescimento: 18% CAGR (maior que média global)",
    "Drivers: Transformação digital + Lei Geral de Proteção de Dados",
];

const PHASE_ONE_GOALS: &[&str] = &[
    "Validar product-market fit com 10-20 clientes piloto",
    "Refinar produto baseado em feedback real",
    "Estabelecer processos de venda e onboarding",
    "Gerar primeira receita recorrente",
];

const PHASE_ONE_TARGETS: &[&str] = &[
    "Clientes: 15 clientes piloto",
    "ARR: R$ 180.000 (receita anual recorrente)",
    "NPS: >70 (Net Promoter Score)",
    "Churn: <10% mensal",
];

pub(super) fn analysis(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("📈 ANÁLISE DE MERCADO", 1)
        .heading("1. TAMANHO DO MERCADO", 2)
        .heading("People Analytics Global", 3)
        .bullets(Marker::Dot, GLOBAL_MARKET.iter().copied())
        .heading("Mercado Brasileiro", 3)
        .bullets(Marker::Dot, BRAZILIAN_MARKET.iter().copied())
}

pub(super) fn roadmap(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("🚀 ROADMAP ESTRATÉGICO", 1)
        .heading("FASE 1: CONSOLIDAÇÃO (0-6 meses)", 2)
        .heading("Objetivos Principais", 3)
        .bullets(Marker::PlainDot, PHASE_ONE_GOALS.iter().copied())
        .heading("Metas Quantitativas", 3)
        .bullets(Marker::Target, PHASE_ONE_TARGETS.iter().copied())
}
