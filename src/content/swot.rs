//! SWOT strengths and weaknesses.

use crate::builder::{DocumentBuilder, Marker};

const STRENGTHS: &[&str] = &[
    "Produto MVP validado (98.75%)",
    "Tecnologia diferenciada (IA + DISC)",
    "Arquitetura escalável",
    "Documentação completa",
    "Time técnico forte",
    "Timing perfeito (boom IA)",
];

const WEAKNESSES: &[&str] = &[
    "Marca nova (sem reconhecimento)",
    "Equipe pequena",
    "Capital limitado",
    "Falta de cases enterprise",
    "Dependência de fundador",
];

pub(super) fn append(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("💡 ANÁLISE SWOT", 1)
        .heading("STRENGTHS (Forças)", 2)
        .bullets(Marker::Check, STRENGTHS.iter().copied())
        .heading("WEAKNESSES (Fraquezas)", 2)
        .bullets(Marker::Warning, WEAKNESSES.iter().copied())
}
