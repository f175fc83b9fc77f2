//! Product development achievements and certifications.

use crate::builder::{DocumentBuilder, Marker};

const TECHNICAL_SPECS: &[&str] = &[
    "Arquitetura: React 19 + TypeScript + Vite",
    "Inteligência Artificial: Google Gemini 2.0 Flash integrado",
    "Deploy: GitHub Pages com CDN global",
    "Qualidade: 98.75% aprovação em testes enterprise",
    "Performance: < 3 segundos de carregamento inicial",
];

const FEATURES: &[&str] = &[
    "Análise comportamental DISC avançada",
    "Formação inteligente de equipes baseada em IA",
    "Sistema de relatórios com nomenclatura automática",
    "Portal administrativo completo",
    "Backup e restore de dados",
    "Interface responsiva e moderna",
];

const CERTIFICATIONS_HEADER: &[&str] = &["Certificação", "Score", "Status"];

const CERTIFICATIONS: &[[&str; 3]] = &[
    ["Usabilidade Enterprise", "100%", "✅ CERTIFICADO"],
    ["Performance Web", "95%", "✅ APROVADO"],
    ["Integração IA", "100%", "✅ VALIDADO"],
    ["Segurança de Dados", "100%", "✅ GARANTIDO"],
    ["Estabilidade de Produção", "100%", "✅ APROVADO"],
];

pub(super) fn append(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("🏆 CONQUISTAS REALIZADAS", 1)
        .heading("1. DESENVOLVIMENTO DO SISGEAD 2.0", 2)
        .heading("Especificações Técnicas", 3)
        .bullets(Marker::Dot, TECHNICAL_SPECS.iter().copied())
        .heading("Funcionalidades Principais", 3)
        .bullets(Marker::Check, FEATURES.iter().copied())
        .heading("Certificações Obtidas", 3)
        .table(CERTIFICATIONS_HEADER, CERTIFICATIONS, false)
}
