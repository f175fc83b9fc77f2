//! Monetization model and financial projections.

use crate::builder::DocumentBuilder;

const PLANS_HEADER: &[&str] = &["Plano", "Limite", "Recursos", "Preço/Mês"];

const PLANS: &[[&str; 4]] = &[
    [
        "SISGEAD STARTER",
        "Até 50 colaboradores",
        "Funcionalidades básicas, Suporte por email",
        "R$ 497",
    ],
    [
        "SISGEAD PROFESSIONAL",
        "Até 200 colaboradores",
        "IA + Relatórios avançados, Suporte prioritário",
        "R$ 1.497",
    ],
    [
        "SISGEAD ENTERPRISE",
        "Ilimitado",
        "White-label + Integrações, Success manager dedicado",
        "A partir de R$ 4.997",
    ],
];

/// Bold label and the value that follows it; `\n` starts a new line.
const REVENUE: &[(&str, &str)] = &[
    (
        "Ano 1:",
        "\nQ1: R$ 15k/mês → Q4: R$ 85k/mês\nARR Final: R$ 1.02M",
    ),
    (
        "Ano 2:",
        "\nQ1: R$ 120k/mês → Q4: R$ 310k/mês\nARR Final: R$ 3.72M",
    ),
    ("Crescimento:", " 265% ao ano"),
];

pub(super) fn monetization(b: DocumentBuilder) -> DocumentBuilder {
    b.page_break()
        .heading("💰 MODELO DE MONETIZAÇÃO", 1)
        .heading("1. RECEITA PRINCIPAL - SaaS SUBSCRIPTION", 2)
        .table(PLANS_HEADER, PLANS, true)
}

pub(super) fn projections(b: DocumentBuilder) -> DocumentBuilder {
    let b = b
        .page_break()
        .heading("📊 PROJEÇÕES FINANCEIRAS", 1)
        .heading("CENÁRIO BASE (18 meses)", 2)
        .heading("Receita", 3);

    REVENUE
        .iter()
        .fold(b, |b, (label, value)| b.labeled(label, value))
}
