//! Copy for the landing sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceCategory {
    Strategy,
    Finance,
    Operations,
    People,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Strategy,
        ServiceCategory::Finance,
        ServiceCategory::Operations,
        ServiceCategory::People,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Strategy => "Estratégia",
            ServiceCategory::Finance => "Finanças",
            ServiceCategory::Operations => "Operações",
            ServiceCategory::People => "Pessoas",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub category: ServiceCategory,
    pub featured: bool,
}

impl Service {
    /// Message the contact modal opens with from this service's card.
    pub fn contact_message(&self) -> String {
        format!("Olá! Tenho interesse no serviço de {}.", self.title)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub quote: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric {
    pub label: &'static str,
    /// Percentage, 0..=100.
    pub value: u8,
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "planejamento-estrategico",
        title: "Planejamento Estratégico",
        summary: "Definimos metas, indicadores e um plano de ação claro para os próximos anos do seu negócio.",
        category: ServiceCategory::Strategy,
        featured: true,
    },
    Service {
        slug: "gestao-financeira",
        title: "Gestão Financeira",
        summary: "Fluxo de caixa, precificação e DRE organizados para decisões baseadas em números.",
        category: ServiceCategory::Finance,
        featured: true,
    },
    Service {
        slug: "mapeamento-de-processos",
        title: "Mapeamento de Processos",
        summary: "Desenhamos e padronizamos rotinas para reduzir retrabalho e custos operacionais.",
        category: ServiceCategory::Operations,
        featured: true,
    },
    Service {
        slug: "gestao-de-pessoas",
        title: "Gestão de Pessoas",
        summary: "Cargos, salários, avaliação de desempenho e cultura alinhados à estratégia.",
        category: ServiceCategory::People,
        featured: false,
    },
    Service {
        slug: "reestruturacao-de-dividas",
        title: "Reestruturação de Dívidas",
        summary: "Diagnóstico do endividamento e negociação assistida com bancos e fornecedores.",
        category: ServiceCategory::Finance,
        featured: false,
    },
    Service {
        slug: "mentoria-empresarial",
        title: "Mentoria Empresarial",
        summary: "Acompanhamento individual do empresário com encontros quinzenais e metas mensuráveis.",
        category: ServiceCategory::Strategy,
        featured: false,
    },
    Service {
        slug: "indicadores-de-desempenho",
        title: "Indicadores de Desempenho",
        summary: "Painéis de KPIs que mostram a saúde da operação em tempo real.",
        category: ServiceCategory::Operations,
        featured: false,
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Mariana Alves",
        role: "Diretora",
        company: "Alves Distribuidora",
        quote: "Em seis meses saímos do vermelho e hoje sabemos exatamente quanto cada produto nos rende.",
    },
    Testimonial {
        author: "Paulo Henrique",
        role: "Sócio-fundador",
        company: "Construtora Horizonte",
        quote: "O planejamento estratégico deu rumo à empresa. A equipe inteira passou a olhar para as mesmas metas.",
    },
    Testimonial {
        author: "Juliana Costa",
        role: "Gerente de RH",
        company: "Clínica Vida Plena",
        quote: "O plano de cargos e salários acabou com a rotatividade que nos custava caro todo ano.",
    },
    Testimonial {
        author: "Ricardo Tavares",
        role: "CEO",
        company: "Tavares Alimentos",
        quote: "Processos mapeados, indicadores no painel e reuniões muito mais objetivas.",
    },
];

pub const PARTNERS: &[Partner] = &[
    Partner { name: "Sebrae", logo: "partners/sebrae.svg" },
    Partner { name: "CDL Juiz de Fora", logo: "partners/cdl.svg" },
    Partner { name: "ACE Minas", logo: "partners/ace.svg" },
    Partner { name: "Banco Regional", logo: "partners/banco-regional.svg" },
    Partner { name: "Contabilidade Prisma", logo: "partners/prisma.svg" },
    Partner { name: "Instituto Gestão", logo: "partners/instituto-gestao.svg" },
];

pub const MISSION: Pillar = Pillar {
    title: "Missão",
    body: "Transformar pequenas e médias empresas em negócios sustentáveis, com gestão simples e resultados mensuráveis.",
};

pub const VISION: Pillar = Pillar {
    title: "Visão",
    body: "Ser a consultoria de referência para empresários do interior que querem crescer com segurança.",
};

pub const VALUES: Pillar = Pillar {
    title: "Valores",
    body: "Ética, proximidade com o cliente, decisões baseadas em dados e compromisso com o resultado.",
};

pub const METRICS: &[Metric] = &[
    Metric { label: "Redução de custos", value: 32 },
    Metric { label: "Aumento de margem", value: 45 },
    Metric { label: "Clientes que renovam", value: 87 },
    Metric { label: "Metas atingidas", value: 74 },
];

pub fn featured_services() -> impl Iterator<Item = &'static Service> {
    SERVICES.iter().filter(|s| s.featured)
}

/// Everything in `category`, or every service when `None`.
pub fn services_in(category: Option<ServiceCategory>) -> impl Iterator<Item = &'static Service> {
    SERVICES
        .iter()
        .filter(move |s| category.map_or(true, |c| s.category == c))
}
