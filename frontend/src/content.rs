//! Copy shown on the sales page.

use crate::components::icon::Glyph;

pub struct ProblemCard {
    pub glyph: Glyph,
    pub title: &'static str,
    pub body: &'static str,
}

pub struct Deliverable {
    pub glyph: Glyph,
    pub title: &'static str,
    pub detail: Option<&'static str>,
    pub format: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

pub struct Badge {
    pub glyph: Glyph,
    pub label: &'static str,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub struct Offer {
    /// Prices in centavos.
    pub list_price: u32,
    pub price: u32,
    pub perks: &'static [&'static str],
    pub guarantee: &'static str,
}

pub const HERO_BACKGROUND: &str =
    "https://images.unsplash.com/photo-1510154221590-ff63e90a136f?q=80&w=2070&auto=format&fit=crop";

pub const PROBLEMS: &[ProblemCard] = &[
    ProblemCard {
        glyph: Glyph::Target,
        title: "O Foco Errado",
        body: "Você gasta milhares com inglês e esportes, mas quanto tempo dedica para a saúde espiritual deles? O sucesso terreno é passageiro.",
    },
    ProblemCard {
        glyph: Glyph::Users,
        title: "A Influência do Mundo",
        body: "Se você não educar seus filhos na verdade, a internet e as escolas o farão com base nos valores deles, não nos seus.",
    },
    ProblemCard {
        glyph: Glyph::Message,
        title: "O Silêncio em Casa",
        body: "A falta de ferramentas práticas faz com que os pais se calem diante das dúvidas dos filhos, perdendo a oportunidade de guiar.",
    },
];

pub const METHOD_POINTS: &[&str] = &[
    "Como criar rotinas de devocional que os filhos amam.",
    "Respostas bíblicas para as 20 maiores dúvidas das crianças.",
    "Estratégias para combater a influência negativa das telas.",
    "O papel do pai e da mãe na formação do caráter cristão.",
];

pub const DELIVERABLES: &[Deliverable] = &[
    Deliverable {
        glyph: Glyph::Palette,
        title: "Livro digital - Colorindo com Jesus",
        detail: None,
        format: "PDF",
    },
    Deliverable {
        glyph: Glyph::Book,
        title: "Livro digital - Aventuras Bíblicas",
        detail: None,
        format: "PDF",
    },
    Deliverable {
        glyph: Glyph::Heart,
        title: "Livro digital - Aprendendo com Alegria",
        detail: None,
        format: "PDF",
    },
    Deliverable {
        glyph: Glyph::Layers,
        title: "Livro digital - Passatempos Bíblicos",
        detail: None,
        format: "PDF",
    },
    Deliverable {
        glyph: Glyph::Calendar,
        title: "Calendário cristão infantil",
        detail: Some("com uma missão por dia"),
        format: "PDF",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Mariana Silva",
        role: "Mãe de 2",
        quote: "Eu achava que dar conforto era tudo, mas percebi que faltava a base. O Legado Eterno abriu meus olhos para o que realmente importa.",
        avatar: "https://picsum.photos/id/64/100/100",
    },
    Testimonial {
        name: "Ricardo Mendes",
        role: "Pai de 3",
        quote: "Ferramentas práticas que eu não encontrava em lugar nenhum. Meu relacionamento com meus filhos mudou completamente através da palavra.",
        avatar: "https://picsum.photos/id/91/100/100",
    },
    Testimonial {
        name: "Cláudia Rocha",
        role: "Mãe e Educadora",
        quote: "Essencial para os tempos de hoje. O guia sobre telas e internet é simplesmente libertador para nós pais.",
        avatar: "https://picsum.photos/id/65/100/100",
    },
];

pub const OFFER: Offer = Offer {
    list_price: 9_700,
    price: 1_200,
    perks: &["Acesso Vitalício", "Guia de Devocionais", "Bônus: Filhos e Telas"],
    guarantee: "Garantia incondicional de 7 dias. Não gostou? Devolvemos 100% do seu dinheiro.",
};

pub const TRUST_BADGES: &[Badge] = &[
    Badge { glyph: Glyph::Shield, label: "Segurança" },
    Badge { glyph: Glyph::Star, label: "Qualidade" },
    Badge { glyph: Glyph::Users, label: "Comunidade" },
    Badge { glyph: Glyph::Book, label: "Vitalício" },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "Como vou receber o acesso?",
        answer: "Imediatamente após a confirmação do pagamento, você receberá um e-mail com todos os dados de acesso à nossa plataforma exclusiva.",
    },
    Faq {
        question: "Serve para crianças de qual idade?",
        answer: "O método é adaptável para crianças desde os 3 anos até os 8 anos, com linguagens e atividades específicas para cada fase.",
    },
    Faq {
        question: "Preciso ter conhecimento bíblico profundo?",
        answer: "Não! O material foi feito justamente para guiar pais que querem ensinar, mas muitas vezes não sabem por onde começar.",
    },
    Faq {
        question: "Posso parcelar no boleto?",
        answer: "O parcelamento está disponível via cartão de crédito. No boleto e PIX, apenas pagamento à vista.",
    },
];

/// Formats centavos as Brazilian reais, e.g. `1200` -> `R$ 12,00`.
pub fn format_brl(centavos: u32) -> String {
    format!("R$ {},{:02}", centavos / 100, centavos % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(OFFER.list_price), "R$ 97,00");
        assert_eq!(format_brl(OFFER.price), "R$ 12,00");
        assert_eq!(format_brl(5), "R$ 0,05");
    }

    #[test]
    fn test_catalogue() {
        assert_eq!(FAQS.len(), 4);
        assert_eq!(TESTIMONIALS.len(), 3);
        assert_eq!(DELIVERABLES.len(), 5);
        assert_eq!(PROBLEMS.len(), 3);
        assert!(OFFER.price < OFFER.list_price);
        assert!(DELIVERABLES.iter().all(|d| d.format == "PDF"));
    }
}
