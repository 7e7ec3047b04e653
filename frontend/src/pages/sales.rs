use yew::prelude::*;
use web_sys::MouseEvent;

use crate::components::button::CtaButton;
use crate::components::countdown_banner::CountdownBanner;
use crate::components::faq_item::FaqItem;
use crate::components::icon::{Glyph, Icon};
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::content::{self, format_brl, OFFER};
use crate::navigation::{self, on_browser_page};

#[function_component(SalesPage)]
pub fn sales_page() -> Html {
    let scroll_to_offer = Callback::from(|_: MouseEvent| on_browser_page(navigation::scroll_to_offer));
    let checkout = Callback::from(|_: MouseEvent| on_browser_page(navigation::handle_checkout));

    html! {
        <div class="sales-page">
            <CountdownBanner />

            // Hero
            <section class="hero dark">
                <div class="hero__backdrop">
                    <img src={content::HERO_BACKGROUND} alt="Fundo" />
                </div>
                <div class="hero__content">
                    <span class="hero__badge">{"Para Pais que Buscam o Melhor"}</span>
                    <h1>
                        {"Você faz de tudo para garantir um bom futuro para o seu filho… "}
                        <br />
                        <span class="accent">{"mas já parou para pensar no destino eterno dele?"}</span>
                    </h1>
                    <p class="hero__subtitle">
                        {"Não adianta oferecer o mundo, se você não os apresentar a quem criou o mundo. Descubra como direcionar o coração dos seus filhos para a eternidade."}
                    </p>
                    <div class="hero__actions">
                        <CtaButton onclick={scroll_to_offer.clone()} class="cta-large">
                            {"SIM, QUERO GARANTIR O LEGADO"}
                            <Icon glyph={Glyph::Arrow} />
                        </CtaButton>
                        <div class="secure-note">
                            <Icon glyph={Glyph::Shield} class="green" />
                            {"Compra 100% segura e acesso imediato"}
                        </div>
                    </div>
                </div>
            </section>

            // Problem
            <section class="problem">
                <div class="container">
                    <SectionTitle
                        title={html! {
                            <span>
                                {"O Perigo da "}
                                <span class="underlined">{"\"Boa Educação\""}</span>
                            </span>
                        }}
                        subtitle="Muitos pais estão tão focados em faculdades e carreiras que se esquecem do que realmente importa."
                        hide_bar={true}
                    />
                    <div class="problem__grid">
                        { for content::PROBLEMS.iter().map(|card| html! {
                            <div class="problem-card">
                                <div class="problem-card__icon">
                                    <Icon glyph={card.glyph} />
                                </div>
                                <h3>{card.title}</h3>
                                <p>{card.body}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Solution
            <section class="solution">
                <div class="container solution__columns">
                    <div class="solution__method">
                        <SectionTitle
                            title={html! { {"O Método Legado Eterno"} }}
                            subtitle="Uma jornada prática para transformar sua casa em um ambiente de discipulado real."
                        />
                        <ul class="method-list">
                            { for content::METHOD_POINTS.iter().map(|point| html! {
                                <li>
                                    <Icon glyph={Glyph::Check} class="check" />
                                    <span>{*point}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="solution__cta">
                            <CtaButton onclick={scroll_to_offer.clone()}>
                                {"QUERO CONHECER O MÉTODO"}
                                <Icon glyph={Glyph::Arrow} />
                            </CtaButton>
                        </div>
                    </div>

                    <div class="deliverables">
                        <SectionTitle
                            title={html! { {"O que você receberá neste método"} }}
                            subtitle="Tudo o que você precisa para cuidar da espiritualidade do seu filho hoje."
                        />
                        <div class="deliverables__list">
                            { for content::DELIVERABLES.iter().map(|item| html! {
                                <div class="deliverable">
                                    <div class="deliverable__icon">
                                        <Icon glyph={item.glyph} />
                                    </div>
                                    <h4>
                                        {item.title}
                                        if let Some(detail) = item.detail {
                                            <span class="deliverable__detail">{detail}</span>
                                        }
                                    </h4>
                                    <span class="deliverable__format">{item.format}</span>
                                </div>
                            }) }
                        </div>
                        <div class="deliverables__footer">
                            <Icon glyph={Glyph::Shield} class="green" />
                            <span>{"Acesso imediato após a compra"}</span>
                        </div>
                    </div>
                </div>
            </section>

            // Testimonials
            <section class="testimonials">
                <div class="container">
                    <SectionTitle
                        title={html! { {"Quem já está mudando a história da família"} }}
                        subtitle="Veja o depoimento de pais que decidiram priorizar o que é eterno."
                    />
                    <div class="testimonials__grid">
                        { for content::TESTIMONIALS.iter().map(|t| html! {
                            <div class="testimonial">
                                <img src={t.avatar} alt={t.name} />
                                <div class="stars">
                                    { for (0..5).map(|_| html! { <Icon glyph={Glyph::Star} class="star" /> }) }
                                </div>
                                <p class="testimonial__quote">{format!("\"{}\"", t.quote)}</p>
                                <h4>{t.name}</h4>
                                <span class="testimonial__role">{t.role}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // Pricing
            <section id={config::PRICING_ANCHOR_ID} class="pricing dark">
                <div class="pricing__content">
                    <SectionTitle
                        title={html! { {"Sua Decisão Hoje Muda o Futuro Deles"} }}
                        subtitle="Um investimento único por um legado que dura para sempre."
                        light={true}
                    />
                    <div class="offer-card">
                        <div class="offer-card__badge">{"OFERTA EXCLUSIVA"}</div>
                        <div class="offer-card__prices">
                            <span class="list-price">{format_brl(OFFER.list_price)}</span>
                            <span class="price">{format_brl(OFFER.price)}</span>
                            <p class="offer-card__access">{"Acesso Vitalício Imediato"}</p>
                        </div>
                        <div class="offer-card__perks">
                            { for OFFER.perks.iter().map(|perk| html! {
                                <div class="perk">
                                    <Icon glyph={Glyph::Check} class="green" />
                                    {*perk}
                                </div>
                            }) }
                        </div>
                        <CtaButton onclick={checkout} class="cta-checkout">
                            {"GARANTIR MINHA VAGA AGORA"}
                        </CtaButton>
                        <p class="offer-card__guarantee">{OFFER.guarantee}</p>
                    </div>
                    <div class="trust-badges">
                        { for content::TRUST_BADGES.iter().map(|badge| html! {
                            <div class="trust-badge">
                                <Icon glyph={badge.glyph} class="accent" />
                                <span>{badge.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            // FAQ
            <section class="faq">
                <div class="container narrow">
                    <SectionTitle
                        title={html! { {"Dúvidas Frequentes"} }}
                        subtitle="Tire suas dúvidas e sinta-se seguro para começar."
                    />
                    <div class="faq__list">
                        { for content::FAQS.iter().map(|faq| html! {
                            <FaqItem question={faq.question}>
                                <p>{faq.answer}</p>
                            </FaqItem>
                        }) }
                    </div>
                </div>
            </section>

            <footer class="site-footer dark">
                <div class="container">
                    <h2 class="site-footer__brand">{"Legado Eterno"}</h2>
                    <div class="site-footer__row">
                        <div>{"© 2024 Legado Eterno - Todos os Direitos Reservados"}</div>
                        <div class="site-footer__links">
                            <a href="#">{"Termos de Uso"}</a>
                            <a href="#">{"Privacidade"}</a>
                        </div>
                    </div>
                    <p class="site-footer__disclaimer">
                        {"ESTE SITE NÃO É DO FACEBOOK: Este site não faz parte do site do Facebook ou do Facebook Inc. Além disso, este site NÃO é endossado pelo Facebook de forma alguma. FACEBOOK é uma marca registrada da FACEBOOK, Inc."}
                    </p>
                </div>
            </footer>

            // Only shown on narrow screens
            <div class="mobile-cta">
                <CtaButton onclick={scroll_to_offer} class="cta-full">
                    {"QUERO GARANTIR O FUTURO"}
                    <Icon glyph={Glyph::Arrow} />
                </CtaButton>
            </div>

            <style>
                {r#"
                .sales-page {
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #0B1120;
                }

                .dark {
                    background: #0B1120;
                    color: #ffffff;
                }

                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                }

                .container.narrow {
                    max-width: 48rem;
                }

                .accent {
                    color: #C5A059;
                }

                .green {
                    color: #22c55e;
                }

                .section-title {
                    margin-bottom: 2rem;
                }

                .section-title.align-center { text-align: center; }
                .section-title.align-left { text-align: left; }
                .section-title.align-right { text-align: right; }

                .section-title h2 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                }

                .section-title p {
                    max-width: 42rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #475569;
                }

                .section-title.light h2 { color: #ffffff; }
                .section-title.light p { color: #d1d5db; }

                .section-title__bar {
                    width: 12rem;
                    height: 6px;
                    margin-bottom: 1rem;
                    background: #C5A059;
                }

                .section-title.align-center p,
                .section-title.align-center .section-title__bar {
                    margin-left: auto;
                    margin-right: auto;
                }

                .section-title.align-right p,
                .section-title.align-right .section-title__bar {
                    margin-left: auto;
                }

                .underlined {
                    position: relative;
                    display: inline-block;
                    white-space: nowrap;
                    border-bottom: 6px solid #C5A059;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 5rem 1rem;
                    overflow: hidden;
                }

                .hero__backdrop {
                    position: absolute;
                    inset: 0;
                    opacity: 0.1;
                    pointer-events: none;
                }

                .hero__backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero__content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    text-align: center;
                }

                .hero__badge {
                    display: inline-block;
                    margin-bottom: 1.5rem;
                    padding: 0.25rem 1rem;
                    border: 1px solid rgba(197, 160, 89, 0.3);
                    border-radius: 9999px;
                    background: rgba(197, 160, 89, 0.2);
                    color: #C5A059;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                    margin-bottom: 2rem;
                }

                .hero__subtitle {
                    max-width: 48rem;
                    margin: 0 auto 3rem;
                    font-size: 1.5rem;
                    font-weight: 300;
                    color: #d1d5db;
                }

                .hero__actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    align-items: center;
                }

                .cta-large {
                    font-size: 1.125rem;
                    padding: 1.25rem 2.5rem;
                }

                .secure-note {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .problem, .testimonials {
                    background: #ffffff;
                    padding: 6rem 1rem;
                }

                .problem__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                    margin-top: 4rem;
                }

                .problem-card {
                    padding: 2rem;
                    border-bottom: 4px solid #ef4444;
                    border-radius: 0.75rem;
                    background: #f8fafc;
                    transition: box-shadow 0.3s ease;
                }

                .problem-card:hover {
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .problem-card__icon {
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                    border-radius: 9999px;
                    background: #fee2e2;
                    font-size: 2rem;
                }

                .problem-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .problem-card p, .testimonial__quote, .faq-answer p {
                    color: #475569;
                    line-height: 1.6;
                }

                .solution {
                    background: #f1f5f9;
                    padding: 6rem 1rem;
                }

                .solution__columns {
                    display: flex;
                    align-items: flex-start;
                    gap: 4rem;
                }

                .solution__method, .deliverables {
                    flex: 1;
                }

                .method-list {
                    list-style: none;
                    padding: 0;
                }

                .method-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1rem;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #334155;
                }

                .check {
                    color: #C5A059;
                }

                .solution__cta {
                    margin-top: 3rem;
                    display: flex;
                }

                .deliverables {
                    background: #ffffff;
                    padding: 2.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 32px;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .deliverable {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 0.75rem;
                    padding: 0.75rem;
                    border: 1px solid #f1f5f9;
                    border-radius: 1rem;
                    background: #f8fafc;
                }

                .deliverable:hover {
                    border-color: rgba(197, 160, 89, 0.5);
                }

                .deliverable__icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                    background: #ffffff;
                }

                .deliverable h4 {
                    flex: 1;
                    margin: 0;
                    font-weight: 700;
                    color: #1e293b;
                }

                .deliverable__detail {
                    display: block;
                    font-size: 0.75rem;
                    font-weight: 500;
                    color: #64748b;
                }

                .deliverable__format {
                    padding: 0.25rem 0.5rem;
                    border-radius: 0.25rem;
                    background: #e2e8f0;
                    color: #64748b;
                    font-size: 10px;
                    font-weight: 900;
                }

                .deliverables__footer {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    border-top: 1px solid #f1f5f9;
                    color: #94a3b8;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .testimonials__grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .testimonial {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 2rem;
                    border: 1px solid #f1f5f9;
                    border-radius: 1rem;
                    background: #f8fafc;
                    text-align: center;
                }

                .testimonial img {
                    width: 5rem;
                    height: 5rem;
                    margin-bottom: 1.5rem;
                    border: 4px solid #ffffff;
                    border-radius: 9999px;
                }

                .stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1rem;
                }

                .star {
                    color: #C5A059;
                }

                .testimonial__quote {
                    font-style: italic;
                    font-weight: 500;
                }

                .testimonial__role, .trust-badge span {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                .testimonial__role {
                    color: #94a3b8;
                }

                .pricing {
                    position: relative;
                    padding: 6rem 1rem;
                }

                .pricing__content {
                    max-width: 56rem;
                    margin: 0 auto;
                    text-align: center;
                }

                .offer-card {
                    position: relative;
                    padding: 4rem;
                    border-radius: 40px;
                    background: #ffffff;
                    color: #0B1120;
                }

                .offer-card__badge {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    padding: 0.5rem 2rem;
                    border-radius: 9999px;
                    background: #C5A059;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 900;
                    letter-spacing: 0.1em;
                }

                .offer-card__prices {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-bottom: 2rem;
                }

                .list-price {
                    color: #94a3b8;
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-decoration: line-through;
                }

                .price {
                    margin-top: 0.5rem;
                    font-size: 6rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                }

                .offer-card__access {
                    margin-top: 1rem;
                    color: #C5A059;
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .offer-card__perks {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                    max-width: 32rem;
                    margin: 0 auto 2.5rem;
                    text-align: left;
                    font-weight: 600;
                }

                .perk {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .cta-checkout {
                    width: 100%;
                    margin-bottom: 1.5rem;
                    padding: 2rem;
                    font-size: 1.5rem;
                    letter-spacing: 0.05em;
                }

                .offer-card__guarantee {
                    color: #94a3b8;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .trust-badges {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                    margin-top: 3rem;
                    opacity: 0.7;
                }

                .trust-badge {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 2rem;
                }

                .faq {
                    background: #f8fafc;
                    padding: 6rem 1rem;
                }

                .faq-item {
                    margin-bottom: 1rem;
                    padding: 1.5rem;
                    border: 1px solid #e2e8f0;
                    border-radius: 1rem;
                    background: #ffffff;
                    transition: border-color 0.2s ease;
                }

                .faq-item:hover, .faq-item.open {
                    border-color: #C5A059;
                }

                .faq-question {
                    display: flex;
                    width: 100%;
                    justify-content: space-between;
                    align-items: center;
                    border: none;
                    background: none;
                    cursor: pointer;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-align: left;
                    color: inherit;
                }

                .toggle-icon {
                    color: #94a3b8;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                    color: #C5A059;
                }

                .faq-answer {
                    margin-top: 1rem;
                    font-weight: 500;
                }

                .site-footer {
                    padding: 3rem 1rem;
                    border-top: 1px solid #1e293b;
                    text-align: center;
                }

                .site-footer__brand {
                    margin-bottom: 2rem;
                    color: #C5A059;
                    font-size: 1.5rem;
                    font-weight: 900;
                    font-style: italic;
                    text-transform: uppercase;
                }

                .site-footer__row {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 2rem;
                    color: #64748b;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                }

                .site-footer__links {
                    display: flex;
                    gap: 2rem;
                }

                .site-footer__links a {
                    color: inherit;
                    text-decoration: none;
                }

                .site-footer__links a:hover {
                    color: #ffffff;
                }

                .site-footer__disclaimer {
                    max-width: 56rem;
                    margin: 3rem auto 0;
                    color: #334155;
                    font-size: 10px;
                    text-transform: uppercase;
                }

                .mobile-cta {
                    display: none;
                }

                .cta-full {
                    width: 100%;
                    font-size: 1.125rem;
                }

                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }

                    .hero__subtitle {
                        font-size: 1.125rem;
                    }

                    .hero__actions, .solution__columns, .site-footer__row {
                        flex-direction: column;
                    }

                    .section-title h2 {
                        font-size: 1.5rem;
                    }

                    .problem__grid, .testimonials__grid, .offer-card__perks {
                        grid-template-columns: 1fr;
                    }

                    .trust-badges {
                        grid-template-columns: repeat(2, 1fr);
                    }

                    .offer-card {
                        padding: 2rem;
                    }

                    .price {
                        font-size: 3.75rem;
                    }

                    .mobile-cta {
                        display: block;
                        position: fixed;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        z-index: 50;
                        padding: 1rem;
                        border-top: 1px solid #f1f5f9;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(12px);
                    }
                }
                "#}
            </style>
        </div>
    }
}
