use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::contact::trigger::ContactButton;
use crate::hooks::parallax_offset;

const PARALLAX_SPEED: f64 = 0.4;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let background_style = format!(
        "background-image: url('{}'); transform: translateY({}px);",
        config::asset("hero-office.jpg"),
        parallax_offset(scroll_y, PARALLAX_SPEED)
    );

    html! {
        <header id="inicio" class="hero">
            <style>
            {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                    color: #fff;
                }
                .hero-background {
                    position: absolute;
                    inset: -10% 0 0 0;
                    background-size: cover;
                    background-position: center;
                    z-index: -2;
                    will-change: transform;
                }
                .hero::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(120deg, rgba(20, 33, 61, 0.92), rgba(20, 33, 61, 0.55));
                    z-index: -1;
                }
                .hero-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 8rem 1.5rem 4rem;
                }
                .hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    line-height: 1.1;
                    margin: 0 0 1.2rem;
                    max-width: 760px;
                }
                .hero-subtitle {
                    font-size: 1.2rem;
                    max-width: 620px;
                    color: rgba(255, 255, 255, 0.85);
                    margin-bottom: 2rem;
                }
                .hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
                .hero .ghost-button {
                    background: transparent;
                    border: 2px solid rgba(255, 255, 255, 0.7);
                    color: #fff;
                    padding: 0.9rem 1.6rem;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                }
            "#}
            </style>
            <div class="hero-background" style={background_style}></div>
            <div class="hero-content">
                <h1>{"Gestão que transforma empresas em negócios que crescem"}</h1>
                <p class="hero-subtitle">
                    {"Estratégia, finanças, processos e pessoas. Consultoria próxima, com método e resultados que você acompanha mês a mês."}
                </p>
                <div class="hero-actions">
                    <ContactButton message={"Olá! Gostaria de agendar um diagnóstico gratuito.".to_string()}>
                        {"Agende um diagnóstico"}
                    </ContactButton>
                    <ContactButton class={classes!("ghost-button")}>
                        {"Fale com um consultor"}
                    </ContactButton>
                </div>
            </div>
        </header>
    }
}
