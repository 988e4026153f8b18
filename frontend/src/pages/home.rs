use yew::prelude::*;

use crate::contact::trigger::ContactButton;
use crate::sections::{
    about::About, hero::Hero, mission::Mission, partners::Partners, services::Services,
    testimonials::Testimonials,
};

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing-page">
            <style>
            {r#"
                .landing-page section { padding: 6rem 1.5rem; }
                .landing-page h2 { font-size: clamp(1.8rem, 3.5vw, 2.6rem); color: inherit; margin: 0.4rem 0 1rem; }
                .eyebrow { text-transform: uppercase; letter-spacing: 0.12em; font-size: 0.8rem; color: #c9a24b; font-weight: 700; }
                .reveal { opacity: 0; transform: translateY(40px); transition: opacity 0.8s ease, transform 0.8s ease; }
                .reveal.visible { opacity: 1; transform: none; }
                .contact-cta { background: #c9a24b; color: #14213d; text-align: center; }
                .contact-cta .cta-button { background: #14213d; color: #fff; }
            "#}
            </style>
            <Hero />
            <About />
            <Services />
            <Mission />
            <Testimonials />
            <Partners />
            <section id="contato" class="contact-cta">
                <h2>{"Vamos conversar sobre o seu negócio?"}</h2>
                <p>{"O primeiro diagnóstico é gratuito e sem compromisso."}</p>
                <ContactButton message={"Olá! Quero conversar sobre o meu negócio.".to_string()}>
                    {"Entrar em contato"}
                </ContactButton>
            </section>
        </main>
    }
}
