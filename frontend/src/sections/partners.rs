use yew::prelude::*;

use super::Reveal;
use crate::config;
use crate::content::PARTNERS;

#[function_component(Partners)]
pub fn partners() -> Html {
    // Rendered twice so the CSS loop can wrap without a gap
    let logos = PARTNERS.iter().chain(PARTNERS.iter()).map(|partner| {
        html! {
            <img class="partner-logo" src={config::asset(partner.logo)} alt={partner.name} title={partner.name} loading="lazy" />
        }
    });

    html! {
        <Reveal id="parceiros" class={classes!("partners")}>
            <style>
            {r#"
                .partners { text-align: center; overflow: hidden; }
                .partners-strip { overflow: hidden; margin-top: 2rem; }
                .partners-track { display: flex; gap: 4rem; width: max-content; animation: partners-loop 30s linear infinite; }
                .partners-strip:hover .partners-track { animation-play-state: paused; }
                .partner-logo { height: 56px; filter: grayscale(1); opacity: 0.7; }
                .partner-logo:hover { filter: none; opacity: 1; }
                @keyframes partners-loop { to { transform: translateX(-50%); } }
            "#}
            </style>
            <span class="eyebrow">{"Parceiros"}</span>
            <h2>{"Quem caminha com a gente"}</h2>
            <div class="partners-strip">
                <div class="partners-track">
                    { for logos }
                </div>
            </div>
        </Reveal>
    }
}
