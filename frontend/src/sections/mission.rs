use yew::prelude::*;

use super::Reveal;
use crate::content::{Pillar, MISSION, VALUES, VISION};

#[function_component(Mission)]
pub fn mission() -> Html {
    let pillar = |p: &Pillar| {
        html! {
            <div class="pillar">
                <h3>{p.title}</h3>
                <p>{p.body}</p>
            </div>
        }
    };

    html! {
        <Reveal id="missao" class={classes!("mission")}>
            <style>
            {r#"
                .pillars {
                    max-width: 1100px;
                    margin: 2rem auto 0;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .pillar { border-left: 3px solid #c9a24b; padding: 0.5rem 1.2rem; }
                @media (max-width: 900px) { .pillars { grid-template-columns: 1fr; } }
            "#}
            </style>
            <span class="eyebrow">{"Propósito"}</span>
            <h2>{"No que acreditamos"}</h2>
            <div class="pillars">
                { pillar(&MISSION) }
                { pillar(&VISION) }
                { pillar(&VALUES) }
            </div>
        </Reveal>
    }
}
