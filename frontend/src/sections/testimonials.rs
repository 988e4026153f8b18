use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::Reveal;
use crate::config;
use crate::content::TESTIMONIALS;
use crate::hooks::carousel_step;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let index = use_state(|| 0usize);
    let paused = use_state(|| false);
    let len = TESTIMONIALS.len();

    {
        let index = index.clone();
        // 0 stops the interval while the pointer is over the carousel
        let millis = if *paused { 0 } else { config::CAROUSEL_INTERVAL_MS };
        use_interval(move || index.set(carousel_step(*index, len, 1)), millis);
    }

    let step = |delta: isize| {
        let index = index.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            index.set(carousel_step(*index, len, delta));
        })
    };
    let on_enter = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(true))
    };
    let on_leave = {
        let paused = paused.clone();
        Callback::from(move |_: MouseEvent| paused.set(false))
    };

    html! {
        <Reveal id="depoimentos" class={classes!("testimonials")}>
            <style>
            {r#"
                .testimonials { background: #14213d; color: #fff; text-align: center; }
                .carousel { position: relative; max-width: 760px; margin: 2rem auto 0; overflow: hidden; }
                .carousel-track { display: flex; transition: transform 0.6s ease; }
                .testimonial { min-width: 100%; padding: 0 3rem; box-sizing: border-box; }
                .testimonial blockquote { font-size: 1.25rem; font-style: italic; margin: 0 0 1.2rem; }
                .testimonial cite { font-style: normal; color: #c9a24b; }
                .carousel-control {
                    position: absolute;
                    top: 40%;
                    background: rgba(255, 255, 255, 0.12);
                    border: none;
                    color: #fff;
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    cursor: pointer;
                }
                .carousel-control.prev { left: 0; }
                .carousel-control.next { right: 0; }
                .carousel-dots { display: flex; gap: 0.5rem; justify-content: center; margin-top: 1.5rem; }
                .carousel-dots span { width: 8px; height: 8px; border-radius: 50%; background: rgba(255, 255, 255, 0.3); }
                .carousel-dots span.active { background: #c9a24b; }
            "#}
            </style>
            <span class="eyebrow">{"Depoimentos"}</span>
            <h2>{"O que dizem nossos clientes"}</h2>
            <div class="carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
                <div class="carousel-track" style={format!("transform: translateX(-{}%);", *index * 100)}>
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <figure class="testimonial" key={t.author}>
                            <blockquote>{format!("“{}”", t.quote)}</blockquote>
                            <cite>{format!("{} · {}, {}", t.author, t.role, t.company)}</cite>
                        </figure>
                    }) }
                </div>
                <button class="carousel-control prev" aria-label="Anterior" onclick={step(-1)}>{"‹"}</button>
                <button class="carousel-control next" aria-label="Próximo" onclick={step(1)}>{"›"}</button>
            </div>
            <div class="carousel-dots">
                { for (0..len).map(|i| html! {
                    <span class={classes!((i == *index).then_some("active"))}></span>
                }) }
            </div>
        </Reveal>
    }
}
