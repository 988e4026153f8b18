use web_sys::MouseEvent;
use yew::prelude::*;

use super::Reveal;
use crate::contact::trigger::ContactButton;
use crate::content::{featured_services, services_in, Service, ServiceCategory};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static Service,
    #[prop_or_default]
    highlight: bool,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;
    html! {
        <article class={classes!("service-card", props.highlight.then_some("highlight"))}>
            <span class="service-category">{service.category.label()}</span>
            <h3>{service.title}</h3>
            <p>{service.summary}</p>
            <ContactButton message={service.contact_message()} class={classes!("link-button")}>
                {"Quero saber mais →"}
            </ContactButton>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let category = use_state(|| None::<ServiceCategory>);

    let filter_button = |label: &'static str, value: Option<ServiceCategory>| {
        let category = category.clone();
        let active = *category == value;
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            category.set(value);
        });
        html! {
            <button class={classes!("filter-chip", active.then_some("active"))} {onclick}>
                {label}
            </button>
        }
    };

    html! {
        <Reveal id="servicos" class={classes!("services")}>
            <style>
            {r#"
                .services-inner { max-width: 1100px; margin: 0 auto; }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 14px;
                    padding: 1.8rem;
                    box-shadow: 0 8px 24px rgba(20, 33, 61, 0.08);
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .service-card.highlight { border-top: 4px solid #c9a24b; }
                .service-category { font-size: 0.8rem; text-transform: uppercase; color: #c9a24b; letter-spacing: 0.08em; }
                .service-card p { flex: 1; color: #4b5563; }
                .link-button { background: none; border: none; color: #14213d; font-weight: 700; cursor: pointer; padding: 0; text-align: left; }
                .filters { display: flex; gap: 0.6rem; flex-wrap: wrap; margin-top: 3rem; }
                .filter-chip { border: 1px solid #d1d5db; background: #fff; border-radius: 999px; padding: 0.45rem 1rem; cursor: pointer; }
                .filter-chip.active { background: #14213d; border-color: #14213d; color: #fff; }
            "#}
            </style>
            <div class="services-inner">
                <span class="eyebrow">{"Serviços"}</span>
                <h2>{"Soluções para cada fase do seu negócio"}</h2>
                <div class="services-grid">
                    { for featured_services().map(|service| html! {
                        <ServiceCard key={service.slug} {service} highlight=true />
                    }) }
                </div>

                <div class="filters">
                    { filter_button("Todos", None) }
                    { for ServiceCategory::ALL.into_iter().map(|c| filter_button(c.label(), Some(c))) }
                </div>
                <div class="services-grid">
                    { for services_in(*category).filter(|s| !s.featured).map(|service| html! {
                        <ServiceCard key={service.slug} {service} />
                    }) }
                </div>
            </div>
        </Reveal>
    }
}
