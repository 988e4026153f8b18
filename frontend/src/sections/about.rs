use yew::prelude::*;

use crate::config;
use crate::content::{Metric, METRICS};
use crate::hooks::use_reveal;
use super::Reveal;

#[derive(Properties, PartialEq)]
struct MetricsChartProps {
    metrics: &'static [Metric],
}

/// Horizontal bars that grow to their value once the chart is on screen.
#[function_component(MetricsChart)]
fn metrics_chart(props: &MetricsChartProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div class="metrics-chart" ref={node}>
            { for props.metrics.iter().map(|metric| {
                let width = if revealed { metric.value } else { 0 };
                html! {
                    <div class="metric" key={metric.label}>
                        <div class="metric-label">
                            <span>{metric.label}</span>
                            <strong>{format!("{}%", metric.value)}</strong>
                        </div>
                        <div class="metric-track">
                            <div class="metric-bar" style={format!("width: {}%;", width)}></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <Reveal id="sobre" class={classes!("about")}>
            <style>
            {r#"
                .about-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .about img { width: 100%; border-radius: 16px; }
                .metrics-chart { display: flex; flex-direction: column; gap: 1rem; margin-top: 2rem; }
                .metric-label { display: flex; justify-content: space-between; font-size: 0.95rem; }
                .metric-track { background: #e5e7eb; border-radius: 999px; height: 10px; overflow: hidden; }
                .metric-bar { background: #c9a24b; height: 100%; border-radius: 999px; transition: width 1.2s ease-out; }
                @media (max-width: 900px) {
                    .about-grid { grid-template-columns: 1fr; }
                }
            "#}
            </style>
            <div class="about-grid">
                <div>
                    <span class="eyebrow">{"Quem somos"}</span>
                    <h2>{"Mais de 12 anos ao lado de quem empreende"}</h2>
                    <p>
                        {"A Átria nasceu em Juiz de Fora para levar às pequenas e médias empresas o mesmo método de gestão usado pelas grandes. Trabalhamos dentro do seu negócio, com a sua equipe, até que o resultado apareça no caixa."}
                    </p>
                    <p>
                        {"Cada projeto começa com um diagnóstico e termina com indicadores que você continua acompanhando sozinho."}
                    </p>
                    <MetricsChart metrics={METRICS} />
                </div>
                <img src={config::asset("about-team.jpg")} alt="Equipe da Átria Consultoria em reunião" loading="lazy" />
            </div>
        </Reveal>
    }
}
