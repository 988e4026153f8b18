use chrono::Datelike;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::portal::gateway::{run_request, AuthFormState, NewsletterSignup, SimulatedPortal};
use crate::whatsapp::whatsapp_link;

#[function_component(NewsletterForm)]
fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let state = use_state(AuthFormState::default);
    let guard = use_mut_ref(AuthFormState::default);

    let onsubmit = {
        let email = email.clone();
        let state = state.clone();
        let guard = guard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = (*email).clone();
            let email = email.clone();
            let state = state.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let on_change = {
                    let state = state.clone();
                    move |s: AuthFormState| state.set(s)
                };
                let outcome = run_request(
                    &guard,
                    on_change,
                    SimulatedPortal::default().subscribe(&address),
                    "Inscrição confirmada. Obrigado!",
                )
                .await;
                if matches!(outcome, Some(AuthFormState::Done(_))) {
                    email.set(String::new());
                }
            });
        })
    };

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    html! {
        <form class="newsletter" {onsubmit}>
            <label>{"Receba conteúdos sobre gestão"}</label>
            <div class="newsletter-row">
                <input type="email" placeholder="Seu e-mail" required=true value={(*email).clone()} {oninput} />
                <button type="submit" disabled={state.is_pending()}>{"Assinar"}</button>
            </div>
            {
                match &*state {
                    AuthFormState::Done(message) => html! { <small class="ok">{message}</small> },
                    AuthFormState::Failed(message) => html! { <small class="fail">{message}</small> },
                    _ => html! {},
                }
            }
        </form>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
            {r#"
                .site-footer { background: #0d1628; color: rgba(255, 255, 255, 0.8); padding: 4rem 1.5rem 2rem; }
                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1.2fr 1fr 1.2fr;
                    gap: 2.5rem;
                }
                .site-footer h4 { color: #fff; margin-top: 0; }
                .site-footer a { color: #c9a24b; text-decoration: none; }
                .site-footer ul { list-style: none; padding: 0; margin: 0; line-height: 2; }
                .newsletter-row { display: flex; gap: 0.5rem; margin-top: 0.6rem; }
                .newsletter input { flex: 1; border-radius: 6px; border: none; padding: 0.6rem; }
                .newsletter button { background: #c9a24b; border: none; border-radius: 6px; padding: 0 1rem; font-weight: 700; cursor: pointer; }
                .newsletter .ok { color: #86efac; }
                .newsletter .fail { color: #fca5a5; }
                .footer-bottom { text-align: center; margin-top: 3rem; font-size: 0.85rem; opacity: 0.7; }
                @media (max-width: 900px) { .footer-grid { grid-template-columns: 1fr; } }
            "#}
            </style>
            <div class="footer-grid">
                <div>
                    <h4>{"Átria Consultoria"}</h4>
                    <p>{"Gestão empresarial para pequenas e médias empresas. Juiz de Fora, MG."}</p>
                </div>
                <div>
                    <h4>{"Contato"}</h4>
                    <ul>
                        <li>
                            <a href={whatsapp_link(config::WHATSAPP_NUMBER, None)} target="_blank" rel="noopener noreferrer">
                                {format!("WhatsApp {}", config::WHATSAPP_NUMBER)}
                            </a>
                        </li>
                        <li><a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a></li>
                        <li><a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                        <li><a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                    </ul>
                </div>
                <NewsletterForm />
            </div>
            <p class="footer-bottom">{format!("© {} Átria Consultoria. Todos os direitos reservados.", year)}</p>
        </footer>
    }
}
