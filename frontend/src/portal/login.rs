use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::portal::gateway::{run_request, AuthFormState, ClientPortal, Credentials, SimulatedPortal};
use crate::Route;

pub const AUTH_PAGE_STYLE: &str = r#"
    .auth-page {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 2rem;
        background: linear-gradient(135deg, #14213d 0%, #1f3b73 100%);
    }
    .auth-container {
        background: #fff;
        border-radius: 16px;
        padding: 3rem;
        width: 100%;
        max-width: 440px;
        box-shadow: 0 8px 32px rgba(0, 0, 0, 0.3);
    }
    .auth-container h1 { font-size: 1.8rem; margin: 0 0 0.5rem; text-align: center; color: #14213d; }
    .auth-container p { text-align: center; color: #4b5563; font-size: 0.95rem; }
    .auth-container form { display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }
    .auth-container input { border: 1px solid #d1d5db; border-radius: 8px; padding: 0.8rem; font: inherit; }
    .auth-container button {
        background: #c9a24b;
        color: #14213d;
        border: none;
        border-radius: 8px;
        padding: 0.85rem;
        font-weight: 700;
        cursor: pointer;
    }
    .auth-container button:disabled { opacity: 0.6; cursor: wait; }
    .auth-links { display: flex; justify-content: space-between; margin-top: 1.2rem; font-size: 0.9rem; }
    .auth-links a { color: #1f3b73; }
    .error-message { color: #b91c1c; text-align: center; }
    .success-message { color: #15803d; text-align: center; }
    @media (max-width: 768px) {
        .auth-container { padding: 2rem; }
    }
"#;

pub fn status_message(state: &AuthFormState) -> Html {
    match state {
        AuthFormState::Pending => html! { <p>{"Aguarde..."}</p> },
        AuthFormState::Failed(message) => html! { <div class="error-message">{message}</div> },
        AuthFormState::Done(message) => html! { <div class="success-message">{message}</div> },
        AuthFormState::Idle => html! {},
    }
}

#[function_component]
pub fn ClientLogin() -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let state = use_state(AuthFormState::default);
    let guard = use_mut_ref(AuthFormState::default);

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let state = state.clone();
        let guard = guard.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let credentials = Credentials {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let state = state.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let portal = SimulatedPortal::default();
                let on_change = {
                    let state = state.clone();
                    move |s: AuthFormState| state.set(s)
                };
                run_request(&guard, on_change, portal.login(&credentials), "Login realizado!").await;
            });
        })
    };

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    html! {
        <div class="auth-page">
            <style>{AUTH_PAGE_STYLE}</style>
            <div class="auth-container">
                <h1>{"Área do Cliente"}</h1>
                <p>{"Acesse relatórios, indicadores e documentos do seu projeto."}</p>
                <form {onsubmit}>
                    <input type="email" placeholder="E-mail" required=true value={(*email).clone()} oninput={on_email} />
                    <input type="password" placeholder="Senha" required=true value={(*password).clone()} oninput={on_password} />
                    { status_message(&state) }
                    <button type="submit" disabled={state.is_pending()}>
                        { if state.is_pending() { "Entrando..." } else { "Entrar" } }
                    </button>
                </form>
                <div class="auth-links">
                    <Link<Route> to={Route::RecoverPassword}>{"Esqueci minha senha"}</Link<Route>>
                    <Link<Route> to={Route::Home}>{"Voltar ao site"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
