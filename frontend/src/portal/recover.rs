use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::portal::gateway::{run_request, AuthFormState, ClientPortal, SimulatedPortal};
use crate::portal::login::{status_message, AUTH_PAGE_STYLE};
use crate::Route;

const RECOVERY_SENT: &str =
    "Se o e-mail estiver cadastrado, você receberá as instruções em instantes.";

#[function_component]
pub fn PasswordRecovery() -> Html {
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
            let state = state.clone();
            let guard = guard.clone();
            spawn_local(async move {
                let portal = SimulatedPortal::default();
                let on_change = {
                    let state = state.clone();
                    move |s: AuthFormState| state.set(s)
                };
                run_request(&guard, on_change, portal.recover_password(&address), RECOVERY_SENT).await;
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

    html! {
        <div class="auth-page">
            <style>{AUTH_PAGE_STYLE}</style>
            <div class="auth-container">
                <h1>{"Recuperar senha"}</h1>
                <p>{"Informe o e-mail de acesso e enviaremos um link para criar uma nova senha."}</p>
                <form {onsubmit}>
                    <input type="email" placeholder="E-mail" required=true value={(*email).clone()} oninput={on_email} />
                    { status_message(&state) }
                    <button type="submit" disabled={state.is_pending()}>
                        { if state.is_pending() { "Enviando..." } else { "Enviar link" } }
                    </button>
                </form>
                <div class="auth-links">
                    <Link<Route> to={Route::ClientLogin}>{"Voltar ao login"}</Link<Route>>
                    <Link<Route> to={Route::Home}>{"Voltar ao site"}</Link<Route>>
                </div>
            </div>
        </div>
    }
}
