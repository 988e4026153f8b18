use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found" style="min-height: 80vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; padding: 2rem;">
            <h1>{"Página não encontrada"}</h1>
            <p>{"O endereço acessado não existe ou foi movido."}</p>
            <Link<Route> to={Route::Home} classes="cta-button">{"Voltar ao início"}</Link<Route>>
        </main>
    }
}
