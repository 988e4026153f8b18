use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod sections;
mod whatsapp;
mod contact {
    pub mod client;
    pub mod intent;
    pub mod modal;
    pub mod redirect;
    pub mod scroll_lock;
    pub mod submission;
    pub mod trigger;
}
mod portal {
    pub mod gateway;
    pub mod login;
    pub mod recover;
}
mod pages {
    pub mod home;
    pub mod not_found;
}
mod components {
    pub mod footer;
}

use components::footer::Footer;
use contact::{intent::ContactIntentProvider, modal::ContactModal, trigger::ContactButton};
use pages::{home::Home, not_found::NotFound};
use portal::{login::ClientLogin, recover::PasswordRecovery};

/// Past this many pixels the nav bar turns solid.
const NAV_SOLID_AFTER: f64 = 80.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/area-do-cliente")]
    ClientLogin,
    #[at("/recuperar-senha")]
    RecoverPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::ClientLogin => {
            info!("Rendering client login page");
            html! { <ClientLogin /> }
        }
        Route::RecoverPassword => {
            info!("Rendering password recovery page");
            html! { <PasswordRecovery /> }
        }
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        }
    }
}

/// Sections reachable from the nav, as (anchor, label).
const NAV_SECTIONS: &[(&str, &str)] = &[
    ("sobre", "Sobre"),
    ("servicos", "Serviços"),
    ("missao", "Propósito"),
    ("depoimentos", "Depoimentos"),
    ("parceiros", "Parceiros"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SOLID_AFTER;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then_some("scrolled"))}>
            <style>
            {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled { background: #14213d; box-shadow: 0 4px 16px rgba(0, 0, 0, 0.2); }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { display: flex; align-items: center; gap: 0.5rem; color: #fff; font-weight: 800; text-decoration: none; font-size: 1.3rem; }
                .nav-logo img { height: 32px; }
                .nav-right { display: flex; align-items: center; gap: 1.4rem; }
                .nav-link { color: rgba(255, 255, 255, 0.85); text-decoration: none; }
                .nav-link:hover { color: #c9a24b; }
                .nav-login-button { color: #fff; border: 1px solid rgba(255, 255, 255, 0.5); border-radius: 6px; padding: 0.45rem 0.9rem; text-decoration: none; }
                .cta-button {
                    background: #c9a24b;
                    color: #14213d;
                    border: none;
                    border-radius: 8px;
                    padding: 0.9rem 1.6rem;
                    font-weight: 700;
                    cursor: pointer;
                    text-decoration: none;
                }
                .top-nav .cta-button { padding: 0.55rem 1rem; }
                .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #fff; }
                @media (max-width: 900px) {
                    .burger-menu { display: block; }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #14213d;
                        padding: 1.5rem;
                    }
                    .nav-right.mobile-menu-open { display: flex; }
                }
            "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <img src={config::asset("logo.svg")} alt="" />
                    {"Átria"}
                </Link<Route>>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_SECTIONS.iter().map(|(anchor, label)| html! {
                        <a href={format!("/#{}", anchor)} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::ClientLogin} classes="nav-login-button">
                            {"Área do Cliente"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <ContactButton>{"Fale conosco"}</ContactButton>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ContactIntentProvider>
                <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #14213d;
                        background: #f7f7f5;
                    }
                    html { scroll-behavior: smooth; }
                "#}
                </style>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
                <ContactModal />
            </ContactIntentProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
