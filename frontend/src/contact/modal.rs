use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::contact::client::Web3FormsClient;
use crate::contact::intent::use_contact_intent;
use crate::contact::redirect::{follow_up_success, BrowserNavigator, BrowserTimers};
use crate::contact::submission::{
    run_submission, ContactFormFields, SubmissionMachine, SubmissionState, SubmitAttempt,
};
use crate::whatsapp::{navigate, whatsapp_link};

/// Mounted once at the root; visible while the contact intent is open.
#[function_component(ContactModal)]
pub fn contact_modal() -> Html {
    let intent = use_contact_intent();
    let fields = use_state(|| ContactFormFields::with_message(intent.default_message()));
    let state = use_state(SubmissionState::default);
    let machine = use_mut_ref(SubmissionMachine::default);

    // Re-seed the message every time the modal is opened from a trigger
    {
        let fields = fields.clone();
        use_effect_with_deps(
            move |(is_open, message)| {
                if *is_open {
                    fields.set(ContactFormFields {
                        message: message.clone(),
                        ..(*fields).clone()
                    });
                }
                || ()
            },
            (intent.is_open(), intent.default_message()),
        );
    }

    let close = {
        let intent = intent.clone();
        let state = state.clone();
        let machine = machine.clone();
        Callback::from(move |_: ()| {
            machine.borrow_mut().reset();
            state.set(SubmissionState::Idle);
            intent.close();
        })
    };

    {
        let close = close.clone();
        let is_open = intent.is_open();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                close.emit(());
            }
        });
    }

    let on_name = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFormFields {
                name: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let on_email = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            fields.set(ContactFormFields {
                email: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let on_message = {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            fields.set(ContactFormFields {
                message: input.value(),
                ..(*fields).clone()
            });
        })
    };

    let onsubmit = {
        let intent = intent.clone();
        let fields = fields.clone();
        let state = state.clone();
        let machine = machine.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let intent = intent.clone();
            let fields = fields.clone();
            let state = state.clone();
            let machine = machine.clone();
            let submitted = (*fields).clone();

            spawn_local(async move {
                let client = Web3FormsClient::default();
                let on_change = {
                    let state = state.clone();
                    move |s: &SubmissionState| state.set(s.clone())
                };
                let attempt = match run_submission(&machine, &client, &submitted, on_change).await {
                    SubmitAttempt::Abandoned => {
                        // Re-render so the submit button comes back
                        state.set(SubmissionState::Idle);
                        return;
                    }
                    finished => match finished.succeeded() {
                        Some(attempt) => attempt,
                        None => return,
                    },
                };

                let clear_fields = {
                    let fields = fields.clone();
                    let intent = intent.clone();
                    move || fields.set(ContactFormFields::with_message(intent.default_message()))
                };
                let close = move || {
                    state.set(SubmissionState::Idle);
                    intent.close();
                };
                follow_up_success(
                    &machine,
                    attempt,
                    &submitted,
                    &BrowserTimers,
                    &BrowserNavigator,
                    clear_fields,
                    close,
                )
                .await;
            });
        })
    };

    let go_straight = {
        let intent = intent.clone();
        Callback::from(move |_: MouseEvent| {
            info!("skipping the form, straight to WhatsApp");
            let message = intent.default_message();
            navigate(&whatsapp_link(config::WHATSAPP_NUMBER, Some(&message)));
            intent.close();
        })
    };

    if !intent.is_open() {
        return html! {};
    }

    let on_backdrop = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_close_button = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let busy = state.is_in_flight() || machine.borrow().is_in_flight();

    html! {
        <div class="contact-modal-backdrop" onclick={on_backdrop}>
            <style>
            {r#"
                .contact-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(10, 16, 28, 0.72);
                    backdrop-filter: blur(4px);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                    padding: 1rem;
                }
                .contact-modal {
                    position: relative;
                    background: #fff;
                    color: #14213d;
                    border-radius: 16px;
                    padding: 2.5rem 2rem 2rem;
                    width: 100%;
                    max-width: 480px;
                    box-shadow: 0 24px 48px rgba(0, 0, 0, 0.35);
                }
                .contact-modal h2 {
                    margin: 0 0 0.5rem;
                    font-size: 1.6rem;
                }
                .contact-modal .close-button {
                    position: absolute;
                    top: 0.75rem;
                    right: 1rem;
                    border: none;
                    background: none;
                    font-size: 1.6rem;
                    cursor: pointer;
                    color: #6b7280;
                }
                .contact-modal form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.9rem;
                    margin-top: 1.2rem;
                }
                .contact-modal input,
                .contact-modal textarea {
                    border: 1px solid #d1d5db;
                    border-radius: 8px;
                    padding: 0.75rem;
                    font: inherit;
                }
                .contact-modal textarea { min-height: 110px; resize: vertical; }
                .contact-modal .submit-button {
                    background: #c9a24b;
                    color: #14213d;
                    border: none;
                    border-radius: 8px;
                    padding: 0.85rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .contact-modal .submit-button:disabled { opacity: 0.6; cursor: wait; }
                .contact-modal .whatsapp-direct {
                    margin-top: 0.8rem;
                    width: 100%;
                    background: none;
                    border: 1px solid #25d366;
                    color: #128c7e;
                    border-radius: 8px;
                    padding: 0.75rem;
                    cursor: pointer;
                }
                .contact-modal .status { font-size: 0.9rem; margin: 0; }
                .contact-modal .status.error { color: #b91c1c; }
                .contact-modal .status.success { color: #15803d; }
                .loading-spinner {
                    display: inline-block;
                    width: 16px;
                    height: 16px;
                    border: 3px solid rgba(20, 33, 61, 0.2);
                    border-radius: 50%;
                    border-top-color: #14213d;
                    animation: spin 1s ease-in-out infinite;
                    vertical-align: middle;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
            "#}
            </style>
            <div class="contact-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="close-button" aria-label="Fechar" onclick={on_close_button}>{"×"}</button>
                <h2>{"Fale com a gente"}</h2>
                <p>{"Conte um pouco sobre o seu desafio. Respondemos pelo WhatsApp."}</p>
                <form {onsubmit}>
                    <input
                        type="text"
                        placeholder="Seu nome"
                        required=true
                        value={fields.name.clone()}
                        oninput={on_name}
                    />
                    <input
                        type="email"
                        placeholder="Seu e-mail"
                        required=true
                        value={fields.email.clone()}
                        oninput={on_email}
                    />
                    <textarea
                        placeholder="Sua mensagem"
                        required=true
                        value={fields.message.clone()}
                        oninput={on_message}
                    />
                    if let Some(message) = state.error_message() {
                        <p class="status error">{message}</p>
                    }
                    if *state == SubmissionState::Success {
                        <p class="status success">{"Mensagem enviada! Abrindo o WhatsApp..."}</p>
                    }
                    <button type="submit" class="submit-button" disabled={busy}>
                        if busy {
                            <><span class="loading-spinner"></span>{" Enviando..."}</>
                        } else {
                            {"Enviar mensagem"}
                        }
                    </button>
                </form>
                <button type="button" class="whatsapp-direct" onclick={go_straight}>
                    {"Prefiro ir direto para o WhatsApp"}
                </button>
            </div>
        </div>
    }
}
