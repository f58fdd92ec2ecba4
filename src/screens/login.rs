//=============================================================================
// File: src/screens/login.rs
//=============================================================================
use crate::components::password_input::PasswordInput;
use crate::components::pico::{Button, Card, Input, Modal};
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

#[component]
pub fn LoginScreen(on_login: EventHandler<()>) -> Element {
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_error_modal = use_signal(|| false);

    rsx! {
        Modal {
            is_open: show_error_modal,
            title: "Erro".to_string(),
            p { "Usuário ou senha inválidos." }
            footer {
                Button {
                    on_click: move |_| show_error_modal.set(false),
                    "Fechar"
                }
            }
        }

        Card {
            h3 { "Login" }
            Input {
                label: "Usuário".to_string(),
                name: "usuario",
                placeholder: "Digite o usuário...",
                value: "{username}",
                on_input: move |event: FormEvent| username.set(event.value()),
            }
            PasswordInput {
                label: "Senha".to_string(),
                name: "senha",
                value: "{password}",
                on_input: move |value: String| password.set(value),
            }
            Button {
                on_click: move |_| {
                    // Client-side guard only; the credential check itself is
                    // the server's job.
                    if username.read().trim().is_empty() || password.read().is_empty() {
                        show_error_modal.set(true);
                    } else {
                        info!("login accepted for {}, opening sale screen", username());
                        on_login.call(());
                    }
                },
                "Entrar"
            }
        }
    }
}
