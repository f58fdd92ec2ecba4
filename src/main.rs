// The client-side application for the bingo ticket-sales counter.

use dioxus::prelude::*;

mod components;
mod currency;
mod sale_config;
mod screens;

use components::pico::Container;
use currency::BrlAmount;
use sale_config::{EventOption, SaleConfig};
use screens::login::LoginScreen;
use screens::sale::SaleScreen;

/// Enum to represent the different screens in our application.
///
/// The screen in effect decides which bindings exist at all: the login screen
/// owns the password toggle, the sale screen owns the cost calculator.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum Screen {
    #[default]
    Login,
    Sale,
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Sale => "Nova Venda",
        }
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Stand-in for the payload the server template renders into the page: the
/// event catalog plus an optional pre-seeded unit price.
///
/// `None` exercises the fallback path, where the selected event's unit value
/// becomes the price.
fn seed_config() -> SaleConfig {
    let events = vec![
        EventOption {
            id: 1,
            name: "Bingo de São João".to_string(),
            unit_value: BrlAmount::new_from_minor(15050),
        },
        EventOption {
            id: 2,
            name: "Bingo Beneficente".to_string(),
            unit_value: BrlAmount::new_from_minor(2500),
        },
    ];
    SaleConfig::resolve(None, events, 0)
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    use_context_provider(seed_config);

    let mut active_screen = use_signal(Screen::default);

    rsx! {
        Container {
            header {
                nav {
                    ul {
                        li {
                            h1 {
                                style: "margin: 0; font-size: 1.5rem;",
                                "Bingo Vendas"
                            }
                        }
                    }
                    ul {
                        li { "{active_screen().name()}" }
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Login => rsx! {
                        LoginScreen {
                            on_login: move |_| active_screen.set(Screen::Sale),
                        }
                    },
                    Screen::Sale => rsx! {
                        SaleScreen {}
                    },
                }
            }
        }
    }
}
