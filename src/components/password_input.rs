//! A password input field with a show/hide affordance.

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Rendering state of a password field.
///
/// Masked is the initial state; an even number of toggles always returns the
/// field to how it started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum PasswordVisibility {
    #[default]
    Masked,
    Revealed,
}

impl PasswordVisibility {
    /// The state after clicking the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }

    /// The `<input>` type attribute that renders this state.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// Label shown on the toggle control.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Masked => "👁️ Visualizar",
            Self::Revealed => "🙈 Ocultar",
        }
    }
}

#[component]
pub fn PasswordInput(
    label: String,
    name: String,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    // Lives only in this signal; a page reload starts masked again.
    let mut visibility = use_signal(PasswordVisibility::default);

    rsx! {
        label {
            "{label}",
            div {
                style: "display: flex; gap: 0.5rem; align-items: flex-start;",
                input {
                    style: "flex-grow: 1;",
                    r#type: "{visibility().input_type()}",
                    name: "{name}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    style: "flex-shrink: 0; white-space: nowrap;".to_string(),
                    on_click: move |_| {
                        let next = visibility().toggled();
                        visibility.set(next);
                    },
                    "{visibility().toggle_label()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_masked() {
        let state = PasswordVisibility::default();
        assert!(state.is_masked());
        assert_eq!(state.input_type(), "password");
        assert_eq!(state.toggle_label(), "👁️ Visualizar");
    }

    #[test]
    fn toggle_reveals_the_field() {
        let state = PasswordVisibility::default().toggled();
        assert!(state.is_revealed());
        assert_eq!(state.input_type(), "text");
        assert_eq!(state.toggle_label(), "🙈 Ocultar");
    }

    #[test]
    fn double_toggle_restores_the_original_state() {
        let start = PasswordVisibility::default();
        let after_two = start.toggled().toggled();
        assert_eq!(after_two, start);
        assert_eq!(after_two.input_type(), start.input_type());
        assert_eq!(after_two.toggle_label(), start.toggle_label());

        let after_four = after_two.toggled().toggled();
        assert_eq!(after_four, start);
    }
}
