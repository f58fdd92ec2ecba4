//=============================================================================
// File: src/screens/sale.rs
//=============================================================================
use crate::components::pico::{Button, Card, Grid, Input};
use crate::sale_config::SaleConfig;
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

/// Parses the quantity field's raw text. Anything unparseable counts as zero.
///
/// Negative numeric input is not rejected here; it flows through to the total
/// and keeps the confirmation control hidden.
fn parse_quantity(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}

/// Display style of the confirmation control: visible only for a positive
/// ticket count, toggled via the style rather than a hidden attribute.
fn confirm_display(quantity: i64) -> &'static str {
    if quantity > 0 {
        "block"
    } else {
        "none"
    }
}

#[component]
pub fn SaleScreen() -> Element {
    let config = use_context::<SaleConfig>();

    // The price was resolved once at startup; changing the event selection
    // below does not update it.
    let unit_price = config.unit_price;
    let initial_selection = config.selected;

    let mut quantity_str = use_signal(String::new);
    let mut selected_event = use_signal(move || initial_selection);
    let mut sale_registered = use_signal(|| false);

    // --- Derived State ---
    let quantity = use_memo(move || parse_quantity(&quantity_str()));
    let total = use_memo(move || unit_price.mul_quantity(quantity()));

    let mut reset_screen = move || {
        quantity_str.set(String::new());
        sale_registered.set(false);
    };

    rsx! {
        if sale_registered() {
            Card {
                h3 { "Venda Registrada" }
                p { "Venda de {quantity()} cartela(s) registrada com sucesso." }
                p { "Valor: {total().to_string_with_symbol()}" }
                Button {
                    on_click: move |_| reset_screen(),
                    "Nova Venda"
                }
            }
        } else {
            Card {
                h3 { "Nova Venda" }
                Grid {
                    label {
                        "Evento"
                        select {
                            name: "id_evento",
                            onchange: move |event: FormEvent| {
                                if let Ok(index) = event.value().parse::<usize>() {
                                    selected_event.set(index);
                                }
                            },
                            for (i, event_option) in config.events.iter().enumerate() {
                                option {
                                    key: "{event_option.id}",
                                    value: "{i}",
                                    selected: selected_event() == i,
                                    "{event_option.name} ({event_option.unit_value.to_string_with_symbol()})"
                                }
                            }
                        }
                    }
                    Input {
                        label: "Quantidade".to_string(),
                        name: "quantidade",
                        input_type: "number".to_string(),
                        placeholder: "0",
                        value: "{quantity_str}",
                        on_input: move |event: FormEvent| quantity_str.set(event.value()),
                    }
                }
                p { "Valor unitário: {unit_price.to_string_with_symbol()}" }
                h4 {
                    style: "margin-top: 1rem; text-align: right;",
                    "Custo Total: {total().to_string_with_symbol()}"
                }
                button {
                    value: "confirmar_venda",
                    style: "display: {confirm_display(quantity())};",
                    onclick: move |_| {
                        info!(
                            "sale confirmed: {} ticket(s), total {}",
                            quantity(),
                            total().to_string_with_symbol()
                        );
                        sale_registered.set(true);
                    },
                    "Confirmar Venda"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::BrlAmount;
    use crate::sale_config::EventOption;

    #[test]
    fn quantity_parses_plain_integers() {
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity(" 12 "), 12);
    }

    #[test]
    fn non_numeric_quantity_counts_as_zero() {
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("1.5"), 0);
    }

    #[test]
    fn negative_quantity_passes_through() {
        assert_eq!(parse_quantity("-3"), -3);
    }

    #[test]
    fn total_is_quantity_times_unit_price() {
        let unit = BrlAmount::new_from_str("150.50").unwrap();
        for quantity in 0..10 {
            assert_eq!(
                unit.mul_quantity(quantity).as_minor_units(),
                quantity * 15050
            );
        }
    }

    #[test]
    fn confirmation_control_boundary_is_exactly_zero() {
        assert_eq!(confirm_display(0), "none");
        assert_eq!(confirm_display(1), "block");
        assert_eq!(confirm_display(-2), "none");
    }

    #[test]
    fn fresh_sale_screen_renders_a_zero_total() {
        // Unit price unset on the server side, selected option carries the
        // value; an untouched quantity field must render R$ 0,00 with the
        // confirmation control hidden.
        let events = vec![EventOption {
            id: 1,
            name: "Bingo de São João".to_string(),
            unit_value: BrlAmount::new_from_str("150.50").unwrap(),
        }];
        let config = SaleConfig::resolve(None, events, 0);
        assert_eq!(config.unit_price, BrlAmount::new_from_minor(15050));

        let quantity = parse_quantity("");
        let total = config.unit_price.mul_quantity(quantity);
        assert_eq!(total.to_string_with_symbol(), "R$ 0,00");
        assert_eq!(confirm_display(quantity), "none");
    }
}
