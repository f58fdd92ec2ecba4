//! The sale screen's configuration, resolved once before the first render.

use std::ops::Deref;
use std::sync::Arc;

use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::currency::BrlAmount;

/// One entry of the event selector, as the server renders it into the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventOption {
    pub id: u32,
    pub name: String,
    /// Ticket price for this event, in centavos on the wire.
    pub unit_value: BrlAmount,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleConfigData {
    pub unit_price: BrlAmount,
    pub events: Vec<EventOption>,
    pub selected: usize,
}

/// Immutable sale configuration, provided to the screens via Dioxus context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaleConfig(Arc<SaleConfigData>);

impl Deref for SaleConfig {
    type Target = SaleConfigData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SaleConfig {
    /// Resolves the unit price exactly once, at startup.
    ///
    /// A server-seeded price wins when present and non-zero; otherwise the
    /// unit value of the currently selected event option is used. The result
    /// is not re-evaluated if the selection changes afterwards.
    pub fn resolve(
        injected: Option<BrlAmount>,
        events: Vec<EventOption>,
        selected: usize,
    ) -> Self {
        let unit_price = injected
            .filter(|price| !price.is_zero())
            .or_else(|| events.get(selected).map(|event| event.unit_value))
            .unwrap_or_else(BrlAmount::zero);

        Self(Arc::new(SaleConfigData {
            unit_price,
            events,
            selected,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<EventOption> {
        vec![
            EventOption {
                id: 1,
                name: "Bingo de São João".to_string(),
                unit_value: BrlAmount::new_from_str("150.50").unwrap(),
            },
            EventOption {
                id: 2,
                name: "Bingo Beneficente".to_string(),
                unit_value: BrlAmount::new_from_minor(2500),
            },
        ]
    }

    #[test]
    fn seeded_price_wins_over_selected_option() {
        let config = SaleConfig::resolve(Some(BrlAmount::new_from_minor(9900)), catalog(), 0);
        assert_eq!(config.unit_price, BrlAmount::new_from_minor(9900));
    }

    #[test]
    fn zero_seed_falls_back_to_selected_option() {
        let config = SaleConfig::resolve(Some(BrlAmount::zero()), catalog(), 0);
        assert_eq!(config.unit_price, BrlAmount::new_from_minor(15050));
    }

    #[test]
    fn missing_seed_reads_the_selected_option() {
        let config = SaleConfig::resolve(None, catalog(), 1);
        assert_eq!(config.unit_price, BrlAmount::new_from_minor(2500));
    }

    #[test]
    fn out_of_range_selection_resolves_to_zero() {
        let config = SaleConfig::resolve(None, catalog(), 5);
        assert!(config.unit_price.is_zero());
    }

    #[test]
    fn empty_catalog_resolves_to_zero() {
        let config = SaleConfig::resolve(None, Vec::new(), 0);
        assert!(config.unit_price.is_zero());
    }

    #[test]
    fn catalog_deserializes_from_the_server_payload() {
        let payload = r#"[
            {"id": 7, "name": "Bingo Junino", "unit_value": 9000},
            {"id": 8, "name": "Bingo da Escola", "unit_value": 1250}
        ]"#;
        let events: Vec<EventOption> = serde_json::from_str(payload).unwrap();
        let config = SaleConfig::resolve(None, events, 1);
        assert_eq!(config.unit_price, BrlAmount::new_from_minor(1250));
        assert_eq!(config.events.len(), 2);
    }
}
