//! Request DTOs for price calculation.
//!
//! Field names follow the UI client (camelCase); snake_case is accepted too.
//! Amounts accept either JSON numbers or strings.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::calculators::{AddOn, PriceCalculationInput, WeeklyCustomization};

/// Request to calculate the payable amount for a subscription
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatePriceRequest {
    #[serde(alias = "base_price")]
    pub base_price: Decimal,
    #[serde(default, alias = "add_ons")]
    pub add_ons: Vec<AddOnRequest>,
    #[serde(default, alias = "weekly_customizations")]
    pub weekly_customizations: Vec<WeeklyCustomizationRequest>,
    #[serde(default, alias = "delivery_charge")]
    pub delivery_charge: Decimal,
    #[serde(default, alias = "discount_amount")]
    pub discount_amount: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default, alias = "selected_days")]
    pub selected_days: Vec<String>,
}

fn default_quantity() -> i64 {
    1
}

/// An add-on in the request
#[derive(Debug, Clone, Deserialize)]
pub struct AddOnRequest {
    pub price: Decimal,
    pub quantity: i64,
}

/// A weekly customization in the request
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyCustomizationRequest {
    pub price: Decimal,
    #[serde(default)]
    pub days: Vec<String>,
}

impl From<CalculatePriceRequest> for PriceCalculationInput {
    fn from(request: CalculatePriceRequest) -> Self {
        PriceCalculationInput {
            base_price: request.base_price,
            add_ons: request
                .add_ons
                .into_iter()
                .map(|a| AddOn {
                    price: a.price,
                    quantity: a.quantity,
                })
                .collect(),
            weekly_customizations: request
                .weekly_customizations
                .into_iter()
                .map(|c| WeeklyCustomization {
                    price: c.price,
                    days: c.days,
                })
                .collect(),
            delivery_charge: request.delivery_charge,
            discount_amount: request.discount_amount,
            quantity: request.quantity,
            selected_days: request.selected_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_camel_case_request_with_numbers() {
        let json = r#"{
            "basePrice": 100,
            "addOns": [{"price": 10, "quantity": 2}],
            "weeklyCustomizations": [{"price": 5, "days": ["Mon", "Wed"]}],
            "deliveryCharge": 20,
            "discountAmount": 15,
            "quantity": 3,
            "selectedDays": ["Mon"]
        }"#;

        let request: CalculatePriceRequest = serde_json::from_str(json).unwrap();
        let input = PriceCalculationInput::from(request);

        assert_eq!(input.base_price, dec!(100));
        assert_eq!(input.add_ons[0].quantity, 2);
        assert_eq!(input.weekly_customizations[0].days, vec!["Mon", "Wed"]);
        assert_eq!(input.quantity, 3);
        assert_eq!(input.selected_days, vec!["Mon"]);
    }

    #[test]
    fn test_snake_case_request_with_string_amounts() {
        let json = r#"{
            "base_price": "99.95",
            "delivery_charge": "10.05",
            "discount_amount": "0"
        }"#;

        let request: CalculatePriceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.base_price, dec!(99.95));
        assert_eq!(request.delivery_charge, dec!(10.05));
    }

    #[test]
    fn test_defaults() {
        let request: CalculatePriceRequest = serde_json::from_str(r#"{"basePrice": 50}"#).unwrap();

        assert!(request.add_ons.is_empty());
        assert!(request.weekly_customizations.is_empty());
        assert!(request.selected_days.is_empty());
        assert_eq!(request.delivery_charge, Decimal::ZERO);
        assert_eq!(request.discount_amount, Decimal::ZERO);
        assert_eq!(request.quantity, 1);
    }

    #[test]
    fn test_base_price_is_required() {
        let result = serde_json::from_str::<CalculatePriceRequest>(r#"{"deliveryCharge": 5}"#);
        assert!(result.is_err());
    }
}
