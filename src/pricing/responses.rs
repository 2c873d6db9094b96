//! Response DTOs for price calculation.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{round_money, PriceBreakdown};
use crate::error::AppError;

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    /// Rounded for display with banker's rounding, padded to `places`
    pub fn rounded(amount: Decimal, currency: &str, places: u32) -> Self {
        let mut amount = round_money(amount, places);
        amount.rescale(places);

        MoneyResponse {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Response for a price calculation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownResponse {
    pub base_price: MoneyResponse,
    pub add_ons_total: MoneyResponse,
    pub weekly_customizations_total: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub delivery_charge: MoneyResponse,
    pub discount_amount: MoneyResponse,
    pub final_amount: MoneyResponse,
    /// Discount exceeded the total and the amount was raised to zero
    pub clamped: bool,
    /// Echo of the order quantity; it does not affect the amounts
    pub quantity: i64,
}

impl PriceBreakdownResponse {
    pub fn from_breakdown(
        breakdown: &PriceBreakdown,
        quantity: i64,
        currency: &str,
        places: u32,
    ) -> Self {
        let money = |amount: Decimal| MoneyResponse::rounded(amount, currency, places);

        PriceBreakdownResponse {
            base_price: money(breakdown.base_price),
            add_ons_total: money(breakdown.add_ons_total),
            weekly_customizations_total: money(breakdown.weekly_customizations_total),
            subtotal: money(breakdown.subtotal),
            delivery_charge: money(breakdown.delivery_charge),
            discount_amount: money(breakdown.discount_amount),
            final_amount: money(breakdown.final_amount),
            clamped: breakdown.was_clamped(),
            quantity,
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for PricingErrorResponse {
    fn from(err: &AppError) -> Self {
        let details = match err {
            AppError::Pricing(e) => e.details(),
            _ => None,
        };

        PricingErrorResponse {
            error_type: err.kind().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::{calculate_breakdown, PriceCalculationInput};
    use rust_decimal_macros::dec;

    #[test]
    fn test_amounts_serialize_as_rounded_strings() {
        let input = PriceCalculationInput {
            base_price: dec!(99.995),
            delivery_charge: dec!(0.01),
            ..Default::default()
        };
        let breakdown = calculate_breakdown(&input);

        let response = PriceBreakdownResponse::from_breakdown(&breakdown, 2, "INR", 2);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["basePrice"]["amount"], "100.00");
        assert_eq!(json["finalAmount"]["amount"], "100.00"); // 100.005 -> even
        assert_eq!(json["finalAmount"]["currency"], "INR");
        assert_eq!(json["clamped"], false);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_clamped_flag() {
        let input = PriceCalculationInput {
            base_price: dec!(10),
            discount_amount: dec!(50),
            ..Default::default()
        };
        let response =
            PriceBreakdownResponse::from_breakdown(&calculate_breakdown(&input), 1, "INR", 2);

        assert!(response.clamped);
        assert_eq!(response.final_amount.amount, dec!(0));
    }

    #[test]
    fn test_error_response_from_app_error() {
        let err = AppError::InvalidInput("bad day".to_string());
        let response = PricingErrorResponse::from(&err);

        assert_eq!(response.error_type, "invalid_input");
        assert!(response.message.contains("bad day"));
        assert!(response.details.is_none());
    }
}
