//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no lookups, no I/O.
//! Nothing in here fails: inputs are not validated, negative values flow
//! straight through the arithmetic and only the final amount is clamped.

use std::collections::HashSet;

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

/// Half-to-even rounding for displayed amounts; the calculator never rounds.
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Optional extra item, always billed as price x quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOn {
    pub price: Decimal,
    pub quantity: i64,
}

/// Recurring extra billed once per listed day the customer also selected.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyCustomization {
    pub price: Decimal,
    pub days: Vec<String>,
}

/// Everything the calculator needs for one quote.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceCalculationInput {
    pub base_price: Decimal,
    pub add_ons: Vec<AddOn>,
    pub weekly_customizations: Vec<WeeklyCustomization>,
    pub delivery_charge: Decimal,
    pub discount_amount: Decimal,
    /// Order quantity. Accepted but not part of the formula.
    pub quantity: i64,
    pub selected_days: Vec<String>,
}

/// Every intermediate of a price calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub base_price: Decimal,
    pub add_ons_total: Decimal,
    pub weekly_customizations_total: Decimal,
    pub subtotal: Decimal,
    pub delivery_charge: Decimal,
    pub discount_amount: Decimal,
    /// subtotal + delivery - discount, before clamping
    pub unclamped_amount: Decimal,
    pub final_amount: Decimal,
}

impl PriceBreakdown {
    /// True when the discount pushed the amount below zero.
    pub fn was_clamped(&self) -> bool {
        self.unclamped_amount < Decimal::ZERO
    }
}

/// Sum of price x quantity over all add-ons.
pub fn add_ons_total(add_ons: &[AddOn]) -> Decimal {
    add_ons.iter().fold(Decimal::ZERO, |total, add_on| {
        total.saturating_add(add_on.price.saturating_mul(Decimal::from(add_on.quantity)))
    })
}

/// Sum of price x matching days over all weekly customizations.
///
/// A day matches when the exact string appears in `selected_days`. Every
/// listed entry of a customization is counted, so a repeated day bills twice.
pub fn weekly_customizations_total(
    customizations: &[WeeklyCustomization],
    selected_days: &[String],
) -> Decimal {
    let selected: HashSet<&str> = selected_days.iter().map(String::as_str).collect();

    customizations
        .iter()
        .fold(Decimal::ZERO, |total, customization| {
            let matching_days = customization
                .days
                .iter()
                .filter(|day| selected.contains(day.as_str()))
                .count();

            total.saturating_add(customization.price.saturating_mul(Decimal::from(matching_days)))
        })
}

/// subtotal + delivery - discount, in whichever order stays in range.
fn net_amount(subtotal: Decimal, delivery_charge: Decimal, discount_amount: Decimal) -> Decimal {
    subtotal
        .checked_add(delivery_charge)
        .and_then(|amount| amount.checked_sub(discount_amount))
        .or_else(|| {
            subtotal
                .checked_sub(discount_amount)
                .and_then(|amount| amount.checked_add(delivery_charge))
        })
        .unwrap_or_else(|| {
            subtotal
                .saturating_add(delivery_charge)
                .saturating_sub(discount_amount)
        })
}

/// Calculate the full breakdown for a quote.
pub fn calculate_breakdown(input: &PriceCalculationInput) -> PriceBreakdown {
    let add_ons_total = add_ons_total(&input.add_ons);
    let weekly_customizations_total =
        weekly_customizations_total(&input.weekly_customizations, &input.selected_days);

    let subtotal = input
        .base_price
        .saturating_add(add_ons_total)
        .saturating_add(weekly_customizations_total);

    let unclamped_amount = net_amount(subtotal, input.delivery_charge, input.discount_amount);

    let final_amount = unclamped_amount.max(Decimal::ZERO);

    debug!(
        %subtotal,
        %unclamped_amount,
        %final_amount,
        add_ons = input.add_ons.len(),
        customizations = input.weekly_customizations.len(),
        "Calculated price breakdown"
    );

    PriceBreakdown {
        base_price: input.base_price,
        add_ons_total,
        weekly_customizations_total,
        subtotal,
        delivery_charge: input.delivery_charge,
        discount_amount: input.discount_amount,
        unclamped_amount,
        final_amount,
    }
}

/// Final payable amount, never negative.
///
/// Sums saturate at `Decimal::MAX`/`Decimal::MIN` instead of panicking. Delivery
/// and discount are applied in whichever order stays in range, but once the
/// add-on, customization or subtotal sums themselves saturate the result is
/// the saturated value, not the exact one.
pub fn compute_final_amount(input: &PriceCalculationInput) -> Decimal {
    calculate_breakdown(input).final_amount
}
