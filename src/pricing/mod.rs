//! Pricing engine module for tiffin subscriptions.
//!
//! Computes the payable amount for a subscription from a base price, add-ons,
//! day-scoped weekly customizations, delivery and discount.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    add_ons_total, calculate_breakdown, compute_final_amount, round_money,
    weekly_customizations_total, AddOn, PriceBreakdown, PriceCalculationInput,
    WeeklyCustomization,
};
pub use requests::CalculatePriceRequest;
pub use responses::{MoneyResponse, PriceBreakdownResponse, PricingErrorResponse};
pub use services::{quote_tiffin, PricingError};
