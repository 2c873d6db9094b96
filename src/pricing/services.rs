//! Pricing service functions with record lookup.
//!
//! These functions resolve listing data through a [`TiffinLookup`] and then
//! hand off to the pure calculators.

use tracing::debug;

use crate::models::{SellerId, SellerStatus, TiffinId, TiffinLookup};

use super::calculators::{calculate_breakdown, PriceBreakdown, PriceCalculationInput};
use super::requests::CalculatePriceRequest;

/// Quoting error types
#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    TiffinNotFound {
        tiffin_id: TiffinId,
    },
    SellerNotFound {
        seller_id: SellerId,
    },
    SellerNotActive {
        seller_id: SellerId,
        status: SellerStatus,
    },
    DayUnavailable {
        tiffin_id: TiffinId,
        days: Vec<String>,
    },
}

impl PricingError {
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::TiffinNotFound { .. } => "tiffin_not_found",
            PricingError::SellerNotFound { .. } => "seller_not_found",
            PricingError::SellerNotActive { .. } => "seller_not_active",
            PricingError::DayUnavailable { .. } => "day_unavailable",
        }
    }

    /// Structured context for error responses
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            PricingError::SellerNotActive { status, .. } => {
                Some(serde_json::json!({ "status": status.as_str() }))
            }
            PricingError::DayUnavailable { days, .. } => {
                Some(serde_json::json!({ "unavailable_days": days }))
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::TiffinNotFound { tiffin_id } => {
                write!(f, "No listing found for {}", tiffin_id)
            }
            PricingError::SellerNotFound { seller_id } => {
                write!(f, "No seller found for {}", seller_id)
            }
            PricingError::SellerNotActive { seller_id, status } => {
                write!(f, "{} is {} and cannot take orders", seller_id, status)
            }
            PricingError::DayUnavailable { tiffin_id, days } => {
                write!(f, "{} is not served on {}", tiffin_id, days.join(", "))
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Quote a subscription to a tiffin listing.
///
/// The listing's price replaces the request's base price. Every other field of
/// the request is passed to the calculator unchanged.
///
/// # Errors
/// * listing or its seller missing from the lookup
/// * seller not `active`
/// * a selected day the listing is not served on (exact string match)
pub fn quote_tiffin<L: TiffinLookup + ?Sized>(
    lookup: &L,
    tiffin_id: &TiffinId,
    request: CalculatePriceRequest,
) -> Result<PriceBreakdown, PricingError> {
    let tiffin = lookup
        .tiffin(tiffin_id)
        .ok_or(PricingError::TiffinNotFound {
            tiffin_id: *tiffin_id,
        })?;

    let seller = lookup
        .seller(&tiffin.seller_id)
        .ok_or(PricingError::SellerNotFound {
            seller_id: tiffin.seller_id,
        })?;

    if !seller.is_active() {
        return Err(PricingError::SellerNotActive {
            seller_id: seller.id,
            status: seller.status,
        });
    }

    let unavailable: Vec<String> = request
        .selected_days
        .iter()
        .filter(|day| !tiffin.is_available_on(day))
        .cloned()
        .collect();

    if !unavailable.is_empty() {
        return Err(PricingError::DayUnavailable {
            tiffin_id: tiffin.id,
            days: unavailable,
        });
    }

    debug!(
        "Quoting {} from {} at base price {}",
        tiffin.id, seller.id, tiffin.price
    );

    let input = PriceCalculationInput {
        base_price: tiffin.price,
        ..PriceCalculationInput::from(request)
    };

    Ok(calculate_breakdown(&input))
}
