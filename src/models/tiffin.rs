//! Tiffin listing records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{SellerId, TiffinId};
use crate::error::AppError;

/// Meal category of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TiffinCategory {
    Veg,
    NonVeg,
    Jain,
    Vegan,
}

impl TiffinCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TiffinCategory::Veg => "veg",
            TiffinCategory::NonVeg => "non-veg",
            TiffinCategory::Jain => "jain",
            TiffinCategory::Vegan => "vegan",
        }
    }
}

impl fmt::Display for TiffinCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TiffinCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "veg" => Ok(TiffinCategory::Veg),
            "non-veg" => Ok(TiffinCategory::NonVeg),
            "jain" => Ok(TiffinCategory::Jain),
            "vegan" => Ok(TiffinCategory::Vegan),
            other => Err(AppError::InvalidInput(format!(
                "unknown tiffin category '{}'",
                other
            ))),
        }
    }
}

/// Meal listing offered by a seller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tiffin {
    pub id: TiffinId,
    pub seller_id: SellerId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: TiffinCategory,
    pub price: Decimal,
    /// Day identifiers, compared as exact strings
    #[serde(default)]
    pub available_days: Vec<String>,
    #[serde(default)]
    pub time_slots: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Tiffin {
    pub fn is_available_on(&self, day: &str) -> bool {
        self.available_days.iter().any(|d| d == day)
    }
}
