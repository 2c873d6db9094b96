//! Seller shop records

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{SellerId, UserId};
use crate::error::AppError;

/// Lifecycle status of a seller shop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerStatus {
    #[default]
    Pending,
    Active,
    Suspended,
}

impl SellerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SellerStatus::Pending => "pending",
            SellerStatus::Active => "active",
            SellerStatus::Suspended => "suspended",
        }
    }
}

impl fmt::Display for SellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SellerStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(SellerStatus::Pending),
            "active" => Ok(SellerStatus::Active),
            "suspended" => Ok(SellerStatus::Suspended),
            other => Err(AppError::InvalidInput(format!(
                "unknown seller status '{}'",
                other
            ))),
        }
    }
}

/// Seller shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub user_id: UserId,
    pub shop_name: String,
    pub address: String,
    pub phone: String,
    /// Records exported without a status are shops that were never
    /// reviewed, so they load as `Pending` and cannot be quoted.
    #[serde(default)]
    pub status: SellerStatus,
    pub created_at: DateTime<Utc>,
}

impl Seller {
    /// Only active shops can take orders
    pub fn is_active(&self) -> bool {
        self.status == SellerStatus::Active
    }
}
