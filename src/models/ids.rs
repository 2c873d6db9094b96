//! Opaque identifiers for records owned by the external store.
//!
//! The store hands these out; nothing here resolves them. Use a
//! [`TiffinLookup`](super::TiffinLookup) to turn an id into a record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}:{}", $label, self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| AppError::InvalidInput(format!("{} id '{}': {}", $label, s, e)))
            }
        }
    };
}

record_id!(
    /// Account that owns a seller shop
    UserId,
    "User"
);
record_id!(
    /// Seller shop
    SellerId,
    "Seller"
);
record_id!(
    /// Tiffin listing
    TiffinId,
    "Tiffin"
);
