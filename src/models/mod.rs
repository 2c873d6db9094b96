//! Seller and tiffin records, plus read access to them

pub mod catalog;
pub mod ids;
pub mod seller;
pub mod tiffin;

pub use catalog::{InMemoryCatalog, TiffinLookup};
pub use ids::{SellerId, TiffinId, UserId};
pub use seller::{Seller, SellerStatus};
pub use tiffin::{Tiffin, TiffinCategory};
