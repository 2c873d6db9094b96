//! Lookup of seller and tiffin records.
//!
//! Records live in an external document store. Pricing only needs to read
//! them, so it depends on [`TiffinLookup`] rather than on any store.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::ids::{SellerId, TiffinId};
use super::seller::Seller;
use super::tiffin::Tiffin;
use crate::error::Result;

/// Read access to seller and tiffin records
pub trait TiffinLookup {
    fn tiffin(&self, id: &TiffinId) -> Option<Tiffin>;

    fn seller(&self, id: &SellerId) -> Option<Seller>;
}

/// On-disk shape of a catalog snapshot
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sellers: Vec<Seller>,
    #[serde(default)]
    tiffins: Vec<Tiffin>,
}

/// Catalog held in memory, e.g. a snapshot exported from the store
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    sellers: HashMap<SellerId, Seller>,
    tiffins: HashMap<TiffinId, Tiffin>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON snapshot of the form `{"sellers": [...], "tiffins": [...]}`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let mut catalog = Self::new();
        for seller in file.sellers {
            catalog.insert_seller(seller);
        }
        for tiffin in file.tiffins {
            catalog.insert_tiffin(tiffin);
        }
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json(&fs::read_to_string(path)?)?;
        info!(
            "Loaded catalog from {}: {} sellers, {} tiffins",
            path.display(),
            catalog.sellers.len(),
            catalog.tiffins.len()
        );
        Ok(catalog)
    }

    /// Insert or replace a seller
    pub fn insert_seller(&mut self, seller: Seller) {
        self.sellers.insert(seller.id, seller);
    }

    /// Insert or replace a tiffin
    pub fn insert_tiffin(&mut self, tiffin: Tiffin) {
        self.tiffins.insert(tiffin.id, tiffin);
    }

    /// Listings offered by one seller
    pub fn tiffins_by_seller(&self, seller_id: &SellerId) -> Vec<&Tiffin> {
        self.tiffins
            .values()
            .filter(|t| &t.seller_id == seller_id)
            .collect()
    }
}

impl TiffinLookup for InMemoryCatalog {
    fn tiffin(&self, id: &TiffinId) -> Option<Tiffin> {
        self.tiffins.get(id).cloned()
    }

    fn seller(&self, id: &SellerId) -> Option<Seller> {
        self.sellers.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SellerStatus;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "sellers": [{
            "id": "a1a1a1a1-0000-4000-8000-000000000001",
            "userId": "a1a1a1a1-0000-4000-8000-0000000000ff",
            "shopName": "Ghar Ka Khana",
            "address": "4 Park Street, Kolkata",
            "phone": "+91 90000 11111",
            "status": "active",
            "createdAt": "2026-03-01T00:00:00Z"
        }],
        "tiffins": [{
            "id": "b2b2b2b2-0000-4000-8000-000000000001",
            "sellerId": "a1a1a1a1-0000-4000-8000-000000000001",
            "title": "Bengali Fish Thali",
            "category": "non-veg",
            "price": 150,
            "availableDays": ["Mon", "Fri"],
            "createdAt": "2026-03-02T00:00:00Z"
        }]
    }"#;

    #[test]
    fn test_from_json_indexes_records() {
        let catalog = InMemoryCatalog::from_json(SNAPSHOT).unwrap();
        let seller_id: SellerId = "a1a1a1a1-0000-4000-8000-000000000001".parse().unwrap();
        let tiffin_id: TiffinId = "b2b2b2b2-0000-4000-8000-000000000001".parse().unwrap();

        let seller = catalog.seller(&seller_id).unwrap();
        assert_eq!(seller.status, SellerStatus::Active);

        let tiffin = catalog.tiffin(&tiffin_id).unwrap();
        assert_eq!(tiffin.seller_id, seller_id);
        assert_eq!(catalog.tiffins_by_seller(&seller_id).len(), 1);
    }

    #[test]
    fn test_missing_records() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.tiffin(&TiffinId::new_v4()).is_none());
        assert!(catalog.seller(&SellerId::new_v4()).is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let catalog = InMemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.tiffins_by_seller(&"a1a1a1a1-0000-4000-8000-000000000001".parse().unwrap()).len(), 1);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"tiffins\": [{}]}").unwrap();

        assert!(InMemoryCatalog::load(file.path()).is_err());
    }
}
