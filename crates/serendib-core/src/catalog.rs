//! # Product Catalog
//!
//! The fixed set of purchasable offerings known to the shop.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog                                         │
//! │                                                                         │
//! │  Compiled-in, immutable, never persisted:                               │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────┐              │
//! │  │ netflix      │  │ linkedin         │  │ ai           │              │
//! │  │ LKR 2,500    │  │ LKR 3,900        │  │ LKR 4,500    │              │
//! │  │ logo "N"     │  │ logo "in"        │  │ logo "AI"    │              │
//! │  └──────────────┘  └──────────────────┘  └──────────────┘              │
//! │                                                                         │
//! │  The catalog is an explicit value passed by reference, not a global:   │
//! │  tests inject their own entries via Catalog::new.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Immutable and defined at process start; the serialized shape matches what
/// the storefront frontend renders (`priceLkr`, `logoText`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique, stable identifier (human-readable slug).
    pub id: String,

    /// Display name shown on cards and in the order message.
    pub name: String,

    /// One-line marketing copy under the name.
    pub tagline: String,

    /// Price in whole LKR.
    pub price_lkr: Money,

    /// Short glyph rendered as the product logo.
    pub logo_text: String,
}

impl Product {
    /// Returns the price as Money.
    #[inline]
    pub const fn price(&self) -> Money {
        self.price_lkr
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Creates a catalog from explicit entries (used by tests and any future
    /// runtime-loaded configuration).
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The compiled-in storefront catalog.
    ///
    /// Prices and copy are store configuration; edit them here (in LKR).
    pub fn builtin() -> Self {
        Catalog::new(vec![
            Product {
                id: "netflix".to_string(),
                name: "Netflix".to_string(),
                tagline: "Streaming subscription • HD / UHD options".to_string(),
                price_lkr: Money::from_rupees(2500),
                logo_text: "N".to_string(),
            },
            Product {
                id: "linkedin".to_string(),
                name: "LinkedIn Premium".to_string(),
                tagline: "Professional tools for jobs & business".to_string(),
                price_lkr: Money::from_rupees(3900),
                logo_text: "in".to_string(),
            },
            Product {
                id: "ai".to_string(),
                name: "AI Tools".to_string(),
                tagline: "AI subscription for productivity & content".to_string(),
                price_lkr: Money::from_rupees(4500),
                logo_text: "AI".to_string(),
            },
        ])
    }

    /// Looks up a product by identifier.
    ///
    /// Linear scan; the catalog is three entries, not fifty thousand.
    /// Absence is an ordinary `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in display order.
    ///
    /// Returned as a shared slice: callers cannot mutate catalog entries,
    /// which is what the original's defensive copy was for.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Checks whether an identifier resolves to a known product.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_entries() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.products().len(), 3);

        let netflix = catalog.get("netflix").unwrap();
        assert_eq!(netflix.name, "Netflix");
        assert_eq!(netflix.price().rupees(), 2500);
        assert_eq!(netflix.logo_text, "N");

        assert_eq!(catalog.get("linkedin").unwrap().price().rupees(), 3900);
        assert_eq!(catalog.get("ai").unwrap().price().rupees(), 4500);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("unknown-id").is_none());
        assert!(!catalog.contains("unknown-id"));
    }

    #[test]
    fn test_product_serializes_frontend_shape() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(catalog.get("netflix").unwrap()).unwrap();
        assert_eq!(json["id"], "netflix");
        assert_eq!(json["priceLkr"], 2500);
        assert_eq!(json["logoText"], "N");
    }

    #[test]
    fn test_injected_catalog() {
        let catalog = Catalog::new(vec![Product {
            id: "test".to_string(),
            name: "Test".to_string(),
            tagline: "Test product".to_string(),
            price_lkr: Money::from_rupees(100),
            logo_text: "T".to_string(),
        }]);
        assert!(catalog.contains("test"));
        assert!(!catalog.contains("netflix"));
    }
}
