//! Derived cart aggregates.

use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// Aggregate totals for a cart, recomputed on every call to
/// [`Cart::totals`](crate::cart::Cart::totals).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of all line quantities.
    pub count: u64,
    /// Sum of unit price times quantity over all lines.
    #[serde(with = "money::decimal")]
    pub subtotal: Money,
}

impl CartTotals {
    /// Totals of an empty cart.
    pub const fn empty() -> Self {
        Self {
            count: 0,
            subtotal: Money::zero(),
        }
    }

    /// Subtotal formatted for display (e.g. "$75.00").
    pub fn subtotal_display(&self) -> String {
        self.subtotal.display()
    }

    /// Check if there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pricing breakdown for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineTotal {
    /// Product the line was created from.
    pub id: ProductId,
    /// Snapshot of the product name.
    pub name: String,
    /// Snapshot of the unit price.
    #[serde(with = "money::decimal")]
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// Unit price times quantity.
    #[serde(with = "money::decimal")]
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::CatalogItem;

    #[test]
    fn test_empty_totals() {
        let totals = CartTotals::empty();
        assert!(totals.is_empty());
        assert_eq!(totals.subtotal_display(), "$0.00");
    }

    #[test]
    fn test_subtotal_display() {
        let totals = CartTotals {
            count: 3,
            subtotal: Money::new(7500),
        };
        assert!(!totals.is_empty());
        assert_eq!(totals.subtotal_display(), "$75.00");
    }

    #[test]
    fn test_prices_serialize_like_catalog_prices() {
        let item = CatalogItem::new(1, "Perfume de Feromonas", Money::new(4500), "Tendencias Virales", "");
        let mut cart = Cart::new();
        cart.add(&item).unwrap().add(&item).unwrap();

        let catalog_json = serde_json::to_value(&item).unwrap();
        let line_json = serde_json::to_value(&cart.line_totals()[0]).unwrap();
        let totals_json = serde_json::to_value(cart.totals()).unwrap();

        assert_eq!(catalog_json["price"], 45.0);
        assert_eq!(line_json["unit_price"], catalog_json["price"]);
        assert_eq!(line_json["total"], 90.0);
        assert_eq!(totals_json["subtotal"], 90.0);
        assert_eq!(totals_json["count"], 2);

        let back: CartTotals = serde_json::from_value(totals_json).unwrap();
        assert_eq!(back, cart.totals());
    }
}
