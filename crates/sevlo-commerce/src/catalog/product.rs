//! Catalog item type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::{Deserialize, Serialize};

/// A product offered by the storefront.
///
/// Items come from static configuration and are immutable for the lifetime
/// of the process; the cart takes a snapshot of the display fields when an
/// item is first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    #[serde(with = "money::decimal")]
    pub price: Money,
    /// Category label (e.g. "Skincare").
    pub category: String,
    /// Image reference (path or URL).
    #[serde(default)]
    pub image: String,
}

impl CatalogItem {
    /// Create a new catalog item.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            category: category.into(),
            image: image.into(),
        }
    }

    /// Check that the item is well formed.
    ///
    /// # Errors
    /// Returns `ValidationError` if the name or category is blank or the
    /// price is negative.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.price.is_negative() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has a negative price ({})",
                self.id, self.price
            )));
        }
        if self.category.trim().is_empty() {
            return Err(CommerceError::ValidationError(format!(
                "product {} has no category",
                self.id
            )));
        }
        Ok(())
    }
}
