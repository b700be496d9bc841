//! Store configuration.
//!
//! The storefront is driven by one static TOML document: brand copy, cart
//! labels, the checkout channel and the product catalog. The SevLo
//! configuration is compiled in; [`StoreConfig::load`] reads an alternative
//! from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, CatalogItem};
use crate::checkout::CheckoutConfig;
use crate::error::CommerceError;

/// Built-in SevLo store configuration.
const BUILTIN_STORE: &str = include_str!("../config/store.toml");

/// Complete store configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteConfig,

    /// Cart display labels.
    #[serde(default)]
    pub cart: CartLabels,

    /// Checkout channel.
    pub checkout: CheckoutConfig,

    /// Product grid copy and catalog.
    #[serde(default)]
    pub products: ProductsConfig,
}

impl StoreConfig {
    /// Parse the compiled-in SevLo configuration.
    pub fn builtin() -> Result<Self, CommerceError> {
        Self::from_toml_str(BUILTIN_STORE)
    }

    /// Parse a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, CommerceError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), products = config.products.items.len(), "loaded store configuration");
        Ok(config)
    }

    /// Build the validated catalog described by this configuration.
    pub fn catalog(&self) -> Result<Catalog, CommerceError> {
        Catalog::new(self.products.categories.clone(), self.products.items.clone())
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Brand name shown in the header and cart.
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Page title.
    #[serde(default)]
    pub title: String,

    /// Content language tag (e.g. "es").
    #[serde(default)]
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: default_brand_name(),
            title: String::new(),
            language: String::new(),
        }
    }
}

fn default_brand_name() -> String {
    "SEVLO".to_string()
}

/// Labels used by the cart display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CartLabels {
    /// Shown when the cart has no lines.
    pub empty_text: String,
    /// Checkout button caption.
    pub checkout_text: String,
    /// Caption of the button that closes the cart.
    pub continue_shopping_text: String,
}

impl Default for CartLabels {
    fn default() -> Self {
        Self {
            empty_text: "Your cart is empty".to_string(),
            checkout_text: "Checkout".to_string(),
            continue_shopping_text: "Continue shopping".to_string(),
        }
    }
}

/// Product grid copy and catalog entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProductsConfig {
    /// Caption for the filter showing every product.
    pub all_label: String,
    /// Add button caption.
    pub add_to_cart_text: String,
    /// Caption shown briefly after an add.
    pub added_to_cart_text: String,
    /// Category labels in display order. Does not include `all_label`.
    pub categories: Vec<String>,
    /// Catalog entries in display order.
    pub items: Vec<CatalogItem>,
}

impl Default for ProductsConfig {
    fn default() -> Self {
        Self {
            all_label: "All".to_string(),
            add_to_cart_text: "Add".to_string(),
            added_to_cart_text: "Added!".to_string(),
            categories: Vec::new(),
            items: Vec::new(),
        }
    }
}
