//! Storefront domain types and logic for SevLo.
//!
//! The storefront is a static catalog plus one stateful piece, the
//! shopping cart:
//!
//! - **Catalog**: products from static configuration, category filters
//! - **Cart**: line items merged by product, derived count and subtotal
//! - **Checkout**: order summary handed off to a chat channel
//! - **Session**: explicit owner of one shopper's cart
//!
//! # Example
//!
//! ```rust
//! use sevlo_commerce::prelude::*;
//!
//! let config = StoreConfig::builtin()?;
//! let catalog = config.catalog()?;
//!
//! let mut session = ShopSession::new(&catalog);
//! session.add_product(ProductId::new(1))?; // Perfume de Feromonas, $45
//! session.add_product(ProductId::new(2))?; // Jabón de Leche de Arroz, $15
//! session.add_product(ProductId::new(2))?;
//!
//! let totals = session.totals();
//! assert_eq!(totals.count, 3);
//! assert_eq!(totals.subtotal_display(), "$75.00");
//!
//! let link = session.checkout_link(&config.checkout)?;
//! assert!(link.starts_with("https://wa.me/"));
//! # Ok::<(), CommerceError>(())
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod session;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{CartLabels, ProductsConfig, SiteConfig, StoreConfig};
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;
    pub use crate::session::ShopSession;

    // Catalog
    pub use crate::catalog::{Catalog, CatalogItem, CategoryFilter};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotal, MAX_QUANTITY_PER_LINE};

    // Checkout
    pub use crate::checkout::{checkout_link, compose_order_message, CheckoutConfig};
}
