//! Shop session: the owner of one shopper's cart.

use crate::cart::{Cart, CartTotals};
use crate::catalog::{Catalog, CatalogItem};
use crate::checkout::{self, CheckoutConfig};
use crate::error::CommerceError;
use crate::ids::ProductId;
use tracing::info;

/// One shopping session.
///
/// The session borrows the process-wide catalog and exclusively owns the
/// cart. UI event handlers call into it in the order events arrive; a new
/// session always starts with an empty cart.
#[derive(Debug, Clone)]
pub struct ShopSession<'a> {
    catalog: &'a Catalog,
    cart: Cart,
}

impl<'a> ShopSession<'a> {
    /// Start a session with an empty cart.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    /// Add one unit of the catalog product with the given id.
    ///
    /// # Errors
    /// Returns `ProductNotFound` if the id is not in the catalog, plus
    /// anything [`Cart::add`] rejects.
    pub fn add_product(&mut self, id: ProductId) -> Result<&'a CatalogItem, CommerceError> {
        let catalog = self.catalog;
        let item = catalog.get(id).ok_or(CommerceError::ProductNotFound(id))?;
        self.cart.add(item)?;
        Ok(item)
    }

    /// See [`Cart::set_quantity`].
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<&Cart, CommerceError> {
        self.cart.set_quantity(id, quantity)?;
        Ok(&self.cart)
    }

    /// See [`Cart::remove`].
    pub fn remove(&mut self, id: ProductId) -> &Cart {
        self.cart.remove(id);
        &self.cart
    }

    /// See [`Cart::increment`].
    pub fn increment(&mut self, id: ProductId) -> Result<&Cart, CommerceError> {
        self.cart.increment(id)?;
        Ok(&self.cart)
    }

    /// See [`Cart::decrement`].
    pub fn decrement(&mut self, id: ProductId) -> Result<&Cart, CommerceError> {
        self.cart.decrement(id)?;
        Ok(&self.cart)
    }

    /// Current totals.
    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Read-only view of the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The catalog this session shops from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Compose the checkout link for the current cart. The cart is left
    /// as is; the shopper may come back and keep shopping.
    pub fn checkout_link(&self, config: &CheckoutConfig) -> Result<String, CommerceError> {
        let link = checkout::checkout_link(&self.cart, config)?;
        let totals = self.cart.totals();
        info!(
            lines = self.cart.len(),
            count = totals.count,
            subtotal = %totals.subtotal,
            channel = %config.channel_label,
            "composed checkout hand-off"
        );
        Ok(link)
    }

    /// End the session, keeping the cart.
    pub fn into_cart(self) -> Cart {
        self.cart
    }
}
