//! Cart and cart line types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{self, Money};
use serde::Serialize;
use tracing::{debug, warn};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// A shopping cart for one session.
///
/// Lines are kept in insertion order and there is at most one line per
/// product. Aggregates are never stored; [`Cart::totals`] recomputes them.
///
/// Every mutation either applies completely or returns an error and leaves
/// the cart untouched. Mutations return `&mut Self` so calls can be chained:
///
/// ```
/// use sevlo_commerce::cart::Cart;
/// use sevlo_commerce::catalog::CatalogItem;
/// use sevlo_commerce::money::Money;
///
/// let perfume = CatalogItem::new(1, "Perfume de Feromonas", Money::new(4500), "Tendencias Virales", "");
/// let soap = CatalogItem::new(2, "Jabón de Leche de Arroz", Money::new(1500), "Tendencias Virales", "");
///
/// let mut cart = Cart::new();
/// cart.add(&perfume)?.add(&soap)?.add(&soap)?;
///
/// let totals = cart.totals();
/// assert_eq!(totals.count, 3);
/// assert_eq!(totals.subtotal_display(), "$75.00");
/// # Ok::<(), sevlo_commerce::CommerceError>(())
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a catalog item.
    ///
    /// An existing line for the same product has its quantity incremented
    /// and keeps the name, price and image captured when it was created.
    /// Otherwise a new line with quantity 1 is appended.
    ///
    /// Returns an error if:
    /// - The item is malformed (see [`CatalogItem::validate`])
    /// - The line would exceed [`MAX_QUANTITY_PER_LINE`]
    /// - The subtotal would overflow
    pub fn add(&mut self, item: &CatalogItem) -> Result<&mut Self, CommerceError> {
        item.validate()?;

        match self.position(item.id) {
            Some(index) => {
                let line = &self.lines[index];
                let quantity = line.quantity + 1;
                if quantity > MAX_QUANTITY_PER_LINE {
                    warn!(product_id = %item.id, quantity, "cart line at quantity limit");
                    return Err(CommerceError::QuantityExceedsLimit(
                        i64::from(quantity),
                        i64::from(MAX_QUANTITY_PER_LINE),
                    ));
                }
                self.ensure_subtotal_fits(item.id, quantity, line.unit_price)?;

                self.lines[index].quantity = quantity;
                debug!(product_id = %item.id, quantity, "incremented cart line");
            }
            None => {
                self.ensure_subtotal_fits(item.id, 1, item.price)?;
                self.lines.push(CartLine::snapshot(item));
                debug!(product_id = %item.id, lines = self.lines.len(), "added cart line");
            }
        }

        Ok(self)
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 removes the line. A positive quantity for a product
    /// that is not in the cart does nothing; use [`Cart::add`] to create
    /// lines.
    ///
    /// Returns an error if:
    /// - Quantity is negative
    /// - Quantity exceeds [`MAX_QUANTITY_PER_LINE`]
    /// - The subtotal would overflow
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> Result<&mut Self, CommerceError> {
        if quantity < 0 {
            warn!(product_id = %id, quantity, "rejected negative quantity");
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if quantity == 0 {
            return Ok(self.remove(id));
        }

        let quantity = match u32::try_from(quantity) {
            Ok(q) if q <= MAX_QUANTITY_PER_LINE => q,
            _ => {
                warn!(product_id = %id, quantity, "rejected quantity over limit");
                return Err(CommerceError::QuantityExceedsLimit(
                    quantity,
                    i64::from(MAX_QUANTITY_PER_LINE),
                ));
            }
        };

        let Some(index) = self.position(id) else {
            debug!(product_id = %id, "set_quantity on absent line ignored");
            return Ok(self);
        };

        self.ensure_subtotal_fits(id, quantity, self.lines[index].unit_price)?;
        self.lines[index].quantity = quantity;
        debug!(product_id = %id, quantity, "set cart line quantity");
        Ok(self)
    }

    /// Remove the line for a product, if present.
    pub fn remove(&mut self, id: ProductId) -> &mut Self {
        let len_before = self.lines.len();
        self.lines.retain(|line| line.id != id);
        if self.lines.len() < len_before {
            debug!(product_id = %id, "removed cart line");
        }
        self
    }

    /// Stepper "+": raise an existing line by one. Does nothing if the
    /// product is not in the cart.
    pub fn increment(&mut self, id: ProductId) -> Result<&mut Self, CommerceError> {
        match self.get(id).map(|line| line.quantity) {
            Some(quantity) => self.set_quantity(id, i64::from(quantity) + 1),
            None => Ok(self),
        }
    }

    /// Stepper "-": lower an existing line by one, removing it when it
    /// would reach zero. Does nothing if the product is not in the cart.
    pub fn decrement(&mut self, id: ProductId) -> Result<&mut Self, CommerceError> {
        match self.get(id).map(|line| line.quantity) {
            Some(quantity) => self.set_quantity(id, (i64::from(quantity) - 1).max(0)),
            None => Ok(self),
        }
    }

    /// Derived count and subtotal.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            count: self.item_count(),
            subtotal: self.subtotal(),
        }
    }

    /// Per-line pricing, in cart order.
    pub fn line_totals(&self) -> Vec<LineTotal> {
        self.lines
            .iter()
            .map(|line| LineTotal {
                id: line.id,
                name: line.name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
                total: line.total(),
            })
            .collect()
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Check if a product has a line in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Get number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.id == id)
    }

    fn subtotal(&self) -> Money {
        Money::try_sum(self.lines.iter().map(CartLine::total)).unwrap_or(Money::new(i64::MAX))
    }

    /// Check that giving line `id` the quantity `quantity` at `unit_price`
    /// keeps every line total and the subtotal representable.
    fn ensure_subtotal_fits(
        &self,
        id: ProductId,
        quantity: u32,
        unit_price: Money,
    ) -> Result<(), CommerceError> {
        let candidate = unit_price
            .try_multiply(i64::from(quantity))
            .ok_or(CommerceError::Overflow)?;

        let others = self
            .lines
            .iter()
            .filter(|line| line.id != id)
            .map(CartLine::total);

        Money::try_sum(std::iter::once(candidate).chain(others))
            .map(|_| ())
            .ok_or_else(|| {
                warn!(product_id = %id, quantity, "cart subtotal would overflow");
                CommerceError::Overflow
            })
    }
}

/// A line in the cart.
///
/// Name, price and image are a snapshot of the catalog item taken when the
/// line was created; later catalog changes do not reach existing lines.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product the line was created from.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time of the first add.
    #[serde(with = "money::decimal")]
    pub unit_price: Money,
    /// Image reference.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            image: item.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Money {
        Money::new(
            self.unit_price
                .amount_cents
                .saturating_mul(i64::from(self.quantity)),
        )
    }
}
