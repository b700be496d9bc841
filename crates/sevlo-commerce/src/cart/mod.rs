//! Shopping cart module.
//!
//! Contains the cart store, its lines and the derived totals.

#[allow(clippy::module_inception)]
mod cart;
mod totals;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use totals::{CartTotals, LineTotal};
