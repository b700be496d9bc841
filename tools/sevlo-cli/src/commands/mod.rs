//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod shop;

use std::fmt;
use std::str::FromStr;

use clap::Args;
use sevlo_commerce::prelude::*;
use thiserror::Error;

use crate::output::Output;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show products in this category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:ID, set:ID=QTY, remove:ID, inc:ID, dec:ID.
    #[arg(value_name = "OP")]
    pub ops: Vec<CartOp>,

    /// Print the order message and checkout link.
    #[arg(long)]
    pub checkout: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Products to place in the cart before the session starts.
    #[arg(short, long, value_name = "ID")]
    pub add: Vec<ProductId>,
}

/// A single cart operation given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Set(ProductId, i64),
    Remove(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
}

impl CartOp {
    /// Apply the operation to a session.
    pub fn apply(&self, session: &mut ShopSession<'_>) -> Result<(), CommerceError> {
        match *self {
            CartOp::Add(id) => {
                session.add_product(id)?;
            }
            CartOp::Set(id, quantity) => {
                session.set_quantity(id, quantity)?;
            }
            CartOp::Remove(id) => {
                session.remove(id);
            }
            CartOp::Increment(id) => {
                session.increment(id)?;
            }
            CartOp::Decrement(id) => {
                session.decrement(id)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for CartOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartOp::Add(id) => write!(f, "add:{}", id),
            CartOp::Set(id, quantity) => write!(f, "set:{}={}", id, quantity),
            CartOp::Remove(id) => write!(f, "remove:{}", id),
            CartOp::Increment(id) => write!(f, "inc:{}", id),
            CartOp::Decrement(id) => write!(f, "dec:{}", id),
        }
    }
}

/// Error parsing a cart operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartOpError {
    #[error("expected ACTION:ID, got '{0}'")]
    MissingAction(String),

    #[error("unknown action '{0}' (expected add, set, remove, inc or dec)")]
    UnknownAction(String),

    #[error("invalid product id '{0}'")]
    InvalidId(String),

    #[error("expected set:ID=QTY, got '{0}'")]
    MissingQuantity(String),

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}

impl FromStr for CartOp {
    type Err = CartOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (action, rest) = s
            .split_once(':')
            .ok_or_else(|| CartOpError::MissingAction(s.to_string()))?;

        let parse_id = |raw: &str| -> Result<ProductId, CartOpError> {
            raw.parse().map_err(|_| CartOpError::InvalidId(raw.to_string()))
        };

        match action.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(CartOp::Add(parse_id(rest)?)),
            "set" => {
                let (id, quantity) = rest
                    .split_once('=')
                    .ok_or_else(|| CartOpError::MissingQuantity(s.to_string()))?;
                let quantity = quantity
                    .trim()
                    .parse()
                    .map_err(|_| CartOpError::InvalidQuantity(quantity.to_string()))?;
                Ok(CartOp::Set(parse_id(id)?, quantity))
            }
            "remove" | "rm" => Ok(CartOp::Remove(parse_id(rest)?)),
            "inc" => Ok(CartOp::Increment(parse_id(rest)?)),
            "dec" => Ok(CartOp::Decrement(parse_id(rest)?)),
            other => Err(CartOpError::UnknownAction(other.to_string())),
        }
    }
}

/// Print the cart as a table followed by its totals.
pub(crate) fn print_cart(output: &Output, config: &StoreConfig, cart: &Cart) {
    if cart.is_empty() {
        output.info(&config.cart.empty_text);
        return;
    }

    let widths = [4, 36, 10, 5, 10];
    output.table_row(&["ID", "PRODUCT", "PRICE", "QTY", "TOTAL"], &widths);
    for line in cart.line_totals() {
        output.table_row(
            &[
                &line.id.to_string(),
                &line.name,
                &line.unit_price.to_string(),
                &line.quantity.to_string(),
                &line.total.to_string(),
            ],
            &widths,
        );
    }

    let totals = cart.totals();
    println!();
    output.kv("Items", &totals.count.to_string());
    output.kv("Subtotal", &totals.subtotal_display());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> ProductId {
        ProductId::new(n)
    }

    #[test]
    fn test_parse_ops() {
        assert_eq!("add:3".parse::<CartOp>(), Ok(CartOp::Add(id(3))));
        assert_eq!("set:3=5".parse::<CartOp>(), Ok(CartOp::Set(id(3), 5)));
        assert_eq!("set:3=-1".parse::<CartOp>(), Ok(CartOp::Set(id(3), -1)));
        assert_eq!("remove:7".parse::<CartOp>(), Ok(CartOp::Remove(id(7))));
        assert_eq!("rm:7".parse::<CartOp>(), Ok(CartOp::Remove(id(7))));
        assert_eq!("inc:1".parse::<CartOp>(), Ok(CartOp::Increment(id(1))));
        assert_eq!("DEC:1".parse::<CartOp>(), Ok(CartOp::Decrement(id(1))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("3".parse::<CartOp>(), Err(CartOpError::MissingAction("3".to_string())));
        assert_eq!("buy:3".parse::<CartOp>(), Err(CartOpError::UnknownAction("buy".to_string())));
        assert_eq!("add:x".parse::<CartOp>(), Err(CartOpError::InvalidId("x".to_string())));
        assert_eq!("set:3".parse::<CartOp>(), Err(CartOpError::MissingQuantity("set:3".to_string())));
        assert_eq!("set:3=two".parse::<CartOp>(), Err(CartOpError::InvalidQuantity("two".to_string())));
    }

    #[test]
    fn test_display_matches_parse() {
        for raw in ["add:3", "set:3=5", "remove:7", "inc:1", "dec:1"] {
            let op: CartOp = raw.parse().unwrap();
            assert_eq!(op.to_string(), raw);
        }
    }

    #[test]
    fn test_apply_ops_to_session() {
        let config = StoreConfig::builtin().unwrap();
        let catalog = config.catalog().unwrap();
        let mut session = ShopSession::new(&catalog);

        for raw in ["add:1", "add:2", "inc:2", "set:1=3", "dec:1", "remove:9"] {
            let op: CartOp = raw.parse().unwrap();
            op.apply(&mut session).unwrap();
        }

        let totals = session.totals();
        assert_eq!(totals.count, 4);
        assert_eq!(totals.subtotal_display(), "$120.00");
    }

    #[test]
    fn test_apply_unknown_product_fails() {
        let config = StoreConfig::builtin().unwrap();
        let catalog = config.catalog().unwrap();
        let mut session = ShopSession::new(&catalog);

        let result = CartOp::Add(id(99)).apply(&mut session);
        assert!(matches!(result, Err(CommerceError::ProductNotFound(_))));
        assert!(session.cart().is_empty());
    }
}
