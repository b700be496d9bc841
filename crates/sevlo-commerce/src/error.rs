//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// A rejected operation never leaves partial state behind: the cart or
/// catalog it was called on is unchanged.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog entries share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Malformed input, e.g. a catalog item with an empty name.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Checkout was requested with nothing in the cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Store configuration is inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Store configuration could not be parsed.
    #[error("Failed to parse store configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, CommerceError>;
