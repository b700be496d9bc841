//! Checkout module.
//!
//! Checkout is advisory: the cart contents are forwarded to a chat channel
//! and the conversation takes it from there.

mod handoff;

pub use handoff::{checkout_link, compose_order_message, CheckoutConfig};
