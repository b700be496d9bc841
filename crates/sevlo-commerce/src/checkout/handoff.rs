//! Checkout hand-off to an external messaging channel.
//!
//! The storefront has no order backend. Checking out means composing a
//! plain-text order summary and opening a chat with the shop on the
//! configured channel, with that summary pre-filled.

use std::fmt::Write as _;

use crate::cart::Cart;
use crate::error::CommerceError;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Base URL of the click-to-chat endpoint.
const CHAT_BASE_URL: &str = "https://wa.me/";

/// Bytes escaped in the `text` query value: everything but RFC 3986
/// unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Where and how the order summary is sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Channel name shown to the shopper (e.g. "WhatsApp").
    #[serde(default = "default_channel_label")]
    pub channel_label: String,
    /// Shop phone number in any human format (e.g. "+52 55 5172 5689").
    pub phone: String,
    /// First line of the order message.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_channel_label() -> String {
    "WhatsApp".to_string()
}

fn default_greeting() -> String {
    "Hola, me gustaría hacer el siguiente pedido:".to_string()
}

impl CheckoutConfig {
    /// Create a config for a phone number with default label and greeting.
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            channel_label: default_channel_label(),
            phone: phone.into(),
            greeting: default_greeting(),
        }
    }

    /// Phone number reduced to its digits, as the chat link expects.
    ///
    /// # Errors
    /// Returns `Config` if the number contains no digits.
    pub fn phone_digits(&self) -> Result<String, CommerceError> {
        let digits: String = self.phone.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(CommerceError::Config(format!(
                "checkout phone '{}' contains no digits",
                self.phone
            )));
        }
        Ok(digits)
    }
}

/// Compose the order summary sent to the shop.
///
/// # Errors
/// Returns `EmptyCart` if there is nothing to order.
pub fn compose_order_message(cart: &Cart, config: &CheckoutConfig) -> Result<String, CommerceError> {
    if cart.is_empty() {
        return Err(CommerceError::EmptyCart);
    }

    let mut message = String::new();
    if !config.greeting.is_empty() {
        message.push_str(&config.greeting);
        message.push('\n');
    }

    for line in cart.line_totals() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            message,
            "- {} x {} ({}) = {}",
            line.quantity,
            line.name,
            line.unit_price.display(),
            line.total.display()
        );
    }

    let _ = write!(message, "Subtotal: {}", cart.totals().subtotal_display());
    Ok(message)
}

/// Build the click-to-chat link that opens the channel with the order
/// summary pre-filled.
///
/// # Errors
/// Returns `EmptyCart` for an empty cart and `Config` if the configured
/// phone has no digits.
pub fn checkout_link(cart: &Cart, config: &CheckoutConfig) -> Result<String, CommerceError> {
    let phone = config.phone_digits()?;
    let message = compose_order_message(cart, config)?;
    Ok(format!(
        "{}{}?text={}",
        CHAT_BASE_URL,
        phone,
        percent_encode(&message)
    ))
}

/// Percent-encode a query value.
fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_VALUE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::money::Money;

    fn cart() -> Cart {
        let perfume = CatalogItem::new(1, "Perfume de Feromonas", Money::new(4500), "Tendencias Virales", "");
        let soap = CatalogItem::new(2, "Jabón de Leche de Arroz", Money::new(1500), "Tendencias Virales", "");
        let mut cart = Cart::new();
        cart.add(&perfume).unwrap().add(&soap).unwrap().add(&soap).unwrap();
        cart
    }

    #[test]
    fn test_order_message() {
        let config = CheckoutConfig::new("+52 55 5172 5689");
        let message = compose_order_message(&cart(), &config).unwrap();
        assert_eq!(
            message,
            "Hola, me gustaría hacer el siguiente pedido:\n\
             - 1 x Perfume de Feromonas ($45.00) = $45.00\n\
             - 2 x Jabón de Leche de Arroz ($15.00) = $30.00\n\
             Subtotal: $75.00"
        );
    }

    #[test]
    fn test_order_message_without_greeting() {
        let mut config = CheckoutConfig::new("5551725689");
        config.greeting.clear();
        let message = compose_order_message(&cart(), &config).unwrap();
        assert!(message.starts_with("- 1 x Perfume"));
    }

    #[test]
    fn test_empty_cart_cannot_check_out() {
        let config = CheckoutConfig::new("5551725689");
        assert!(matches!(
            compose_order_message(&Cart::new(), &config),
            Err(CommerceError::EmptyCart)
        ));
        assert!(matches!(
            checkout_link(&Cart::new(), &config),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(
            CheckoutConfig::new("+52 55 5172 5689").phone_digits().unwrap(),
            "525551725689"
        );
        assert!(matches!(
            CheckoutConfig::new("n/a").phone_digits(),
            Err(CommerceError::Config(_))
        ));
    }

    #[test]
    fn test_checkout_link() {
        let config = CheckoutConfig::new("+52 55 5172 5689");
        let link = checkout_link(&cart(), &config).unwrap();
        assert!(link.starts_with("https://wa.me/525551725689?text=Hola%2C%20me%20gustar%C3%ADa"));
        assert!(link.contains("%0A-%201%20x%20Perfume"));
        assert!(link.ends_with("Subtotal%3A%20%2475.00"));
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("a-z_0.9~"), "a-z_0.9~");
        assert_eq!(percent_encode("a b&c"), "a%20b%26c");
        assert_eq!(percent_encode("ñ"), "%C3%B1");
        assert_eq!(percent_encode("$45.00\n+1"), "%2445.00%0A%2B1");
    }
}
