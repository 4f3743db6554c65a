//! # Checkout Handoff
//!
//! There is no payment backend. Checkout renders the bag as a plain-text order summary and
//! hands it to WhatsApp through a `wa.me` deep link, where the owner confirms the order by
//! hand.

use crate::model::CartItem;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt::{self, Display};

/// Opening line of every order message.
pub const DEFAULT_GREETING: &str =
    "Hello Thrift by Musk! I'm interested in purchasing the following items from my cart:";

/// Characters left unescaped in a URI component (RFC 3986 unreserved plus `!*'()`).
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// An amount in whole Indian rupees.
///
/// Displays the way the storefront prices everything: rupee sign, no decimals, and Indian
/// digit grouping (the last three digits, then pairs).
///
/// ```rust
/// use thrift_boutique::checkout::Inr;
///
/// assert_eq!(Inr(999).to_string(), "₹999");
/// assert_eq!(Inr(3198).to_string(), "₹3,198");
/// assert_eq!(Inr(1234567).to_string(), "₹12,34,567");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Inr(pub u64);

impl Display for Inr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        if digits.len() <= 3 {
            return write!(f, "₹{digits}");
        }

        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);
        // Pairs are counted from the right, so an odd-length head leads with one digit.
        for (i, ch) in head.chars().enumerate() {
            if i > 0 && (head.len() - i) % 2 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "₹{grouped},{tail}")
    }
}

impl std::iter::Sum for Inr {
    fn sum<I: Iterator<Item = Inr>>(iter: I) -> Self {
        Inr(iter.map(|amount| amount.0).sum())
    }
}

/// Renders the human-readable order message.
pub fn order_summary(greeting: &str, items: &[CartItem]) -> String {
    let lines = items
        .iter()
        .map(|item| format!("- {} ({})", item.name(), Inr(item.price())))
        .collect::<Vec<_>>()
        .join("\n");
    let total: Inr = items.iter().map(|item| Inr(item.price())).sum();

    format!("{greeting}\n\n{lines}\n\nTotal: {total}")
}

/// Percent-encodes `text` for use as a single query parameter value.
pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// The encoded order message for `items`.
pub fn checkout_message(greeting: &str, items: &[CartItem]) -> String {
    encode_component(&order_summary(greeting, items))
}

/// The WhatsApp deep link that opens a chat with `phone` prefilled with `message`.
///
/// `message` must already be encoded.
pub fn checkout_link(phone: &str, message: &str) -> String {
    format!("https://wa.me/{phone}?text={message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use percent_encoding::percent_decode_str;

    fn item(id: &str, name: &str, price: u64) -> CartItem {
        CartItem::snapshot_of(&Product::new(id, name, "Zara", "M", "Gently Used", price))
    }

    #[test]
    fn test_inr_grouping() {
        assert_eq!(Inr(0).to_string(), "₹0");
        assert_eq!(Inr(1000).to_string(), "₹1,000");
        assert_eq!(Inr(99_999).to_string(), "₹99,999");
        assert_eq!(Inr(100_000).to_string(), "₹1,00,000");
        assert_eq!(Inr(10_000_000).to_string(), "₹1,00,00,000");
    }

    #[test]
    fn test_order_summary_layout() {
        let items = vec![
            item("vintage-cream-blouse", "Vintage Cream Blouse", 1299),
            item("chic-denim-jacket", "Chic Denim Jacket", 1899),
        ];

        let summary = order_summary(DEFAULT_GREETING, &items);

        let expected = format!(
            "{DEFAULT_GREETING}\n\n\
             - Vintage Cream Blouse (₹1,299)\n\
             - Chic Denim Jacket (₹1,899)\n\n\
             Total: ₹3,198"
        );
        assert_eq!(summary, expected);
    }

    #[test]
    fn test_checkout_message_decodes_to_total() {
        let items = vec![item("a", "A", 1299), item("b", "B", 1899)];

        let encoded = checkout_message(DEFAULT_GREETING, &items);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));

        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        assert!(decoded.ends_with("Total: ₹3,198"));
    }

    #[test]
    fn test_encode_component_matches_uri_rules() {
        assert_eq!(encode_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(
            encode_component("Musk! I'm (ok) *~_.-"),
            "Musk!%20I'm%20(ok)%20*~_.-"
        );
        assert_eq!(encode_component("₹"), "%E2%82%B9");
        assert_eq!(encode_component("\n"), "%0A");
    }

    #[test]
    fn test_empty_bag_still_has_total() {
        assert_eq!(order_summary("Hi", &[]), "Hi\n\n\n\nTotal: ₹0");
    }

    #[test]
    fn test_checkout_link() {
        assert_eq!(
            checkout_link("919760427922", "Hi%20there"),
            "https://wa.me/919760427922?text=Hi%20there"
        );
    }
}
