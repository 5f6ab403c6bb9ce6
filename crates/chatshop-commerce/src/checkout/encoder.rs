//! Checkout encoder: cart snapshot to order message and deep link.

use serde::Serialize;

use crate::cart::Cart;
use crate::checkout::link::build_deep_link;
use crate::checkout::message::render_order_message;
use crate::error::CommerceError;
use crate::money::{Money, PriceFormat};

/// Default messaging host (WhatsApp click-to-chat).
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";

/// Default opening line of the order message.
pub const DEFAULT_GREETING: &str = "Hello! I would like to place the following order:";

/// Link length above which a warning is logged. Links are never truncated.
pub const DEFAULT_SOFT_LINK_LIMIT: usize = 2000;

/// How orders are written and where they are sent.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSettings {
    /// Messaging host, e.g. `wa.me`.
    pub host: String,
    /// Merchant contact; `None` lets the shopper pick a chat.
    pub destination: Option<String>,
    /// First line of the message.
    pub greeting: Option<String>,
    /// Formatting for every amount in the message.
    pub format: PriceFormat,
    /// Warn when a link exceeds this many bytes.
    pub soft_link_limit: Option<usize>,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_MESSAGING_HOST.to_string(),
            destination: None,
            greeting: Some(DEFAULT_GREETING.to_string()),
            format: PriceFormat::default(),
            soft_link_limit: Some(DEFAULT_SOFT_LINK_LIMIT),
        }
    }
}

/// An encoded checkout, ready to hand off to the messaging app.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkout {
    /// Plain-text order summary.
    pub message: String,
    /// Deep link carrying `message`.
    pub link: String,
    pub total_items: i64,
    pub total: Money,
}

impl Checkout {
    /// Length of the deep link in bytes.
    pub fn link_len(&self) -> usize {
        self.link.len()
    }
}

/// Serializes carts into order messages and deep links.
#[derive(Debug, Clone, Default)]
pub struct CheckoutEncoder {
    settings: CheckoutSettings,
}

impl CheckoutEncoder {
    pub fn new(settings: CheckoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    /// Build the order summary for `cart`.
    ///
    /// `total` is the cart total as shown to the shopper; it must equal the
    /// sum of the line subtotals. An empty cart is rejected.
    pub fn build_order_message(&self, cart: &Cart, total: Money) -> Result<String, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        let pricing = cart.pricing()?;
        if pricing.total != total {
            return Err(CommerceError::TotalMismatch {
                expected: self.settings.format.format(&pricing.total),
                got: self.settings.format.format(&total),
            });
        }
        Ok(render_order_message(
            &pricing,
            &self.settings.format,
            self.settings.greeting.as_deref(),
        ))
    }

    /// Wrap `message` in a deep link to `destination` on the configured host.
    pub fn build_deep_link(&self, destination: Option<&str>, message: &str) -> String {
        build_deep_link(&self.settings.host, destination, message)
    }

    /// Encode `cart` into a message and a link to the configured
    /// destination.
    pub fn encode(&self, cart: &Cart) -> Result<Checkout, CommerceError> {
        self.encode_to(cart, self.settings.destination.as_deref())
    }

    /// Like [`encode`](Self::encode) with an explicit destination.
    pub fn encode_to(
        &self,
        cart: &Cart,
        destination: Option<&str>,
    ) -> Result<Checkout, CommerceError> {
        if cart.is_empty() {
            tracing::info!("checkout rejected: empty cart");
            return Err(CommerceError::EmptyCart);
        }
        let total = cart.total_price()?;
        let message = self.build_order_message(cart, total)?;
        let link = self.build_deep_link(destination, &message);

        if let Some(limit) = self.settings.soft_link_limit {
            if link.len() > limit {
                tracing::warn!(
                    link_len = link.len(),
                    limit,
                    lines = cart.len(),
                    "checkout link exceeds soft limit; the messaging app may truncate it"
                );
            }
        }
        tracing::info!(
            lines = cart.len(),
            items = cart.total_items(),
            total_cents = total.amount_cents,
            link_len = link.len(),
            "encoded checkout"
        );

        Ok(Checkout {
            message,
            link,
            total_items: cart.total_items(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductCatalog;
    use crate::ids::ProductId;
    use crate::money::{Currency, Locale};

    fn cart_with(catalog: &ProductCatalog, items: &[(u64, i64)]) -> Cart {
        let mut cart = Cart::new(catalog.currency());
        for &(id, qty) in items {
            cart.add(catalog.get(ProductId::new(id)).unwrap(), qty).unwrap();
        }
        cart
    }

    #[test]
    fn test_empty_cart_rejected() {
        let encoder = CheckoutEncoder::default();
        let cart = Cart::new(Currency::EUR);

        assert!(matches!(encoder.encode(&cart), Err(CommerceError::EmptyCart)));
        assert!(matches!(
            encoder.build_order_message(&cart, Money::zero(Currency::EUR)),
            Err(CommerceError::EmptyCart)
        ));
    }

    #[test]
    fn test_total_mismatch_rejected() {
        let catalog = ProductCatalog::sample();
        let cart = cart_with(&catalog, &[(1, 1)]);
        let result = CheckoutEncoder::default()
            .build_order_message(&cart, Money::new(1, Currency::EUR));
        assert!(matches!(result, Err(CommerceError::TotalMismatch { .. })));
    }

    #[test]
    fn test_encode_uses_settings() {
        let catalog = ProductCatalog::sample();
        let cart = cart_with(&catalog, &[(4, 2)]);
        let encoder = CheckoutEncoder::new(CheckoutSettings {
            destination: Some("+34 600 000 000".to_string()),
            greeting: None,
            format: PriceFormat::new(Locale::EnUs),
            ..CheckoutSettings::default()
        });

        let checkout = encoder.encode(&cart).unwrap();
        assert!(checkout.link.starts_with("https://wa.me/34600000000?text="));
        assert!(checkout.message.starts_with("1. Smartwatch Deportivo x2 @ \u{20ac}199.99 = \u{20ac}399.98"));
        assert_eq!(checkout.total, Money::new(39998, Currency::EUR));
        assert_eq!(checkout.total_items, 2);
    }

    #[test]
    fn test_link_carries_exact_message() {
        let catalog = ProductCatalog::sample();
        let cart = cart_with(&catalog, &[(1, 1), (3, 2)]);
        let checkout = CheckoutEncoder::default().encode(&cart).unwrap();

        let (_, encoded) = checkout.link.split_once("?text=").unwrap();
        assert_eq!(urlencoding::decode(encoded).unwrap(), checkout.message);
    }

    #[test]
    fn test_long_link_not_truncated() {
        let catalog = ProductCatalog::sample();
        let cart = cart_with(&catalog, &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1), (6, 1), (7, 1), (8, 1)]);
        let encoder = CheckoutEncoder::new(CheckoutSettings {
            soft_link_limit: Some(10),
            ..CheckoutSettings::default()
        });

        let checkout = encoder.encode(&cart).unwrap();
        assert!(checkout.link_len() > 10);
        assert!(checkout.message.contains("8. Monitor Ultrawide"));
    }

    #[test]
    fn test_encode_to_overrides_destination() {
        let catalog = ProductCatalog::sample();
        let cart = cart_with(&catalog, &[(1, 1)]);
        let encoder = CheckoutEncoder::new(CheckoutSettings {
            destination: Some("111".to_string()),
            ..CheckoutSettings::default()
        });
        let checkout = encoder.encode_to(&cart, Some("222")).unwrap();
        assert!(checkout.link.starts_with("https://wa.me/222?text="));
    }
}
