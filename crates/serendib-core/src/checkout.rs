//! # Checkout Composer
//!
//! Builds the human-readable order message from a cart snapshot and composes
//! the outbound WhatsApp deep link - the sole network-facing effect of the
//! entire system.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Flow                                     │
//! │                                                                         │
//! │  CartStore::summary() ──► CartSnapshot                                  │
//! │                               │                                         │
//! │              empty? ──────────┤                                         │
//! │                │              ▼                                         │
//! │         Err(EmptyCart)   build_message(contact)                         │
//! │         (notice shown,        │                                         │
//! │          no navigation)       ▼                                         │
//! │                          checkout_url()                                 │
//! │                               │                                         │
//! │                               ▼                                         │
//! │          https://wa.me/<recipient>?text=<percent-encoded message>       │
//! │                               │                                         │
//! │                               ▼                                         │
//! │                    Navigator (app layer) opens it                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure string composition; the navigation side effect
//! belongs to the caller.

use crate::cart::CartSnapshot;
use crate::error::{CheckoutError, CheckoutResult};
use crate::WHATSAPP_RECIPIENT;

/// Rendered in place of an absent name or email.
const PLACEHOLDER: &str = "-";

// =============================================================================
// Order Contact
// =============================================================================

/// Customer details attached to an order; both fields are optional and
/// rendered as a placeholder dash when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderContact {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl OrderContact {
    /// Builds a contact, treating empty strings as absent.
    pub fn new(name: Option<String>, email: Option<String>) -> Self {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        OrderContact {
            name: non_empty(name),
            email: non_empty(email),
        }
    }

    fn name_or_placeholder(&self) -> &str {
        self.name.as_deref().unwrap_or(PLACEHOLDER)
    }

    fn email_or_placeholder(&self) -> &str {
        self.email.as_deref().unwrap_or(PLACEHOLDER)
    }
}

// =============================================================================
// Message Composition
// =============================================================================

/// Renders the structured, numbered order summary sent over WhatsApp.
///
/// `*...*` is WhatsApp bold markup. The wording is part of the shop's
/// operator workflow (they reply to confirm activation), so treat it as a
/// stable format, not cosmetic text.
///
/// ## Example Output
/// ```text
/// 🛒 *New Subscription Order*
///
/// 👤 Name: Nimal
/// 📧 Email: -
///
/// 🧾 Items:
/// 1) Netflix x2 = LKR 5,000
/// 2) AI Tools x1 = LKR 4,500
///
/// 💰 Total: *LKR 9,500*
///
/// Please confirm availability and activation time. ✅
/// ```
pub fn build_message(snapshot: &CartSnapshot, contact: &OrderContact) -> String {
    let mut out = vec![
        "🛒 *New Subscription Order*".to_string(),
        String::new(),
        format!("👤 Name: {}", contact.name_or_placeholder()),
        format!("📧 Email: {}", contact.email_or_placeholder()),
        String::new(),
        "🧾 Items:".to_string(),
    ];

    for (idx, line) in snapshot.lines.iter().enumerate() {
        out.push(format!(
            "{}) {} x{} = {}",
            idx + 1,
            line.product.name,
            line.qty,
            line.line_total.format_lkr()
        ));
    }

    out.push(String::new());
    out.push(format!("💰 Total: *{}*", snapshot.total.format_lkr()));
    out.push(String::new());
    out.push("Please confirm availability and activation time. ✅".to_string());

    out.join("\n")
}

/// Composes the outbound messaging link for an order.
///
/// ## Behavior
/// - Empty snapshot: [`CheckoutError::EmptyCart`]; the caller shows the
///   notice and must not navigate
/// - Otherwise: `https://wa.me/<recipient>?text=<encoded message>` with the
///   message percent-encoded into the query parameter
pub fn checkout_url(snapshot: &CartSnapshot, contact: &OrderContact) -> CheckoutResult<String> {
    checkout_url_to(snapshot, contact, WHATSAPP_RECIPIENT)
}

/// Same as [`checkout_url`] with an explicit recipient (injectable for
/// tests and multi-storefront setups).
pub fn checkout_url_to(
    snapshot: &CartSnapshot,
    contact: &OrderContact,
    recipient: &str,
) -> CheckoutResult<String> {
    if snapshot.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let message = build_message(snapshot, contact);
    Ok(format!(
        "https://wa.me/{}?text={}",
        recipient,
        urlencoding::encode(&message)
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Catalog;

    fn sample_snapshot() -> CartSnapshot {
        let catalog = Catalog::builtin();
        let mut cart = Cart::new();
        cart.add(&catalog, "netflix", 2);
        cart.add(&catalog, "ai", 1);
        cart.summarize(&catalog)
    }

    #[test]
    fn test_message_structure() {
        let snapshot = sample_snapshot();
        let contact = OrderContact::new(
            Some("Nimal".to_string()),
            Some("nimal@example.com".to_string()),
        );

        let message = build_message(&snapshot, &contact);
        let lines: Vec<&str> = message.lines().collect();

        assert_eq!(lines[0], "🛒 *New Subscription Order*");
        assert_eq!(lines[2], "👤 Name: Nimal");
        assert_eq!(lines[3], "📧 Email: nimal@example.com");
        assert_eq!(lines[5], "🧾 Items:");
        assert_eq!(lines[6], "1) Netflix x2 = LKR 5,000");
        assert_eq!(lines[7], "2) AI Tools x1 = LKR 4,500");
        assert_eq!(lines[9], "💰 Total: *LKR 9,500*");
        assert_eq!(lines[11], "Please confirm availability and activation time. ✅");
    }

    #[test]
    fn test_absent_contact_renders_placeholders() {
        let message = build_message(&sample_snapshot(), &OrderContact::default());
        assert!(message.contains("👤 Name: -"));
        assert!(message.contains("📧 Email: -"));
    }

    #[test]
    fn test_blank_contact_fields_treated_as_absent() {
        let contact = OrderContact::new(Some("   ".to_string()), Some(String::new()));
        assert_eq!(contact.name, None);
        assert_eq!(contact.email, None);
    }

    #[test]
    fn test_checkout_url_shape() {
        let url =
            checkout_url_to(&sample_snapshot(), &OrderContact::default(), "947111222333").unwrap();

        assert!(url.starts_with("https://wa.me/947111222333?text="));
        // The encoded payload carries no raw spaces or newlines
        let query = url.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert!(query.contains("%20"));
    }

    #[test]
    fn test_checkout_url_roundtrips_message() {
        let contact = OrderContact::new(Some("Amara".to_string()), None);
        let snapshot = sample_snapshot();
        let url = checkout_url(&snapshot, &contact).unwrap();

        let encoded = url.split_once("?text=").unwrap().1;
        let decoded = urlencoding::decode(encoded).unwrap();
        assert_eq!(decoded, build_message(&snapshot, &contact));
    }

    #[test]
    fn test_empty_cart_checkout_is_an_error() {
        let catalog = Catalog::builtin();
        let snapshot = Cart::new().summarize(&catalog);

        let err = checkout_url(&snapshot, &OrderContact::default()).unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }
}
