//! # serendib-core: Pure Business Logic for Serendib Shop
//!
//! This crate is the **heart** of Serendib Shop. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Serendib Shop Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                serendib-shop CLI / frontend                     │   │
//! │  │    Product list ──► Cart UI ──► Checkout ──► wa.me link         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              serendib-store (Persistence Layer)                 │   │
//! │  │    KeyValueStorage, CartStore, CartBadge, ThemeStore            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ serendib-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐ │   │
//! │  │   │ catalog │ │  money  │ │  cart   │ │ checkout │ │ theme  │ │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │ message  │ │ Theme  │ │   │
//! │  │   │ Catalog │ │  (LKR)  │ │ Snapshot│ │ + URL    │ │ toggle │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Sellable products and the compiled-in catalog
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart line items, pure mutations, snapshot derivation
//! - [`checkout`] - Order message composition and the outbound wa.me link
//! - [`theme`] - Dark/light display-mode state machine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: persistence and navigation live in `serendib-store` and
//!    the app layer, never here
//! 3. **Integer Money**: all monetary values are whole rupees (i64)
//! 4. **Silent Recovery**: unknown products and bad quantities follow the
//!    recovery policy (no-op / clamp), not error paths
//!
//! ## Example Usage
//!
//! ```rust
//! use serendib_core::{Cart, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let mut cart = Cart::new();
//! cart.add(&catalog, "netflix", 2);
//!
//! let snapshot = cart.summarize(&catalog);
//! assert_eq!(snapshot.total.rupees(), 5000);
//! assert_eq!(snapshot.total.to_string(), "LKR 5,000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod theme;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use serendib_core::Money` instead of
// `use serendib_core::money::Money`

pub use cart::{Cart, CartLine, CartSnapshot, SnapshotLine};
pub use catalog::{Catalog, Product};
pub use checkout::OrderContact;
pub use error::{CheckoutError, CheckoutResult};
pub use money::Money;
pub use theme::Theme;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// WhatsApp recipient for checkout messages, in international format
/// without the leading `+` (Sri Lanka: 947XXXXXXXX).
///
/// ## Why a constant?
/// The recipient is fixed store configuration, compiled in exactly like the
/// catalog. Making it runtime-loadable is out of scope until the shop has
/// more than one storefront.
pub const WHATSAPP_RECIPIENT: &str = "947000000000";

/// Minimum quantity a cart line can hold.
///
/// ## Business Reason
/// A line with zero (or negative) quantity is meaningless; callers that pass
/// one get clamped here rather than corrupting totals downstream.
pub const MIN_LINE_QTY: u32 = 1;
