//! # Error Types
//!
//! Domain error types for serendib-core.
//!
//! Most "failures" in this domain are not errors at all: unknown product ids
//! and bad quantities follow the silent-recovery policy inside [`crate::cart`]
//! (no-op / clamp), and malformed persisted data is recovered to an empty
//! cart by the store layer. What remains is the one condition a user must
//! actually see: attempting to check out an empty cart.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message

use thiserror::Error;

/// Errors surfaced by the checkout flow.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart snapshot has zero resolved lines.
    ///
    /// Callers surface this as a user-visible notice and perform no
    /// navigation; it is the only checkout failure class (there are no
    /// network calls to fail).
    #[error("Your cart is empty.")]
    EmptyCart,
}

/// Convenience type alias for checkout results.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_message() {
        assert_eq!(CheckoutError::EmptyCart.to_string(), "Your cart is empty.");
    }
}
