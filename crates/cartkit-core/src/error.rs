//! # Error Types
//!
//! Domain-specific error types for cartkit-core.
//!
//! ## Error Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  InvalidCartItem - the single failure mode of the crate                 │
//! │  ├── raised synchronously by ShoppingCart::add_cart_item               │
//! │  ├── one variant per rejected field, checked in a fixed order          │
//! │  └── a failed add leaves the cart completely unmodified                │
//! │                                                                         │
//! │  Reads (totals, views) never fail.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to one fixed, caller-visible message

use thiserror::Error;

// =============================================================================
// InvalidCartItem
// =============================================================================

/// Rejection reasons for a cart item submitted to [`ShoppingCart::add_cart_item`].
///
/// The variants are ordered exactly as the cart checks them; callers always
/// see the first failing condition. The messages are part of the public
/// contract and must not be reworded.
///
/// [`ShoppingCart::add_cart_item`]: crate::ShoppingCart::add_cart_item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCartItem {
    /// No cart item was supplied at all.
    #[error("cart item must not be null")]
    MissingCartItem,

    /// The cart item carries no product.
    #[error("product of a cart item must not be null")]
    MissingProduct,

    /// The product name is empty or whitespace-only.
    #[error("product name must not be null")]
    BlankProductName,

    /// The product carries no price.
    #[error("product price must not be null")]
    MissingProductPrice,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with InvalidCartItem.
pub type CartResult<T> = Result<T, InvalidCartItem>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            InvalidCartItem::MissingCartItem.to_string(),
            "cart item must not be null"
        );
        assert_eq!(
            InvalidCartItem::MissingProduct.to_string(),
            "product of a cart item must not be null"
        );
        assert_eq!(
            InvalidCartItem::BlankProductName.to_string(),
            "product name must not be null"
        );
        assert_eq!(
            InvalidCartItem::MissingProductPrice.to_string(),
            "product price must not be null"
        );
    }
}
