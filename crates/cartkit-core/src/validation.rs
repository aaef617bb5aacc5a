//! # Validation Module
//!
//! Cart item validation rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Boundary                                │
//! │                                                                         │
//! │  Product / CartItem construction: NO validation                        │
//! │  ├── value types stay dumb; partially-built items may exist            │
//! │  └── e.g. a product drafted before pricing is decided                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ShoppingCart::add_cart_item: ALL validation, fail-fast                │
//! │  ├── THIS MODULE: product presence, name, price (in that order)        │
//! │  └── nothing invalid ever becomes cart state                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The check order and the error messages are a fixed public contract;
//! callers always see the first failing condition.

use crate::error::InvalidCartItem;
use crate::types::{CartItem, Product};

/// Validates a cart item for insertion, returning its product on success.
///
/// ## Rules (checked in order)
/// - The item must carry a product
/// - The product name must not be blank (empty after trimming whitespace)
/// - The product must carry a price
///
/// The item-presence check (`None` submitted to the cart) happens in the
/// cart itself, which owns the `Option`.
///
/// ## Example
/// ```rust
/// use cartkit_core::validation::validate_cart_item;
/// use cartkit_core::{CartItem, InvalidCartItem, Money, Product};
/// use rust_decimal_macros::dec;
///
/// let ok = CartItem::new(Product::new("Dove Soap", Money::new(dec!(39.99))));
/// assert!(validate_cart_item(&ok).is_ok());
///
/// let unpriced = CartItem::new(Product::new("Dove Soap", None));
/// assert_eq!(
///     validate_cart_item(&unpriced),
///     Err(InvalidCartItem::MissingProductPrice)
/// );
/// ```
pub fn validate_cart_item(cart_item: &CartItem) -> Result<&Product, InvalidCartItem> {
    let product = cart_item
        .product()
        .ok_or(InvalidCartItem::MissingProduct)?;

    if product.name().trim().is_empty() {
        return Err(InvalidCartItem::BlankProductName);
    }

    if product.price().is_none() {
        return Err(InvalidCartItem::MissingProductPrice);
    }

    Ok(product)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_item_returns_product() {
        let item = CartItem::new(Product::new("Dove Soap", Money::new(dec!(39.99))));
        let product = validate_cart_item(&item).unwrap();
        assert_eq!(product.name(), "Dove Soap");
    }

    #[test]
    fn test_missing_product() {
        let item = CartItem::new(None);
        assert_eq!(
            validate_cart_item(&item),
            Err(InvalidCartItem::MissingProduct)
        );
    }

    #[test]
    fn test_blank_name() {
        let empty = CartItem::new(Product::new("", Money::new(dec!(3.6))));
        assert_eq!(
            validate_cart_item(&empty),
            Err(InvalidCartItem::BlankProductName)
        );

        let whitespace = CartItem::new(Product::new("   ", Money::new(dec!(3.6))));
        assert_eq!(
            validate_cart_item(&whitespace),
            Err(InvalidCartItem::BlankProductName)
        );
    }

    #[test]
    fn test_missing_price() {
        let item = CartItem::new(Product::new("Olay Lotion", None));
        assert_eq!(
            validate_cart_item(&item),
            Err(InvalidCartItem::MissingProductPrice)
        );
    }

    #[test]
    fn test_name_checked_before_price() {
        // Both name and price are invalid; the name check must win.
        let item = CartItem::new(Product::new(" ", None));
        assert_eq!(
            validate_cart_item(&item),
            Err(InvalidCartItem::BlankProductName)
        );
    }
}
