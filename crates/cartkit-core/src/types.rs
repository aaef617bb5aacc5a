//! # Domain Types
//!
//! Core domain types used throughout cartkit.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌──────────────────────┐                   │
//! │  │    Product      │        │      CartItem        │                   │
//! │  │  ─────────────  │        │  ──────────────────  │                   │
//! │  │  name           │ ◄──────│  product (optional)  │                   │
//! │  │  price (Money)  │        │  quantity (atomic)   │                   │
//! │  └─────────────────┘        └──────────────────────┘                   │
//! │                                                                         │
//! │  Product is an immutable value; CartItem pairs one with a counter      │
//! │  that supports lock-free concurrent increments.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Untrusted Until Added
//! Construction performs no validation. A `Product` with a blank name or no
//! price, or a `CartItem` with no product, may exist transiently; the cart
//! rejects it at insertion time before it can become cart state. See
//! [`crate::validation`].

use std::sync::atomic::{AtomicI64, Ordering};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale: a display name and a unit price.
///
/// Immutable after construction. For cart purposes two products with the
/// same name are the same cart line, even when their prices differ — the
/// cart keys entries by name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name; also the cart's merge key.
    name: String,

    /// Unit price, kept at whatever precision it was constructed with.
    /// `None` marks a not-yet-priced product, which the cart rejects.
    price: Option<Money>,
}

impl Product {
    /// Creates a product.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::{Money, Product};
    /// use rust_decimal_macros::dec;
    ///
    /// let soap = Product::new("Dove Soap", Money::new(dec!(39.99)));
    /// assert_eq!(soap.name(), "Dove Soap");
    ///
    /// // A price-less product can exist, but no cart will accept it
    /// let draft = Product::new("Dove Soap", None);
    /// assert!(draft.price().is_none());
    /// ```
    pub fn new(name: impl Into<String>, price: impl Into<Option<Money>>) -> Self {
        Product {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Returns the product name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price, if one was set.
    #[inline]
    pub fn price(&self) -> Option<Money> {
        self.price
    }
}

// =============================================================================
// CartItem
// =============================================================================

/// An association between a product and a quantity counter.
///
/// The counter is atomic: once an item is stored in a cart, concurrent adds
/// of the same product name merge into it with plain atomic increments, no
/// lock held. Quantity only ever changes through
/// [`increment_quantity_by`](CartItem::increment_quantity_by); there is no
/// decrement and no direct set.
#[derive(Debug)]
pub struct CartItem {
    product: Option<Product>,
    quantity: AtomicI64,
}

impl CartItem {
    /// Creates a cart item with quantity 1.
    ///
    /// ## Example
    /// ```rust
    /// use cartkit_core::{CartItem, Money, Product};
    /// use rust_decimal_macros::dec;
    ///
    /// let item = CartItem::new(Product::new("Axe Deo", Money::new(dec!(99.99))));
    /// assert_eq!(item.quantity(), 1);
    /// ```
    pub fn new(product: impl Into<Option<Product>>) -> Self {
        Self::with_quantity(product, 1)
    }

    /// Creates a cart item with an explicit quantity.
    pub fn with_quantity(product: impl Into<Option<Product>>, quantity: i64) -> Self {
        CartItem {
            product: product.into(),
            quantity: AtomicI64::new(quantity),
        }
    }

    /// Returns the product, if one was supplied.
    #[inline]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Returns the quantity as of this call.
    ///
    /// Under concurrent increments the result is some valid
    /// past-or-present value of the counter.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity.load(Ordering::Relaxed)
    }

    /// Atomically adds `quantity` to the counter.
    ///
    /// Safe to call concurrently with reads and other increments on the
    /// same item. The delta is not validated; a negative value silently
    /// decreases the count.
    #[inline]
    pub fn increment_quantity_by(&self, quantity: i64) {
        // Plain counter, no ordering dependencies between items.
        self.quantity.fetch_add(quantity, Ordering::Relaxed);
    }

    /// Line total: unit price × quantity, unrounded.
    ///
    /// Items already stored in a cart always have a priced product; the
    /// fallback to zero covers never-validated items only.
    pub(crate) fn line_total(&self) -> Money {
        match self.product.as_ref().and_then(Product::price) {
            Some(unit_price) => unit_price * self.quantity(),
            None => Money::zero(),
        }
    }
}

/// Serializes as `{ "product": ..., "quantity": N }` with a point-in-time
/// snapshot of the atomic counter.
impl Serialize for CartItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CartItem", 2)?;
        state.serialize_field("product", &self.product)?;
        state.serialize_field("quantity", &self.quantity())?;
        state.end()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_product_accessors() {
        let product = Product::new("Olay Lotion", Money::new(dec!(5.679)));
        assert_eq!(product.name(), "Olay Lotion");
        assert_eq!(product.price(), Some(Money::new(dec!(5.679))));

        let unpriced = Product::new("Olay Lotion", None);
        assert_eq!(unpriced.price(), None);
    }

    #[test]
    fn test_cart_item_default_quantity_is_one() {
        let item = CartItem::new(Product::new("Dove Soap", Money::new(dec!(39.99))));
        assert_eq!(item.quantity(), 1);
    }

    #[test]
    fn test_increment_quantity() {
        let item = CartItem::with_quantity(Product::new("Dove Soap", Money::new(dec!(39.99))), 5);
        item.increment_quantity_by(3);
        assert_eq!(item.quantity(), 8);
    }

    #[test]
    fn test_negative_increment_is_not_validated() {
        let item = CartItem::with_quantity(Product::new("Dove Soap", Money::new(dec!(39.99))), 5);
        item.increment_quantity_by(-2);
        assert_eq!(item.quantity(), 3);
    }

    #[test]
    fn test_concurrent_increments_lose_no_updates() {
        let item = Arc::new(CartItem::with_quantity(
            Product::new("Dove Soap", Money::new(dec!(39.99))),
            0,
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let item = Arc::clone(&item);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        item.increment_quantity_by(1);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(item.quantity(), 8000);
    }

    #[test]
    fn test_line_total_unrounded() {
        let item = CartItem::with_quantity(Product::new("Olay Lotion", Money::new(dec!(5.679))), 2);
        assert_eq!(item.line_total(), Money::new(dec!(11.358)));
    }

    #[test]
    fn test_line_total_without_price_is_zero() {
        let item = CartItem::new(Product::new("Olay Lotion", None));
        assert_eq!(item.line_total(), Money::zero());
    }

    #[test]
    fn test_serialization_snapshots_quantity() {
        let item = CartItem::with_quantity(Product::new("Dove Soap", Money::new(dec!(39.99))), 5);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["quantity"], 5);
        assert_eq!(json["product"]["name"], "Dove Soap");
    }

    #[test]
    fn test_product_json_round_trip() {
        let product = Product::new("Axe Deo", Money::new(dec!(99.99)));
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
