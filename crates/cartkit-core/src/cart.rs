//! # Shopping Cart
//!
//! The cart aggregate: a concurrent mapping from product name to
//! [`CartItem`], plus the monetary total queries.
//!
//! ## Concurrency Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     add_cart_item(item)                                 │
//! │                                                                         │
//! │  validate (fail-fast, cart untouched on error)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  lookup name ──── found ──► atomic increment, no lock ── COMMON PATH    │
//! │       │                                                                 │
//! │    not found                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  entry(name) ── re-check under the shard write lock ─────┐             │
//! │       │                                                   │             │
//! │    vacant: insert                     occupied: another thread won      │
//! │                                       the race; merge instead           │
//! │                                                                         │
//! │  INVARIANT: at most one entry per product name, always                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are never removed; the cart grows monotonically for the life of
//! the owning session. Reads (totals, views) never block behind the insert
//! path beyond a shard read lock.

use dashmap::mapref::entry::Entry;
use dashmap::mapref::multiple::RefMulti;
use dashmap::mapref::one::Ref;
use dashmap::DashMap;
use tracing::{debug, warn};

use crate::error::{CartResult, InvalidCartItem};
use crate::money::Money;
use crate::types::CartItem;
use crate::validation::validate_cart_item;
use crate::SALES_TAX_RATE;

// =============================================================================
// ShoppingCart
// =============================================================================

/// A thread-safe shopping cart keyed by product name.
///
/// ## Usage
/// ```rust
/// use cartkit_core::{CartItem, Money, Product, ShoppingCart};
/// use rust_decimal_macros::dec;
///
/// let cart = ShoppingCart::new();
/// cart.add_cart_item(CartItem::with_quantity(
///     Product::new("Dove Soap", Money::new(dec!(39.99))),
///     2,
/// ))?;
/// cart.add_cart_item(CartItem::with_quantity(
///     Product::new("Axe Deo", Money::new(dec!(99.99))),
///     2,
/// ))?;
///
/// assert_eq!(cart.total_price(), Money::new(dec!(279.96)));
/// assert_eq!(cart.total_sales_tax(), Money::new(dec!(35.00)));
/// assert_eq!(cart.total_price_with_sales_tax(), Money::new(dec!(314.96)));
/// # Ok::<(), cartkit_core::InvalidCartItem>(())
/// ```
#[derive(Debug, Default)]
pub struct ShoppingCart {
    items: DashMap<String, CartItem>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        ShoppingCart {
            items: DashMap::new(),
        }
    }

    /// Adds a cart item, merging by product name.
    ///
    /// ## Behavior
    /// - If an entry with the same product name exists, its quantity is
    ///   incremented by the new item's quantity. The incoming `Product` is
    ///   discarded, even when its price differs from the stored one — the
    ///   merge only ever touches the quantity of the stored entry.
    /// - Otherwise the item is inserted under its product name.
    ///
    /// ## Errors
    /// Fails fast with [`InvalidCartItem`] when the item is absent, carries
    /// no product, has a blank product name, or has no price — in that
    /// order, and the cart is left unmodified.
    ///
    /// ## Concurrency
    /// Safe under arbitrary concurrent callers. Two threads adding the same
    /// new product name never produce two entries: the lookup that misses
    /// is re-checked under the map's entry lock, and the loser of the
    /// insert race falls back to merging.
    pub fn add_cart_item(&self, cart_item: impl Into<Option<CartItem>>) -> CartResult<()> {
        let Some(cart_item) = cart_item.into() else {
            warn!("rejected cart item: nothing supplied");
            return Err(InvalidCartItem::MissingCartItem);
        };

        let product = match validate_cart_item(&cart_item) {
            Ok(product) => product,
            Err(err) => {
                warn!(error = %err, "rejected cart item");
                return Err(err);
            }
        };
        let product_name = product.name().to_owned();
        let quantity = cart_item.quantity();

        // Common path: the line already exists, merge without the entry lock.
        // The guard must drop before the entry call below.
        if let Some(existing) = self.items.get(&product_name) {
            existing.increment_quantity_by(quantity);
            debug!(product = %product_name, added = quantity, "merged quantity into existing line");
            return Ok(());
        }

        match self.items.entry(product_name) {
            // Another thread inserted between the check and here.
            Entry::Occupied(entry) => {
                entry.get().increment_quantity_by(quantity);
                debug!(product = %entry.key(), added = quantity, "merged quantity into existing line");
            }
            Entry::Vacant(entry) => {
                debug!(product = %entry.key(), quantity, "inserted new line");
                entry.insert(cart_item);
            }
        }

        Ok(())
    }

    /// Total price of the cart: Σ unit price × quantity, rounded to cents
    /// half-up. Returns 0.00 for an empty cart.
    ///
    /// Line totals accumulate unrounded; rounding happens exactly once, on
    /// the sum.
    pub fn total_price(&self) -> Money {
        let mut total = Money::zero();
        for item in self.items.iter() {
            total += item.value().line_total();
        }
        total.round_to_cents()
    }

    /// Sales tax on the cart at [`SALES_TAX_RATE`], rounded to cents half-up.
    ///
    /// Tax is computed on the already-rounded total price, not on the raw
    /// sum; the two rounding passes affect cent-level results and the order
    /// is part of the contract.
    pub fn total_sales_tax(&self) -> Money {
        (self.total_price() * SALES_TAX_RATE).round_to_cents()
    }

    /// Grand total: total price plus sales tax.
    ///
    /// Rounded again for uniformity, though both operands already sit on
    /// the cent boundary.
    pub fn total_price_with_sales_tax(&self) -> Money {
        (self.total_price() + self.total_sales_tax()).round_to_cents()
    }

    /// Read-only view of the current entries, keyed by product name.
    ///
    /// The view wraps live cart state: quantities observed through it move
    /// with concurrent merges, and entries added later become visible. No
    /// map mutation is possible through it.
    pub fn all_cart_items(&self) -> CartItemsView<'_> {
        CartItemsView { items: &self.items }
    }
}

// =============================================================================
// CartItemsView
// =============================================================================

/// Read-only window over a cart's entries.
///
/// Since a cart never removes entries, the view stays coherent with the
/// live map: it can only ever observe a superset of what it saw before.
#[derive(Debug, Clone, Copy)]
pub struct CartItemsView<'a> {
    items: &'a DashMap<String, CartItem>,
}

impl<'a> CartItemsView<'a> {
    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True when a line exists for `product_name`.
    pub fn contains(&self, product_name: &str) -> bool {
        self.items.contains_key(product_name)
    }

    /// Looks up the line for `product_name`.
    pub fn get(&self, product_name: &str) -> Option<Ref<'a, String, CartItem>> {
        self.items.get(product_name)
    }

    /// Iterates over `(product name, item)` lines in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = RefMulti<'a, String, CartItem>> + 'a {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
