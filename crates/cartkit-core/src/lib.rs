//! # cartkit-core: Pure Business Logic for cartkit
//!
//! This crate is the **heart** of cartkit. It models a shopping cart as an
//! in-memory data structure with zero I/O dependencies: line items accumulate
//! by product name, and aggregate totals (subtotal, sales tax, grand total)
//! are computed on demand with exact decimal arithmetic.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        cartkit Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Embedding Application                           │   │
//! │  │    constructs Products ──► wraps CartItems ──► adds to cart     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cartkit-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │ Shopping  │  │   rules   │  │   │
//! │  │   │  CartItem │  │  rounding │  │   Cart    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`Product`], [`CartItem`])
//! - [`money`] - [`Money`] type over exact decimals (no floating point!)
//! - [`cart`] - [`ShoppingCart`] aggregation and totals
//! - [`error`] - Domain error types
//! - [`validation`] - Cart item validation rules
//!
//! ## Design Principles
//!
//! 1. **Exact decimals**: Prices and totals use `rust_decimal`, never `f64`.
//!    A unit price of 5.679 stays 5.679 until a total is rounded.
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here.
//! 3. **Thread-safe by construction**: one cart instance may receive
//!    concurrent adds; at most one entry per product name ever exists.
//! 4. **Explicit Errors**: All errors are typed, never strings or panics.
//!
//! ## Example Usage
//!
//! ```rust
//! use cartkit_core::{CartItem, Money, Product, ShoppingCart};
//! use rust_decimal_macros::dec;
//!
//! let cart = ShoppingCart::new();
//! let soap = Product::new("Dove Soap", Money::new(dec!(39.99)));
//! cart.add_cart_item(CartItem::with_quantity(soap, 5))?;
//!
//! assert_eq!(cart.total_price(), Money::new(dec!(199.95)));
//! # Ok::<(), cartkit_core::InvalidCartItem>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cartkit_core::Money` instead of
// `use cartkit_core::money::Money`

pub use cart::{CartItemsView, ShoppingCart};
pub use error::{CartResult, InvalidCartItem};
pub use money::Money;
pub use types::{CartItem, Product};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax rate applied to the rounded cart subtotal: 12.5%.
///
/// ## Why a constant?
/// The current design is single-jurisdiction. The rate is a compile-time
/// constant rather than runtime configuration; totals are deterministic for
/// a given cart state.
pub const SALES_TAX_RATE: Decimal = dec!(0.125);

/// Fractional digits every monetary total is rounded to.
///
/// Unit prices may carry more precision than this (e.g. 5.679); only the
/// aggregate queries round, at the cent boundary, half-up.
pub const PRICE_SCALE: u32 = 2;
