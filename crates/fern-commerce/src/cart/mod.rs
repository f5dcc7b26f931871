//! Shopping cart module.
//!
//! The cart is a pure reducer: state in, action in, successor state out.
//! Totals are derived on demand and never stored.

mod promo;
mod state;
mod totals;

pub use promo::{lookup_promo, PROMO_CODES};
pub use state::{CartAction, CartLineItem, CartSnapshot, CartState};
pub use totals::{
    CartTotals, FREE_SHIPPING_THRESHOLD_MINOR, SHIPPING_FLAT_FEE_MINOR, TAX_RATE,
};
