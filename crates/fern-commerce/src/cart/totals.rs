//! Derived cart totals.
//!
//! Every figure is recomputed from the line items on each call; nothing
//! here is cached or stored. Each quoted amount rounds to the nearest
//! minor unit exactly once.

use serde::{Deserialize, Serialize};

use super::state::CartState;
use crate::money::{Currency, Money};

/// Tax rate applied to the discounted subtotal.
pub const TAX_RATE: f64 = 0.08;

/// Undiscounted subtotal (minor units) at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD_MINOR: i64 = 622_500;

/// Flat shipping fee (minor units) below the free-shipping threshold.
pub const SHIPPING_FLAT_FEE_MINOR: i64 = 83_000;

/// A full pricing snapshot of the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Undiscounted sum of line price × quantity.
    pub subtotal: Money,
    /// Amount taken off the subtotal by the promotion.
    pub discount: Money,
    /// Tax on the discounted subtotal.
    pub tax: Money,
    /// Shipping charge.
    pub shipping: Money,
    /// Discounted subtotal + tax + shipping.
    pub grand_total: Money,
    /// Total units across all lines.
    pub item_count: i64,
}

impl CartState {
    fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|item| item.product.price.currency)
            .unwrap_or_default()
    }

    /// Undiscounted sum of line price × quantity.
    pub fn subtotal(&self) -> Money {
        let minor = self
            .items
            .iter()
            .map(|item| item.product.price.amount_minor.saturating_mul(item.quantity))
            .fold(0i64, i64::saturating_add);
        Money::new(minor, self.currency())
    }

    /// Amount the promotion takes off the subtotal.
    pub fn discount_amount(&self) -> Money {
        self.subtotal().multiply_decimal(self.promo_discount)
    }

    /// Subtotal after the promotion.
    pub fn discounted_subtotal(&self) -> Money {
        self.subtotal().multiply_decimal(1.0 - self.promo_discount)
    }

    /// Tax, charged on the discounted subtotal.
    pub fn tax(&self) -> Money {
        self.discounted_subtotal().multiply_decimal(TAX_RATE)
    }

    /// Shipping charge. The free-shipping threshold is judged against the
    /// undiscounted subtotal, so promotions never cost a shopper their
    /// free shipping.
    pub fn shipping(&self) -> Money {
        if self.subtotal().amount_minor >= FREE_SHIPPING_THRESHOLD_MINOR {
            Money::zero(self.currency())
        } else {
            Money::new(SHIPPING_FLAT_FEE_MINOR, self.currency())
        }
    }

    /// Discounted subtotal + tax + shipping.
    pub fn grand_total(&self) -> Money {
        let minor = self
            .discounted_subtotal()
            .amount_minor
            .saturating_add(self.tax().amount_minor)
            .saturating_add(self.shipping().amount_minor);
        Money::new(minor, self.currency())
    }

    /// Total units across all lines (not the number of lines).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .map(|item| item.quantity)
            .fold(0i64, i64::saturating_add)
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bundle every derived figure into one snapshot.
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            subtotal: self.subtotal(),
            discount: self.discount_amount(),
            tax: self.tax(),
            shipping: self.shipping(),
            grand_total: self.grand_total(),
            item_count: self.item_count(),
        }
    }
}
