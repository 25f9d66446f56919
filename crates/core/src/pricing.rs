//! Bill Totals

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::coupons::Coupon;

/// GST rate applied to the item subtotal, in percent.
pub const TAX_RATE_PERCENT: i64 = 5;

/// Delivery fee in whole rupees. Table orders are always free.
pub const DELIVERY_FEE: i64 = 0;

/// Calculate `percent`% of `amount`, rounded half-up to whole rupees.
#[must_use]
pub fn percent_of(amount: i64, percent: i64) -> i64 {
    let value = Decimal::from(amount) * Decimal::from(percent) / Decimal::from(100);

    value
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Calculate the tax due on an item subtotal.
#[must_use]
pub fn tax_on(item_subtotal: i64) -> i64 {
    percent_of(item_subtotal, TAX_RATE_PERCENT)
}

/// The fully computed bill for a cart, in whole rupees.
///
/// Deterministic and recomputed from current state on every read; nothing in
/// here is cached or mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    /// Sum of price × quantity across the cart.
    pub item_subtotal: i64,

    /// GST on the item subtotal.
    pub taxes: i64,

    /// Delivery fee.
    pub delivery_fee: i64,

    /// Subtotal plus taxes plus delivery fee, before any coupon.
    pub grand_total: i64,

    /// Coupon discount applied to the grand total.
    pub discount: i64,

    /// Amount payable, floored at zero.
    pub final_total: i64,
}

impl BillTotals {
    /// Compute the bill for an item subtotal and an optionally selected coupon.
    ///
    /// Threshold checks are the caller's concern: a selected coupon is assumed
    /// to still qualify (selection is cleared elsewhere when the subtotal
    /// drops below the coupon's minimum order value).
    #[must_use]
    pub fn compute(item_subtotal: i64, coupon: Option<&Coupon>) -> Self {
        let taxes = tax_on(item_subtotal);
        let grand_total = item_subtotal + taxes + DELIVERY_FEE;
        let discount = coupon.map_or(0, |coupon| coupon.discount_value(item_subtotal));

        Self {
            item_subtotal,
            taxes,
            delivery_fee: DELIVERY_FEE,
            grand_total,
            discount,
            final_total: 0.max(grand_total - discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{coupons::CouponRule, fixtures};

    use super::*;

    #[test]
    fn percent_of_rounds_half_away_from_zero() {
        assert_eq!(percent_of(449, 5), 22); // 22.45
        assert_eq!(percent_of(597, 5), 30); // 29.85
        assert_eq!(percent_of(597, 10), 60); // 59.7
        assert_eq!(percent_of(450, 10), 45);
        assert_eq!(percent_of(0, 10), 0);
    }

    #[test]
    fn totals_without_coupon() {
        let totals = BillTotals::compute(449, None);

        assert_eq!(totals.taxes, 22);
        assert_eq!(totals.grand_total, 471);
        assert_eq!(totals.discount, 0);
        assert_eq!(totals.final_total, 471);
    }

    #[test]
    fn flat_coupon_subtracts_fixed_amount() {
        let coupon = fixtures::coupon("NEW50", CouponRule::Flat, 50, 0, 0);
        let totals = BillTotals::compute(449, Some(&coupon));

        assert_eq!(totals.grand_total, 471);
        assert_eq!(totals.final_total, 421);
    }

    #[test]
    fn percent_coupon_discounts_on_item_subtotal() {
        let coupon = fixtures::coupon("SAVE10", CouponRule::Percent, 0, 10, 0);
        let totals = BillTotals::compute(597, Some(&coupon));

        assert_eq!(totals.taxes, 30);
        assert_eq!(totals.grand_total, 627);
        assert_eq!(totals.discount, 60);
        assert_eq!(totals.final_total, 567);
    }

    #[test]
    fn oversized_flat_coupon_floors_total_at_zero() {
        let coupon = fixtures::coupon("MEGA", CouponRule::Flat, 10_000, 0, 0);
        let totals = BillTotals::compute(100, Some(&coupon));

        assert_eq!(totals.final_total, 0);
    }

    #[test]
    fn unrecognized_rule_discounts_nothing() {
        let tiered = fixtures::coupon("TIER", CouponRule::Tiered, 0, 15, 500);
        let campaign = fixtures::coupon("CAMP", CouponRule::Campaign, 0, 50, 0);

        assert_eq!(BillTotals::compute(700, Some(&tiered)).discount, 0);
        assert_eq!(BillTotals::compute(700, Some(&campaign)).discount, 0);
    }

    #[test]
    fn empty_cart_bill_is_all_zero() {
        let totals = BillTotals::compute(0, None);

        assert_eq!(
            totals,
            BillTotals {
                item_subtotal: 0,
                taxes: 0,
                delivery_fee: 0,
                grand_total: 0,
                discount: 0,
                final_total: 0,
            }
        );
    }
}
