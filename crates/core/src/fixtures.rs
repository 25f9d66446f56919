//! Reusable fixtures for tests and examples.

use crate::coupons::{Coupon, CouponRule};

/// Build a minimal coupon with the given rule and thresholds.
#[must_use]
pub fn coupon(
    code: &str,
    rule: CouponRule,
    discount_amount: i64,
    discount_percent: i64,
    min_order_value: i64,
) -> Coupon {
    Coupon {
        id: code.to_ascii_lowercase(),
        code: code.to_string(),
        title: format!("{code} offer"),
        subtitle: String::from("Save more on this order"),
        rule,
        discount_amount,
        discount_percent,
        min_order_value,
        image: None,
        bg_color: None,
    }
}
