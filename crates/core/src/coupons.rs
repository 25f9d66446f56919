//! Coupons

use serde::{Deserialize, Serialize};

use crate::pricing::percent_of;

/// How a coupon's discount is computed.
///
/// Only [`Flat`](CouponRule::Flat) and [`Percent`](CouponRule::Percent) ever
/// discount; tiered and campaign coupons carry display and threshold data but
/// no defined discount computation, so they resolve to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouponRule {
    /// A fixed rupee amount off the grand total.
    Flat,

    /// A percentage of the item subtotal off the grand total.
    Percent,

    /// Milestone reward unlocked by a minimum order value.
    Tiered,

    /// Campaign banner offer.
    Campaign,

    /// Any type string this client does not recognize.
    #[serde(other)]
    Other,
}

/// A coupon as fetched once per session from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon identifier.
    pub id: String,

    /// Redemption code, e.g. `"NEW50"`.
    pub code: String,

    /// Headline shown in the coupon list.
    pub title: String,

    /// Secondary line shown under the title.
    pub subtitle: String,

    /// Discount rule.
    pub rule: CouponRule,

    /// Rupees off, for [`CouponRule::Flat`].
    pub discount_amount: i64,

    /// Percent off the item subtotal, for [`CouponRule::Percent`].
    pub discount_percent: i64,

    /// Minimum item subtotal for the coupon to stay selected.
    pub min_order_value: i64,

    /// Banner image URL, for campaign coupons.
    pub image: Option<String>,

    /// Background style name used by the client.
    pub bg_color: Option<String>,
}

impl Coupon {
    /// The discount this coupon takes off a bill with the given item subtotal.
    #[must_use]
    pub fn discount_value(&self, item_subtotal: i64) -> i64 {
        match self.rule {
            CouponRule::Flat => self.discount_amount,
            CouponRule::Percent => percent_of(item_subtotal, self.discount_percent),
            CouponRule::Tiered | CouponRule::Campaign | CouponRule::Other => 0,
        }
    }

    /// Whether the coupon may stay selected at the given item subtotal.
    #[must_use]
    pub fn qualifies_at(&self, item_subtotal: i64) -> bool {
        item_subtotal >= self.min_order_value
    }
}
