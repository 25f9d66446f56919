//! Checkout view orchestration.
//!
//! The view merges five independently fetched personalization signals with
//! the local cart. Each fetch owns a disjoint slot of view state, so the
//! writes never race each other; a fetch that fails resolves to its empty
//! default and simply leaves that section blank.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use tableside::{
    cart::{Cart, CartLine},
    coupons::Coupon,
    menu::MenuItem,
    pricing::BillTotals,
};

use crate::gateway::{CartItemSnapshot, ComboSuggestion, MenuGateway, Nudge};

/// Email used to personalize combo generation for guests who never logged in.
const GUEST_COMBO_EMAIL: &str = "test@user.com";

/// How many AI combos to request per refresh.
const COMBO_COUNT: u32 = 2;

/// Everything the payment step needs from checkout.
///
/// Handed over as-is; the instructions field is free text and deliberately
/// unvalidated, and no minimum-order rule blocks the handoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutHandoff {
    /// Amount payable after taxes and discount.
    pub total_amount: i64,

    /// Line items at handoff time.
    pub lines: Vec<CartLine>,

    /// Table the order is for.
    pub table_number: String,

    /// Free-text cooking instructions.
    pub instructions: String,
}

/// View state for the cart/checkout page.
///
/// Construct one per page view and thread the session's [`Cart`] through the
/// methods explicitly.
pub struct CheckoutView {
    gateway: Arc<dyn MenuGateway>,

    /// Add-on items paired with the most recently added line.
    pub recommendations: Vec<MenuItem>,

    /// AI pitch line shown above the add-ons.
    pub ai_pitch: String,

    /// Upsell nudge toward the next discount tier.
    pub nudge: Option<Nudge>,

    /// Upsell items grouped by category.
    pub upsells: FxHashMap<String, Vec<MenuItem>>,

    /// Coupons available this session.
    pub coupons: Vec<Coupon>,

    /// AI-generated combo suggestions.
    pub ai_combos: Vec<ComboSuggestion>,

    /// Free-text cooking instructions.
    pub instructions: String,

    selected_coupon: Option<Coupon>,
}

impl std::fmt::Debug for CheckoutView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutView")
            .field("recommendations", &self.recommendations.len())
            .field("nudge", &self.nudge)
            .field("upsell_categories", &self.upsells.len())
            .field("coupons", &self.coupons.len())
            .field("ai_combos", &self.ai_combos.len())
            .field("selected_coupon", &self.selected_coupon)
            .finish_non_exhaustive()
    }
}

impl CheckoutView {
    /// Create an empty view backed by the given gateway.
    #[must_use]
    pub fn new(gateway: Arc<dyn MenuGateway>) -> Self {
        Self {
            gateway,
            recommendations: Vec::new(),
            ai_pitch: String::new(),
            nudge: None,
            upsells: FxHashMap::default(),
            coupons: Vec::new(),
            ai_combos: Vec::new(),
            instructions: String::new(),
            selected_coupon: None,
        }
    }

    /// Refresh the personalization slots for the current cart contents.
    ///
    /// The five fetches run concurrently and each fills its own slot when it
    /// resolves; a failed fetch resolves to its empty default. With an empty
    /// cart the recommendation and nudge slots are cleared instead (the other
    /// slots keep their last value).
    pub async fn refresh(&mut self, cart: &Cart, email: &str) {
        let Some(last_line) = cart.last_line() else {
            self.recommendations.clear();
            self.nudge = None;

            return;
        };

        let snapshot = CartItemSnapshot::from_cart(cart);
        let combo_email = if email.is_empty() {
            GUEST_COMBO_EMAIL
        } else {
            email
        };

        let (addons, nudge, upsells, coupons, combos) = tokio::join!(
            self.gateway.fetch_recommendations(email, &last_line.item.id),
            self.gateway.pricing_strategy(email, &snapshot),
            self.gateway.fetch_upsell_items(),
            self.gateway.fetch_coupons(),
            self.gateway.generate_combos(COMBO_COUNT, combo_email),
        );

        self.recommendations = addons.add_ons;
        self.ai_pitch = addons.ai_pitch;
        self.nudge = nudge;
        self.upsells = upsells;
        self.coupons = coupons;
        self.ai_combos = combos;
    }

    /// Select a coupon for this order, replacing any previous selection.
    pub fn select_coupon(&mut self, coupon: Coupon) {
        self.selected_coupon = Some(coupon);
    }

    /// Clear the selected coupon.
    pub fn clear_coupon(&mut self) {
        self.selected_coupon = None;
    }

    /// The currently selected coupon, if any.
    #[must_use]
    pub fn selected_coupon(&self) -> Option<&Coupon> {
        self.selected_coupon.as_ref()
    }

    /// Compute the bill for the current cart.
    ///
    /// Clears a selected coupon first when the subtotal has dropped below its
    /// minimum order value, so a stale selection never discounts.
    pub fn totals(&mut self, cart: &Cart) -> BillTotals {
        let item_subtotal = cart.item_subtotal();

        if self
            .selected_coupon
            .as_ref()
            .is_some_and(|coupon| !coupon.qualifies_at(item_subtotal))
        {
            self.selected_coupon = None;
        }

        BillTotals::compute(item_subtotal, self.selected_coupon.as_ref())
    }

    /// The first tiered coupon the cart has not yet unlocked, for the
    /// progress nudge under the coupon picker.
    #[must_use]
    pub fn next_locked_tier(&self, item_subtotal: i64) -> Option<&Coupon> {
        self.coupons.iter().find(|coupon| {
            coupon.rule == tableside::coupons::CouponRule::Tiered
                && coupon.min_order_value > item_subtotal
        })
    }

    /// Build the payment handoff for the current cart.
    pub fn handoff(&mut self, cart: &Cart, table_number: &str) -> CheckoutHandoff {
        let totals = self.totals(cart);

        CheckoutHandoff {
            total_amount: totals.final_total,
            lines: cart.lines().cloned().collect(),
            table_number: table_number.to_string(),
            instructions: self.instructions.clone(),
        }
    }
}
