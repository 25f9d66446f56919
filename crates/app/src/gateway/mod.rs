//! Menu Data Gateway
//!
//! The personalized menu backend is loosely typed and not always reachable.
//! The gateway absorbs both problems here: every operation is one HTTP round
//! trip that normalizes whatever arrives and falls back to an empty default on
//! any transport or parse failure. Callers never see an error and never
//! distinguish "failed" from "no data".

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use tableside::{
    coupons::Coupon,
    menu::{Menu, MenuItem, Offer},
};

pub mod http;
pub mod models;
pub mod normalize;

pub use http::{BackendConfig, HttpMenuGateway};
pub use models::{AddonRecommendations, CartItemSnapshot, ComboSuggestion, Nudge};

/// Fetch operations against the personalized menu backend.
///
/// Every method is total: failures are logged and resolved to the documented
/// empty default.
#[automock]
#[async_trait]
pub trait MenuGateway: Send + Sync {
    /// Fetch the sectioned menu personalized for `email`.
    ///
    /// Defaults to an empty menu.
    async fn fetch_menu(&self, email: &str) -> Menu;

    /// Fetch the current offer banners. Defaults to an empty list.
    async fn fetch_offers(&self) -> Vec<Offer>;

    /// Save dining preferences for `email`.
    ///
    /// Returns whether the backend accepted the write; callers treat this as
    /// advisory.
    async fn save_preferences(&self, email: &str, preferences: &serde_json::Value) -> bool;

    /// Fetch add-on recommendations paired with `item_id`.
    ///
    /// Defaults to no add-ons with the stock pitch line.
    async fn fetch_recommendations(&self, email: &str, item_id: &str) -> AddonRecommendations;

    /// Fetch the upsell nudge for the given cart snapshot. Defaults to `None`.
    async fn pricing_strategy(&self, email: &str, cart: &[CartItemSnapshot]) -> Option<Nudge>;

    /// Fetch upsell items grouped by category. Defaults to an empty map.
    async fn fetch_upsell_items(&self) -> FxHashMap<String, Vec<MenuItem>>;

    /// Fetch the coupon list. Defaults to an empty list.
    async fn fetch_coupons(&self) -> Vec<Coupon>;

    /// Generate `count` AI combo suggestions for `email`. Defaults to empty.
    async fn generate_combos(&self, count: u32, email: &str) -> Vec<ComboSuggestion>;
}
