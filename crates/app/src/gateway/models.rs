//! Gateway models shared between wire responses and view state.

use serde::{Deserialize, Serialize};

use tableside::{cart::Cart, menu::MenuItem};

/// Pitch line used when the backend sends add-ons without one.
pub const DEFAULT_AI_PITCH: &str = "Pairs well with your order!";

/// Add-on recommendations for the most recently added cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct AddonRecommendations {
    /// Recommended add-on items.
    pub add_ons: Vec<MenuItem>,

    /// One-line AI pitch shown above the add-ons.
    pub ai_pitch: String,
}

impl Default for AddonRecommendations {
    fn default() -> Self {
        Self {
            add_ons: Vec::new(),
            ai_pitch: String::from(DEFAULT_AI_PITCH),
        }
    }
}

/// An upsell nudge pushing the guest toward the next discount tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nudge {
    /// Whether the client should render the nudge.
    #[serde(default)]
    pub show: bool,

    /// Nudge copy, e.g. `"Add ₹120 more to unlock 10% OFF!"`.
    #[serde(default)]
    pub message: String,

    /// Rupees left to the next tier.
    #[serde(default)]
    pub gap: f64,
}

/// The simplified cart line sent to the pricing strategy endpoint.
///
/// Field names match the backend sheet columns verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItemSnapshot {
    /// Backend item identifier.
    #[serde(rename = "Item_ID")]
    pub item_id: String,

    /// Current unit price in whole rupees.
    #[serde(rename = "Current_Price")]
    pub price: i64,

    /// Menu category.
    pub category: String,
}

impl CartItemSnapshot {
    /// Snapshot every line of a cart, one entry per line.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Vec<Self> {
        cart.lines()
            .map(|line| Self {
                item_id: line.item.id.clone(),
                price: line.item.price,
                category: line.item.category.clone(),
            })
            .collect()
    }
}

/// An AI-generated combo suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboSuggestion {
    /// The combo as an orderable item.
    pub item: MenuItem,

    /// Rupees saved against the component prices.
    pub savings: i64,

    /// Personalized discount percent, when the combo was priced per guest.
    pub discount_percent: Option<i64>,

    /// Short label explaining why this combo was picked.
    pub insight: Option<String>,

    /// Whether the combo was generated for this specific guest.
    pub is_personalized: bool,
}
