//! Menu Items

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rating assigned to items the backend sends without rating data.
pub const DEFAULT_RATING: f32 = 4.5;

/// Rating count assigned to items the backend sends without rating data.
pub const DEFAULT_RATING_COUNT: u32 = 100;

/// A single orderable menu item.
///
/// Immutable once fetched; prices are whole rupees, matching the wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Backend item identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Short description shown under the name.
    pub description: String,

    /// Price in whole rupees.
    pub price: i64,

    /// Pre-discount price, when the item is on offer.
    pub original_price: Option<i64>,

    /// Member ("gold") price, when one exists.
    pub gold_price: Option<i64>,

    /// Average rating out of 5.
    pub rating: f32,

    /// Number of ratings behind [`MenuItem::rating`].
    pub rating_count: u32,

    /// Image URL.
    pub image: String,

    /// Vegetarian flag.
    pub is_veg: bool,

    /// Menu category (section) name.
    pub category: String,

    /// Names of the dishes bundled into this item, for combos.
    pub combo_items: SmallVec<[String; 4]>,

    /// Promotional flags.
    pub flags: ItemFlags,
}

/// Promotional flags attached to a menu item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlags {
    /// Item is a multi-dish combo.
    pub is_combo: bool,

    /// Item is featured as a chef special.
    pub is_chef_special: bool,

    /// Item is flagged as a bestseller.
    pub is_bestseller: bool,
}

impl MenuItem {
    /// Create an item with the given id, name and price, defaulting the rest.
    ///
    /// Normalization in the application layer fills in the remaining fields
    /// from whatever the backend actually sent.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: None,
            gold_price: None,
            rating: DEFAULT_RATING,
            rating_count: DEFAULT_RATING_COUNT,
            image: String::new(),
            is_veg: false,
            category: String::from("Other"),
            combo_items: SmallVec::new(),
            flags: ItemFlags::default(),
        }
    }
}

/// A named menu section with its items, in backend order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    /// Section name, e.g. `"Starters"`.
    pub name: String,

    /// Items in the section.
    pub items: Vec<MenuItem>,
}

/// The full sectioned menu for one page view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    /// Sections in backend order.
    pub sections: Vec<MenuSection>,
}

impl Menu {
    /// Check whether the menu has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate over every item across all sections.
    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }
}

/// A promotional offer banner for the home view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    /// Offer identifier.
    pub id: String,

    /// Headline, e.g. `"Flat 50% OFF"`.
    pub title: String,

    /// Secondary line, e.g. `"On All Combos"`.
    pub subtitle: String,

    /// Display discount label.
    pub discount: String,

    /// Background style name used by the client.
    pub bg_color: String,

    /// Banner image URL.
    pub image: String,
}
