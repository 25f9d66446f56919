//! Normalization of loose backend item shapes.
//!
//! The backend mixes sheet-column field names (`Item_ID`, `Current_Price`)
//! with client-casing alternates (`id`, `price`) depending on which agent
//! produced the payload. This module is the one place that tolerates that:
//! each field resolves in priority order (canonical name, then alternate,
//! then default) into a single typed [`MenuItem`].

use serde_json::Value;
use smallvec::SmallVec;

use tableside::menu::{DEFAULT_RATING, DEFAULT_RATING_COUNT, ItemFlags, MenuItem};

/// Image used when the backend sends an item without one.
pub const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1546069901-ba9599a7e63c";

/// Convert one loose backend item into a [`MenuItem`].
///
/// `section` names the menu section the item arrived under and doubles as the
/// category fallback. Items without a usable id are dropped.
#[must_use]
pub fn normalize_item(raw: &Value, section: &str) -> Option<MenuItem> {
    let id = string_field(raw, &["Item_ID", "id"]).unwrap_or_default();

    if id.is_empty() {
        return None;
    }

    let category = string_field(raw, &["Item_Category"])
        .filter(|category| !category.is_empty())
        .unwrap_or_else(|| {
            if section.is_empty() {
                String::from("Other")
            } else {
                section.to_string()
            }
        });

    let description = string_field(raw, &["Item_Description", "description", "Item_Category"])
        .unwrap_or_default();

    let combo_items: SmallVec<[String; 4]> = raw
        .get("Combo_Items")
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    let flags = ItemFlags {
        is_combo: !combo_items.is_empty() || bool_field(raw, &["Is_Combo", "isCombo"]),
        is_chef_special: bool_field(raw, &["Is_Chef_Special", "isChefSpecial"]),
        is_bestseller: bool_field(raw, &["Is_Bestseller", "isBestseller"]),
    };

    Some(MenuItem {
        id,
        name: string_field(raw, &["Item_Name", "name"])
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| String::from("Unknown Item")),
        description,
        price: rupee_field(raw, &["Current_Price", "price"]).unwrap_or(0),
        original_price: rupee_field(raw, &["Original_Price", "originalPrice"]),
        gold_price: rupee_field(raw, &["Gold_Price", "goldPrice"]),
        rating: DEFAULT_RATING,
        rating_count: DEFAULT_RATING_COUNT,
        image: string_field(raw, &["Image_URL", "image"])
            .filter(|image| !image.is_empty())
            .unwrap_or_else(|| String::from(FALLBACK_IMAGE)),
        is_veg: bool_field(raw, &["Is_Veg", "isVeg"]),
        category,
        combo_items,
        flags,
    })
}

/// Resolve a string field, trying each key in order.
///
/// Numbers are stringified so sheet-sourced numeric ids survive.
pub(crate) fn string_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        let value = raw.get(key)?;

        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    })
}

/// Resolve a rupee amount, trying each key in order.
///
/// Accepts integers, floats and numeric strings; everything rounds to whole
/// rupees.
pub(crate) fn rupee_field(raw: &Value, keys: &[&str]) -> Option<i64> {
    keys.iter().find_map(|key| as_rupees(raw.get(key)?))
}

fn as_rupees(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }

    let float = value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))?;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "prices are small rupee amounts, far inside i64 range"
    )]
    let rupees = float.round() as i64;

    Some(rupees)
}

/// Resolve a truthy flag, trying each key in order.
///
/// Sheets deliver booleans as `true`, `1`, `"TRUE"` or `"Yes"` depending on
/// the column; all of those count as set.
pub(crate) fn bool_field(raw: &Value, keys: &[&str]) -> bool {
    keys.iter().any(|key| {
        raw.get(key).is_some_and(|value| match value {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => {
                matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
            }
            _ => false,
        })
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn canonical_fields_win_over_alternates() {
        let raw = json!({
            "Item_ID": "sheet-1",
            "id": "client-1",
            "Item_Name": "Dal Makhani",
            "name": "Wrong Name",
            "Current_Price": 220,
            "price": 999,
        });

        let item = normalize_item(&raw, "Gravy").unwrap();

        assert_eq!(item.id, "sheet-1");
        assert_eq!(item.name, "Dal Makhani");
        assert_eq!(item.price, 220);
    }

    #[test]
    fn alternate_fields_fill_in_for_missing_canonical() {
        let raw = json!({
            "id": "client-1",
            "name": "Butter Naan",
            "price": "60",
            "image": "https://cdn.example/naan.jpg",
            "isVeg": true,
        });

        let item = normalize_item(&raw, "Bread").unwrap();

        assert_eq!(item.id, "client-1");
        assert_eq!(item.name, "Butter Naan");
        assert_eq!(item.price, 60);
        assert_eq!(item.image, "https://cdn.example/naan.jpg");
        assert!(item.is_veg);
        assert_eq!(item.category, "Bread");
    }

    #[test]
    fn missing_everything_falls_back_to_defaults() {
        let raw = json!({ "Item_ID": "x1" });

        let item = normalize_item(&raw, "").unwrap();

        assert_eq!(item.name, "Unknown Item");
        assert_eq!(item.price, 0);
        assert_eq!(item.image, FALLBACK_IMAGE);
        assert_eq!(item.category, "Other");
        assert_eq!(item.rating, DEFAULT_RATING);
        assert_eq!(item.rating_count, DEFAULT_RATING_COUNT);
    }

    #[test]
    fn blank_id_drops_the_item() {
        assert!(normalize_item(&json!({ "Item_Name": "Ghost" }), "Rice").is_none());
        assert!(normalize_item(&json!({ "Item_ID": "" }), "Rice").is_none());
    }

    #[test]
    fn numeric_ids_are_stringified() {
        let item = normalize_item(&json!({ "Item_ID": 42, "Item_Name": "Lassi" }), "Beverages")
            .unwrap();

        assert_eq!(item.id, "42");
    }

    #[test]
    fn price_accepts_numeric_strings_and_floats() {
        let from_string = normalize_item(&json!({ "Item_ID": "a", "price": " 249.0 " }), "");
        let from_float = normalize_item(&json!({ "Item_ID": "b", "Current_Price": 99.6 }), "");

        assert_eq!(from_string.unwrap().price, 249);
        assert_eq!(from_float.unwrap().price, 100);
    }

    #[test]
    fn sheet_style_truthy_strings_set_the_veg_flag() {
        let veg = normalize_item(&json!({ "Item_ID": "a", "Is_Veg": "TRUE" }), "").unwrap();
        let non_veg = normalize_item(&json!({ "Item_ID": "b", "Is_Veg": "FALSE" }), "").unwrap();
        let numeric = normalize_item(&json!({ "Item_ID": "c", "Is_Veg": 1 }), "").unwrap();

        assert!(veg.is_veg);
        assert!(!non_veg.is_veg);
        assert!(numeric.is_veg);
    }

    #[test]
    fn combo_items_set_the_combo_flag() {
        let raw = json!({
            "Item_ID": "c1",
            "Item_Name": "Paneer Feast Combo",
            "Combo_Items": ["Paneer Tikka", "2x Naan", "Dal Makhani", "Coke"],
        });

        let item = normalize_item(&raw, "Combos").unwrap();

        assert_eq!(item.combo_items.len(), 4);
        assert!(item.flags.is_combo);
    }

    #[test]
    fn explicit_category_wins_over_section() {
        let raw = json!({ "Item_ID": "a", "Item_Category": "Dessert" });

        let item = normalize_item(&raw, "Chef Special").unwrap();

        assert_eq!(item.category, "Dessert");
    }
}
