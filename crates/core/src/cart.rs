//! Cart

use serde::{Deserialize, Serialize};

use crate::menu::MenuItem;

/// A menu item in the cart together with its quantity.
///
/// Invariant: `quantity >= 1`. A quantity that would reach zero removes the
/// line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The selected item.
    pub item: MenuItem,

    /// How many of the item are in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Price of the line: item price times quantity, in whole rupees.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.item.price * i64::from(self.quantity)
    }
}

/// The cart for one guest session.
///
/// Lines keep insertion order; no two lines share an item id. All mutation
/// goes through [`Cart::add_item`], [`Cart::remove_item`],
/// [`Cart::set_quantity`] and [`Cart::clear`], none of which can fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item` to the cart.
    ///
    /// If a line for the item already exists its quantity is incremented,
    /// otherwise a new line with quantity 1 is appended.
    pub fn add_item(&mut self, item: MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
    }

    /// Remove one of the item with `item_id` from the cart.
    ///
    /// Decrements the matching line's quantity; a line reaching zero is
    /// deleted. Unknown ids are a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        if let Some(idx) = self.lines.iter().position(|line| line.item.id == item_id) {
            if let Some(line) = self.lines.get_mut(idx) {
                if line.quantity > 1 {
                    line.quantity -= 1;
                } else {
                    self.lines.remove(idx);
                }
            }
        }
    }

    /// Set the quantity of the line with `item_id`.
    ///
    /// A quantity of zero or less deletes the line. Unknown ids are a no-op.
    pub fn set_quantity(&mut self, item_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|line| line.item.id != item_id);
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        if let Some(line) = self.lines.iter_mut().find(|line| line.item.id == item_id) {
            line.quantity = quantity;
        }
    }

    /// Return the current quantity for `item_id`, or 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, item_id: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.item.id == item_id)
            .map_or(0, |line| line.quantity)
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Sum of price × quantity across all lines, in whole rupees.
    #[must_use]
    pub fn item_subtotal(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Iterate over the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// The most recently added line, if any.
    ///
    /// Add-on recommendations are keyed on this line's item.
    #[must_use]
    pub fn last_line(&self) -> Option<&CartLine> {
        self.lines.last()
    }

    /// Number of distinct lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use crate::menu::MenuItem;

    use super::*;

    fn naan() -> MenuItem {
        MenuItem::new("b1", "Butter Naan", 60)
    }

    fn tikka() -> MenuItem {
        MenuItem::new("s1", "Paneer Tikka", 299)
    }

    #[test]
    fn add_item_appends_then_increments() {
        let mut cart = Cart::new();

        cart.add_item(naan());
        cart.add_item(tikka());
        cart.add_item(naan());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity_of("b1"), 2);
        assert_eq!(cart.quantity_of("s1"), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut cart = Cart::new();
        cart.add_item(naan());

        let before = cart.clone();

        cart.add_item(tikka());
        cart.remove_item("s1");

        assert_eq!(cart, before);
    }

    #[test]
    fn remove_item_decrements_then_deletes() {
        let mut cart = Cart::new();
        cart.add_item(naan());
        cart.add_item(naan());

        cart.remove_item("b1");
        assert_eq!(cart.quantity_of("b1"), 1);

        cart.remove_item("b1");
        assert_eq!(cart.quantity_of("b1"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_item_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(naan());

        cart.remove_item("nope");

        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn set_quantity_updates_existing_line() {
        let mut cart = Cart::new();
        cart.add_item(naan());

        cart.set_quantity("b1", 4);

        assert_eq!(cart.quantity_of("b1"), 4);
        assert_eq!(cart.item_subtotal(), 240);
    }

    #[test]
    fn set_quantity_zero_deletes_line() {
        let mut cart = Cart::new();
        cart.add_item(naan());

        cart.set_quantity("b1", 0);

        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(naan());

        cart.set_quantity("nope", 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of("nope"), 0);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let mut cart = Cart::new();
        cart.add_item(tikka());
        cart.add_item(tikka());
        cart.add_item(naan());

        assert_eq!(cart.item_subtotal(), 299 * 2 + 60);
    }

    #[test]
    fn total_items_matches_sum_of_line_quantities() {
        let mut cart = Cart::new();

        for _ in 0..5 {
            cart.add_item(naan());
        }
        cart.add_item(tikka());
        cart.remove_item("b1");

        let expected: u32 = cart.lines().map(|line| line.quantity).sum();

        assert_eq!(cart.total_items(), expected);
        assert!(cart.lines().all(|line| line.quantity >= 1));
    }

    #[test]
    fn last_line_tracks_most_recent_insertion() {
        let mut cart = Cart::new();
        cart.add_item(naan());
        cart.add_item(tikka());

        // Incrementing an existing line does not change insertion order.
        cart.add_item(naan());

        assert_eq!(cart.last_line().map(|line| line.item.id.as_str()), Some("s1"));
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add_item(naan());
        cart.add_item(tikka());

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_subtotal(), 0);
    }
}
