//! Feedback Models

use serde::{Deserialize, Serialize};

/// How a guest interacted with an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionAction {
    /// The item was viewed.
    View,

    /// The item was added to the cart.
    Cart,

    /// Any other action tag; recorded with zero weight.
    Other,
}

impl InteractionAction {
    /// Parse an action tag from the wire.
    ///
    /// Unknown tags map to [`InteractionAction::Other`] rather than failing.
    #[must_use]
    pub fn parse(action: &str) -> Self {
        match action {
            "view" => Self::View,
            "cart" => Self::Cart,
            _ => Self::Other,
        }
    }

    /// The score this action contributes to the interaction sheet.
    #[must_use]
    pub fn score(self) -> u8 {
        match self {
            Self::View => 1,
            Self::Cart => 5,
            Self::Other => 0,
        }
    }
}

/// One scored (customer, item) interaction bound for the sheet store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Customer identifier.
    pub customer_id: String,

    /// Item identifier.
    pub item_id: String,

    /// Score derived from the action.
    pub score: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_scores_match_the_tracking_contract() {
        assert_eq!(InteractionAction::parse("view").score(), 1);
        assert_eq!(InteractionAction::parse("cart").score(), 5);
        assert_eq!(InteractionAction::parse("ignore").score(), 0);
        assert_eq!(InteractionAction::parse("").score(), 0);
        assert_eq!(InteractionAction::parse("CART").score(), 0);
    }
}
