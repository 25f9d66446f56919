//! Order History

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Where an order is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// The kitchen is working on it.
    Preparing,

    /// The order has left the kitchen.
    OnTheWay,

    /// The order reached the table.
    Delivered,
}

/// A (name, quantity, price) snapshot of one cart line at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name as displayed at checkout.
    pub name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Unit price in whole rupees at checkout time.
    pub price: i64,
}

/// A past order in the session's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: String,

    /// When the order was placed.
    pub placed_at: Timestamp,

    /// Line snapshots.
    pub items: Vec<OrderLine>,

    /// Amount paid, in whole rupees.
    pub total: i64,

    /// Lifecycle status.
    pub status: OrderStatus,

    /// Post-hoc rating, 1–5.
    pub rating: Option<u8>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn status_serializes_snake_case() -> TestResult {
        let json = serde_json::to_string(&OrderStatus::OnTheWay)?;

        assert_eq!(json, "\"on_the_way\"");

        Ok(())
    }
}
