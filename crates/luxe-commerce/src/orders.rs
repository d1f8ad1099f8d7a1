//! Order history types.
//!
//! Orders are read-only: they come from the seed and are only displayed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::OrderId;
use crate::money::Money;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order being prepared.
    #[default]
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

/// A past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Date the order was placed.
    pub date: NaiveDate,
    pub status: OrderStatus,
    /// Amount charged, as recorded at purchase time.
    pub total: Money,
    pub tracking_number: String,
    pub items: Vec<OrderLineItem>,
}

impl Order {
    /// Total units across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// A line in a past order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLineItem {
    /// Product name at time of order.
    pub name: String,
    pub image: String,
    pub quantity: i64,
    /// Unit price at time of order.
    pub price: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(OrderStatus::Shipped.display_name(), "Shipped");
        assert_eq!(OrderStatus::Delivered.display_name(), "Delivered");
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(!OrderStatus::Processing.is_terminal());
    }

    #[test]
    fn test_item_count() {
        let line = |quantity| OrderLineItem {
            name: "Scarf".to_string(),
            image: String::new(),
            quantity,
            price: Money::usd(180),
        };
        let order = Order {
            id: OrderId::new("#LX-0001"),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status: OrderStatus::Processing,
            total: Money::usd(540),
            tracking_number: "T".to_string(),
            items: vec![line(1), line(2)],
        };
        assert_eq!(order.item_count(), 3);
    }
}
